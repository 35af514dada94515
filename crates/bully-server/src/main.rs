use anyhow::Result;
use bully_core::PersonRequest;
use bully_server::config::ServerConfig;
use bully_store::{LocalLogStore, TransactionSink};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "startup-bully", about = "Researches founders and roasts their startup ideas")]
struct Cli {
    #[command(flatten)]
    config: ServerConfig,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (the default)
    Serve,
    /// Run only the research stage for one person and print the result
    Research {
        #[arg(long)]
        name: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        github_username: Option<String>,
        #[arg(long)]
        startup_idea: Option<String>,
    },
    /// List persisted transaction logs, oldest first
    ListLogs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let pipeline = bully_server::build_pipeline(&config)?;
            let addr = config.listen_addr();
            let listener = TcpListener::bind(addr).await?;
            info!(
                gemini_model = %config.gemini_model,
                ollama_host = %config.ollama_host,
                ollama_model = %config.ollama_model,
                logs_dir = %config.logs_dir.display(),
                "startup-bully listening on http://{addr}"
            );
            bully_server::serve(listener, pipeline).await?;
        }
        Commands::Research {
            name,
            company,
            github_username,
            startup_idea,
        } => {
            let pipeline = bully_server::build_pipeline(&config)?;
            let person = PersonRequest::for_research(
                &name,
                company.as_deref(),
                github_username.as_deref(),
                startup_idea.as_deref(),
            )?;
            let research = pipeline.research(&person).await?;
            println!("{research}");
        }
        Commands::ListLogs => {
            let store = LocalLogStore::new(&config.logs_dir);
            let logs = store.list().await?;
            if logs.is_empty() {
                eprintln!("No transaction logs in {}", config.logs_dir.display());
            } else {
                for path in logs {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}
