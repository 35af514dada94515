use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bully_service::{
    GeminiConfig, OllamaConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
    DEFAULT_OLLAMA_HOST, DEFAULT_OLLAMA_MODEL,
};
use bully_store::DEFAULT_LOGS_DIR;
use clap::Args;

/// Process-wide settings, resolved once at startup from flags or the environment.
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Gemini API key for the research stage. Required to serve or research.
    #[arg(long, env = "GOOGLE_API_KEY", global = true, hide_env_values = true)]
    pub google_api_key: Option<String>,

    /// Gemini model used for grounded research
    #[arg(long, env = "GEMINI_MODEL", global = true, default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    /// Gemini REST base URL
    #[arg(long, env = "GEMINI_API_BASE", global = true, default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    /// Ollama server URL for the critique stage
    #[arg(long, env = "OLLAMA_HOST", global = true, default_value = DEFAULT_OLLAMA_HOST)]
    pub ollama_host: String,

    /// Ollama model that writes the critique
    #[arg(long, env = "OLLAMA_MODEL", global = true, default_value = DEFAULT_OLLAMA_MODEL)]
    pub ollama_model: String,

    /// Sampling temperature for the critique; server default when unset
    #[arg(long, env = "OLLAMA_TEMPERATURE", global = true)]
    pub ollama_temperature: Option<f32>,

    /// Address to bind the HTTP server to
    #[arg(long, env = "BULLY_BIND", global = true, default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// HTTP listen port
    #[arg(long, env = "PORT", global = true, default_value = "8000")]
    pub port: u16,

    /// Directory that receives one JSON file per completed request
    #[arg(long, env = "BULLY_LOGS_DIR", global = true, default_value = DEFAULT_LOGS_DIR)]
    pub logs_dir: PathBuf,
}

impl ServerConfig {
    /// Research client settings. Fails when no API key was configured;
    /// there is no built-in fallback credential.
    pub fn gemini_config(&self) -> Result<GeminiConfig> {
        let api_key = self
            .google_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .context("GOOGLE_API_KEY is not set (pass --google-api-key or set it in the environment)")?;
        if self.gemini_model.trim().is_empty() {
            bail!("GEMINI_MODEL must not be empty");
        }
        Ok(GeminiConfig {
            api_key: api_key.to_string(),
            model: self.gemini_model.trim().to_string(),
            base_url: self.gemini_base_url.clone(),
        })
    }

    pub fn ollama_config(&self) -> OllamaConfig {
        OllamaConfig {
            host: self.ollama_host.clone(),
            temperature: self.ollama_temperature,
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ServerConfig,
    }

    fn parse(args: &[&str]) -> ServerConfig {
        let mut argv = vec!["startup-bully"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().config
    }

    const CONFIG_VARS: [&str; 9] = [
        "GOOGLE_API_KEY",
        "GEMINI_MODEL",
        "GEMINI_API_BASE",
        "OLLAMA_HOST",
        "OLLAMA_MODEL",
        "OLLAMA_TEMPERATURE",
        "BULLY_BIND",
        "PORT",
        "BULLY_LOGS_DIR",
    ];

    #[test]
    fn defaults_apply() {
        temp_env::with_vars_unset(CONFIG_VARS, || {
            let config = parse(&["--google-api-key", "k"]);
            assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
            assert_eq!(config.ollama_host, DEFAULT_OLLAMA_HOST);
            assert_eq!(config.ollama_model, DEFAULT_OLLAMA_MODEL);
            assert_eq!(config.ollama_temperature, None);
            assert_eq!(config.logs_dir, PathBuf::from("logs"));
            assert_eq!(config.listen_addr().to_string(), "0.0.0.0:8000");
        });
    }

    #[test]
    fn environment_overrides_defaults() {
        temp_env::with_vars(
            [
                ("OLLAMA_MODEL", Some("llama3.2")),
                ("PORT", Some("9100")),
                ("BULLY_LOGS_DIR", Some("/tmp/bully-logs")),
            ],
            || {
                let config = parse(&[]);
                assert_eq!(config.ollama_model, "llama3.2");
                assert_eq!(config.port, 9100);
                assert_eq!(config.logs_dir, PathBuf::from("/tmp/bully-logs"));
            },
        );
    }

    #[test]
    fn missing_api_key_fails_closed() {
        let mut config = parse(&["--google-api-key", "k"]);
        config.google_api_key = None;
        let err = config.gemini_config().unwrap_err();
        assert!(err.to_string().contains("GOOGLE_API_KEY"));

        config.google_api_key = Some("   ".into());
        assert!(config.gemini_config().is_err());
    }

    #[test]
    fn gemini_config_carries_overrides() {
        let config = parse(&[
            "--google-api-key",
            "secret",
            "--gemini-model",
            "gemini-2.5-pro",
            "--gemini-base-url",
            "http://127.0.0.1:9999",
        ]);
        let gemini = config.gemini_config().unwrap();
        assert_eq!(gemini.api_key, "secret");
        assert_eq!(gemini.model, "gemini-2.5-pro");
        assert_eq!(gemini.base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn ollama_temperature_parses() {
        let config = parse(&["--google-api-key", "k", "--ollama-temperature", "0.7"]);
        assert_eq!(config.ollama_config().temperature, Some(0.7));
    }
}
