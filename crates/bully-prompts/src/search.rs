use bully_core::PersonRequest;

use crate::DEFAULT_COMPANY;

/// Assemble the research prompt sent to the search-grounded model.
///
/// Sections always appear in the same order. The startup-idea evaluation
/// section is only added when an idea is present, and the format
/// instructions always close the prompt.
pub fn search_prompt(person: &PersonRequest) -> String {
    let mut prompt = String::new();
    append_background(&mut prompt, person);
    if !person.startup_idea.is_empty() {
        append_idea_evaluation(&mut prompt, &person.startup_idea);
    }
    append_format_instructions(&mut prompt);
    prompt
}

/// The bullet under ONLINE PRESENCE.
pub fn github_bullet(github_username: Option<&str>) -> String {
    match github_username {
        Some(user) => format!(
            "- GitHub profile analysis for username: {user} \
             (focus on projects that demonstrate technical ability relevant to startups)"
        ),
        None => "- Any relevant GitHub or coding platforms presence that shows technical abilities"
            .to_string(),
    }
}

fn append_background(prompt: &mut String, person: &PersonRequest) {
    let name = &person.name;
    let company = person.company.as_deref().unwrap_or(DEFAULT_COMPANY);
    let github = github_bullet(person.github_username.as_deref());

    prompt.push('\n');
    prompt.push_str(&format!(
        "I need focused, relevant information about {name} to evaluate their potential \
         as a startup founder. I'm specifically assessing whether they have the right \
         background and skills for their startup idea. ONLY include information that \
         helps with this evaluation.\n\n"
    ));
    prompt.push_str("Please research and provide a concise, RELEVANT breakdown of:\n\n");

    prompt.push_str("1. PROFESSIONAL BACKGROUND:\n");
    prompt.push_str("   - Current and past work experience RELEVANT to their startup potential\n");
    prompt.push_str(&format!("   - Role and responsibilities at {company}\n"));
    prompt.push_str(
        "   - Industry expertise and specializations that would HELP or HINDER a startup\n\
         \x20  - Notable achievements that demonstrate entrepreneurial ability\n\n",
    );

    prompt.push_str("2. ONLINE PRESENCE:\n");
    prompt.push_str(&format!("   {github}\n"));
    prompt.push_str(
        "   - LinkedIn profile details that indicate startup potential\n\
         \x20  - Evidence of thought leadership, innovation, or community involvement\n\n",
    );

    prompt.push_str(
        "3. SKILLS & EXPERTISE:\n\
         \x20  - Technical or business skills relevant to founding a startup\n\
         \x20  - Industry-specific knowledge that would give them an advantage\n\
         \x20  - Any GAPS in their skillset that might limit startup success\n\
         \x20  - Leadership or team-building experience\n\n",
    );

    prompt.push_str(
        "4. EDUCATION & CREDENTIALS:\n\
         \x20  - Only education background RELEVANT to their startup potential\n\
         \x20  - Specialized training or certifications that enhance founder credibility\n",
    );
}

fn append_idea_evaluation(prompt: &mut String, idea: &str) {
    prompt.push_str("\n5. STARTUP IDEA EVALUATION:\n");
    prompt.push_str(&format!("- Critical analysis of their idea: {idea}\n"));
    prompt.push_str(
        "- Market potential and size\n\
         - Existing competitors and market saturation\n\
         - Specific challenges this person will face with THIS idea\n\
         - Alignment between the person's background and THIS specific idea\n",
    );
}

fn append_format_instructions(prompt: &mut String) {
    prompt.push_str(
        "\nYour output will be directly fed into another LLM that will use this information \
         to evaluate the person's startup idea. Format your response with these guidelines:\n\n",
    );
    prompt.push_str(
        "1. Use clear section headers with **bold formatting** (e.g., **PROFESSIONAL BACKGROUND**)\n\
         2. Present information in concise bullet points with clear categories\n\
         3. Highlight key skills, experiences, and red flags that are relevant to the startup idea\n\
         4. For technical information, use simple language that another model can easily interpret\n\
         5. Include specific facts rather than general statements\n\
         6. If information is missing or uncertain, explicitly state this rather than making assumptions\n\
         7. Format any numerical data or statistics clearly\n\
         8. Focus ONLY on information relevant to evaluating them as a founder\n\
         9. Structure your response to be easily parsed by another AI system\n\n",
    );
    prompt.push_str(
        "Remember that your output will not be seen directly by a human but will be \
         processed by another AI to generate feedback for the person.\n",
    );
}
