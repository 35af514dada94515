use bully_core::PersonRequest;
use chrono::{DateTime, Utc};

/// Build the critic's system prompt around the research text.
///
/// The research is inserted as-is. Braces or anything else that looks like
/// template syntax is never re-interpreted.
pub fn system_prompt(research: &str) -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "You are a startup critic and industry expert. You've been provided with \
         detailed research about a person and their startup idea.\n\n",
    );
    prompt.push_str("RESEARCH ABOUT THE PERSON AND THEIR STARTUP:\n");
    prompt.push_str(research);
    prompt.push_str("\n\n");
    append_mission(&mut prompt);
    prompt
}

fn append_mission(prompt: &mut String) {
    prompt.push_str("Your mission is to tear their startup idea to shreds based on:\n");
    prompt.push_str(
        "1. Their laughable background, experience, and skills\u{2014}expose every gap and inadequacy.\n\
         2. The utterly delusional viability of their idea in a market that will chew them up and spit them out.\n\
         3. Their so-called \"unique\" qualifications or, more likely, their glaring disadvantages \
         that make them a walking disaster for this venture.\n\
         4. The endless parade of challenges that will crush their spirit and dreams.\n\
         5. How their past work and skills are a complete mismatch for this doomed \
         endeavor\u{2014}highlight every embarrassing failure.\n\n",
    );
    prompt.push_str(
        "Be brutal, vicious, and unrelenting in your feedback. Make it sting. Address them \
         directly, like you're staring them down and watching them squirm. Dig into their \
         background and fling every weakness, every misstep, every naive assumption back in \
         their face. Be specific\u{2014}vague insults are for amateurs. Rip apart their idea \
         with precision, leaving no hope unscathed. End with a merciless verdict: tell them \
         whether they should pursue this pathetic idea or crawl back to whatever hole they \
         came from, and make it clear why they're destined to fail.\n",
    );
}

/// Build the first-person message the critic responds to.
pub fn user_prompt(person: &PersonRequest) -> String {
    let mut prompt = format!("My name is {}. ", person.name);
    if let Some(ref company) = person.company {
        prompt.push_str(&format!("I work at {company}. "));
    }
    if let Some(ref github) = person.github_username {
        prompt.push_str(&format!("My GitHub username is {github}. "));
    }
    prompt.push_str(&format!("My startup idea is: {}", person.startup_idea));
    prompt
}

/// Append the request time so the model server never serves a cached answer.
pub fn stamp_request_time(prompt: &str, at: DateTime<Utc>) -> String {
    let secs = at.timestamp_micros() as f64 / 1_000_000.0;
    format!("{prompt} [Request time: {secs}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn system_prompt_embeds_research_verbatim() {
        let research = "**PROFESSIONAL BACKGROUND**\n- Built {name} at {company}\n- 100% {research_result}";
        let out = system_prompt(research);
        assert!(out.contains(research));
        assert!(out.starts_with("You are a startup critic"));
        let header = out.find("RESEARCH ABOUT THE PERSON").unwrap();
        let mission = out.find("Your mission").unwrap();
        let body = out.find(research).unwrap();
        assert!(header < body && body < mission);
    }

    #[test]
    fn system_prompt_does_not_truncate() {
        let research = "x".repeat(200_000);
        assert!(system_prompt(&research).contains(&research));
    }

    #[test]
    fn user_prompt_full() {
        let person = PersonRequest::new(
            "Jane Doe",
            Some("Acme"),
            Some("janedoe"),
            "drone-delivered coffee",
        )
        .unwrap();
        assert_eq!(
            user_prompt(&person),
            "My name is Jane Doe. I work at Acme. My GitHub username is janedoe. \
             My startup idea is: drone-delivered coffee"
        );
    }

    #[test]
    fn user_prompt_omits_absent_clauses() {
        let person = PersonRequest::new("Jane Doe", None, None, "coffee").unwrap();
        let out = user_prompt(&person);
        assert_eq!(out, "My name is Jane Doe. My startup idea is: coffee");
        assert!(!out.contains("I work at"));
        assert!(!out.contains("GitHub"));
    }

    #[test]
    fn user_prompt_github_without_company() {
        let person = PersonRequest::new("Jane Doe", None, Some("jd"), "coffee").unwrap();
        assert_eq!(
            user_prompt(&person),
            "My name is Jane Doe. My GitHub username is jd. My startup idea is: coffee"
        );
    }

    #[test]
    fn stamp_appends_fractional_seconds() {
        let at = Utc.timestamp_micros(1_700_000_000_250_000).unwrap();
        assert_eq!(
            stamp_request_time("hello", at),
            "hello [Request time: 1700000000.25]"
        );
    }
}
