use serde::{Deserialize, Serialize};

use crate::BullyError;

/// A validated submission: who the person is and what they want to build.
///
/// Optional fields are `None` when the form left them blank, never
/// `Some("")`, so prompt code can branch on presence alone. Present values
/// are kept exactly as submitted. `startup_idea` is only empty on requests
/// built with [`PersonRequest::for_research`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRequest {
    pub name: String,
    pub company: Option<String>,
    pub github_username: Option<String>,
    pub startup_idea: String,
}

/// Raw form fields as they arrive on `/api/validate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitPerson {
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub github_username: Option<String>,
    pub startup_idea: String,
}

impl PersonRequest {
    pub fn new(
        name: &str,
        company: Option<&str>,
        github_username: Option<&str>,
        startup_idea: &str,
    ) -> Result<Self, BullyError> {
        let name = required("name", name)?;
        let startup_idea = required("startup_idea", startup_idea)?;
        Ok(Self {
            name,
            company: optional(company),
            github_username: optional(github_username),
            startup_idea,
        })
    }

    /// A research-only request, where the idea is optional.
    pub fn for_research(
        name: &str,
        company: Option<&str>,
        github_username: Option<&str>,
        startup_idea: Option<&str>,
    ) -> Result<Self, BullyError> {
        Ok(Self {
            name: required("name", name)?,
            company: optional(company),
            github_username: optional(github_username),
            startup_idea: optional(startup_idea).unwrap_or_default(),
        })
    }
}

impl TryFrom<SubmitPerson> for PersonRequest {
    type Error = BullyError;

    fn try_from(form: SubmitPerson) -> Result<Self, Self::Error> {
        PersonRequest::new(
            &form.name,
            form.company.as_deref(),
            form.github_username.as_deref(),
            &form.startup_idea,
        )
    }
}

fn required(field: &str, value: &str) -> Result<String, BullyError> {
    if value.trim().is_empty() {
        return Err(BullyError::InvalidInput(format!("{field} is required")));
    }
    Ok(value.to_string())
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
