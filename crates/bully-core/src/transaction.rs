use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::PersonRequest;

/// The persisted record of one completed validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionLog {
    pub timestamp: DateTime<Local>,
    pub input_fields: PersonRequest,
    pub search_response: String,
    pub feedback_response: String,
}

impl TransactionLog {
    pub fn new(
        timestamp: DateTime<Local>,
        input_fields: PersonRequest,
        search_response: String,
        feedback_response: String,
    ) -> Self {
        Self {
            timestamp,
            input_fields,
            search_response,
            feedback_response,
        }
    }
}

/// Body returned to the caller of `/api/validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub research: String,
    pub feedback: String,
}

impl From<&TransactionLog> for ValidationResponse {
    fn from(log: &TransactionLog) -> Self {
        Self {
            research: log.search_response.clone(),
            feedback: log.feedback_response.clone(),
        }
    }
}
