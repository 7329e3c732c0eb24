use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact form payload, validated identically on the client and the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// The UI offers a closed set of ranges, but the schema deliberately
    /// accepts any short string.
    #[validate(length(max = 100, message = "Budget must be less than 100 characters"))]
    pub budget: Option<String>,

    #[validate(length(min = 10, max = 1000, message = "Message must be between 10 and 1000 characters"))]
    pub message: String,

    /// Honeypot. Never rendered to humans; any content marks the submission
    /// as automated. Not a validation rule: flagged submissions must still
    /// pass the schema so the handler can fake a success response.
    #[serde(default)]
    pub website: String,
}

impl ContactForm {
    pub fn is_honeypot_triggered(&self) -> bool {
        !self.website.is_empty()
    }
}
