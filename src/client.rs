//! Programmatic contact-form client: the same state machine the site's form
//! runs, for smoke tests and scripted submissions.

use validator::Validate;

use crate::{
    entities::contact::ContactForm,
    errors::{field_errors, FieldError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Success,
    /// Generic failure, deliberately distinct from field-level validation
    /// errors.
    Error(String),
}

pub struct ContactFormClient {
    http: reqwest::Client,
    endpoint: String,
    state: FormState,
    pub fields: ContactForm,
}

impl ContactFormClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        ContactFormClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            state: FormState::Idle,
            fields: ContactForm::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Local check against the same schema the server enforces. Keeps
    /// obviously invalid input from consuming rate-limit budget; the server
    /// re-validates regardless.
    pub fn validate_local(&self) -> Result<(), Vec<FieldError>> {
        self.fields.validate().map_err(|e| field_errors(&e))
    }

    /// Submit the current fields.
    ///
    /// Local validation failures are returned as field errors without leaving
    /// `Idle`. Otherwise the machine runs `Submitting -> Success` (clearing
    /// the fields) or `Submitting -> Error` on network failure or any
    /// non-success status. Both terminal states accept another submission.
    pub async fn submit(&mut self) -> Result<&FormState, Vec<FieldError>> {
        if self.state == FormState::Submitting {
            return Ok(&self.state);
        }

        self.validate_local()?;

        self.state = FormState::Submitting;

        let response = self
            .http
            .post(&self.endpoint)
            .json(&self.fields)
            .send()
            .await;

        self.state = match response {
            Ok(response) if response.status().is_success() => {
                self.fields = ContactForm::default();
                FormState::Success
            }
            Ok(response) => {
                tracing::warn!(status = %response.status(), "Contact submission rejected");
                FormState::Error("Failed to send message. Please try again.".to_string())
            }
            Err(e) => {
                tracing::warn!("Contact submission failed: {}", e);
                FormState::Error("Failed to send message. Please try again.".to_string())
            }
        };

        Ok(&self.state)
    }
}
