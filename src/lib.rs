use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;
pub mod client;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, notify, routes};
pub use infrastructure::{limiter, utils};

use limiter::rate_limiter::RateLimiterStore;
use notify::{LogNotifier, Notifier};
use use_cases::contact::ContactHandler;

pub struct AppState {
    pub contact_handler: ContactHandler,
    pub rate_limiter: RateLimiterStore,
}

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        Self::with_notifier(config, Arc::new(LogNotifier))
    }

    /// Same as [`AppState::new`] but with an injected notifier, so tests can
    /// observe dispatched notifications instead of reading log output.
    pub fn with_notifier(config: &settings::AppConfig, notifier: Arc<dyn Notifier>) -> Self {
        let contact_handler = ContactHandler::new(
            notifier,
            config.notify_sender.clone(),
            config.notify_recipient.clone(),
        );
        let rate_limiter = RateLimiterStore::new(
            config.rate_limit_max_requests,
            config.rate_limit_window_ms(),
        );

        AppState {
            contact_handler,
            rate_limiter,
        }
    }
}
