//! Shared application state

use std::sync::Arc;

use finquest_advice::Advisor;
use finquest_config::Settings;

/// State handed to every request handler.
///
/// The advisor is trained once before the router is built and never mutated
/// afterwards, so concurrent handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<Advisor>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(advisor: Advisor, settings: Settings) -> Self {
        Self {
            advisor: Arc::new(advisor),
            settings: Arc::new(settings),
        }
    }
}
