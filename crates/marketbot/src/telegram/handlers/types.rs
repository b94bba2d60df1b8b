//! Handler types and dependencies

use std::sync::Arc;

use url::Url;

use crate::core::Settings;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
///
/// Built once at startup and cloned into each endpoint; nothing in here changes afterwards.
#[derive(Clone, Debug)]
pub struct HandlerDeps {
    pub webapp_url: Arc<Url>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(webapp_url: Url) -> Self {
        Self {
            webapp_url: Arc::new(webapp_url),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.webapp_url.clone())
    }
}
