use std::sync::Arc;

use tokio::sync::Mutex;

use crate::analysis::ResumeAnalyzer;
use crate::config::Config;
use crate::session::Session;
use crate::upload::preview::PreviewStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analysis backend. Default: `HttpAnalyzer` against `ANALYSIS_ENDPOINT`.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    /// The one UI session this server drives.
    pub session: Arc<Mutex<Session>>,
    pub previews: PreviewStore,
}

impl AppState {
    pub fn new(config: Config, analyzer: Arc<dyn ResumeAnalyzer>) -> Self {
        Self {
            config,
            analyzer,
            session: Arc::new(Mutex::new(Session::new())),
            previews: PreviewStore::new(),
        }
    }
}
