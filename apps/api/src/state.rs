use std::sync::Arc;

use crate::chat::session::SessionStore;
use crate::llm_client::Completion;
use crate::market::MarketData;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model seam. Production wires `LlmClient`; turn tests script a fake.
    pub llm: Arc<dyn Completion>,
    /// Aggregator seam over the three market integrations. Credentials live
    /// inside the client, so a missing key degrades only that integration.
    pub market: Arc<dyn MarketData>,
    pub sessions: SessionStore,
}
