//! Dashboard engine: backend client and request execution.
mod client;
mod engine;
mod types;

pub use client::{ApiSettings, InsightsApi, ReqwestInsightsApi, DEFAULT_BASE_URL};
pub use engine::EngineHandle;
pub use types::{
    BusinessData, BusinessDataRequest, EngineEvent, FailureKind, HeadlineResponse, RequestError,
    RequestId,
};
