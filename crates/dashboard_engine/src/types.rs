use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type RequestId = u64;

/// JSON body of `POST /api/business-data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessDataRequest {
    pub name: String,
    pub location: String,
}

/// Success body of `POST /api/business-data`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusinessData {
    pub rating: f64,
    pub reviews: f64,
    pub headline: String,
}

/// Success body of `GET /api/regenerate-headline`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeadlineResponse {
    pub headline: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    InsightsFetched {
        request_id: RequestId,
        result: Result<BusinessData, RequestError>,
    },
    HeadlineRegenerated {
        request_id: RequestId,
        result: Result<String, RequestError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct RequestError {
    pub kind: FailureKind,
    pub message: String,
}

impl RequestError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    /// 2xx response whose body is not the expected JSON.
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "unexpected response body"),
        }
    }
}
