use std::fmt;

use crate::{BusinessMetrics, NotificationId, RequestId};

/// A request that did not produce a usable response.
///
/// The message is for logs only; the user sees a generic notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    pub message: String,
}

impl RequestFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the business name field.
    NameChanged(String),
    /// User edited the location field.
    LocationChanged(String),
    /// User submitted the form.
    Submitted,
    /// User asked for a new headline.
    RegenerateClicked,
    /// Backend answered a business-data request.
    InsightsLoaded {
        request_id: RequestId,
        result: Result<BusinessMetrics, RequestFailure>,
    },
    /// Backend answered a regenerate-headline request.
    HeadlineRegenerated {
        request_id: RequestId,
        result: Result<String, RequestFailure>,
    },
    /// A notification's display time ran out.
    NotificationExpired { notification_id: NotificationId },
    /// UI/render tick to coalesce rendering.
    Tick,
    NoOp,
}
