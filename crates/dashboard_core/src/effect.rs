use std::time::Duration;

use crate::{NotificationId, RequestId};

/// How long a notification stays visible before it is dismissed.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Side effects requested by `update`; the app executes them and reports
/// back through `Msg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchInsights {
        request_id: RequestId,
        name: String,
        location: String,
    },
    RegenerateHeadline {
        request_id: RequestId,
        name: String,
        location: String,
    },
    /// Deliver `Msg::NotificationExpired` for this id after `after`.
    ScheduleNotificationDismiss {
        notification_id: NotificationId,
        after: Duration,
    },
}
