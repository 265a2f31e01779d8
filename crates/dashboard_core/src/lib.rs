//! Dashboard core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod validation;
mod view_model;

pub use effect::{Effect, NOTIFICATION_TTL};
pub use msg::{Msg, RequestFailure};
pub use state::{
    AppState, BusinessInsights, BusinessMetrics, Notification, NotificationId, NotificationKind,
    RequestId,
};
pub use update::update;
pub use validation::{validate, FormInput, ValidationErrors, LOCATION_REQUIRED, NAME_REQUIRED};
pub use view_model::{AppViewModel, InsightsCardView, NotificationView};
