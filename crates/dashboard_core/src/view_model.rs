use crate::NotificationKind;

/// Everything a renderer needs, detached from `AppState`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub name: String,
    pub location: String,
    pub name_error: Option<String>,
    pub location_error: Option<String>,
    pub is_loading: bool,
    pub is_regenerating: bool,
    /// `None` renders the empty-state placeholder.
    pub insights: Option<InsightsCardView>,
    pub notification: Option<NotificationView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightsCardView {
    pub business_name: String,
    pub location: String,
    pub rating: f64,
    pub reviews: f64,
    pub headline: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub message: String,
    pub kind: NotificationKind,
}
