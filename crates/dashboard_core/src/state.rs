use crate::validation::{FormInput, ValidationErrors};
use crate::view_model::{AppViewModel, InsightsCardView, NotificationView};

pub type RequestId = u64;
pub type NotificationId = u64;

/// Metrics returned by the backend for one business.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessMetrics {
    pub rating: f64,
    pub reviews: f64,
    pub headline: String,
}

/// Fetched metrics together with the inputs they were fetched for.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessInsights {
    pub business_name: String,
    pub location: String,
    pub data: BusinessMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}

/// A dispatched request whose response has not arrived yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingRequest {
    pub(crate) id: RequestId,
    pub(crate) name: String,
    pub(crate) location: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    form: FormInput,
    errors: ValidationErrors,
    insights: Option<BusinessInsights>,
    pending_fetch: Option<PendingRequest>,
    pending_regenerate: Option<PendingRequest>,
    notification: Option<Notification>,
    last_request_id: RequestId,
    last_notification_id: NotificationId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            name: self.form.name.clone(),
            location: self.form.location.clone(),
            name_error: self.errors.name.clone(),
            location_error: self.errors.location.clone(),
            is_loading: self.is_loading(),
            is_regenerating: self.is_regenerating(),
            insights: self.insights.as_ref().map(|insights| InsightsCardView {
                business_name: insights.business_name.clone(),
                location: insights.location.clone(),
                rating: insights.data.rating,
                reviews: insights.data.reviews,
                headline: insights.data.headline.clone(),
            }),
            notification: self.notification.as_ref().map(|n| NotificationView {
                message: n.message.clone(),
                kind: n.kind,
            }),
            dirty: self.dirty,
        }
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn insights(&self) -> Option<&BusinessInsights> {
        self.insights.as_ref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending_fetch.is_some()
    }

    pub fn is_regenerating(&self) -> bool {
        self.pending_regenerate.is_some()
    }

    /// Returns whether anything visible changed since the last call, and
    /// resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_name(&mut self, name: String) {
        if self.form.name != name {
            self.form.name = name;
            self.dirty = true;
        }
    }

    pub(crate) fn set_location(&mut self, location: String) {
        if self.form.location != location {
            self.form.location = location;
            self.dirty = true;
        }
    }

    pub(crate) fn set_errors(&mut self, errors: ValidationErrors) {
        if self.errors != errors {
            self.errors = errors;
            self.dirty = true;
        }
    }

    /// Records a new fetch for the current form contents. Any older fetch
    /// still in flight becomes stale.
    pub(crate) fn begin_fetch(&mut self) -> PendingRequest {
        let pending = PendingRequest {
            id: self.next_request_id(),
            name: self.form.name.clone(),
            location: self.form.location.clone(),
        };
        self.pending_fetch = Some(pending.clone());
        self.dirty = true;
        pending
    }

    /// Records a regenerate for the business currently shown, or `None`
    /// when nothing has been fetched yet.
    pub(crate) fn begin_regenerate(&mut self) -> Option<PendingRequest> {
        let insights = self.insights.as_ref()?;
        let name = insights.business_name.clone();
        let location = insights.location.clone();
        let pending = PendingRequest {
            id: self.next_request_id(),
            name,
            location,
        };
        self.pending_regenerate = Some(pending.clone());
        self.dirty = true;
        Some(pending)
    }

    /// Takes the outstanding fetch if `request_id` is the latest one.
    pub(crate) fn complete_fetch(&mut self, request_id: RequestId) -> Option<PendingRequest> {
        match &self.pending_fetch {
            Some(pending) if pending.id == request_id => {
                self.dirty = true;
                self.pending_fetch.take()
            }
            _ => None,
        }
    }

    /// Takes the outstanding regenerate if `request_id` is the latest one.
    pub(crate) fn complete_regenerate(&mut self, request_id: RequestId) -> Option<PendingRequest> {
        match &self.pending_regenerate {
            Some(pending) if pending.id == request_id => {
                self.dirty = true;
                self.pending_regenerate.take()
            }
            _ => None,
        }
    }

    /// Replaces the insights wholesale. A regenerate still in flight was
    /// asked about the previous business, so it is dropped.
    pub(crate) fn set_insights(&mut self, insights: BusinessInsights) {
        self.insights = Some(insights);
        self.pending_regenerate = None;
        self.dirty = true;
    }

    /// Replaces only the headline. Returns `false` when there are no insights.
    pub(crate) fn set_headline(&mut self, headline: String) -> bool {
        match self.insights.as_mut() {
            Some(insights) => {
                insights.data.headline = headline;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_notification(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
    ) -> NotificationId {
        self.last_notification_id += 1;
        let id = self.last_notification_id;
        self.notification = Some(Notification {
            id,
            message: message.into(),
            kind,
        });
        self.dirty = true;
        id
    }

    /// Clears the notification if it is still the one identified by `id`.
    pub(crate) fn expire_notification(&mut self, id: NotificationId) -> bool {
        match &self.notification {
            Some(current) if current.id == id => {
                self.notification = None;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }
}
