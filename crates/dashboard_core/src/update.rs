use dashboard_logging::{dashboard_debug, dashboard_warn};

use crate::{
    validate, AppState, BusinessInsights, Effect, Msg, NotificationKind, NOTIFICATION_TTL,
};

const VALIDATION_FAILED: &str = "Please fill in all required fields.";
const FETCH_SUCCEEDED: &str = "Business data loaded successfully!";
const FETCH_FAILED: &str = "Failed to load business data. Please try again.";
const REGENERATE_SUCCEEDED: &str = "Your SEO headline has been regenerated!";
const REGENERATE_FAILED: &str = "Failed to regenerate headline. Please try again.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::NameChanged(name) => {
            state.set_name(name);
            Vec::new()
        }
        Msg::LocationChanged(location) => {
            state.set_location(location);
            Vec::new()
        }
        Msg::Submitted => {
            let errors = validate(state.form());
            let valid = errors.is_empty();
            state.set_errors(errors);
            if !valid {
                dashboard_debug!("Submit blocked: {} field(s) invalid", state.errors().len());
                vec![notify(&mut state, NotificationKind::Error, VALIDATION_FAILED)]
            } else {
                let pending = state.begin_fetch();
                dashboard_debug!("Dispatching fetch request_id={}", pending.id);
                vec![Effect::FetchInsights {
                    request_id: pending.id,
                    name: pending.name,
                    location: pending.location,
                }]
            }
        }
        Msg::RegenerateClicked => match state.begin_regenerate() {
            Some(pending) => {
                dashboard_debug!("Dispatching regenerate request_id={}", pending.id);
                vec![Effect::RegenerateHeadline {
                    request_id: pending.id,
                    name: pending.name,
                    location: pending.location,
                }]
            }
            None => {
                dashboard_debug!("Regenerate ignored: no insights loaded");
                Vec::new()
            }
        },
        Msg::InsightsLoaded { request_id, result } => {
            let Some(pending) = state.complete_fetch(request_id) else {
                dashboard_debug!("Discarding stale business data request_id={}", request_id);
                return (state, Vec::new());
            };
            match result {
                Ok(data) => {
                    state.set_insights(BusinessInsights {
                        business_name: pending.name,
                        location: pending.location,
                        data,
                    });
                    vec![notify(&mut state, NotificationKind::Success, FETCH_SUCCEEDED)]
                }
                Err(failure) => {
                    dashboard_warn!(
                        "Fetching business data failed request_id={}: {}",
                        request_id,
                        failure
                    );
                    vec![notify(&mut state, NotificationKind::Error, FETCH_FAILED)]
                }
            }
        }
        Msg::HeadlineRegenerated { request_id, result } => {
            if state.complete_regenerate(request_id).is_none() {
                dashboard_debug!("Discarding stale headline request_id={}", request_id);
                return (state, Vec::new());
            }
            match result {
                Ok(headline) => {
                    if state.set_headline(headline) {
                        vec![notify(
                            &mut state,
                            NotificationKind::Success,
                            REGENERATE_SUCCEEDED,
                        )]
                    } else {
                        Vec::new()
                    }
                }
                Err(failure) => {
                    dashboard_warn!(
                        "Regenerating headline failed request_id={}: {}",
                        request_id,
                        failure
                    );
                    vec![notify(&mut state, NotificationKind::Error, REGENERATE_FAILED)]
                }
            }
        }
        Msg::NotificationExpired { notification_id } => {
            if state.expire_notification(notification_id) {
                dashboard_debug!("Notification {} expired", notification_id);
            } else {
                dashboard_debug!("Notification {} already replaced", notification_id);
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn notify(state: &mut AppState, kind: NotificationKind, message: &str) -> Effect {
    let notification_id = state.set_notification(kind, message);
    Effect::ScheduleNotificationDismiss {
        notification_id,
        after: NOTIFICATION_TTL,
    }
}
