use std::sync::Once;

use dashboard_core::{
    update, AppState, BusinessInsights, BusinessMetrics, Effect, Msg, NotificationKind,
    RequestFailure, LOCATION_REQUIRED, NAME_REQUIRED, NOTIFICATION_TTL,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dashboard_logging::initialize_for_tests);
}

fn fill_form(state: AppState, name: &str, location: &str) -> AppState {
    let (state, _) = update(state, Msg::NameChanged(name.to_string()));
    let (state, _) = update(state, Msg::LocationChanged(location.to_string()));
    state
}

fn cake_metrics() -> BusinessMetrics {
    BusinessMetrics {
        rating: 4.5,
        reviews: 120.0,
        headline: "Best cakes in Mumbai".to_string(),
    }
}

fn fetch_request_id(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchInsights { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("fetch effect")
}

#[test]
fn empty_form_reports_both_fields_and_dispatches_nothing() {
    init_logging();
    let (next, effects) = update(AppState::new(), Msg::Submitted);

    assert_eq!(next.errors().len(), 2);
    assert_eq!(next.errors().name.as_deref(), Some(NAME_REQUIRED));
    assert_eq!(next.errors().location.as_deref(), Some(LOCATION_REQUIRED));
    assert!(!next.is_loading());
    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, Effect::FetchInsights { .. })));

    let notification = next.notification().expect("validation banner");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "Please fill in all required fields.");
}

#[test]
fn missing_location_reports_only_location() {
    init_logging();
    let state = fill_form(AppState::new(), "Cake & Co", "   ");
    let (next, effects) = update(state, Msg::Submitted);

    assert_eq!(next.errors().len(), 1);
    assert!(next.errors().name.is_none());
    assert_eq!(next.errors().location.as_deref(), Some(LOCATION_REQUIRED));
    assert_eq!(effects.len(), 1);
    assert!(matches!(
        effects[0],
        Effect::ScheduleNotificationDismiss { .. }
    ));
}

#[test]
fn valid_submit_clears_errors_and_dispatches_fetch() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Submitted);
    let state = fill_form(state, "Cake & Co", "Mumbai");
    let (next, effects) = update(state, Msg::Submitted);

    assert!(next.errors().is_empty());
    assert!(next.is_loading());
    assert_eq!(
        effects,
        vec![Effect::FetchInsights {
            request_id: 1,
            name: "Cake & Co".to_string(),
            location: "Mumbai".to_string(),
        }]
    );
    assert_eq!(next.form().name, "Cake & Co");
}

#[test]
fn successful_fetch_stores_insights_for_submitted_inputs() {
    init_logging();
    let state = fill_form(AppState::new(), "Cake & Co", "Mumbai");
    let (state, effects) = update(state, Msg::Submitted);
    let request_id = fetch_request_id(&effects);

    let (next, effects) = update(
        state,
        Msg::InsightsLoaded {
            request_id,
            result: Ok(cake_metrics()),
        },
    );

    assert_eq!(
        next.insights(),
        Some(&BusinessInsights {
            business_name: "Cake & Co".to_string(),
            location: "Mumbai".to_string(),
            data: cake_metrics(),
        })
    );
    assert!(!next.is_loading());
    let notification = next.notification().expect("success banner");
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, "Business data loaded successfully!");
    assert_eq!(
        effects,
        vec![Effect::ScheduleNotificationDismiss {
            notification_id: notification.id,
            after: NOTIFICATION_TTL,
        }]
    );
}

#[test]
fn form_is_kept_after_submit() {
    init_logging();
    let state = fill_form(AppState::new(), "Cake & Co", "Mumbai");
    let (state, effects) = update(state, Msg::Submitted);
    let (next, _) = update(
        state,
        Msg::InsightsLoaded {
            request_id: fetch_request_id(&effects),
            result: Ok(cake_metrics()),
        },
    );

    assert_eq!(next.view().name, "Cake & Co");
    assert_eq!(next.view().location, "Mumbai");
}

#[test]
fn failed_first_fetch_leaves_insights_unset() {
    init_logging();
    let state = fill_form(AppState::new(), "Cake & Co", "Mumbai");
    let (state, effects) = update(state, Msg::Submitted);

    let (next, _) = update(
        state,
        Msg::InsightsLoaded {
            request_id: fetch_request_id(&effects),
            result: Err(RequestFailure::new("http status 500")),
        },
    );

    assert!(next.insights().is_none());
    assert!(!next.is_loading());
    let notification = next.notification().expect("error banner");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(
        notification.message,
        "Failed to load business data. Please try again."
    );
}

#[test]
fn failed_refetch_keeps_previous_insights() {
    init_logging();
    let state = fill_form(AppState::new(), "Cake & Co", "Mumbai");
    let (state, effects) = update(state, Msg::Submitted);
    let (state, _) = update(
        state,
        Msg::InsightsLoaded {
            request_id: fetch_request_id(&effects),
            result: Ok(cake_metrics()),
        },
    );
    let before = state.insights().cloned();

    let state = fill_form(state, "Bread Ltd", "Pune");
    let (state, effects) = update(state, Msg::Submitted);
    let (next, _) = update(
        state,
        Msg::InsightsLoaded {
            request_id: fetch_request_id(&effects),
            result: Err(RequestFailure::new("network error")),
        },
    );

    assert_eq!(next.insights().cloned(), before);
    assert_eq!(
        next.notification().map(|n| n.kind),
        Some(NotificationKind::Error)
    );
}

#[test]
fn only_latest_fetch_response_is_applied() {
    init_logging();
    let state = fill_form(AppState::new(), "Cake & Co", "Mumbai");
    let (state, first) = update(state, Msg::Submitted);
    let state = fill_form(state, "Bread Ltd", "Pune");
    let (state, second) = update(state, Msg::Submitted);
    let first_id = fetch_request_id(&first);
    let second_id = fetch_request_id(&second);
    assert!(second_id > first_id);

    let (state, _) = update(
        state,
        Msg::InsightsLoaded {
            request_id: second_id,
            result: Ok(BusinessMetrics {
                rating: 3.9,
                reviews: 14.0,
                headline: "Fresh bread in Pune".to_string(),
            }),
        },
    );
    let (next, effects) = update(
        state,
        Msg::InsightsLoaded {
            request_id: first_id,
            result: Ok(cake_metrics()),
        },
    );

    assert!(effects.is_empty());
    let insights = next.insights().expect("insights");
    assert_eq!(insights.business_name, "Bread Ltd");
    assert_eq!(insights.data.headline, "Fresh bread in Pune");
}

#[test]
fn stale_failure_does_not_end_loading() {
    init_logging();
    let state = fill_form(AppState::new(), "Cake & Co", "Mumbai");
    let (state, first) = update(state, Msg::Submitted);
    let (state, _second) = update(state, Msg::Submitted);

    let (next, effects) = update(
        state,
        Msg::InsightsLoaded {
            request_id: fetch_request_id(&first),
            result: Err(RequestFailure::new("timeout")),
        },
    );

    assert!(effects.is_empty());
    assert!(next.is_loading());
    assert!(next.notification().is_none());
}
