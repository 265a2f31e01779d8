use dashboard_core::{AppViewModel, InsightsCardView, NotificationKind};

use super::constants::*;
use super::layout::footer_line;

/// Renders the whole screen as text lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(notification) = &view.notification {
        let marker = match notification.kind {
            NotificationKind::Success => "[ OK ]",
            NotificationKind::Error => "[FAIL]",
        };
        lines.push(format!("{marker} {}", notification.message));
        lines.push(String::new());
    }

    lines.push(format!("== {FORM_TITLE} =="));
    push_field(&mut lines, LABEL_NAME, &view.name, view.name_error.as_deref());
    push_field(
        &mut lines,
        LABEL_LOCATION,
        &view.location,
        view.location_error.as_deref(),
    );
    let submit = if view.is_loading {
        BUTTON_SUBMIT_BUSY
    } else {
        BUTTON_SUBMIT
    };
    lines.push(format!("  [ {submit} ]"));
    lines.push(String::new());

    lines.push(format!("== {CARD_TITLE} =="));
    match &view.insights {
        Some(card) => push_card(&mut lines, card, view.is_regenerating),
        None => lines.push(format!("  {CARD_PLACEHOLDER}")),
    }
    lines.push(String::new());
    lines.push(footer_line());

    lines
}

fn push_field(lines: &mut Vec<String>, label: &str, value: &str, error: Option<&str>) {
    lines.push(format!("  {label}: {value}"));
    if let Some(error) = error {
        lines.push(format!("    ! {error}"));
    }
}

fn push_card(lines: &mut Vec<String>, card: &InsightsCardView, is_regenerating: bool) {
    lines.push(format!("  {}", card.business_name));
    lines.push(format!("  @ {}", card.location));
    lines.push(format!(
        "  {LABEL_RATING}: {}    {LABEL_REVIEWS}: {}",
        card.rating, card.reviews
    ));
    lines.push(format!("  {LABEL_HEADLINE}:"));
    lines.push(format!("    \"{}\"", card.headline));
    let regenerate = if is_regenerating {
        BUTTON_REGENERATE_BUSY
    } else {
        BUTTON_REGENERATE
    };
    lines.push(format!("  [ {regenerate} ]"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::NotificationView;

    fn cake_card() -> InsightsCardView {
        InsightsCardView {
            business_name: "Cake & Co".to_string(),
            location: "Mumbai".to_string(),
            rating: 4.5,
            reviews: 120.0,
            headline: "Best cakes in Mumbai".to_string(),
        }
    }

    #[test]
    fn placeholder_when_nothing_fetched() {
        let lines = render(&AppViewModel::default());
        assert!(lines.iter().any(|line| line.contains(CARD_PLACEHOLDER)));
        assert!(lines.iter().any(|line| line.contains(BUTTON_SUBMIT)));
        assert!(!lines.iter().any(|line| line.contains(BUTTON_REGENERATE)));
    }

    #[test]
    fn card_shows_metrics_and_quoted_headline() {
        let view = AppViewModel {
            insights: Some(cake_card()),
            ..AppViewModel::default()
        };
        let lines = render(&view);

        assert!(!lines.iter().any(|line| line.contains(CARD_PLACEHOLDER)));
        assert!(lines.contains(&"  Google Rating: 4.5    Reviews: 120".to_string()));
        assert!(lines.contains(&"    \"Best cakes in Mumbai\"".to_string()));
        assert!(lines.contains(&format!("  [ {BUTTON_REGENERATE} ]")));
    }

    #[test]
    fn whole_ratings_render_without_fraction() {
        let view = AppViewModel {
            insights: Some(InsightsCardView {
                rating: 4.0,
                ..cake_card()
            }),
            ..AppViewModel::default()
        };
        assert!(render(&view)
            .iter()
            .any(|line| line.contains("Google Rating: 4 ")));
    }

    #[test]
    fn busy_flags_change_button_labels() {
        let view = AppViewModel {
            is_loading: true,
            is_regenerating: true,
            insights: Some(cake_card()),
            ..AppViewModel::default()
        };
        let lines = render(&view);

        assert!(lines.contains(&format!("  [ {BUTTON_SUBMIT_BUSY} ]")));
        assert!(lines.contains(&format!("  [ {BUTTON_REGENERATE_BUSY} ]")));
    }

    #[test]
    fn field_errors_render_under_their_field() {
        let view = AppViewModel {
            location_error: Some("Location is required".to_string()),
            ..AppViewModel::default()
        };
        let lines = render(&view);
        let location = lines
            .iter()
            .position(|line| line.starts_with(&format!("  {LABEL_LOCATION}")))
            .expect("location line");

        assert_eq!(lines[location + 1], "    ! Location is required");
        assert_eq!(lines.iter().filter(|line| line.contains('!')).count(), 1);
    }

    #[test]
    fn banner_is_first_line() {
        let view = AppViewModel {
            notification: Some(NotificationView {
                message: "Failed to load business data. Please try again.".to_string(),
                kind: NotificationKind::Error,
            }),
            ..AppViewModel::default()
        };
        assert_eq!(
            render(&view)[0],
            "[FAIL] Failed to load business data. Please try again."
        );
    }
}
