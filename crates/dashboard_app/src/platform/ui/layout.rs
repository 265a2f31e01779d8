use super::constants::*;

/// Printed once at startup, above the first render.
pub fn header_lines() -> Vec<String> {
    vec![
        format!("{APP_TITLE} | {APP_SUBTITLE}"),
        APP_TAGLINE.to_string(),
        String::new(),
    ]
}

pub fn help_lines() -> Vec<String> {
    [
        "Commands:",
        "  name <text>       set the business name",
        "  location <text>   set the location",
        "  submit            get business insights",
        "  regenerate        regenerate the SEO headline",
        "  help              show this help",
        "  quit              exit",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

pub fn footer_line() -> String {
    FOOTER.to_string()
}
