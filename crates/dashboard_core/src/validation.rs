pub const NAME_REQUIRED: &str = "Business name is required";
pub const LOCATION_REQUIRED: &str = "Location is required";

/// The two form fields, exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    pub name: String,
    pub location: String,
}

/// Per-field validation messages. Empty means the form may be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none()
    }

    pub fn len(&self) -> usize {
        usize::from(self.name.is_some()) + usize::from(self.location.is_some())
    }
}

/// Checks that both fields hold something other than whitespace.
pub fn validate(input: &FormInput) -> ValidationErrors {
    ValidationErrors {
        name: is_blank(&input.name).then(|| NAME_REQUIRED.to_string()),
        location: is_blank(&input.location).then(|| LOCATION_REQUIRED.to_string()),
    }
}

/// Whitespace or byte-order marks only.
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}
