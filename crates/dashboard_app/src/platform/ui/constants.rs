pub const APP_TITLE: &str = "GrowthProAI";
pub const APP_SUBTITLE: &str = "Local Business Dashboard";
pub const APP_TAGLINE: &str = "Discover your business insights and optimize your SEO presence";
pub const FOOTER: &str = "Powered by GrowthProAI | Helping local businesses grow online";

pub const FORM_TITLE: &str = "Business Information";
pub const LABEL_NAME: &str = "Business Name *";
pub const LABEL_LOCATION: &str = "Location *";
pub const BUTTON_SUBMIT: &str = "Get Business Insights";
pub const BUTTON_SUBMIT_BUSY: &str = "Loading...";

pub const CARD_TITLE: &str = "Business Insights";
pub const CARD_PLACEHOLDER: &str = "Enter your business information to see insights";
pub const LABEL_RATING: &str = "Google Rating";
pub const LABEL_REVIEWS: &str = "Reviews";
pub const LABEL_HEADLINE: &str = "AI-Generated SEO Headline";
pub const BUTTON_REGENERATE: &str = "Regenerate SEO Headline with AI";
pub const BUTTON_REGENERATE_BUSY: &str = "Regenerating...";
