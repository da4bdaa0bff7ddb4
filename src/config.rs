//! Page Constants
//!
//! Compile-time settings; the site has no runtime configuration.

/// Catalog resource, relative to the page
pub const CATALOG_URL: &str = "menu.json";

/// How long a toast stays on screen
pub const NOTIFICATION_LIFETIME_MS: u32 = 3000;

/// How long an add-to-cart button shows its confirmation
pub const ADDED_FEEDBACK_MS: u32 = 2000;

/// Delay before a newly shown card fades in
pub const FADE_IN_DELAY_MS: u32 = 10;

/// Navbar offset while hidden
pub const NAVBAR_HIDDEN_TOP: &str = "-80px";

/// Filter token that matches every card
pub const FILTER_ALL: &str = "all";

/// Unit suffixes appended when the nutrition popup is shown
pub const CALORIES_UNIT: &str = "kcal";
pub const CARBS_UNIT: &str = "gm";
pub const PROTEIN_UNIT: &str = "g";
pub const FATS_UNIT: &str = "g";
