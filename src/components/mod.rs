//! UI Components
//!
//! Leptos components for the restaurant page.

mod menu_card;
mod menu_grid;
mod filter_bar;
mod nutrition_popup;
mod image_lightbox;
mod notification_toast;
mod contact_form;
mod nav_bar;
mod side_panels;
mod plan_cards;

pub use menu_card::MenuCard;
pub use menu_grid::MenuGrid;
pub use filter_bar::FilterBar;
pub use nutrition_popup::NutritionPopup;
pub use image_lightbox::ImageLightbox;
pub use notification_toast::NotificationToast;
pub use contact_form::ContactSection;
pub use nav_bar::NavBar;
pub use side_panels::SidePanels;
pub use plan_cards::PlanCards;
