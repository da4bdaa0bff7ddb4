//! Shared Overlay
//!
//! The nutrition popup and the image lightbox share one slot: opening either
//! closes the other. Page scroll is locked exactly while the lightbox is open.

use crate::config::{CALORIES_UNIT, CARBS_UNIT, FATS_UNIT, PROTEIN_UNIT};
use crate::models::Nutrition;
use crate::render::CardView;

/// The four popup slots, already suffixed with their units
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionPanel {
    pub calories: String,
    pub carbs: String,
    pub protein: String,
    pub fats: String,
}

impl From<&Nutrition> for NutritionPanel {
    fn from(n: &Nutrition) -> Self {
        Self {
            calories: format!("{}{}", n.calories, CALORIES_UNIT),
            carbs: format!("{}{}", n.carbs, CARBS_UNIT),
            protein: format!("{}{}", n.protein, PROTEIN_UNIT),
            fats: format!("{}{}", n.fats, FATS_UNIT),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightboxView {
    pub src: String,
    pub alt: String,
}

/// Backdrop that received a click. Clicks on overlay content stop
/// propagating before they reach a backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    PopupBackdrop,
    LightboxBackdrop,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Nutrition(NutritionPanel),
    Lightbox(LightboxView),
}

impl Overlay {
    pub fn open_nutrition(&mut self, card: &CardView) {
        *self = Overlay::Nutrition(NutritionPanel::from(&card.nutrition));
    }

    pub fn open_lightbox(&mut self, card: &CardView) {
        *self = Overlay::Lightbox(LightboxView {
            src: card.image.clone(),
            alt: card.name.clone(),
        });
    }

    pub fn close(&mut self) {
        *self = Overlay::Closed;
    }

    /// Close the active overlay if the click hit its backdrop.
    /// Returns whether anything was closed.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        let hit = matches!(
            (&*self, target),
            (Overlay::Nutrition(_), ClickTarget::PopupBackdrop)
                | (Overlay::Lightbox(_), ClickTarget::LightboxBackdrop)
        );
        if hit {
            self.close();
        }
        hit
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::Closed)
    }

    pub fn scroll_locked(&self) -> bool {
        matches!(self, Overlay::Lightbox(_))
    }

    pub fn nutrition(&self) -> Option<&NutritionPanel> {
        match self {
            Overlay::Nutrition(panel) => Some(panel),
            _ => None,
        }
    }

    pub fn lightbox(&self) -> Option<&LightboxView> {
        match self {
            Overlay::Lightbox(view) => Some(view),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DisplayValue, MenuItem};

    fn card() -> CardView {
        let item = MenuItem {
            name: "Bowl A".into(),
            image: "images/bowl-a.jpg".into(),
            nutrition: Nutrition {
                calories: 450u64.into(),
                carbs: 40u64.into(),
                protein: "10".into(),
                fats: DisplayValue::Number(serde_json::Number::from_f64(5.5).unwrap()),
            },
            ..Default::default()
        };
        CardView::from_item(0, &item)
    }

    #[test]
    fn test_nutrition_units() {
        let mut overlay = Overlay::default();
        overlay.open_nutrition(&card());

        let panel = overlay.nutrition().unwrap();
        assert_eq!(panel.calories, "450kcal");
        assert_eq!(panel.carbs, "40gm");
        assert_eq!(panel.protein, "10g");
        assert_eq!(panel.fats, "5.5g");
        assert!(!overlay.scroll_locked());
    }

    #[test]
    fn test_lightbox_locks_scroll_until_backdrop_click() {
        let mut overlay = Overlay::default();
        overlay.open_lightbox(&card());
        assert_eq!(overlay.lightbox().unwrap().src, "images/bowl-a.jpg");
        assert!(overlay.scroll_locked());

        assert!(!overlay.click(ClickTarget::PopupBackdrop));
        assert!(overlay.scroll_locked());

        assert!(overlay.click(ClickTarget::LightboxBackdrop));
        assert!(!overlay.scroll_locked());
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_popup_closes_on_backdrop_click() {
        let mut overlay = Overlay::default();
        overlay.open_nutrition(&card());
        assert!(!overlay.click(ClickTarget::LightboxBackdrop));
        assert!(overlay.is_open());

        assert!(overlay.click(ClickTarget::PopupBackdrop));
        assert_eq!(overlay, Overlay::Closed);
    }

    #[test]
    fn test_popup_and_lightbox_exclusive() {
        let mut overlay = Overlay::default();
        overlay.open_lightbox(&card());
        overlay.open_nutrition(&card());
        assert!(overlay.lightbox().is_none());
        assert!(!overlay.scroll_locked());

        overlay.open_lightbox(&card());
        assert!(overlay.nutrition().is_none());
        assert!(overlay.scroll_locked());
    }

    #[test]
    fn test_click_when_closed_is_noop() {
        let mut overlay = Overlay::default();
        assert!(!overlay.click(ClickTarget::PopupBackdrop));
        assert!(!overlay.click(ClickTarget::LightboxBackdrop));
    }
}
