//! Interaction Binder
//!
//! Per-card triggers for the nutrition popup and the image lightbox. Bindings
//! are stamped with the generation they were made for and are rebuilt on every
//! render.

use crate::error::MenuError;
use crate::render::{Generation, RenderGeneration};
use crate::state::MenuCommand;

/// Which shared widgets are mounted on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetDirectory {
    pub nutrition_popup: bool,
    pub image_viewer: bool,
}

impl Default for WidgetDirectory {
    fn default() -> Self {
        Self {
            nutrition_popup: true,
            image_viewer: true,
        }
    }
}

/// Reference to one card of one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardHandle {
    pub generation: Generation,
    pub index: usize,
}

/// Commands a card emits; `None` when the target widget is missing
#[derive(Debug, Clone, PartialEq)]
pub struct CardBinding {
    pub handle: CardHandle,
    pub on_nutrition: Option<MenuCommand>,
    pub on_image: Option<MenuCommand>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bindings {
    generation: Generation,
    cards: Vec<CardBinding>,
    skipped: Vec<MenuError>,
}

impl Bindings {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn card(&self, index: usize) -> Option<&CardBinding> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[CardBinding] {
        &self.cards
    }

    /// Features left unbound because their widget is absent
    pub fn skipped(&self) -> &[MenuError] {
        &self.skipped
    }
}

/// Bind every card of `generation`. Replaces, never merges with, earlier bindings.
pub fn bind(generation: &RenderGeneration, widgets: &WidgetDirectory) -> Bindings {
    let mut skipped = Vec::new();
    if !widgets.nutrition_popup {
        skipped.push(MenuError::MissingElement("nutrition popup"));
    }
    if !widgets.image_viewer {
        skipped.push(MenuError::MissingElement("image lightbox"));
    }

    let cards = generation
        .cards()
        .iter()
        .map(|card| {
            let handle = CardHandle {
                generation: generation.id(),
                index: card.index,
            };
            CardBinding {
                handle,
                on_nutrition: widgets
                    .nutrition_popup
                    .then_some(MenuCommand::ShowNutrition(handle)),
                on_image: widgets.image_viewer.then_some(MenuCommand::ZoomImage(handle)),
            }
        })
        .collect();

    Bindings {
        generation: generation.id(),
        cards,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;
    use crate::render::MenuRenderer;

    fn generation() -> RenderGeneration {
        let items = parse_catalog(r#"[{"name": "A"}, {"name": "B"}]"#).unwrap();
        MenuRenderer::new().render(&items)
    }

    #[test]
    fn test_bind_stamps_generation() {
        let generation = generation();
        let bindings = bind(&generation, &WidgetDirectory::default());

        assert_eq!(bindings.generation(), generation.id());
        assert_eq!(bindings.cards().len(), 2);
        assert!(bindings.skipped().is_empty());

        let second = bindings.card(1).unwrap();
        assert_eq!(second.handle, CardHandle { generation: generation.id(), index: 1 });
        assert_eq!(second.on_nutrition, Some(MenuCommand::ShowNutrition(second.handle)));
        assert_eq!(second.on_image, Some(MenuCommand::ZoomImage(second.handle)));
    }

    #[test]
    fn test_missing_widgets_skip_feature() {
        let widgets = WidgetDirectory {
            nutrition_popup: false,
            image_viewer: true,
        };
        let bindings = bind(&generation(), &widgets);

        assert!(bindings.cards().iter().all(|b| b.on_nutrition.is_none()));
        assert!(bindings.cards().iter().all(|b| b.on_image.is_some()));
        assert_eq!(bindings.skipped(), &[MenuError::MissingElement("nutrition popup")]);
    }
}
