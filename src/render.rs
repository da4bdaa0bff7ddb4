//! Menu Renderer
//!
//! Turns catalog records into card view-models. Every render produces a new
//! generation; cards from older generations must not be acted on.

use std::sync::Arc;

use crate::models::{MenuItem, Nutrition};

/// Render epoch. `0` is the empty menu shown before the first render.
pub type Generation = u64;

/// View-model for one rendered menu card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Position in the catalog
    pub index: usize,
    pub name: String,
    pub description: String,
    pub image: String,
    pub rating: String,
    pub price: String,
    /// Only set when the item carries a non-empty original price
    pub original_price: Option<String>,
    /// Space-joined category labels, case preserved (`data-category`)
    pub category_tag: String,
    /// Lower-cased, whitespace-split category tokens
    pub tokens: Vec<String>,
    pub nutrition: Nutrition,
}

impl CardView {
    pub fn from_item(index: usize, item: &MenuItem) -> Self {
        let category_tag = item.category.as_ref().map(|c| c.tag()).unwrap_or_default();
        let tokens = normalize_tokens(&category_tag);

        Self {
            index,
            name: item.name.clone(),
            description: item.description.clone(),
            image: item.image.clone(),
            rating: item.rating.to_string(),
            price: item.price.clone(),
            original_price: item.original_price.clone().filter(|p| !p.is_empty()),
            category_tag,
            tokens,
            nutrition: item.nutrition.clone(),
        }
    }

    /// Case-insensitive membership test against the card's tokens
    pub fn has_token(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.tokens.iter().any(|t| *t == token)
    }

    pub fn has_discount(&self) -> bool {
        self.original_price.is_some()
    }
}

/// Split a category tag into lower-cased tokens
pub fn normalize_tokens(tag: &str) -> Vec<String> {
    tag.split_whitespace().map(|t| t.to_lowercase()).collect()
}

/// Immutable card collection produced by one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderGeneration {
    id: Generation,
    cards: Arc<[CardView]>,
}

impl RenderGeneration {
    pub fn empty() -> Self {
        Self {
            id: 0,
            cards: Arc::from(Vec::new()),
        }
    }

    pub fn id(&self) -> Generation {
        self.id
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&CardView> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for RenderGeneration {
    fn default() -> Self {
        Self::empty()
    }
}

/// Issues render generations in increasing order
#[derive(Debug, Clone, Default)]
pub struct MenuRenderer {
    last: Generation,
}

impl MenuRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a new generation in catalog order
    pub fn render(&mut self, items: &[MenuItem]) -> RenderGeneration {
        self.last += 1;
        let cards: Vec<CardView> = items
            .iter()
            .enumerate()
            .map(|(index, item)| CardView::from_item(index, item))
            .collect();

        RenderGeneration {
            id: self.last,
            cards: cards.into(),
        }
    }
}
