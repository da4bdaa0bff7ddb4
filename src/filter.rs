//! Category Filter
//!
//! Active filter token and the visibility rule applied to the current
//! generation of cards.

use crate::config::FILTER_ALL;
use crate::render::{CardView, RenderGeneration};

/// One selectable filter button
#[derive(Debug, Clone, PartialEq)]
pub struct FilterControl {
    /// Category token carried by the control (`data-filter`)
    pub token: String,
    pub label: String,
}

impl FilterControl {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            label: title_case(token),
        }
    }
}

/// Single active filter token, `"all"` until something is selected
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    active: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active: FILTER_ALL.to_string(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Select a token; stored lower-cased like card tokens
    pub fn select(&mut self, token: &str) {
        self.active = token.to_lowercase();
    }

    pub fn is_all(&self) -> bool {
        self.active == FILTER_ALL
    }

    /// Whether a control is the selected one
    pub fn is_active(&self, control: &FilterControl) -> bool {
        control.token.to_lowercase() == self.active
    }

    pub fn is_visible(&self, card: &CardView) -> bool {
        self.is_all() || card.has_token(&self.active)
    }

    pub fn visible_count(&self, generation: &RenderGeneration) -> usize {
        generation.cards().iter().filter(|card| self.is_visible(card)).count()
    }
}

/// Filter controls for a generation: "all" first, then each distinct
/// token in first-seen order.
pub fn controls_for(generation: &RenderGeneration) -> Vec<FilterControl> {
    let mut controls = vec![FilterControl::new(FILTER_ALL)];
    for card in generation.cards() {
        for token in &card.tokens {
            if !controls.iter().any(|c| c.token == *token) {
                controls.push(FilterControl::new(token));
            }
        }
    }
    controls
}

fn title_case(token: &str) -> String {
    token
        .split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;
    use crate::render::MenuRenderer;

    fn bowl_generation() -> RenderGeneration {
        let items = parse_catalog(
            r#"[{"name": "Bowl A", "category": ["vegan", "bowl"],
                 "nutrition": {"calories": 300, "carbs": 40, "protein": 10, "fats": 5},
                 "price": "$9"}]"#,
        )
        .unwrap();
        MenuRenderer::new().render(&items)
    }

    fn mixed_generation() -> RenderGeneration {
        let items = parse_catalog(
            r#"[
                {"name": "Bowl A", "category": ["Vegan", "bowl"]},
                {"name": "Cake", "category": "Dessert"},
                {"name": "Plate", "category": ["dinner", "high-protein"]},
                {"name": "Unlabelled"}
            ]"#,
        )
        .unwrap();
        MenuRenderer::new().render(&items)
    }

    #[test]
    fn test_bowl_scenario() {
        let generation = bowl_generation();
        let bowl = generation.card(0).unwrap();
        let mut filter = FilterState::new();

        filter.select("bowl");
        assert!(filter.is_visible(bowl));

        filter.select("dessert");
        assert!(!filter.is_visible(bowl));

        filter.select("all");
        assert!(filter.is_visible(bowl));
    }

    #[test]
    fn test_all_matches_any_case() {
        let generation = mixed_generation();
        let controls = controls_for(&generation);
        let mut filter = FilterState::new();

        filter.select("ALL");
        assert!(filter.is_all());
        assert_eq!(filter.visible_count(&generation), generation.len());
        let active: Vec<_> = controls.iter().filter(|c| filter.is_active(c)).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].token, "all");
    }

    #[test]
    fn test_all_shows_everything() {
        let generation = mixed_generation();
        let filter = FilterState::new();
        assert_eq!(filter.active(), "all");
        assert_eq!(filter.visible_count(&generation), generation.len());
    }

    #[test]
    fn test_visible_iff_token_member() {
        let generation = mixed_generation();
        let mut filter = FilterState::new();

        for token in ["vegan", "VEGAN", "Dessert", "dinner", "high-protein", "missing"] {
            filter.select(token);
            for card in generation.cards() {
                let expected = card
                    .category_tag
                    .split_whitespace()
                    .any(|t| t.to_lowercase() == token.to_lowercase());
                assert_eq!(filter.is_visible(card), expected, "token {} card {}", token, card.name);
            }
        }
    }

    #[test]
    fn test_unlabelled_only_matches_all() {
        let generation = mixed_generation();
        let unlabelled = generation.card(3).unwrap();
        let mut filter = FilterState::new();
        assert!(filter.is_visible(unlabelled));

        for control in controls_for(&generation).iter().skip(1) {
            filter.select(&control.token);
            assert!(!filter.is_visible(unlabelled));
        }
    }

    #[test]
    fn test_controls_dedup_in_first_seen_order() {
        let items = parse_catalog(
            r#"[
                {"category": ["Vegan", "bowl"]},
                {"category": "vegan"},
                {"category": ["BOWL", "dessert"]}
            ]"#,
        )
        .unwrap();
        let generation = MenuRenderer::new().render(&items);
        let tokens: Vec<_> = controls_for(&generation).into_iter().map(|c| c.token).collect();
        assert_eq!(tokens, vec!["all", "vegan", "bowl", "dessert"]);
    }

    #[test]
    fn test_exactly_one_control_active() {
        let generation = mixed_generation();
        let controls = controls_for(&generation);
        let mut filter = FilterState::new();

        let active_count = |filter: &FilterState| controls.iter().filter(|c| filter.is_active(c)).count();
        assert_eq!(active_count(&filter), 1);

        for control in &controls {
            filter.select(&control.token);
            assert_eq!(active_count(&filter), 1);
        }
    }

    #[test]
    fn test_control_labels() {
        assert_eq!(FilterControl::new("all").label, "All");
        assert_eq!(FilterControl::new("high-protein").label, "High Protein");
    }
}
