//! Menu State
//!
//! The menu pipeline as a command dispatcher: the current render generation,
//! its bindings and filter controls, the filter selection and the shared
//! overlay. Independent of the view layer.

use crate::binder::{self, Bindings, CardHandle, WidgetDirectory};
use crate::error::{MenuError, MenuResult};
use crate::filter::{self, FilterControl, FilterState};
use crate::models::MenuItem;
use crate::overlay::{ClickTarget, Overlay};
use crate::render::{Generation, MenuRenderer, RenderGeneration};

/// A UI action on the menu
#[derive(Debug, Clone, PartialEq)]
pub enum MenuCommand {
    ShowNutrition(CardHandle),
    ZoomImage(CardHandle),
    SelectFilter(String),
    CloseOverlay,
    Click(ClickTarget),
}

/// Result of dispatching a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied,
    /// Valid command with nothing to do
    Ignored,
    /// Handle from a generation that has been replaced
    Stale { handle: CardHandle, current: Generation },
    /// Handle points past the end of the current generation
    NoSuchCard(CardHandle),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Ready,
    Failed(MenuError),
}

#[derive(Debug, Clone, Default)]
pub struct MenuState {
    renderer: MenuRenderer,
    generation: RenderGeneration,
    bindings: Bindings,
    controls: Vec<FilterControl>,
    filter: FilterState,
    overlay: Overlay,
    widgets: WidgetDirectory,
    load: LoadState,
}

impl MenuState {
    pub fn new(widgets: WidgetDirectory) -> Self {
        Self {
            widgets,
            controls: filter::controls_for(&RenderGeneration::empty()),
            ..Default::default()
        }
    }

    /// Render a catalog as a new generation and rebind everything to it.
    ///
    /// The active filter survives if the new generation still offers it,
    /// otherwise it falls back to "all". Any open overlay is closed.
    pub fn install(&mut self, items: &[MenuItem]) -> Generation {
        let generation = self.renderer.render(items);
        self.replace(generation);
        self.load = LoadState::Ready;
        self.generation.id()
    }

    /// Install a fetched catalog, or degrade to an empty menu if the fetch
    /// failed. The error is handed back for reporting.
    pub fn load(&mut self, loaded: MenuResult<Vec<MenuItem>>) -> MenuResult<Generation> {
        match loaded {
            Ok(items) => Ok(self.install(&items)),
            Err(err) => {
                self.fail(err.clone());
                Err(err)
            }
        }
    }

    /// Degrade to an empty menu after a failed load
    pub fn fail(&mut self, err: MenuError) {
        self.replace(RenderGeneration::empty());
        self.load = LoadState::Failed(err);
    }

    fn replace(&mut self, generation: RenderGeneration) {
        self.bindings = binder::bind(&generation, &self.widgets);
        self.controls = filter::controls_for(&generation);
        if !self.controls.iter().any(|c| self.filter.is_active(c)) {
            self.filter = FilterState::default();
        }
        self.overlay.close();
        self.generation = generation;
    }

    pub fn dispatch(&mut self, command: MenuCommand) -> Outcome {
        match command {
            MenuCommand::ShowNutrition(handle) => {
                if !self.widgets.nutrition_popup {
                    return Outcome::Ignored;
                }
                match self.resolve(handle) {
                    Ok(index) => {
                        let card = &self.generation.cards()[index];
                        self.overlay.open_nutrition(card);
                        Outcome::Applied
                    }
                    Err(outcome) => outcome,
                }
            }
            MenuCommand::ZoomImage(handle) => {
                if !self.widgets.image_viewer {
                    return Outcome::Ignored;
                }
                match self.resolve(handle) {
                    Ok(index) => {
                        let card = &self.generation.cards()[index];
                        self.overlay.open_lightbox(card);
                        Outcome::Applied
                    }
                    Err(outcome) => outcome,
                }
            }
            MenuCommand::SelectFilter(token) => {
                let token = token.to_lowercase();
                if !self.controls.iter().any(|c| c.token == token) {
                    return Outcome::Ignored;
                }
                self.filter.select(&token);
                Outcome::Applied
            }
            MenuCommand::CloseOverlay => {
                if self.overlay.is_open() {
                    self.overlay.close();
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
            MenuCommand::Click(target) => {
                if self.overlay.click(target) {
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
        }
    }

    fn resolve(&self, handle: CardHandle) -> Result<usize, Outcome> {
        if handle.generation != self.generation.id() {
            return Err(Outcome::Stale {
                handle,
                current: self.generation.id(),
            });
        }
        if handle.index >= self.generation.len() {
            return Err(Outcome::NoSuchCard(handle));
        }
        Ok(handle.index)
    }

    pub fn generation(&self) -> &RenderGeneration {
        &self.generation
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.generation
            .card(index)
            .map(|card| self.filter.is_visible(card))
            .unwrap_or(false)
    }
}
