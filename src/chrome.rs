//! Page Chrome
//!
//! Side panels, the dimming overlay behind them, and the navbar that hides
//! while scrolling down.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Menu,
    Cart,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Chrome {
    open: Option<Panel>,
    navbar_hidden: bool,
    last_scroll_top: f64,
}

impl Chrome {
    /// Open `panel` (closing any other), or close it if already open
    pub fn toggle(&mut self, panel: Panel) {
        self.open = if self.open == Some(panel) { None } else { Some(panel) };
    }

    pub fn close(&mut self, panel: Panel) {
        if self.open == Some(panel) {
            self.open = None;
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.open == Some(panel)
    }

    /// The dimming overlay shows while any panel is open
    pub fn overlay_active(&self) -> bool {
        self.open.is_some()
    }

    /// Track a scroll position; down hides the navbar, up shows it
    pub fn scrolled_to(&mut self, scroll_top: f64) {
        self.navbar_hidden = scroll_top > self.last_scroll_top;
        self.last_scroll_top = scroll_top.max(0.0);
    }

    pub fn navbar_hidden(&self) -> bool {
        self.navbar_hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panels_exclusive() {
        let mut chrome = Chrome::default();
        chrome.toggle(Panel::Menu);
        assert!(chrome.is_open(Panel::Menu));
        assert!(chrome.overlay_active());

        chrome.toggle(Panel::Search);
        assert!(chrome.is_open(Panel::Search));
        assert!(!chrome.is_open(Panel::Menu));

        chrome.toggle(Panel::Search);
        assert!(!chrome.overlay_active());
    }

    #[test]
    fn test_close_only_named_panel() {
        let mut chrome = Chrome::default();
        chrome.toggle(Panel::Cart);
        chrome.close(Panel::Search);
        assert!(chrome.is_open(Panel::Cart));

        chrome.close_all();
        assert!(!chrome.overlay_active());
    }

    #[test]
    fn test_navbar_hides_on_scroll_down() {
        let mut chrome = Chrome::default();
        chrome.scrolled_to(120.0);
        assert!(chrome.navbar_hidden());

        chrome.scrolled_to(80.0);
        assert!(!chrome.navbar_hidden());

        // Overscroll bounce is clamped at the top
        chrome.scrolled_to(-30.0);
        assert!(!chrome.navbar_hidden());
        chrome.scrolled_to(1.0);
        assert!(chrome.navbar_hidden());
    }
}
