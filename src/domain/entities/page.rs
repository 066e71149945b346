//! Page geometry and the navigation/header state derived from scrolling.
//!
//! All positions are document pixels, measured from the top of the page.

use std::str::FromStr;

/// Id of the first section, forced active near the top of the page.
pub const FIRST_SECTION: &str = "home";
/// Id of the last section, forced active near the bottom of the page.
pub const LAST_SECTION: &str = "contact";

/// Header height assumed when the page does not report one.
pub const DEFAULT_HEADER_HEIGHT: f64 = 70.0;
/// Extra gap kept between the fixed header and a scrolled-to section.
pub const SCROLL_MARGIN: f64 = 20.0;
/// Look-ahead below the header used by scroll-spy.
pub const SPY_OFFSET: f64 = 100.0;
/// Distance from either end of the page that forces the first/last section.
pub const EDGE_THRESHOLD: f64 = 100.0;
/// Scroll offset past which the header switches to its condensed look.
pub const HEADER_CONDENSE_AFTER: f64 = 50.0;
/// Scroll offset past which scrolling down hides the header.
pub const HEADER_HIDE_AFTER: f64 = 200.0;
/// Viewport width above which the mobile menu is always closed.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// A `<section id=...>` with its vertical extent.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.bottom()
    }
}

/// Parses `id:top:height`, e.g. `about:800:650`.
impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (Some(id), Some(top), Some(height), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(format!("expected 'id:top:height', got '{s}'"));
        };

        if id.is_empty() {
            return Err(format!("section id is empty in '{s}'"));
        }

        let top: f64 = top
            .parse()
            .map_err(|_| format!("invalid section top '{top}'"))?;
        let height: f64 = height
            .parse()
            .map_err(|_| format!("invalid section height '{height}'"))?;

        if height < 0.0 {
            return Err(format!("section height must not be negative, got {height}"));
        }

        Ok(Section::new(id, top, height))
    }
}

/// Geometry of the page as seen by the scroll handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub header_height: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    pub sections: Vec<Section>,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            header_height: DEFAULT_HEADER_HEIGHT,
            viewport_height: 0.0,
            document_height: 0.0,
            sections: Vec::new(),
        }
    }
}

impl PageLayout {
    /// Builds a layout whose document ends where the last section ends.
    pub fn new(header_height: f64, viewport_height: f64, sections: Vec<Section>) -> Self {
        let document_height = sections.iter().map(Section::bottom).fold(0.0, f64::max);

        Self {
            header_height,
            viewport_height,
            document_height,
            sections,
        }
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Scroll offset that brings section `id` just below the fixed header.
    ///
    /// Returns `None` if the page has no such section.
    pub fn scroll_target(&self, id: &str) -> Option<f64> {
        self.section(id)
            .map(|s| (s.top - self.header_height - SCROLL_MARGIN).max(0.0))
    }

    /// Id of the section the navigation should highlight at `scroll_top`.
    ///
    /// The last section containing `scroll_top + header + 100` wins. Near the
    /// top of the page [`FIRST_SECTION`] is forced, near the bottom
    /// [`LAST_SECTION`].
    pub fn active_section(&self, scroll_top: f64) -> Option<&str> {
        if scroll_top < EDGE_THRESHOLD {
            return Some(FIRST_SECTION);
        }
        if self.viewport_height + scroll_top >= self.document_height - EDGE_THRESHOLD {
            return Some(LAST_SECTION);
        }

        let position = scroll_top + self.header_height + SPY_OFFSET;
        self.sections
            .iter()
            .rev()
            .find(|s| s.contains(position))
            .map(|s| s.id.as_str())
    }
}

/// Visual state of the fixed header after a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    /// Denser background once the page has scrolled a little.
    pub condensed: bool,
    /// Slid out of view while scrolling down.
    pub hidden: bool,
}

impl HeaderState {
    /// Derives the header state from the new and previous scroll offsets.
    pub fn from_scroll(scroll_top: f64, last_scroll_top: f64) -> Self {
        Self {
            condensed: scroll_top > HEADER_CONDENSE_AFTER,
            hidden: scroll_top > last_scroll_top && scroll_top > HEADER_HIDE_AFTER,
        }
    }
}

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Closes the menu. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    /// Body scrolling is locked while the menu covers the page.
    pub fn body_scroll_locked(&self) -> bool {
        self.menu_open
    }
}
