//! Scroll geometry shared by the editor and preview panes.

/// One of the two synchronized panes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pane {
    /// Markdown textarea
    Editor,
    /// Rendered HTML preview
    Preview,
}

impl Pane {
    /// The pane that mirrors this one.
    pub fn other(self) -> Self {
        match self {
            Self::Editor => Self::Preview,
            Self::Preview => Self::Editor,
        }
    }
}

/// Snapshot of an element's vertical scroll state, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Largest reachable `scroll_top`; zero when the content fits.
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Scroll offset normalized to `[0, 1]`.
    ///
    /// Non-overflowing content has no scrollable range and reports `0.0`
    /// rather than dividing by zero.
    pub fn fraction(&self) -> f64 {
        let range = self.max_scroll();
        if range <= 0.0 || !self.scroll_top.is_finite() {
            return 0.0;
        }
        (self.scroll_top / range).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_pane() {
        assert_eq!(Pane::Editor.other(), Pane::Preview);
        assert_eq!(Pane::Preview.other(), Pane::Editor);
    }

    #[test]
    fn test_fraction_without_overflow_is_zero() {
        let fits = ScrollMetrics::new(0.0, 400.0, 400.0);
        assert_eq!(fits.max_scroll(), 0.0);
        assert_eq!(fits.fraction(), 0.0);

        // Content shorter than the viewport
        assert_eq!(ScrollMetrics::new(0.0, 100.0, 400.0).fraction(), 0.0);
    }

    #[test]
    fn test_fraction_is_clamped() {
        assert_eq!(ScrollMetrics::new(300.0, 1000.0, 400.0).fraction(), 0.5);
        // Overscroll (elastic scrolling) stays within range
        assert_eq!(ScrollMetrics::new(700.0, 1000.0, 400.0).fraction(), 1.0);
        assert_eq!(ScrollMetrics::new(-20.0, 1000.0, 400.0).fraction(), 0.0);
    }
}
