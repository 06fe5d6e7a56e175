//! Proportional scroll synchronization between editor and preview.
//!
//! The source pane's scroll fraction is applied to the other pane's
//! scrollable range. Scroll events are debounced through a single
//! [`Debouncer`] shared by both panes, so the last pane scrolled wins.

use std::cell::Cell;
use std::rc::Rc;

use crate::core::schedule::{Debouncer, Scheduler};
use crate::models::{Pane, ScrollMetrics};

/// An element whose vertical scroll position can be read and written.
pub trait ScrollPane {
    fn metrics(&self) -> ScrollMetrics;
    fn set_scroll_top(&self, top: f64);
}

/// Resolves the live element behind each [`Pane`].
///
/// Returns `None` while a pane is not mounted.
pub trait PaneSource {
    type Pane: ScrollPane;

    fn pane(&self, pane: Pane) -> Option<Self::Pane>;
}

/// Scroll offset for `target` that mirrors `source`'s scroll fraction.
pub fn target_scroll_top(source: ScrollMetrics, target: ScrollMetrics) -> f64 {
    source.fraction() * target.max_scroll()
}

/// Offsets closer than this are treated as the same position.
const SAME_POSITION_PX: f64 = 1.0;

/// Copy `source`'s scroll fraction onto the other pane, if both are mounted.
///
/// Returns the offset written, or `None` when a pane is missing or the
/// target is already in place.
pub fn sync_panes<P: PaneSource>(panes: &P, source: Pane) -> Option<f64> {
    let from = panes.pane(source)?;
    let to = panes.pane(source.other())?;
    let target = to.metrics();
    let top = target_scroll_top(from.metrics(), target);
    if (target.scroll_top - top).abs() < SAME_POSITION_PX {
        return None;
    }
    to.set_scroll_top(top);
    Some(top)
}

/// Last offset written to each pane by a sync, awaiting its scroll event.
#[derive(Default)]
struct WrittenTops {
    editor: Cell<Option<f64>>,
    preview: Cell<Option<f64>>,
}

impl WrittenTops {
    fn slot(&self, pane: Pane) -> &Cell<Option<f64>> {
        match pane {
            Pane::Editor => &self.editor,
            Pane::Preview => &self.preview,
        }
    }
}

/// Debounced scroll mirroring for a pair of panes.
///
/// Writing a pane's `scrollTop` makes the browser fire a scroll event on
/// that pane. That event is recognised by the offset it lands on and
/// dropped, so a sync never bounces back onto the pane the user scrolled.
pub struct ScrollSync<P, S> {
    panes: Rc<P>,
    written: Rc<WrittenTops>,
    debouncer: Debouncer<S>,
}

impl<P, S> ScrollSync<P, S>
where
    P: PaneSource + 'static,
    S: Scheduler,
{
    pub fn new(panes: P, scheduler: S, debounce_ms: u32) -> Self {
        Self {
            panes: Rc::new(panes),
            written: Rc::new(WrittenTops::default()),
            debouncer: Debouncer::new(scheduler, debounce_ms),
        }
    }

    /// Scroll handler for `source`; the sync runs after the debounce window.
    pub fn on_scroll(&self, source: Pane) {
        if self.is_echo(source) {
            return;
        }

        let panes = self.panes.clone();
        let written = self.written.clone();
        self.debouncer.call(move || {
            let target = source.other();
            written.slot(target).set(sync_panes(&*panes, source));
        });
    }

    /// Whether `pane` is sitting where the last sync put it.
    ///
    /// Consumes the recorded offset either way; only the first event after
    /// a write can be its echo.
    fn is_echo(&self, pane: Pane) -> bool {
        let Some(written) = self.written.slot(pane).take() else {
            return false;
        };
        self.panes
            .pane(pane)
            .is_some_and(|el| (el.metrics().scroll_top - written).abs() < SAME_POSITION_PX)
    }
}

// =============================================================================
// Browser Panes
// =============================================================================

impl ScrollPane for web_sys::Element {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(
            f64::from(self.scroll_top()),
            f64::from(self.scroll_height()),
            f64::from(self.client_height()),
        )
    }

    fn set_scroll_top(&self, top: f64) {
        web_sys::Element::set_scroll_top(self, top);
    }
}
