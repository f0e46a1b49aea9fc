//! Scroll observation and section activation.
//!
//! A section becomes active when the viewport midline (scroll offset plus
//! half the viewport height) sits inside its span, in either scroll
//! direction. The coordinator is the only writer of [`AppState`]'s section:
//! on a genuine change it updates the state, re-derives the scene mode, and
//! pushes it into the scene. Re-reporting the active section is a no-op, so
//! sub-pixel scroll jitter never restarts the particle field.

use crate::scene::SceneRenderer;
use crate::sections::SECTION_IDS;
use crate::state::AppState;

/// Vertical span of one section in page coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpan {
    pub top: f32,
    pub height: f32,
}

impl SectionSpan {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Vertical layout of every section on the page, in track order.
#[derive(Debug, Clone)]
pub struct PageLayout {
    spans: Vec<SectionSpan>,
}

impl PageLayout {
    /// Stack every section at a uniform height, the common page shape.
    pub fn uniform(section_height: f32) -> Self {
        let spans = (0..SECTION_IDS.len())
            .map(|i| SectionSpan {
                top: i as f32 * section_height,
                height: section_height,
            })
            .collect();
        Self { spans }
    }

    /// Build from explicit spans (sections of unequal height).
    pub fn from_spans(spans: Vec<SectionSpan>) -> Self {
        Self { spans }
    }

    pub fn total_height(&self) -> f32 {
        self.spans.last().map(|s| s.bottom()).unwrap_or(0.0)
    }

    /// Ordinal of the section containing a page-space y coordinate.
    ///
    /// Positions above the first span clamp to 0, below the last to the final
    /// ordinal; the backdrop always has an active section.
    pub fn section_at(&self, y: f32) -> usize {
        for (ordinal, span) in self.spans.iter().enumerate() {
            if y < span.bottom() {
                return ordinal;
            }
        }
        self.spans.len().saturating_sub(1)
    }
}

/// Maps scroll position to the active section and fans out changes.
pub struct ScrollCoordinator {
    layout: PageLayout,
    current: usize,
}

impl ScrollCoordinator {
    pub fn new(layout: PageLayout) -> Self {
        Self { layout, current: 0 }
    }

    /// Handle a scroll position report.
    ///
    /// Returns `true` when the active section changed. The same-section case
    /// returns early without touching state or scene; the same-mode case is
    /// additionally absorbed inside [`SceneRenderer::set_mode`].
    pub fn on_scroll(
        &mut self,
        scroll_y: f32,
        viewport_height: f32,
        state: &mut AppState,
        scene: &mut SceneRenderer,
    ) -> bool {
        state.set_scroll_progress(self.progress(scroll_y, viewport_height));

        let midline = scroll_y + viewport_height * 0.5;
        let ordinal = self.layout.section_at(midline);
        if ordinal == self.current {
            return false;
        }

        self.current = ordinal;
        state.update_section(ordinal);
        scene.set_mode(state.scene_mode());
        true
    }

    /// Continuous scroll progress in [0, 1] over the scrollable range.
    pub fn progress(&self, scroll_y: f32, viewport_height: f32) -> f32 {
        let scrollable = self.layout.total_height() - viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (scroll_y / scrollable).clamp(0.0, 1.0)
    }

    pub fn current_ordinal(&self) -> usize {
        self.current
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }
}
