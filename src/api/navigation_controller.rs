use tracing::trace;

use crate::core::{ScrollOffset, Viewport};
use crate::interaction::{KeyEvent, NavigationKey};

use super::GraphView;

impl GraphView {
    /// Moves the visible window by a graph-space delta.
    ///
    /// Cell size and margins are never changed by scrolling.
    pub fn scroll(&mut self, dx: f64, dy: f64) {
        self.scroll_offset =
            ScrollOffset::new(self.scroll_offset.x + dx, self.scroll_offset.y + dy);
        self.needs_redraw = true;
        trace!(
            x = self.scroll_offset.x,
            y = self.scroll_offset.y,
            "scroll graph"
        );
    }

    /// Handles a key event and reports whether it was consumed.
    ///
    /// Arrow keys move one cell, or `fast_multiplier` cells with the fast
    /// modifier. Page keys move by the drawable height of `viewport`.
    /// Non-navigation keys are left to the host.
    pub fn process_key(&mut self, event: KeyEvent, viewport: Viewport) -> bool {
        let Some(key) = NavigationKey::from_key_code(event.code) else {
            return false;
        };

        let page_rows = f64::from(self.draw_bounds(viewport).height.max(1));
        let (cols, rows) = self
            .scroll_behavior
            .cell_delta(key, event.modifiers, page_rows);
        self.scroll(cols * self.cell_size.x, rows * self.cell_size.y);
        true
    }
}
