use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields borrowed from `App`).
/// - They are rebuilt every frame and dropped after rendering.
/// - They render to a `Frame` within a given `Rect`.
///
/// Nothing a component computes while rendering (widths, wrapping, centering)
/// is written back to `App`; the next `update()` never sees layout.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
