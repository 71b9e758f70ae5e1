//! Layout utilities shared by the UI components.

use ratatui::layout::{Constraint, Layout, Rect};

/// Creates a centered rectangular area within a given rectangle.
///
/// The result is `percent_x` wide and `percent_y` tall relative to `r`.
/// Commonly used to place modal dialogs and popup windows.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(r);
    let [_, area, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(vertical);
    area
}

/// Centered rectangle sized by percentage of `r`, with width and height
/// clamped between the dimensions of `min` and `max`, and never larger
/// than `r` itself.
pub fn centered_min_max(percent_x: u16, percent_y: u16, min: Rect, max: Rect, r: Rect) -> Rect {
    let width = ((r.width as u32 * percent_x as u32 / 100) as u16)
        .max(min.width)
        .min(max.width)
        .min(r.width);
    let height = ((r.height as u32 * percent_y as u32 / 100) as u16)
        .max(min.height)
        .min(max.height)
        .min(r.height);
    let x = r.x + (r.width - width) / 2;
    let y = r.y + (r.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_spans_the_requested_share() {
        let parent = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(80, 50, parent), Rect::new(10, 10, 80, 20));
    }

    #[test]
    fn centered_min_max_respects_bounds() {
        let min = Rect::new(0, 0, 80, 10);
        let max = Rect::new(0, 0, 160, 16);

        let screen = Rect::new(0, 0, 200, 50);
        let area = centered_min_max(45, 35, min, max, screen);
        assert_eq!(area, Rect::new(55, 17, 90, 16));

        // A terminal smaller than the minimum wins over the clamp.
        let tiny = Rect::new(0, 0, 60, 8);
        let area = centered_min_max(45, 35, min, max, tiny);
        assert_eq!(area, Rect::new(0, 0, 60, 8));
    }
}
