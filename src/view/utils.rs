//! Utility functions for rendering UI components

use ratatui::layout::Rect;

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Mojito", 10), "Mojito");
        assert_eq!(truncate_string("Long Island Iced Tea", 10), "Long Is...");
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect { x: 0, y: 0, width: 40, height: 10 };
        assert_eq!(centered_rect(area, 20, 4), Rect { x: 10, y: 3, width: 20, height: 4 });
        assert_eq!(centered_rect(area, 80, 20), area);
    }
}
