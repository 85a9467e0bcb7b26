use ratatui::layout::Rect;

const HEADER_HEIGHT: u16 = 3;
const NAVIGATION_HEIGHT: u16 = 3;

/// Split the terminal into header, screen body and navigation bar.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let nav_height = NAVIGATION_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let navigation = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(nav_height),
        width: area.width,
        height: nav_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + nav_height),
    };
    (header, body, navigation)
}

/// Rect of at most `width` x `height` centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area_without_overlap() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, nav) = layout_regions(area);
        assert_eq!(header.height + body.height + nav.height, 24);
        assert_eq!(body.y, header.bottom());
        assert_eq!(nav.y, body.bottom());
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let (header, body, nav) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(nav.height, 0);
    }

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(2, 2, 20, 10);
        let rect = centered_rect_by_size(area, 40, 4);
        assert_eq!(rect, Rect::new(2, 5, 20, 4));
    }
}
