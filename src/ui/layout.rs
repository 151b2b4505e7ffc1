use ratatui::layout::Rect;

/// Split the screen into the body and a one-line footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = 1.min(area.height);
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    let footer = Rect {
        x: area.x,
        y: area.y + body.height,
        width: area.width,
        height: footer_height,
    };
    (body, footer)
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
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
