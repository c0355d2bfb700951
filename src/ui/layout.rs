use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

pub struct AppLayout {
    pub search_box: Rect,
    pub map: Rect,
    pub controls: Rect,
    pub info_panel: Rect,
    pub marker_list: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: search | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(8),    // Map + side panel
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let search_box = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    // Horizontal: map | side panel
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(30),    // Map
            Constraint::Length(34), // Side panel
        ])
        .split(content);

    let map = h_chunks[0];
    let side_panel = h_chunks[1];

    // Side panel: layer controls | info | markers
    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // 3 layers, gap, center, borders
            Constraint::Length(6), // Info panel
            Constraint::Min(3),    // Marker list
        ])
        .split(side_panel);

    AppLayout {
        search_box,
        map,
        controls: side_chunks[0],
        info_panel: side_chunks[1],
        marker_list: side_chunks[2],
        status_bar,
    }
}

/// Area inside a fully bordered block.
pub fn inner(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_do_not_overlap_map() {
        let l = compute_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(l.search_box.height, 3);
        assert_eq!(l.status_bar.height, 1);
        assert_eq!(l.map.y, 3);
        assert_eq!(l.controls.x, l.map.right());
        assert!(!l.map.intersects(l.controls));
        assert!(!l.map.intersects(l.search_box));
        assert_eq!(inner(l.map).width, l.map.width - 2);
    }
}
