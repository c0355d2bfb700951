use crate::tiles::LayerId;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 190);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn input_disabled() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn value() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn layer_active() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn layer_normal() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn selected_row() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    pub fn search_marker() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn click_marker() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Coastline colour standing in for each tile source.
    pub fn coastline(layer: LayerId) -> Color {
        match layer {
            LayerId::Street => Color::White,
            LayerId::Satellite => Color::Green,
            LayerId::Terrain => Color::Rgb(205, 170, 110),
        }
    }

    pub fn graticule() -> Color {
        Color::DarkGray
    }

    pub fn notice_border() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
