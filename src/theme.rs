use crate::heatmap::Intensity;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const STATUS_STYLE: Style = Style::new().fg(Color::Gray).bg(Color::Black);

pub(crate) const ZERO_STYLE: Style = Style::new().fg(Color::DarkGray).bg(Color::Black);

// Green ramp from the 256-color cube; brighter means closer to the
// month's peak.
pub(crate) const LOW_STYLE: Style = Style::new().fg(Color::Gray).bg(Color::Indexed(22));

pub(crate) const MEDIUM_STYLE: Style = Style::new().fg(Color::Gray).bg(Color::Indexed(29));

pub(crate) const HIGH_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Indexed(35));

pub(crate) const fn intensity_style(tier: Intensity) -> Style {
    match tier {
        Intensity::Zero => ZERO_STYLE,
        Intensity::Low => LOW_STYLE,
        Intensity::Medium => MEDIUM_STYLE,
        Intensity::High => HIGH_STYLE,
    }
}
