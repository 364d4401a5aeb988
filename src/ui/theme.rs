use ratatui::style::{Color, Modifier, Style};

use crate::board::{Priority, Stage, Trend};

pub struct Theme;

impl Theme {
    pub const TEXT_PRIMARY: Color = Color::Rgb(229, 231, 235);
    pub const TEXT_MUTED: Color = Color::Rgb(125, 133, 148);
    pub const ACCENT: Color = Color::Rgb(129, 140, 248);
    pub const GOOD: Color = Color::Rgb(52, 211, 153);
    pub const BAD: Color = Color::Rgb(248, 113, 113);
    pub const BG_BADGE: Color = Color::Rgb(45, 50, 60);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_hover() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn border_selected() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn value() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn ghost() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn app_badge() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Column dot colors, one per pipeline stage.
    pub fn stage_color(stage: Stage) -> Color {
        match stage {
            Stage::New => Color::Rgb(59, 130, 246),
            Stage::Contacted => Color::Rgb(168, 85, 247),
            Stage::Qualified => Color::Rgb(6, 182, 212),
            Stage::Proposal => Color::Rgb(245, 158, 11),
            Stage::Negotiation => Color::Rgb(249, 115, 22),
            Stage::Won => Color::Rgb(16, 185, 129),
            Stage::Lost => Color::Rgb(239, 68, 68),
        }
    }

    pub fn priority(priority: Priority) -> Style {
        let fg = match priority {
            Priority::High => Self::BAD,
            Priority::Medium => Color::Rgb(250, 204, 21),
            Priority::Low => Color::Rgb(96, 165, 250),
        };
        Style::default().fg(fg).bg(Self::BG_BADGE)
    }

    pub fn trend(trend: Trend) -> Style {
        match trend {
            Trend::Up => Style::default().fg(Self::GOOD),
            Trend::Down => Style::default().fg(Self::BAD),
            Trend::Neutral => Self::muted(),
        }
    }
}
