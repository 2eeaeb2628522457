//! Color palette and styles for the churn prediction UI.
//!
//! Band hues match the probability gauge of the training team's reference
//! dashboard; the rest of the palette keeps a high-contrast dark theme.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::{ChurnLabel, ProbabilityBand};

/// Application color palette.
pub struct Theme;

impl Theme {
    // === Primary Colors ===

    /// Steel blue - primary accent
    pub const PRIMARY: Color = Color::Rgb(0, 122, 204); // #007ACC

    /// Lighter blue for highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(77, 166, 230); // #4DA6E6

    // === Semantic Colors ===

    /// Green - low churn band / stay
    pub const SUCCESS: Color = Color::Rgb(0, 204, 150); // #00CC96

    /// Amber - medium churn band
    pub const WARNING: Color = Color::Rgb(255, 166, 0); // #FFA600

    /// Red - high churn band / churn
    pub const DANGER: Color = Color::Rgb(239, 85, 59); // #EF553B

    // === Text Colors ===

    /// Primary text (white)
    pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252); // #F8FAFC

    /// Secondary text (gray)
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Muted text
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    // === Preset Styles ===

    /// Style for titles
    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for subtitles
    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text
    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    /// Style for secondary text
    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for muted text
    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    /// Style for danger/error messages
    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    /// Style for focused elements
    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    /// Style for focused borders
    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Style for key hints
    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for the threshold marker on the band scale
    #[must_use]
    pub fn marker() -> Style {
        Style::default()
            .fg(Self::DANGER)
            .add_modifier(Modifier::BOLD)
    }

    /// Get churn label severity style
    #[must_use]
    pub fn label(label: ChurnLabel) -> Style {
        match label {
            ChurnLabel::Stay => Style::default().fg(Self::SUCCESS),
            ChurnLabel::Churn => Style::default().fg(Self::DANGER),
        }
    }

    /// Get gauge band style
    #[must_use]
    pub fn band(band: ProbabilityBand) -> Style {
        match band {
            ProbabilityBand::Low => Style::default().fg(Self::SUCCESS),
            ProbabilityBand::Medium => Style::default().fg(Self::WARNING),
            ProbabilityBand::High => Style::default().fg(Self::DANGER),
        }
    }
}
