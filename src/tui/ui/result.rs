//! Prediction result view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::domain::{ChurnLabel, Prediction, ProbabilityBand};
use crate::tui::styles::Theme;

/// Result screen state
#[derive(Debug, Clone, Default)]
pub enum ResultState {
    /// No prediction yet
    #[default]
    Idle,
    /// Completed with a prediction
    Complete { prediction: Prediction },
    /// The submission failed
    Error { message: String },
}

/// Render the prediction result view
pub fn render_result(f: &mut Frame, area: Rect, state: &ResultState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_result_header(f, chunks[0]);
    render_result_content(f, chunks[1], state);
    render_result_footer(f, chunks[2], state);
}

fn render_result_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", Theme::text()),
        Span::styled("Customer Churn Prediction", Theme::title()),
        Span::styled(" │ Result", Theme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border()),
    );

    f.render_widget(header, area);
}

fn render_result_content(f: &mut Frame, area: Rect, state: &ResultState) {
    match state {
        ResultState::Idle => render_idle(f, area),
        ResultState::Complete { prediction } => render_prediction(f, area, prediction),
        ResultState::Error { message } => render_error(f, area, message),
    }
}

fn render_idle(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No prediction yet",
            Theme::text_secondary(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Submit the form to run the classifier",
            Theme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );

    f.render_widget(content, area);
}

fn render_prediction(f: &mut Frame, area: Rect, prediction: &Prediction) {
    let block = Block::default()
        .title(Span::styled(" Prediction ", Theme::subtitle()))
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Label banner
            Constraint::Length(4), // Probability gauge
            Constraint::Length(3), // Band scale with threshold marker
            Constraint::Length(2), // Timestamp
            Constraint::Min(0),    // Padding
        ])
        .margin(1)
        .split(inner);

    // Label banner (big display)
    let label_style = Theme::label(prediction.label);
    let icon = match prediction.label {
        ChurnLabel::Stay => "OK",
        ChurnLabel::Churn => "!",
    };

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} {}", icon, prediction.label),
            label_style.add_modifier(ratatui::style::Modifier::BOLD),
        )),
        Line::from(Span::styled(
            prediction.label.description(),
            Theme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(banner, chunks[0]);

    // Probability gauge, colored by band
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(" Churn Probability (%) ", Theme::text_secondary()))
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .gauge_style(Theme::band(prediction.band()))
        .percent(prediction.churn_probability.round() as u16)
        .label(format!("{:.2}%", prediction.churn_probability));
    f.render_widget(gauge, chunks[1]);

    // Band scale with the threshold marker at the computed probability
    render_band_scale(f, chunks[2], prediction.churn_probability);

    let timestamp = Paragraph::new(Line::from(vec![
        Span::styled("Predicted at ", Theme::text_secondary()),
        Span::styled(
            prediction
                .created_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            Theme::text_muted(),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(timestamp, chunks[3]);
}

/// Column of the threshold marker on a scale of `width` cells.
fn marker_column(width: usize, percent: f64) -> usize {
    if width == 0 {
        return 0;
    }
    let last = width - 1;
    (((percent / 100.0) * last as f64).round() as usize).min(last)
}

fn render_band_scale(f: &mut Frame, area: Rect, percent: f64) {
    let width = area.width.saturating_sub(2).max(1) as usize;
    let marker_col = marker_column(width, percent);

    let marker_row: Vec<Span> = (0..width)
        .map(|i| {
            if i == marker_col {
                Span::styled("▼", Theme::marker())
            } else {
                Span::raw(" ")
            }
        })
        .collect();

    // Low / medium / high color bands across the 0-100 scale.
    let band_row: Vec<Span> = (0..width)
        .map(|i| {
            let pct = (i as f64 + 0.5) * 100.0 / width as f64;
            Span::styled("█", Theme::band(ProbabilityBand::from_percent(pct)))
        })
        .collect();

    let scale = Paragraph::new(vec![Line::from(marker_row), Line::from(band_row)])
        .alignment(Alignment::Left);

    let padded = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    };
    f.render_widget(scale, padded);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("! Prediction failed", Theme::danger())),
        Line::from(""),
        Line::from(Span::styled(message, Theme::text())),
        Line::from(""),
        Line::from(Span::styled(
            "The form values are unchanged; you can resubmit.",
            Theme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::danger()),
    );

    f.render_widget(content, area);
}

fn render_result_footer(f: &mut Frame, area: Rect, state: &ResultState) {
    let content = match state {
        ResultState::Error { .. } => Line::from(vec![
            Span::styled("[Enter] ", Theme::key_hint()),
            Span::styled("Back to Form ", Theme::key_desc()),
            Span::styled("[Q] ", Theme::key_hint()),
            Span::styled("Quit", Theme::key_desc()),
        ]),
        _ => Line::from(vec![
            Span::styled("[Enter] ", Theme::key_hint()),
            Span::styled("Edit Inputs ", Theme::key_desc()),
            Span::styled("[N] ", Theme::key_hint()),
            Span::styled("New Prediction ", Theme::key_desc()),
            Span::styled("[Q] ", Theme::key_hint()),
            Span::styled("Quit", Theme::key_desc()),
        ]),
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Theme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_column_endpoints() {
        assert_eq!(marker_column(50, 0.0), 0);
        assert_eq!(marker_column(50, 100.0), 49);
    }

    #[test]
    fn test_marker_column_midpoint() {
        assert_eq!(marker_column(101, 50.0), 50);
    }

    #[test]
    fn test_marker_column_degenerate_width() {
        assert_eq!(marker_column(0, 42.0), 0);
        assert_eq!(marker_column(1, 42.0), 0);
    }
}
