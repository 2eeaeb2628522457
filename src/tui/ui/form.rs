//! Customer data input form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::adapters::EncoderSet;
use crate::domain::CustomerRecord;
use crate::ports::CategoricalEncoder;
use crate::tui::styles::Theme;

/// Identity of a form field, independent of its position on screen.
///
/// Record assembly is keyed by this identity, never by display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    CreditScore,
    Geography,
    Gender,
    Age,
    Tenure,
    Balance,
    NumOfProducts,
    HasCrCard,
    IsActiveMember,
    EstimatedSalary,
}

/// Input control backing a form field.
#[derive(Debug, Clone)]
pub enum FieldInput {
    /// Free numeric entry constrained to [min, max].
    Numeric {
        value: String,
        min: f64,
        max: f64,
        integer: bool,
    },
    /// Fixed option list cycled with Left/Right. Invalid values cannot be
    /// entered at all.
    Choice { options: Vec<String>, selected: usize },
}

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub key: FieldKey,
    pub label: &'static str,
    pub hint: String,
    pub input: FieldInput,
}

/// Customer form state
pub struct FormState {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

fn numeric(
    key: FieldKey,
    label: &'static str,
    hint: &str,
    default: &str,
    min: f64,
    max: f64,
    integer: bool,
) -> FormField {
    FormField {
        key,
        label,
        hint: hint.to_string(),
        input: FieldInput::Numeric {
            value: default.to_string(),
            min,
            max,
            integer,
        },
    }
}

fn choice(key: FieldKey, label: &'static str, hint: &str, options: Vec<String>) -> FormField {
    FormField {
        key,
        label,
        hint: hint.to_string(),
        input: FieldInput::Choice {
            options,
            selected: 0,
        },
    }
}

impl FormState {
    /// Build the form with its default values.
    ///
    /// The categorical choice lists come from the loaded encoder artifact,
    /// so only categories seen during training can be selected.
    #[must_use]
    pub fn new(encoders: &EncoderSet) -> Self {
        let flag_options = vec!["0".to_string(), "1".to_string()];

        Self {
            fields: vec![
                numeric(
                    FieldKey::CreditScore,
                    "Credit Score",
                    "300-900",
                    "600",
                    300.0,
                    900.0,
                    true,
                ),
                choice(
                    FieldKey::Geography,
                    "Geography",
                    "country of residence",
                    encoders.geography.classes().to_vec(),
                ),
                choice(
                    FieldKey::Gender,
                    "Gender",
                    "",
                    encoders.gender.classes().to_vec(),
                ),
                numeric(FieldKey::Age, "Age", "years (18-100)", "40", 18.0, 100.0, true),
                numeric(
                    FieldKey::Tenure,
                    "Tenure",
                    "years with the bank (0-10)",
                    "3",
                    0.0,
                    10.0,
                    true,
                ),
                numeric(
                    FieldKey::Balance,
                    "Balance",
                    "account balance",
                    "60000",
                    0.0,
                    f64::MAX,
                    false,
                ),
                choice(
                    FieldKey::NumOfProducts,
                    "Number of Products",
                    "",
                    vec![
                        "1".to_string(),
                        "2".to_string(),
                        "3".to_string(),
                        "4".to_string(),
                    ],
                ),
                choice(
                    FieldKey::HasCrCard,
                    "Has Credit Card?",
                    "0=no, 1=yes",
                    flag_options.clone(),
                ),
                choice(
                    FieldKey::IsActiveMember,
                    "Is Active Member?",
                    "0=no, 1=yes",
                    flag_options,
                ),
                numeric(
                    FieldKey::EstimatedSalary,
                    "Estimated Salary",
                    "yearly salary",
                    "50000",
                    0.0,
                    f64::MAX,
                    false,
                ),
            ],
            selected_field: 0,
            error_message: None,
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Add a character to the current field (numeric fields only)
    pub fn input_char(&mut self, c: char) {
        if let FieldInput::Numeric { value, .. } = &mut self.fields[self.selected_field].input {
            if c.is_ascii_digit() || c == '.' {
                value.push(c);
                self.error_message = None;
            }
        }
    }

    /// Delete the last character of the current field
    pub fn delete_char(&mut self) {
        if let FieldInput::Numeric { value, .. } = &mut self.fields[self.selected_field].input {
            value.pop();
        }
    }

    /// Clear the current field
    pub fn clear_field(&mut self) {
        if let FieldInput::Numeric { value, .. } = &mut self.fields[self.selected_field].input {
            value.clear();
        }
    }

    /// Cycle the current choice field forward
    pub fn cycle_next(&mut self) {
        if let FieldInput::Choice { options, selected } =
            &mut self.fields[self.selected_field].input
        {
            *selected = (*selected + 1) % options.len();
            self.error_message = None;
        }
    }

    /// Cycle the current choice field backward
    pub fn cycle_prev(&mut self) {
        if let FieldInput::Choice { options, selected } =
            &mut self.fields[self.selected_field].input
        {
            *selected = (*selected + options.len() - 1) % options.len();
            self.error_message = None;
        }
    }

    fn field(&self, key: FieldKey) -> Result<&FormField, String> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .ok_or_else(|| format!("form is missing field {key:?}"))
    }

    fn numeric_value(&self, key: FieldKey) -> Result<f64, String> {
        let field = self.field(key)?;
        match &field.input {
            FieldInput::Numeric {
                value,
                min,
                max,
                integer,
            } => {
                let parsed: f64 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("{}: invalid number", field.label))?;
                if parsed < *min || parsed > *max {
                    if *max == f64::MAX {
                        return Err(format!(
                            "{}: value must be at least {}",
                            field.label, min
                        ));
                    }
                    return Err(format!(
                        "{}: value must be between {} and {}",
                        field.label, min, max
                    ));
                }
                if *integer && parsed.fract() != 0.0 {
                    return Err(format!("{}: value must be a whole number", field.label));
                }
                Ok(parsed)
            }
            FieldInput::Choice { .. } => Err(format!("{}: expected a numeric field", field.label)),
        }
    }

    fn choice_value(&self, key: FieldKey) -> Result<String, String> {
        let field = self.field(key)?;
        match &field.input {
            FieldInput::Choice { options, selected } => options
                .get(*selected)
                .cloned()
                .ok_or_else(|| format!("{}: no option selected", field.label)),
            FieldInput::Numeric { .. } => Err(format!("{}: expected a choice field", field.label)),
        }
    }

    /// Validate and convert the form into a customer record.
    ///
    /// Lookup is keyed by [`FieldKey`], so reordering the fields on screen
    /// can never change which value lands in which record field.
    pub fn to_record(&self) -> Result<CustomerRecord, String> {
        let flag = |key: FieldKey| -> Result<u8, String> {
            let raw = self.choice_value(key)?;
            raw.parse::<u8>().map_err(|_| format!("invalid flag {raw:?}"))
        };

        Ok(CustomerRecord {
            credit_score: self.numeric_value(FieldKey::CreditScore)? as u32,
            geography: self.choice_value(FieldKey::Geography)?,
            gender: self.choice_value(FieldKey::Gender)?,
            age: self.numeric_value(FieldKey::Age)? as u32,
            tenure: self.numeric_value(FieldKey::Tenure)? as u32,
            balance: self.numeric_value(FieldKey::Balance)?,
            num_of_products: flag(FieldKey::NumOfProducts)?,
            has_cr_card: flag(FieldKey::HasCrCard)?,
            is_active_member: flag(FieldKey::IsActiveMember)?,
            estimated_salary: self.numeric_value(FieldKey::EstimatedSalary)?,
        })
    }
}

/// Render the customer data input form
pub fn render_form(f: &mut Frame, area: Rect, state: &FormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", Theme::text()),
        Span::styled("Customer Churn Prediction", Theme::title()),
        Span::styled(" │ Customer Attributes", Theme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &FormState) {
    // Two-column layout, first half of the fields left, second half right.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (state.fields.len() + 1) / 2;

    render_field_column(f, columns[0], &state.fields[..mid], 0, state.selected_field);
    render_field_column(
        f,
        columns[1],
        &state.fields[mid..],
        mid,
        state.selected_field,
    );
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[FormField],
    offset: usize,
    selected: usize,
) {
    let field_height = 3;
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(field_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let border_style = if is_selected {
            Theme::border_focused()
        } else {
            Theme::border()
        };

        let title_style = if is_selected {
            Theme::focused()
        } else {
            Theme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let content = Paragraph::new(field_line(field, is_selected)).block(block);
        f.render_widget(content, chunks[i]);
    }
}

fn field_line(field: &FormField, is_selected: bool) -> Line<'_> {
    match &field.input {
        FieldInput::Numeric { value, .. } => {
            let value_display = if value.is_empty() {
                Span::styled(field.hint.as_str(), Theme::text_muted())
            } else {
                Span::styled(value.as_str(), Theme::text())
            };

            Line::from(vec![
                Span::raw(" "),
                value_display,
                if is_selected {
                    Span::styled("▌", Theme::focused())
                } else {
                    Span::raw("")
                },
            ])
        }
        FieldInput::Choice { options, selected } => {
            let current = options
                .get(*selected)
                .map(String::as_str)
                .unwrap_or_default();

            if is_selected {
                Line::from(vec![
                    Span::styled(" ◂ ", Theme::key_hint()),
                    Span::styled(current, Theme::text()),
                    Span::styled(" ▸", Theme::key_hint()),
                ])
            } else {
                Line::from(vec![Span::raw(" "), Span::styled(current, Theme::text())])
            }
        }
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &FormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", Theme::danger()),
            Span::styled(err.clone(), Theme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", Theme::key_hint()),
            Span::styled("Navigate ", Theme::key_desc()),
            Span::styled("[◂▸] ", Theme::key_hint()),
            Span::styled("Choose ", Theme::key_desc()),
            Span::styled("[Enter] ", Theme::key_hint()),
            Span::styled("Predict ", Theme::key_desc()),
            Span::styled("[Esc] ", Theme::key_hint()),
            Span::styled("Quit", Theme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Theme::border()),
    );

    f.render_widget(footer, area);
}
