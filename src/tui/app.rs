//! Main TUI application state machine.
//!
//! Handles:
//! - Artifact loading at startup (fatal on failure)
//! - Screen navigation
//! - Input event handling
//! - Synchronous prediction on submit

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::adapters::{self, ChurnModel};
use crate::application::PredictionService;

use super::ui::{
    form::{render_form, FormState},
    result::{render_result, ResultState},
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    Result,
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Prediction service over the loaded artifacts
    service: PredictionService<ChurnModel>,

    /// Customer form state
    form_state: FormState,

    /// Result screen state
    result_state: ResultState,
}

impl App {
    /// Create a new application instance, loading the artifacts from the
    /// configured paths.
    ///
    /// The process cannot serve any prediction without both artifacts, so a
    /// load failure here is fatal.
    ///
    /// # Errors
    /// Returns error if either artifact is missing, unreadable, or has an
    /// incompatible shape.
    pub fn new() -> Result<Self> {
        let model_path = std::env::var("CHURNSCOPE_MODEL_PATH")
            .unwrap_or_else(|_| "artifacts/churn_model.json".to_string());
        let encoders_path = std::env::var("CHURNSCOPE_ENCODERS_PATH")
            .unwrap_or_else(|_| "artifacts/label_encoders.json".to_string());

        let (model, encoders) =
            adapters::load_artifacts(Path::new(&model_path), Path::new(&encoders_path))
                .map_err(|e| anyhow!("Failed to load artifacts: {e}"))?;

        let service = PredictionService::new(Arc::new(model), Arc::new(encoders));
        Ok(Self::with_service(service))
    }

    /// Create the application over an already-constructed service
    /// (Composition Root pattern).
    ///
    /// This allows `main.rs` or tests to construct the artifacts externally.
    #[must_use]
    pub fn with_service(service: PredictionService<ChurnModel>) -> Self {
        let form_state = FormState::new(service.encoders());
        Self {
            screen: Screen::Form,
            should_quit: false,
            service,
            form_state,
            result_state: ResultState::default(),
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                let area = f.area();
                match self.screen {
                    Screen::Form => render_form(f, area, &self.form_state),
                    Screen::Result => render_result(f, area, &self.result_state),
                }
            })?;

            // Handle input (short poll to stay responsive)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Form => self.handle_form_key(key),
            Screen::Result => self.handle_result_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.form_state.prev_field();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form_state.next_field();
            }
            KeyCode::Left => {
                self.form_state.cycle_prev();
            }
            KeyCode::Right => {
                self.form_state.cycle_next();
            }
            KeyCode::Char(c) => {
                self.form_state.input_char(c);
            }
            KeyCode::Backspace => {
                self.form_state.delete_char();
            }
            KeyCode::Delete => {
                self.form_state.clear_field();
            }
            KeyCode::Enter => {
                self.submit_form();
            }
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => {
                // Back to the form with values intact for editing.
                self.screen = Screen::Form;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.form_state = FormState::new(self.service.encoders());
                self.screen = Screen::Form;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let record = match self.form_state.to_record() {
            Ok(record) => record,
            Err(e) => {
                self.form_state.error_message = Some(e);
                return;
            }
        };

        if let Err(errors) = record.validate() {
            self.form_state.error_message = Some(errors.join(", "));
            return;
        }
        self.form_state.error_message = None;

        // Single best-effort attempt; a failure only affects this submission.
        self.result_state = match self.service.predict(&record) {
            Ok(prediction) => ResultState::Complete { prediction },
            Err(e) => {
                tracing::error!("Prediction failed: {e}");
                ResultState::Error {
                    message: e.to_string(),
                }
            }
        };
        self.screen = Screen::Result;
    }
}
