//! Application state and core logic

use crate::api::client::DEFAULT_SOURCE_TAG;
use crate::api::{LeadApi, LeadClient, QuoteSubmission};
use crate::config::TuiConfig;
use crate::draft::DraftStore;
use crate::state::{AppState, NoticeKind, SplashState, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Lead API client for quote submission
    api: Box<dyn LeadApi>,
    /// Persisted-draft store
    drafts: DraftStore,
    /// User configuration
    pub config: TuiConfig,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub async fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let api = Box::new(LeadClient::from_config(&config));
        let drafts = DraftStore::new();

        let mut app = Self::with_parts(api, drafts, config);
        app.state.api_connected = app.api.check_connection().await;
        Ok(app)
    }

    /// Assemble an App from explicit parts (also the test entry point)
    fn with_parts(api: Box<dyn LeadApi>, drafts: DraftStore, config: TuiConfig) -> Self {
        let mut state = AppState::default();

        let splash_state = if config.skip_splash == Some(true) {
            None
        } else {
            state.current_view = View::Splash;
            Some(SplashState::new())
        };

        // Resume an abandoned form, telling the user once
        if let Some(saved) = drafts.load() {
            let restored = state.wizard.restore(&saved);
            if restored > 0 {
                state.push_notice(
                    NoticeKind::Info,
                    "Welcome back! We saved your progress.",
                );
            }
        }

        Self {
            state,
            api,
            drafts,
            config,
            splash_state,
            quit: false,
        }
    }

    /// Update splash animation state.
    /// Returns true if animation is complete and we should transition.
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Wizard;
                return true;
            }
        }
        false
    }

    /// Drop the status notice once its display time is up
    pub fn update_notice(&mut self) {
        self.state.expire_notice();
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn source_tag(&self) -> String {
        self.config
            .source_tag
            .clone()
            .unwrap_or_else(|| DEFAULT_SOURCE_TAG.to_string())
    }

    /// Mirror the current draft to disk (best-effort)
    fn save_draft(&self) {
        self.drafts.save(&self.state.wizard.draft);
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.in_splash() {
            if let Some(ref mut splash) = self.splash_state {
                splash.skip();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Wizard => self.handle_wizard_key(key).await,
            View::Confirmation => self.handle_confirmation_key(key),
            View::Splash => {}
        }
        Ok(())
    }

    /// Handle keys on the wizard view
    async fn handle_wizard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.wizard.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.wizard.prev_field(),
            KeyCode::Left => {
                self.state.wizard.cycle_choice(false);
                self.save_draft();
            }
            KeyCode::Right => {
                self.state.wizard.cycle_choice(true);
                self.save_draft();
            }
            // Going backward is never validated
            KeyCode::Esc => self.state.wizard.retreat(),
            KeyCode::Enter => self.advance_or_submit().await,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.advance_or_submit().await;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_form();
            }
            KeyCode::Char(c) => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                if c == ' ' && self.state.wizard.active_field().is_choice() {
                    self.state.wizard.cycle_choice(true);
                } else {
                    self.state.wizard.input_char(ch);
                }
                self.save_draft();
            }
            KeyCode::Backspace => {
                self.state.wizard.backspace();
                self.save_draft();
            }
            _ => {}
        }
    }

    /// Handle keys on the confirmation view
    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('n') => {
                self.state.confirmation_ref = None;
                self.state.current_view = View::Wizard;
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Move the wizard forward, or submit from the last step
    async fn advance_or_submit(&mut self) {
        if self.state.submitting {
            return;
        }

        if !self.state.wizard.is_last_step() {
            if self.state.wizard.advance() {
                self.save_draft();
            } else {
                self.state
                    .push_notice(NoticeKind::Error, "Please fix the highlighted fields");
            }
            return;
        }

        // Last step: every step must still hold before the handoff
        if !self.state.wizard.validate_all() {
            self.state
                .push_notice(NoticeKind::Error, "Please fix the highlighted fields");
            return;
        }
        self.submit().await;
    }

    /// Send the finished draft to the lead API and report the outcome
    async fn submit(&mut self) {
        self.state.submitting = true;
        let submission = QuoteSubmission::from_draft(&self.state.wizard.draft, &self.source_tag());
        let result = self.api.submit_quote(submission).await;
        self.state.submitting = false;

        match result {
            Ok(ack) => {
                // A returning user starts fresh
                self.drafts.clear();
                self.state.confirmation_ref = ack.id;
                self.state.wizard.reset();
                self.state.current_view = View::Confirmation;
                self.state
                    .push_notice(NoticeKind::Success, "Quote request sent!");
            }
            Err(err) => {
                tracing::error!("quote submission failed: {err}");
                // Draft and persisted copy stay intact for a manual retry
                self.state.push_notice(
                    NoticeKind::Error,
                    format!("Could not send your request ({err}). Your answers are kept - press Enter to retry."),
                );
            }
        }
    }

    /// Clear the form and the persisted draft
    fn reset_form(&mut self) {
        self.state.wizard.reset();
        self.drafts.clear();
        self.state
            .push_notice(NoticeKind::Info, "Form cleared, starting over");
    }
}
