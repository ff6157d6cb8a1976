//! Main TUI application state and logic

use crate::session::{Session, SessionError};
use crate::stepper::constants::DEFAULT_PLAY_INTERVAL_MS;
use crate::stepper::StepOutcome;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::error;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Array,
    Stats,
    Log,
}

impl FocusedPane {
    /// Move focus to the next pane (top to bottom, wrapping)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Array,
            FocusedPane::Array => FocusedPane::Stats,
            FocusedPane::Stats => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Input,
        }
    }
}

/// Whether keys go to the input box or drive the sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// UI settings taken from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Delay between automatic steps in play mode
    pub play_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            play_interval: Duration::from_millis(DEFAULT_PLAY_INTERVAL_MS),
        }
    }
}

/// The main application state
pub struct App {
    /// The sorting session being visualized
    pub session: Session,

    pub config: AppConfig,

    /// Text of the input box
    pub input: String,

    /// Cursor position in `input`, in chars
    pub input_cursor: usize,

    /// Input text before editing began, restored on Esc
    input_backup: String,

    pub input_mode: InputMode,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Step log scroll offset (usize::MAX follows the newest entry)
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub status_is_error: bool,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around `session`, with `input` in the input box
    pub fn new(session: Session, input: String, config: AppConfig) -> Self {
        let input_cursor = input.chars().count();
        App {
            session,
            config,
            input_backup: input.clone(),
            input,
            input_cursor,
            input_mode: InputMode::Normal,
            focused_pane: FocusedPane::Array,
            log_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.config.play_interval {
                self.play_tick();
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Input box, array + statistics, step log, status bar
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Percentage(50),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(rows[1]);

        let report = self.session.report();

        super::panes::render_input_pane(
            frame,
            rows[0],
            &self.input,
            self.input_cursor,
            self.input_mode == InputMode::Editing,
            self.focused_pane == FocusedPane::Input,
        );

        super::panes::render_array_pane(
            frame,
            middle[0],
            report.as_ref(),
            self.focused_pane == FocusedPane::Array,
        );

        super::panes::render_stats_pane(
            frame,
            middle[1],
            report.as_ref(),
            self.session.undo_depth(),
            self.focused_pane == FocusedPane::Stats,
        );

        let entries = self.session.state().map(|s| s.log()).unwrap_or(&[]);
        super::panes::render_log_pane(
            frame,
            rows[2],
            entries,
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        super::panes::render_status_bar(
            frame,
            rows[3],
            &self.status_message,
            self.status_is_error,
            report.map(|r| r.status),
            self.is_playing,
            self.input_mode == InputMode::Editing,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Editing => self.handle_editing_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('e') | KeyCode::Char('i') => {
                self.is_playing = false;
                self.input_backup = self.input.clone();
                self.input_cursor = self.input.chars().count();
                self.input_mode = InputMode::Editing;
                self.focused_pane = FocusedPane::Input;
                self.set_message("Editing input");
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.is_playing = false;
                self.start();
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                match self.session.advance(n) {
                    Ok(stepped) => {
                        self.set_message(format!("Stepped forward {} step(s)", stepped));
                        self.log_scroll = usize::MAX;
                    }
                    Err(e) => self.report_error(e),
                }
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Left | KeyCode::Char('b') => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Up => {
                self.log_scroll = self.log_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.log_scroll = self.log_scroll.saturating_add(1);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.run_to_end();
            }
            KeyCode::Backspace => {
                // Rewind to the initial list
                self.is_playing = false;
                self.rewind();
            }
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.focused_pane = FocusedPane::Array;
                self.start();
            }
            KeyCode::Esc => {
                self.input = std::mem::take(&mut self.input_backup);
                self.input_cursor = self.input.chars().count();
                self.input_mode = InputMode::Normal;
                self.focused_pane = FocusedPane::Array;
                self.set_message("Edit cancelled");
            }
            KeyCode::Char(c) => {
                let at = self.byte_index(self.input_cursor);
                self.input.insert(at, c);
                self.input_cursor += 1;
            }
            KeyCode::Backspace => {
                if self.input_cursor > 0 {
                    self.input_cursor -= 1;
                    let at = self.byte_index(self.input_cursor);
                    self.input.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.input_cursor < self.input.chars().count() {
                    let at = self.byte_index(self.input_cursor);
                    self.input.remove(at);
                }
            }
            KeyCode::Left => {
                self.input_cursor = self.input_cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                self.input_cursor = (self.input_cursor + 1).min(self.input.chars().count());
            }
            KeyCode::Home => {
                self.input_cursor = 0;
            }
            KeyCode::End => {
                self.input_cursor = self.input.chars().count();
            }
            _ => {}
        }
    }

    /// Byte offset of the char at `cursor` in the input text
    fn byte_index(&self, cursor: usize) -> usize {
        self.input
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Start / Reset with the current input text
    fn start(&mut self) {
        match self.session.start(&self.input) {
            Ok(()) => {
                self.set_message("Started! Press → for the next step");
                self.log_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
                self.status_is_error = true;
            }
        }
    }

    /// Step forward in the sort
    fn step_forward(&mut self) {
        match self.session.next_step() {
            Ok(outcome) => {
                self.set_message(describe(&outcome));
                // Auto-scroll log to bottom
                self.log_scroll = usize::MAX;
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Step backward in the sort
    fn step_backward(&mut self) {
        match self.session.step_back() {
            Ok(()) => {
                self.set_message("Stepped backward");
                self.log_scroll = usize::MAX;
            }
            Err(e) => self.report_error(e),
        }
    }

    fn run_to_end(&mut self) {
        match self.session.run_to_end() {
            Ok(taken) => {
                self.set_message(format!("Ran to end in {} step(s)", taken));
                self.log_scroll = usize::MAX;
            }
            Err(e) => self.report_error(e),
        }
    }

    fn rewind(&mut self) {
        let mut undone = 0;
        loop {
            match self.session.step_back() {
                Ok(()) => undone += 1,
                Err(SessionError::NothingToUndo) => break,
                Err(e) => {
                    self.report_error(e);
                    return;
                }
            }
        }
        self.set_message(format!("Jumped to start ({} step(s) undone)", undone));
        self.log_scroll = usize::MAX;
    }

    fn toggle_play(&mut self) {
        if !self.is_playing && !self.session.is_started() {
            self.report_error(SessionError::MissingState);
            return;
        }
        self.is_playing = !self.is_playing;
        if self.is_playing {
            self.last_play_time = Instant::now()
                .checked_sub(self.config.play_interval)
                .unwrap_or(Instant::now());
            self.set_message("Playing...");
        } else {
            self.set_message("Paused");
        }
    }

    /// One automatic step in play mode
    fn play_tick(&mut self) {
        match self.session.next_step() {
            Ok(outcome) if outcome.is_finished() => {
                self.is_playing = false;
                self.set_message("Playback complete");
                self.log_scroll = usize::MAX;
            }
            Ok(_) => {
                self.set_message("Playing...");
                self.log_scroll = usize::MAX;
            }
            Err(e) => {
                self.is_playing = false;
                self.report_error(e);
            }
        }
    }

    fn set_message(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn report_error(&mut self, e: SessionError) {
        if !e.is_recoverable() {
            error!("{}", e);
            self.is_playing = false;
        }
        self.status_message = format!("Error: {}", e);
        self.status_is_error = true;
    }
}

/// Short status bar text for a step outcome
fn describe(outcome: &StepOutcome) -> String {
    match outcome {
        StepOutcome::Compared(c) => format!(
            "Compared {} and {}: {}",
            c.left,
            c.right,
            if c.swapped { "swapped" } else { "no swap" }
        ),
        StepOutcome::PassCompleted { pass, settled, .. } => {
            format!("Pass {} complete, position {} settled", pass, settled)
        }
        StepOutcome::Finished { early: true, .. } => "Sorted early: no swaps in pass".to_string(),
        StepOutcome::Finished { early: false, .. } => "All passes complete".to_string(),
        StepOutcome::AlreadyFinished => "Already sorted".to_string(),
    }
}
