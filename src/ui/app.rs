//! Main TUI application state and logic
//!
//! Owns a fully materialized step sequence and a cursor into it. Steps are
//! stateless and randomly addressable, so navigation is just moving the
//! cursor; nothing is replayed.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::model::Step;

/// The main application state
pub struct App {
    /// Title shown over the array pane (algorithm display name)
    pub title: String,

    /// The step sequence being played back
    pub steps: Vec<Step>,

    /// Cursor into `steps`
    pub position: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over a non-empty step sequence
    pub fn new(title: String, steps: Vec<Step>) -> Self {
        App {
            title,
            steps,
            position: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
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
            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_secs(1) {
                if self.position + 1 < self.steps.len() {
                    self.position += 1;
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
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
        let Some(step) = self.steps.get(self.position) else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),
                Constraint::Length(4),
                Constraint::Length(1),
            ])
            .split(frame.area());

        super::panes::render_array_pane(frame, chunks[0], step, &self.title);
        super::panes::render_description_pane(frame, chunks[1], step);
        super::panes::render_status_bar(
            frame,
            chunks[2],
            step,
            self.position,
            self.steps.len(),
            self.is_playing,
            &self.status_message,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let before = self.position;
                self.position = (self.position + n).min(self.steps.len().saturating_sub(1));
                self.status_message = format!("Stepped forward {} step(s)", self.position - before);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.is_playing = false;
                if self.position > 0 {
                    self.position -= 1;
                    self.status_message = "Stepped backward".to_string();
                } else {
                    self.status_message = "Already at the first step".to_string();
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.is_playing = false;
                if self.position + 1 < self.steps.len() {
                    self.position += 1;
                    self.status_message = "Stepped forward".to_string();
                } else {
                    self.status_message = "Already at the last step".to_string();
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.position = self.steps.len().saturating_sub(1);
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.position = 0;
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }
}
