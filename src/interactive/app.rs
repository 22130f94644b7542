//! TUI application state and logic

use crate::catalog::Catalog;
use crate::engine::{Outcome, StartMode};
use crate::session::{Game, Reply};
use crate::storage::{PersistenceError, ProgressStore, Settings, SettingsStore};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};

/// Entries of the main menu, in display order
pub const MENU_ITEMS: [&str; 4] = ["Start game", "Settings", "Rules", "Exit"];

/// Entries of the start dialog, in display order
pub const START_ITEMS: [&str; 3] = ["New game", "Continue", "Cancel"];

/// Longest word the input field accepts
const MAX_INPUT_CHARS: usize = 24;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    StartChoice,
    Playing,
    Settings,
    Rules,
    Victory,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
///
/// Exactly one of `store` and `game` is populated: the store moves into the game
/// while playing and comes back when the player leaves for the menu.
pub struct App<'a, S: ProgressStore> {
    pub catalog: &'a Catalog,
    pub screen: Screen,
    pub menu_index: usize,
    pub start_index: usize,
    pub can_continue: bool,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub settings: Settings,
    pub settings_draft: Settings,
    /// Last write fault, shown in the status bar on every screen until a later write succeeds
    pub warning: Option<String>,
    pub should_quit: bool,
    store: Option<S>,
    game: Option<Game<'a, S>>,
    settings_store: SettingsStore,
    ring_bell: bool,
}

impl<'a, S: ProgressStore> App<'a, S> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, store: S, settings_store: SettingsStore) -> Self {
        let settings = settings_store.load();

        Self {
            catalog,
            screen: Screen::Menu,
            menu_index: 0,
            start_index: 0,
            can_continue: false,
            input_buffer: String::new(),
            messages: Vec::new(),
            settings,
            settings_draft: settings,
            warning: None,
            should_quit: false,
            store: Some(store),
            game: None,
            settings_store,
            ring_bell: false,
        }
    }

    /// The running game, if the player is in one
    #[must_use]
    pub const fn game(&self) -> Option<&Game<'a, S>> {
        self.game.as_ref()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Whether the terminal bell should ring, clearing the request
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.ring_bell)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Menu => self.handle_menu_key(key.code),
            Screen::StartChoice => self.handle_start_key(key.code),
            Screen::Playing => self.handle_game_key(key),
            Screen::Settings => self.handle_settings_key(key.code),
            Screen::Rules | Screen::Victory => self.screen = Screen::Menu,
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.menu_index = self.menu_index.saturating_sub(1),
            KeyCode::Down => self.menu_index = (self.menu_index + 1).min(MENU_ITEMS.len() - 1),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Enter => match self.menu_index {
                0 => self.open_start_choice(),
                1 => {
                    self.settings_draft = self.settings;
                    self.screen = Screen::Settings;
                }
                2 => self.screen = Screen::Rules,
                _ => self.quit(),
            },
            _ => {}
        }
    }

    fn open_start_choice(&mut self) {
        self.can_continue = self.store.as_ref().is_some_and(Game::<'a, S>::can_continue);
        self.start_index = usize::from(self.can_continue);
        self.screen = Screen::StartChoice;
    }

    fn handle_start_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => {
                self.start_index = self.start_index.saturating_sub(1);
                if self.start_index == 1 && !self.can_continue {
                    self.start_index = 0;
                }
            }
            KeyCode::Down => {
                self.start_index = (self.start_index + 1).min(START_ITEMS.len() - 1);
                if self.start_index == 1 && !self.can_continue {
                    self.start_index = 2;
                }
            }
            KeyCode::Esc => self.screen = Screen::Menu,
            KeyCode::Enter => match self.start_index {
                0 => self.start_game(StartMode::New),
                1 if self.can_continue => self.start_game(StartMode::Continue),
                _ => self.screen = Screen::Menu,
            },
            _ => {}
        }
    }

    pub fn start_game(&mut self, mode: StartMode) {
        let Some(store) = self.store.take() else {
            return;
        };

        let (game, reply) = Game::start(self.catalog, store, mode);
        self.game = Some(game);
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("Build words from the letters above.", MessageStyle::Info);
        if let Some(err) = reply.warning {
            self.show_write_fault("Progress not saved", &err);
        }
        self.screen = Screen::Playing;
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.leave_game(),
            KeyCode::PageUp => self.previous_level(),
            KeyCode::PageDown => self.next_level(),
            KeyCode::Char('p') if ctrl => self.previous_level(),
            KeyCode::Char('n') if ctrl => self.next_level(),
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if !ctrl && (c.is_alphabetic() || c == '-') => {
                if self.input_buffer.chars().count() < MAX_INPUT_CHARS {
                    self.input_buffer.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let Some(game) = self.game.as_mut() else {
            return;
        };

        let reply = game.submit_word(&input);
        if matches!(reply.outcome, Outcome::Accepted(_)) && self.settings.sounds_enabled {
            self.ring_bell = true;
        }
        if reply.outcome.is_rejection() {
            // Keep the rejected word so it can be corrected
            self.input_buffer = input;
        }
        self.report(reply);
    }

    pub fn previous_level(&mut self) {
        if let Some(game) = self.game.as_mut() {
            let reply = game.go_to_previous_level();
            self.input_buffer.clear();
            self.report(reply);
        }
    }

    pub fn next_level(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        let reply = game.go_to_next_level();
        let completed = reply.outcome == Outcome::GameCompleted;
        if matches!(reply.outcome, Outcome::Advanced(_)) {
            self.input_buffer.clear();
        }
        self.report(reply);

        if completed {
            self.leave_game();
            self.screen = Screen::Victory;
        }
    }

    /// Save and return to the menu
    pub fn leave_game(&mut self) {
        if let Some(mut game) = self.game.take() {
            match game.save() {
                // A finished game writes nothing, so there is nothing to clear
                Ok(()) if game.is_finished() => {}
                Ok(()) => self.warning = None,
                Err(err) => self.show_write_fault("Progress not saved", &err),
            }
            self.store = Some(game.into_store());
        }
        self.input_buffer.clear();
        self.screen = Screen::Menu;
    }

    fn report(&mut self, reply: Reply) {
        let style = match reply.outcome {
            Outcome::Accepted(_) | Outcome::Advanced(_) | Outcome::GameCompleted => {
                Some(MessageStyle::Success)
            }
            Outcome::InvalidLetters | Outcome::NotInDictionary | Outcome::InsufficientWords(_) => {
                Some(MessageStyle::Error)
            }
            Outcome::AlreadyGuessed | Outcome::Retreated(_) => Some(MessageStyle::Info),
            Outcome::NoOp => None,
        };
        if let Some(style) = style {
            self.add_message(&reply.outcome.to_string(), style);
        }

        let wrote = matches!(
            reply.outcome,
            Outcome::Accepted(_) | Outcome::Advanced(_) | Outcome::Retreated(_) | Outcome::GameCompleted
        );
        match reply.warning {
            Some(err) => self.show_write_fault("Progress not saved", &err),
            None if wrote => self.warning = None,
            None => {}
        }
    }

    fn show_write_fault(&mut self, what: &str, err: &PersistenceError) {
        tracing::warn!(error = %err, "{what}");
        self.warning = Some(format!("{what}: {err}"));
    }

    fn handle_settings_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.settings_draft.previous_background(),
            KeyCode::Right => self.settings_draft.next_background(),
            KeyCode::Char('m') => {
                self.settings_draft.toggle_music();
            }
            KeyCode::Char('s') => {
                self.settings_draft.toggle_sounds();
            }
            KeyCode::Enter => self.save_settings(),
            KeyCode::Esc => self.screen = Screen::Menu,
            _ => {}
        }
    }

    pub fn save_settings(&mut self) {
        self.settings = self.settings_draft;
        match self.settings_store.save(&self.settings) {
            Ok(()) => self.warning = None,
            Err(err) => self.show_write_fault("Settings not saved", &err),
        }
        self.screen = Screen::Menu;
    }

    pub fn quit(&mut self) {
        self.leave_game();
        self.should_quit = true;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: ProgressStore>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: ProgressStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.take_bell() {
            let mut out = io::stdout();
            out.write_all(b"\x07")?;
            out.flush()?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
