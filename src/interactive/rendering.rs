//! TUI rendering with ratatui
//!
//! One layout per screen. The selected background is a color theme.

use super::app::{App, MENU_ITEMS, MessageStyle, START_ITEMS, Screen};
use crate::output::formatters::{percent, spaced_letters};
use crate::storage::{BACKGROUND_COUNT, ProgressStore};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Color scheme standing in for a background picture
pub struct Theme {
    pub name: &'static str,
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
}

pub const THEMES: [Theme; BACKGROUND_COUNT] = [
    Theme {
        name: "Classic",
        accent: Color::Cyan,
        border: Color::Gray,
        highlight: Color::Yellow,
    },
    Theme {
        name: "Forest",
        accent: Color::Green,
        border: Color::DarkGray,
        highlight: Color::LightYellow,
    },
    Theme {
        name: "Sunset",
        accent: Color::LightRed,
        border: Color::Magenta,
        highlight: Color::Yellow,
    },
    Theme {
        name: "Ocean",
        accent: Color::Blue,
        border: Color::LightBlue,
        highlight: Color::White,
    },
];

fn theme(index: usize) -> &'static Theme {
    &THEMES[index % BACKGROUND_COUNT]
}

/// Main UI rendering function
pub fn ui<S: ProgressStore>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Screen content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let theme = theme(app.settings.background_index);
    render_header(f, chunks[0], theme);

    match app.screen {
        Screen::Menu => render_menu(f, app, chunks[1], theme),
        Screen::StartChoice => {
            render_menu(f, app, chunks[1], theme);
            render_start_choice(f, app, chunks[1], theme);
        }
        Screen::Playing => render_game(f, app, chunks[1], theme),
        Screen::Settings => render_settings(f, app, chunks[1]),
        Screen::Rules => render_rules(f, chunks[1], theme),
        Screen::Victory => render_victory(f, chunks[1], theme),
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect, theme: &Theme) {
    let header = Paragraph::new("🔤 WORDS FROM A WORD")
        .style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.accent)),
        );
    f.render_widget(header, area);
}

fn selectable_items<'i>(
    items: &[&'i str],
    selected: usize,
    enabled: impl Fn(usize) -> bool,
    theme: &Theme,
) -> Vec<ListItem<'i>> {
    items
        .iter()
        .enumerate()
        .map(|(i, &label)| {
            let style = if !enabled(i) {
                Style::default().fg(Color::DarkGray)
            } else if i == selected {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(format!("  {label}  ")).style(style)
        })
        .collect()
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_menu<S: ProgressStore>(f: &mut Frame, app: &App<'_, S>, area: Rect, theme: &Theme) {
    let items = selectable_items(&MENU_ITEMS, app.menu_index, |_| true, theme);
    let menu = List::new(items).block(
        Block::default()
            .title(" Main Menu ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(theme.border)),
    );
    f.render_widget(menu, centered(area, 30, 6));
}

fn render_start_choice<S: ProgressStore>(
    f: &mut Frame,
    app: &App<'_, S>,
    area: Rect,
    theme: &Theme,
) {
    let can_continue = app.can_continue;
    let items = selectable_items(
        &START_ITEMS,
        app.start_index,
        |i| i != 1 || can_continue,
        theme,
    );
    let dialog = List::new(items).block(
        Block::default()
            .title(" Start Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(theme.accent)),
    );
    let popup = centered(area, 26, 5);
    f.render_widget(Clear, popup);
    f.render_widget(dialog, popup);
}

fn render_game<S: ProgressStore>(f: &mut Frame, app: &App<'_, S>, area: Rect, theme: &Theme) {
    let Some(game) = app.game() else {
        return;
    };
    let level = game.level();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Source word
            Constraint::Length(3), // Input
            Constraint::Min(5),    // Guessed words + messages
            Constraint::Length(3), // Level progress
        ])
        .split(area);

    let title = format!(
        " {} ({}/{}) ",
        level.name(),
        game.level_index() + 1,
        game.catalog().len()
    );
    let source = Paragraph::new(spaced_letters(level.letters().letters()))
        .style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.border)),
        );
    f.render_widget(source, chunks[0]);

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Your word | Enter to check ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(theme.accent)),
        );
    f.render_widget(input, chunks[1]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    let guessed = game.guessed();
    let words: Vec<ListItem> = guessed
        .iter()
        .map(|w| ListItem::new(format!("  {}", w.to_uppercase())))
        .collect();
    let words_list = List::new(words).block(
        Block::default()
            .title(format!(
                " Guessed ({} of {}) ",
                guessed.len(),
                level.required()
            ))
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.border)),
    );
    f.render_widget(words_list, middle[0]);
    render_messages(f, app, middle[1]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Level Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(theme.accent))
        .percent(percent(guessed.len(), level.required()))
        .label(format!(
            "{}/{} words",
            guessed.len().min(level.required()),
            level.required()
        ));
    f.render_widget(gauge, chunks[3]);
}

fn render_messages<S: ProgressStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_settings<S: ProgressStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let draft = &app.settings_draft;
    let preview = theme(draft.background_index);
    let on_off = |flag: bool| if flag { "ON" } else { "OFF" };

    let content = vec![
        Line::from(vec![
            Span::raw("Background:  ◀ "),
            Span::styled(
                format!(
                    "{} ({}/{})",
                    preview.name,
                    draft.background_index + 1,
                    BACKGROUND_COUNT
                ),
                Style::default()
                    .fg(preview.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ▶"),
        ]),
        Line::from(""),
        Line::from(format!("Music:       {}", on_off(draft.music_enabled))),
        Line::from(format!("Sounds:      {}", on_off(draft.sounds_enabled))),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(preview.border)),
    );
    f.render_widget(paragraph, centered(area, 44, 8));
}

fn render_rules(f: &mut Frame, area: Rect, theme: &Theme) {
    let content = vec![
        Line::from(Span::styled(
            "Rules",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("1. Only common nouns in the singular count"),
        Line::from("2. Type words on the keyboard into the input field"),
        Line::from("3. Press Enter to check the word"),
        Line::from("4. Guess the required number of words to open the next level"),
        Line::from("5. The letters Е and Ё are interchangeable"),
    ];

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Rules ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.border)),
        );
    f.render_widget(paragraph, centered(area, 70, 10));
}

fn render_victory(f: &mut Frame, area: Rect, theme: &Theme) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🎉 CONGRATULATIONS! 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("You have completed every level."),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(theme.accent)),
    );
    f.render_widget(paragraph, centered(area, 40, 7));
}

fn render_status<S: ProgressStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let help_text = match app.screen {
        Screen::Menu => "↑/↓: Move | Enter: Select | q: Quit",
        Screen::StartChoice => "↑/↓: Move | Enter: Select | Esc: Back",
        Screen::Playing => "Enter: Check | PgUp/PgDn: Level | Esc: Menu | Ctrl+C: Quit",
        Screen::Settings => "←/→: Background | m: Music | s: Sounds | Enter: Save | Esc: Cancel",
        Screen::Rules | Screen::Victory => "Any key: Back to menu",
    };

    let mut lines = Vec::with_capacity(2);
    if let Some(warning) = &app.warning {
        lines.push(Line::styled(
            format!("⚠ {warning}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(help_text));

    let help = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load_catalog;
    use crate::engine::StartMode;
    use crate::storage::{MemoryProgressStore, SettingsStore};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn menu_renders() {
        let catalog = load_catalog();
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(
            &catalog,
            MemoryProgressStore::new(),
            SettingsStore::new(dir.path().join("s.txt")),
        );

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Main Menu"));
        assert!(text.contains("Settings"));
    }

    #[test]
    fn game_screen_shows_source_word() {
        let catalog = load_catalog();
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(
            &catalog,
            MemoryProgressStore::new(),
            SettingsStore::new(dir.path().join("s.txt")),
        );
        app.start_game(StartMode::New);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Level 1"));
        assert!(text.contains("Guessed (0 of 5)"));
    }

    #[test]
    fn write_fault_shown_outside_game_screen() {
        let catalog = load_catalog();
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryProgressStore::with_text("current_level:1\n").read_only();
        let mut app = App::new(&catalog, store, SettingsStore::new(dir.path().join("s.txt")));
        app.start_game(StartMode::Continue);
        app.leave_game();
        assert_eq!(app.screen, Screen::Menu);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Main Menu"));
        assert!(text.contains("Progress not saved"));
    }

    #[test]
    fn status_bar_has_no_warning_by_default() {
        let catalog = load_catalog();
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(
            &catalog,
            MemoryProgressStore::new(),
            SettingsStore::new(dir.path().join("s.txt")),
        );

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(!buffer_text(&terminal).contains("not saved"));
    }

    #[test]
    fn themes_wrap_around() {
        assert_eq!(theme(0).name, "Classic");
        assert_eq!(theme(BACKGROUND_COUNT).name, "Classic");
    }
}
