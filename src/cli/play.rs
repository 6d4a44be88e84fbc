//! Play command implementation - interactive TUI.

// TUI layout math uses intentional casts
#![allow(clippy::cast_possible_truncation)]

use super::{CliError, resolve_seed};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io::stdout;
use std::time::{Duration, Instant};
use twenty48::board::SIZE;
use twenty48::render::tile_color;
use twenty48::{
    Direction, Engine, GameRng, Input, Placement, RenderSink, Session, SessionConfig,
    TickOutcome,
};

/// Width of one tile in terminal columns.
const TILE_WIDTH: u16 = 8;
/// Height of one tile in terminal rows.
const TILE_HEIGHT: u16 = 3;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven.
pub(crate) fn execute(seed: Option<u64>, frame_ms: u64) -> Result<(), CliError> {
    let config = SessionConfig {
        frame_interval: Duration::from_millis(frame_ms.max(1)),
        seed: resolve_seed(seed),
    };

    let engine = Engine::new(GameRng::new(config.seed), TuiSink::default());
    run_tui(Session::new(engine), config)
}

/// Remembers the latest spawn so the UI can highlight it.
#[derive(Debug, Default)]
struct TuiSink {
    last_placed: Option<Placement>,
}

impl RenderSink for TuiSink {
    fn tile_placed(&mut self, placement: Placement) {
        self.last_placed = Some(placement);
    }
}

/// App state for the TUI.
struct App {
    session: Session<GameRng, TuiSink>,
    config: SessionConfig,
    games_played: u32,
    last_move: Option<(Direction, bool)>,
}

impl App {
    fn new(session: Session<GameRng, TuiSink>, config: SessionConfig) -> Self {
        Self {
            session,
            config,
            games_played: 0,
            last_move: None,
        }
    }

    /// Handle a key press. Returns false when the user quits.
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool, CliError> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(false),
            KeyCode::Enter | KeyCode::Char('n') if !self.session.is_running() => {
                if self.session.start()? {
                    self.games_played += 1;
                    self.last_move = None;
                }
            }
            code => self.session.press(input_for(code)),
        }
        Ok(true)
    }

    /// Seed of the tile stream, read back from the session's RNG.
    fn seed(&self) -> u64 {
        self.session.engine().rng().seed()
    }

    fn tick(&mut self) -> Result<(), CliError> {
        match self.session.tick()? {
            TickOutcome::Continue {
                moved: Some((direction, outcome)),
            } => self.last_move = Some((direction, outcome.is_moved())),
            TickOutcome::Continue { moved: None } | TickOutcome::Idle | TickOutcome::GameOver => {}
        }
        Ok(())
    }
}

/// Map a key to a session input. Arrows, hjkl and wasd move.
fn input_for(code: KeyCode) -> Input {
    match code {
        KeyCode::Up | KeyCode::Char('k' | 'w') => Input::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('j' | 's') => Input::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('h' | 'a') => Input::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('l' | 'd') => Input::Direction(Direction::Right),
        _ => Input::Other,
    }
}

fn run_tui(session: Session<GameRng, TuiSink>, config: SessionConfig) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, config);
    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), CliError> {
    let interval = app.config.frame_interval;
    let mut next_frame = Instant::now() + interval;

    loop {
        terminal.draw(|f| ui(f, app))?;

        // Wait for input until the next frame is due
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key)?
        {
            return Ok(());
        }

        let now = Instant::now();
        if now >= next_frame {
            app.tick()?;
            next_frame += interval;
            if next_frame < now {
                next_frame = now + interval;
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3),                             // Header
            Constraint::Length(TILE_HEIGHT * SIZE as u16 + 2), // Board
            Constraint::Min(0),                                // Spacer
            Constraint::Length(3),                             // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_board(f, chunks[1], app);
    render_footer(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let status = if session.is_running() {
        "PLAYING"
    } else if app.games_played == 0 {
        "READY"
    } else {
        "GAME OVER"
    };

    let last = match app.last_move {
        Some((direction, true)) => format!("{direction}"),
        Some((_, false)) => "not allowed".to_string(),
        None => "-".to_string(),
    };

    let title = format!(
        " 2048 | {} | Seed {} | Max tile {} | Moves {} | Last {} ",
        status,
        app.seed(),
        session.board().max_tile(),
        session.accepted_moves(),
        last
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let outer = Block::default().borders(Borders::ALL).title(" Board ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Length(TILE_HEIGHT); SIZE])
        .split(inner);

    let highlight = app.session.engine().sink().last_placed;

    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Length(TILE_WIDTH); SIZE])
            .split(*row_area);

        for (c, cell_area) in cols.iter().enumerate() {
            let value = app.session.board().get(r, c).unwrap_or(0);
            let is_new = highlight.is_some_and(|p| p.row == r && p.col == c);
            f.render_widget(tile_widget(value, is_new), *cell_area);
        }
    }
}

fn tile_widget(value: u32, is_new: bool) -> Paragraph<'static> {
    let (text, style) = match tile_color(value) {
        Some(rgb) => {
            let fg = if value <= 4 { Color::Black } else { Color::White };
            let mut style = Style::default()
                .bg(Color::Rgb(rgb.r, rgb.g, rgb.b))
                .fg(fg)
                .add_modifier(Modifier::BOLD);
            if is_new {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            (value.to_string(), style)
        }
        None => (String::new(), Style::default().fg(Color::DarkGray)),
    };

    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.session.is_running() {
        " [←↑↓→ / hjkl / wasd] Move  [q] Quit "
    } else {
        " [Enter] New game  [q] Quit "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
