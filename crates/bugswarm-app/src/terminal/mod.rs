//! Terminal renderer: drives the tick loop, tracks the mouse as the pointer,
//! and draws the swarm with ratatui. A headless mode renders to a test
//! backend and emits a JSON run report for CI smoke tests.

use std::{
    io::{self, Stdout},
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Sparkline},
};
use serde::Serialize;
use tracing::{debug, error, info};

use bugswarm_core::{Position, SpriteIndex, TickEvents};

use crate::{
    SharedSwarm,
    renderer::{Renderer, RendererContext},
};

const UI_TICK_MILLIS: u64 = 50;
const DEFAULT_HEADLESS_FRAMES: usize = 12;
const MAX_HEADLESS_FRAMES: usize = 360;

/// Directional glyphs indexed by [`SpriteIndex`] (row = dy, col = dx). The
/// centre cell shows a bug turning through rest.
const BUG_GLYPHS: [[char; 3]; 3] = [
    ['↖', '↑', '↗'],
    ['←', '•', '→'],
    ['↙', '↓', '↘'],
];

fn glyph_for(sprite: SpriteIndex) -> char {
    BUG_GLYPHS[sprite.row.min(2)][sprite.col.min(2)]
}

pub struct TerminalRenderer {
    draw_interval: Duration,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            draw_interval: Duration::from_millis(UI_TICK_MILLIS),
        }
    }
}

impl Renderer for TerminalRenderer {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn run(&self, ctx: RendererContext) -> Result<()> {
        if std::env::var_os("BUGSWARM_TERMINAL_HEADLESS").is_some() {
            let report = self.run_headless(ctx)?;
            info!(
                frames = report.frames,
                final_tick = report.final_tick,
                bugs = report.bugs,
                relocations = report.relocations,
                "terminal headless run complete",
            );
            println!("{}", serde_json::to_string(&report)?);
            return Ok(());
        }
        self.run_interactive(ctx)
    }
}

impl TerminalRenderer {
    fn run_interactive(&self, ctx: RendererContext) -> Result<()> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )
        .context("failed to configure terminal")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to build terminal")?;

        let result = run_event_loop(self, &mut terminal, ctx);

        if let Err(err) = disable_raw_mode() {
            error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(
            terminal.backend_mut(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        ) {
            error!(?err, "failed to restore terminal");
        }
        result
    }

    fn run_headless(&self, ctx: RendererContext) -> Result<HeadlessReport> {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).context("failed to build test backend")?;
        let mut app = TerminalApp::new(ctx);

        // First draw sizes the viewport from the test backend.
        terminal.draw(|frame| app.draw(frame))?;
        {
            let mut swarm = app.swarm_guard();
            let width = swarm.config().viewport_width;
            let height = swarm.config().viewport_height;
            swarm.set_pointer(Position::new(width * 0.5, height * 0.5));
            swarm.set_paused(false);
        }

        let frames = self.headless_frame_budget();
        let mut relocations = 0usize;
        for _ in 0..frames {
            relocations += app.step_once().relocations;
            terminal.draw(|frame| app.draw(frame))?;
        }

        let swarm = app.swarm_guard();
        Ok(HeadlessReport {
            frames,
            final_tick: swarm.tick().0,
            bugs: swarm.bug_count(),
            relocations,
            paused: swarm.paused(),
        })
    }

    fn headless_frame_budget(&self) -> usize {
        std::env::var("BUGSWARM_TERMINAL_HEADLESS_FRAMES")
            .ok()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|value| *value > 0)
            .map(|value| value.min(MAX_HEADLESS_FRAMES))
            .unwrap_or(DEFAULT_HEADLESS_FRAMES)
    }
}

/// Summary emitted on stdout after a headless run.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessReport {
    pub frames: usize,
    pub final_tick: u64,
    pub bugs: usize,
    pub relocations: usize,
    pub paused: bool,
}

fn run_event_loop(
    renderer: &TerminalRenderer,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ctx: RendererContext,
) -> Result<()> {
    let mut app = TerminalApp::new(ctx);
    terminal.draw(|frame| app.draw(frame))?;

    loop {
        let now = Instant::now();
        if now >= app.next_tick {
            let events = app.step_once();
            if events.relocations > 0 {
                debug!(
                    tick = events.tick.0,
                    relocations = events.relocations,
                    "bugs evaded the pointer",
                );
            }
            app.next_tick = now + app.tick_interval;
        }
        if now.duration_since(app.last_draw) >= renderer.draw_interval {
            terminal.draw(|frame| app.draw(frame))?;
            app.last_draw = now;
        }

        let timeout = app
            .next_tick
            .saturating_duration_since(Instant::now())
            .min(renderer.draw_interval);
        if event::poll(timeout)? && app.handle_event(event::read()?) {
            break;
        }
    }

    Ok(())
}

struct TerminalApp {
    swarm: SharedSwarm,
    tick_interval: Duration,
    next_tick: Instant,
    last_draw: Instant,
    arena: Rect,
}

impl TerminalApp {
    fn new(ctx: RendererContext) -> Self {
        let tick_interval = ctx
            .swarm
            .lock()
            .expect("swarm mutex poisoned")
            .config()
            .tick_interval();
        Self {
            swarm: Arc::clone(&ctx.swarm),
            tick_interval,
            next_tick: Instant::now() + tick_interval,
            last_draw: Instant::now(),
            arena: Rect::default(),
        }
    }

    fn swarm_guard(&self) -> std::sync::MutexGuard<'_, bugswarm_core::SwarmState> {
        self.swarm.lock().expect("swarm mutex poisoned")
    }

    fn step_once(&mut self) -> TickEvents {
        self.swarm_guard().step()
    }

    /// Returns true when the session should end.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => return self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusGained => self.swarm_guard().set_paused(false),
            Event::FocusLost => self.swarm_guard().set_paused(true),
            _ => {}
        }
        false
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let inside = self.arena.width > 0
            && self.arena.height > 0
            && mouse.column >= self.arena.x
            && mouse.column < self.arena.x + self.arena.width
            && mouse.row >= self.arena.y
            && mouse.row < self.arena.y + self.arena.height;
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let mut swarm = self.swarm_guard();
                if inside {
                    swarm.set_pointer(Position::new(
                        f32::from(mouse.column - self.arena.x),
                        f32::from(mouse.row - self.arena.y),
                    ));
                    swarm.set_paused(false);
                } else {
                    swarm.set_paused(true);
                }
            }
            MouseEventKind::Down(MouseButton::Left) if inside => {
                let mut swarm = self.swarm_guard();
                let index = swarm.spawn();
                info!(bug = index, bugs = swarm.bug_count(), "spawned bug on click");
            }
            _ => {}
        }
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(4),
            ])
            .split(frame.area());
        self.draw_status(frame, chunks[0]);
        self.draw_arena(frame, chunks[1]);
        self.draw_activity(frame, chunks[2]);
    }

    fn draw_status(&self, frame: &mut Frame<'_>, area: Rect) {
        let swarm = self.swarm_guard();
        let pointer = swarm.pointer();
        let mode = if swarm.paused() {
            Span::styled(
                "paused",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("chasing", Style::default().fg(Color::Green))
        };
        let line = Line::from(vec![
            Span::raw(format!("tick {}", swarm.tick().0)),
            Span::raw("  "),
            Span::raw(format!("bugs {}", swarm.bug_count())),
            Span::raw("  "),
            mode,
            Span::raw("  "),
            Span::raw(format!("pointer ({:.0}, {:.0})", pointer.x, pointer.y)),
        ]);
        let widget =
            Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("bugswarm"));
        frame.render_widget(widget, area);
    }

    fn draw_arena(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("swarm");
        let inner = block.inner(area);
        self.arena = inner;

        let mut swarm = self.swarm_guard();
        if inner.width > 0 && inner.height > 0 {
            let _ = swarm.set_viewport(f32::from(inner.width), f32::from(inner.height));
        }

        let mut rows = vec![vec![' '; inner.width as usize]; inner.height as usize];
        for sprite in swarm.frame() {
            let col = sprite.position.x.round() as i32;
            let row = sprite.position.y.round() as i32;
            if (0..i32::from(inner.width)).contains(&col)
                && (0..i32::from(inner.height)).contains(&row)
            {
                rows[row as usize][col as usize] = glyph_for(sprite.sprite);
            }
        }
        let text: Vec<Line> = rows
            .into_iter()
            .map(|row| Line::from(row.into_iter().collect::<String>()))
            .collect();
        let widget = Paragraph::new(text)
            .style(Style::default().fg(Color::Green))
            .block(block);
        frame.render_widget(widget, area);
    }

    fn draw_activity(&self, frame: &mut Frame<'_>, area: Rect) {
        let swarm = self.swarm_guard();
        let capacity = usize::from(area.width.saturating_sub(2)).max(1);
        let data: Vec<u64> = swarm
            .history()
            .map(|summary| summary.relocations as u64)
            .collect();
        let tail = data.len().saturating_sub(capacity);
        let widget = Sparkline::default()
            .block(Block::default().borders(Borders::ALL).title("evasions"))
            .style(Style::default().fg(Color::Magenta))
            .data(&data[tail..]);
        frame.render_widget(widget, area);
    }
}
