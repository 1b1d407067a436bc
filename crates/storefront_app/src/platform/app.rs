use std::io::{self, Stdout};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use engine_logging::engine_info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use storefront_core::{update, AppState, Msg};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

/// How long one poll for terminal input may block before the loop drains
/// pending messages again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);
    engine_info!("storefront starting");

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone());

    let mut terminal = setup_terminal().context("terminal setup")?;
    let result = event_loop(&mut terminal, &msg_tx, &msg_rx, &runner);
    runner.shutdown();
    let restored = restore_terminal(&mut terminal);
    engine_info!("storefront exiting");
    result.and(restored)
}

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> anyhow::Result<AppTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut AppTerminal) -> anyhow::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn event_loop(
    terminal: &mut AppTerminal,
    msg_tx: &mpsc::Sender<Msg>,
    msg_rx: &mpsc::Receiver<Msg>,
    runner: &EffectRunner,
) -> anyhow::Result<()> {
    let mut state = AppState::new();
    let mut scroll = 0usize;
    let mut force_redraw = true;

    let _ = msg_tx.send(Msg::Started);

    loop {
        // Drain queued messages through the pure update function, collecting
        // any effects they produce.
        let mut effects = Vec::new();
        while let Ok(msg) = msg_rx.try_recv() {
            let (next, mut new_effects) = update(std::mem::take(&mut state), msg);
            state = next;
            effects.append(&mut new_effects);
        }
        runner.enqueue(effects);

        if state.consume_dirty() || force_redraw {
            let view = state.view();
            terminal.draw(|frame| ui::render::render(frame, &view, &mut scroll))?;
            force_redraw = false;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(key, &state, msg_tx, &mut scroll, &mut force_redraw) {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => force_redraw = true,
                _ => {}
            }
        } else {
            let _ = msg_tx.send(Msg::Tick);
        }
    }
}

/// Translates a key press into messages or shell-local scrolling. Returns
/// true when the user asked to quit.
fn handle_key(
    key: KeyEvent,
    state: &AppState,
    msg_tx: &mpsc::Sender<Msg>,
    scroll: &mut usize,
    force_redraw: &mut bool,
) -> bool {
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Up => {
            *scroll = scroll.saturating_sub(1);
            *force_redraw = true;
        }
        KeyCode::Down => {
            // Clamped against the grid height during render.
            *scroll += 1;
            *force_redraw = true;
        }
        KeyCode::Backspace => {
            let mut query = state.query().to_string();
            query.pop();
            let _ = msg_tx.send(Msg::QueryChanged(query));
        }
        KeyCode::Char(c) => {
            let mut query = state.query().to_string();
            query.push(c);
            let _ = msg_tx.send(Msg::QueryChanged(query));
        }
        _ => {}
    }
    false
}
