//! Terminal runner (default binary).
//!
//! Drives the engine from the outside: key presses become commands, and a
//! fixed gravity interval sends `AdvanceTick`. Configuration comes from the
//! environment (see [`DriverConfig`]).

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use stacktris::config::DriverConfig;
use stacktris::core::{Command, Store};
use stacktris::event_log::EventLog;
use stacktris::input::{handle_key_event, should_quit};
use stacktris::term::{BoardView, TerminalRenderer, Viewport};

#[derive(Debug, Default)]
struct Summary {
    ticks: u64,
    pieces_landed: u64,
    games_over: u64,
    best_score: u32,
}

fn main() -> Result<()> {
    let config = DriverConfig::from_env();
    let mut store = Store::new(config.engine_config()?, config.seed)?;
    let mut log = EventLog::open(config.log_path.as_deref())
        .with_context(|| format!("opening event log {:?}", config.log_path))?;
    log.line(
        "Driver",
        &format!(
            "start seed={} field={}x{} tick_ms={}",
            config.seed, config.width, config.height, config.tick_ms
        ),
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut summary = Summary::default();
    let result = run(&mut term, &mut store, &mut log, &config, &mut summary);

    // Always try to restore terminal state.
    let _ = term.exit();

    let score = store.state().score();
    summary.best_score = summary.best_score.max(score);
    eprintln!(
        "[Driver] seed={} ticks={} landed={} games_over={} score={} best={}",
        config.seed,
        summary.ticks,
        summary.pieces_landed,
        summary.games_over,
        score,
        summary.best_score
    );
    log.line("Driver", &format!("exit score={}", score));
    result
}

fn run(
    term: &mut TerminalRenderer,
    store: &mut Store,
    log: &mut EventLog,
    config: &DriverConfig,
    summary: &mut Summary,
) -> Result<()> {
    store.start();

    let view = BoardView::default();
    let tick_interval = config.tick_interval();
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(view.render(&store.snapshot(), Viewport::new(w, h)))?;

        let timeout = tick_interval
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        if command == Command::ResetState {
                            summary.best_score = summary.best_score.max(store.state().score());
                            log.line("Driver", "reset requested");
                        }
                        if let Err(err) = store.apply(command) {
                            log.line("Driver", &format!("{} rejected: {}", command.as_str(), err));
                        }
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            last_tick = Instant::now();
            let score_before = store.state().score();
            let state = store.apply(Command::AdvanceTick)?;
            summary.ticks += 1;

            if let Some(event) = state.last_event() {
                if event.landed {
                    summary.pieces_landed += 1;
                }
                if event.game_over {
                    summary.games_over += 1;
                    summary.best_score = summary.best_score.max(score_before);
                }
                log.tick(event, state.score());
            }
        }
    }
}
