//! Tagged, line-oriented event log.
//!
//! Stderr is unusable while the terminal is in raw mode, so engine events go
//! to an append-only file when one is configured. Write failures disable the
//! log instead of interrupting the game.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};

use crate::core::TickEvent;

pub struct EventLog<W: Write = File> {
    out: Option<W>,
}

impl EventLog<File> {
    pub fn open(path: Option<&str>) -> io::Result<Self> {
        let out = match path {
            Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
            None => None,
        };
        Ok(Self { out })
    }
}

impl<W: Write> EventLog<W> {
    pub fn to_writer(out: W) -> Self {
        Self { out: Some(out) }
    }

    pub fn disabled() -> Self {
        Self { out: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn line(&mut self, tag: &str, message: &str) {
        if let Some(out) = self.out.as_mut() {
            if writeln!(out, "[{}] {}", tag, message).is_err() {
                self.out = None;
            }
        }
    }

    /// Log what a gravity tick did; quiet ticks are skipped.
    pub fn tick(&mut self, event: TickEvent, score: u32) {
        if event.game_over {
            self.line("Engine", "game over, board reset");
        } else if event.landed {
            self.line(
                "Engine",
                &format!(
                    "landed lines={} award={} score={}",
                    event.lines_cleared, event.line_clear_score, score
                ),
            );
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_lines() {
        let mut log = EventLog::to_writer(Vec::new());
        log.tick(TickEvent::default(), 0);
        log.tick(
            TickEvent {
                landed: true,
                lines_cleared: 2,
                line_clear_score: 400,
                game_over: false,
            },
            900,
        );
        log.tick(
            TickEvent {
                game_over: true,
                ..TickEvent::default()
            },
            0,
        );

        let text = String::from_utf8(log.into_inner().unwrap()).unwrap();
        assert_eq!(
            text,
            "[Engine] landed lines=2 award=400 score=900\n[Engine] game over, board reset\n"
        );
    }

    #[test]
    fn test_disabled_log_swallows_lines() {
        let mut log: EventLog<Vec<u8>> = EventLog::disabled();
        log.line("Driver", "ignored");
        assert!(!log.is_enabled());
        assert!(log.into_inner().is_none());
    }
}
