//! Replays a scripted sequence of UI events against a live engine.
//!
//! Scripts drive the engine on virtual time, so debounce behaviour can be
//! checked without waiting:
//!
//! ```text
//! # type "red" quickly, then narrow by year
//! at 0   search r
//! at 80  search re
//! at 160 search red
//! at 900 year 2019
//! at 1200 reset
//! ```
//!
//! Each line is `at <ms> <action>`, where action is `search <text>`,
//! `medium|year|series <value>`, `reset` or `tick`. Text and values may be
//! empty, which clears that field. Times must not decrease.
//!
//! A pending search evaluation fires at its own deadline, before any later
//! event. At the end of the script, virtual time runs on until nothing is
//! pending.

use crate::commands::{listed, CmdMessage, CmdResult, StatusUpdate, NO_GALLERY_MESSAGE};
use crate::controls::{EngineOptions, GalleryEngine};
use crate::debounce::{Clock, ManualClock};
use crate::error::{GalleriaError, Result};
use crate::model::Facet;
use crate::source::ItemSource;
use crate::surface::MemorySurface;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Search(String),
    Select(Facet, String),
    Reset,
    Tick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEvent {
    pub at: Duration,
    pub action: SessionAction,
}

/// Parses a session script.
pub fn parse_script(script: &str) -> Result<Vec<ScriptEvent>> {
    let mut events = Vec::new();
    let mut last = Duration::ZERO;

    for (n, raw) in script.lines().enumerate() {
        let line_no = n + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let event = parse_line(line).map_err(|message| GalleriaError::Script {
            line: line_no,
            message,
        })?;

        if event.at < last {
            return Err(GalleriaError::Script {
                line: line_no,
                message: format!(
                    "time {}ms is earlier than the previous event ({}ms)",
                    event.at.as_millis(),
                    last.as_millis()
                ),
            });
        }
        last = event.at;
        events.push(event);
    }

    Ok(events)
}

fn parse_line(line: &str) -> std::result::Result<ScriptEvent, String> {
    let rest = line
        .strip_prefix("at")
        .filter(|r| r.starts_with(char::is_whitespace))
        .ok_or_else(|| "expected `at <ms> <action>`".to_string())?
        .trim_start();

    let (time, rest) = split_word(rest);
    let ms: u64 = time
        .parse()
        .map_err(|_| format!("invalid time `{}`", time))?;

    let (verb, arg) = split_word(rest);
    let action = match verb {
        "search" => SessionAction::Search(arg.to_string()),
        "reset" if arg.is_empty() => SessionAction::Reset,
        "tick" if arg.is_empty() => SessionAction::Tick,
        "reset" | "tick" => return Err(format!("`{}` takes no argument", verb)),
        "" => return Err("missing action".to_string()),
        other => match Facet::parse(other) {
            Some(facet) => SessionAction::Select(facet, arg.to_string()),
            None => return Err(format!("unknown action `{}`", other)),
        },
    };

    Ok(ScriptEvent {
        at: Duration::from_millis(ms),
        action,
    })
}

fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}

pub fn run<S: ItemSource>(
    source: &S,
    events: &[ScriptEvent],
    options: EngineOptions,
) -> Result<CmdResult> {
    let clock = ManualClock::new();
    let gallery = source.load_gallery()?;
    let Some(mut engine) = GalleryEngine::init(gallery, clock.clone(), MemorySurface::new(), options)
    else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(NO_GALLERY_MESSAGE));
        return Ok(result);
    };

    let mut updates = Vec::new();

    for event in events {
        fire_pending_before(&mut engine, &clock, event.at, &mut updates);
        clock.set(event.at);

        let fired = match &event.action {
            SessionAction::Search(text) => {
                engine.on_search_text_changed(text);
                false
            }
            SessionAction::Select(facet, value) => {
                engine.on_facet_changed(*facet, value);
                true
            }
            SessionAction::Reset => {
                engine.reset();
                true
            }
            SessionAction::Tick => engine.tick().is_some(),
        };

        if fired {
            record(&engine, &clock, &mut updates);
        }
    }

    if let Some(deadline) = engine.pending_deadline() {
        clock.set(deadline);
        if engine.tick().is_some() {
            record(&engine, &clock, &mut updates);
        }
    }

    tracing::debug!(
        events = events.len(),
        evaluations = engine.evaluation_count(),
        "session replayed"
    );

    let evaluation = engine.last_evaluation();
    Ok(CmdResult::default()
        .with_listed_items(listed(engine.items(), &evaluation.visible))
        .with_summary(evaluation.summary, engine.status_text())
        .with_facets(engine.facets().clone())
        .with_status_updates(updates))
}

fn fire_pending_before(
    engine: &mut GalleryEngine<ManualClock, MemorySurface>,
    clock: &ManualClock,
    at: Duration,
    updates: &mut Vec<StatusUpdate>,
) {
    if let Some(deadline) = engine.pending_deadline() {
        if deadline <= at {
            clock.set(deadline);
            if engine.tick().is_some() {
                record(engine, clock, updates);
            }
        }
    }
}

fn record(
    engine: &GalleryEngine<ManualClock, MemorySurface>,
    clock: &ManualClock,
    updates: &mut Vec<StatusUpdate>,
) {
    if let Some(status) = engine.surface().last_status() {
        updates.push(StatusUpdate {
            at_ms: u64::try_from(clock.now().as_millis()).unwrap_or(u64::MAX),
            status: status.to_string(),
        });
    }
}
