//! (noun, verb) search
//!
//! Sweeps every pair in `[0, limit)²` in row-major order, patching the pair
//! into a freshly reset session and comparing the output cell against a
//! target. The first matching pair wins; the first fault aborts the sweep.
//!
//! `search_parallel` stripes nouns across worker threads, each with its own
//! session clone, and reports exactly what the sequential sweep would.

use crate::error::{Result, RuntimeError};
use crate::session::Session;
use intcode_spec::{Cell, IntcodeError, SearchConfig};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use tracing::{debug, info};

/// A (noun, verb) pair that produced the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchHit {
    pub noun: Cell,
    pub verb: Cell,
}

impl SearchHit {
    /// `100 * noun + verb`
    pub fn checksum(&self) -> Cell {
        SearchConfig::checksum(self.noun, self.verb)
    }
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "noun = {}, verb = {}", self.noun, self.verb)
    }
}

/// Run one trial: reset, patch both inputs, execute, read the output cell
pub fn trial(
    session: &mut Session,
    noun: Cell,
    verb: Cell,
    config: &SearchConfig,
) -> Result<Cell> {
    session.reset()?;
    session.set_cell(config.noun_addr, noun)?;
    session.set_cell(config.verb_addr, verb)?;
    session.execute()?;
    session.read_cell(config.output_addr)
}

fn validate(config: &SearchConfig) -> Result<()> {
    config.validate().map_err(IntcodeError::from)?;
    Ok(())
}

/// Sequential row-major search
///
/// Returns `Ok(None)` when no pair produces `target`.
pub fn search(
    session: &mut Session,
    target: Cell,
    config: &SearchConfig,
) -> Result<Option<SearchHit>> {
    validate(config)?;
    debug!(target, trials = config.trials(), "search started");

    for noun in 0..config.limit {
        for verb in 0..config.limit {
            if trial(session, noun, verb, config)? == target {
                let hit = SearchHit { noun, verb };
                info!(%hit, checksum = hit.checksum(), "search hit");
                return Ok(Some(hit));
            }
        }
    }

    debug!(target, "search exhausted");
    Ok(None)
}

/// Position of a pair in the row-major sweep
#[inline]
fn ordinal(noun: Cell, verb: Cell, limit: Cell) -> u64 {
    (noun as u64)
        .saturating_mul(limit as u64)
        .saturating_add(verb as u64)
}

/// The first event a worker ran into: a hit or a fault
type Event = (u64, Result<SearchHit>);

fn worker(
    mut session: Session,
    first_noun: Cell,
    stride: usize,
    target: Cell,
    config: &SearchConfig,
    watermark: &AtomicU64,
) -> Option<Event> {
    for noun in (first_noun..config.limit).step_by(stride) {
        for verb in 0..config.limit {
            let ord = ordinal(noun, verb, config.limit);
            // Someone already found an earlier event; nothing later can win
            if ord > watermark.load(Ordering::Acquire) {
                return None;
            }

            let event = match trial(&mut session, noun, verb, config) {
                Ok(value) if value == target => Ok(SearchHit { noun, verb }),
                Ok(_) => continue,
                Err(e) => Err(e),
            };
            watermark.fetch_min(ord, Ordering::AcqRel);
            return Some((ord, event));
        }
    }
    None
}

/// Parallel search over `workers` threads
///
/// Each worker owns a clone of `session`; `session` itself is left untouched.
/// The result is the earliest row-major event across all workers, so it is
/// identical to what [`search`] returns.
pub fn search_parallel(
    session: &Session,
    target: Cell,
    config: &SearchConfig,
    workers: usize,
) -> Result<Option<SearchHit>> {
    validate(config)?;
    let workers = workers.clamp(1, config.limit as usize);
    debug!(target, workers, trials = config.trials(), "parallel search started");

    let watermark = AtomicU64::new(u64::MAX);

    let events = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|w| {
                let session = session.clone();
                let watermark = &watermark;
                scope.spawn(move || worker(session, w as Cell, workers, target, config, watermark))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| RuntimeError::Other("search worker panicked".to_string()))
            })
            .collect::<Vec<_>>()
    });

    let mut earliest: Option<Event> = None;
    for event in events {
        if let Some((ord, outcome)) = event? {
            if earliest.as_ref().map_or(true, |(best, _)| ord < *best) {
                earliest = Some((ord, outcome));
            }
        }
    }

    match earliest {
        Some((_, Ok(hit))) => {
            info!(%hit, checksum = hit.checksum(), "search hit");
            Ok(Some(hit))
        }
        Some((_, Err(e))) => Err(e),
        None => {
            debug!(target, "search exhausted");
            Ok(None)
        }
    }
}
