//! Game session controller — the scoring and visibility state machine.
//!
//! One controller owns the whole day: the generated puzzle, the current
//! phase, per-category progress, and the write-through to the progress
//! store. All mutation goes through its methods; there are no ambient
//! globals and no callbacks.
//!
//! Construction is the load phase: [`GameController::new`] generates the
//! puzzle (failing fatally if the bank cannot cover a category) and
//! resumes any saved state for the day. After that the phases run
//! linearly Intro → Playing → Summary, with [`reset`] as the only way
//! back.
//!
//! ## Timers
//!
//! The Armed countdown and the fixed delay out of Resolved are the only
//! time-driven behaviours. Both are modelled as accumulation inside the
//! current sub-state, advanced only by [`tick`]. Leaving a sub-state
//! drops its timer with it, so a stale tick can never mutate a question
//! that has already advanced and the Resolved delay fires at most once
//! per entry.
//!
//! [`reset`]: GameController::reset
//! [`tick`]: GameController::tick

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::game_engine::{
    bank::QuestionBank,
    calendar,
    generator::{self, GenerateError},
    models::{Category, DailyPuzzle, GridTile, QuestionSession, SavedProgress, QUESTION_COUNT},
    scoring,
    store::ProgressStore,
};

/// Seconds the outcome is displayed before the next question (or summary).
pub const RESOLVED_DELAY_SECONDS: f64 = 2.0;

/// Suggested countdown tick granularity for drivers, in seconds.
pub const TICK_SECONDS: f64 = 0.1;

/// Top-level session phase. Linear; only [`GameController::reset`] goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Playing,
    Summary,
}

/// Outcome of a tile selection, displayed while Resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// The tile the player picked.
    pub tile_id: String,
    pub correct: bool,
}

/// Per-question sub-state while Playing. The timer lives inside the
/// variant so exiting the state cancels it.
#[derive(Debug, Clone, PartialEq)]
enum QuestionPhase {
    /// Countdown running; accepts exactly one selection.
    Armed { elapsed: f64 },
    /// Outcome shown; advances after [`RESOLVED_DELAY_SECONDS`].
    Resolved { since: f64, feedback: Feedback },
}

/// The single owner of all mutable game state for one day.
pub struct GameController<S: ProgressStore> {
    puzzle: DailyPuzzle,
    day_name: &'static str,
    phase: Phase,
    step: usize,
    progress: BTreeMap<Category, u8>,
    question: QuestionPhase,
    store: S,
}

impl<S: ProgressStore> GameController<S> {
    /// Generate the day's puzzle and resume any saved progress.
    ///
    /// A saved step of 6 or more resumes straight into Summary; a
    /// partial save resumes into Playing at that step; no usable save
    /// starts fresh at Intro.
    pub fn new(date: NaiveDate, bank: &QuestionBank, store: S) -> Result<Self, GenerateError> {
        let puzzle = generator::generate_daily(date, bank)?;
        let mut controller = Self {
            puzzle,
            day_name: calendar::day_name(date),
            phase: Phase::Intro,
            step: 0,
            progress: BTreeMap::new(),
            question: QuestionPhase::Armed { elapsed: 0.0 },
            store,
        };

        if let Some(saved) = controller.store.load(controller.puzzle.seed) {
            controller.step = (saved.step as usize).min(QUESTION_COUNT);
            controller.progress = saved.progress;
            for session in &mut controller.puzzle.sessions {
                session.category_score =
                    controller.progress.get(&session.question.cat).copied();
            }
            controller.phase = if controller.step >= QUESTION_COUNT {
                Phase::Summary
            } else {
                Phase::Playing
            };
            log::debug!(
                "resumed seed {} at step {} ({:?})",
                controller.puzzle.seed,
                controller.step,
                controller.phase
            );
        }

        Ok(controller)
    }

    // -- accessors ----------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Questions resolved so far, 0–6.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn seed(&self) -> u32 {
        self.puzzle.seed
    }

    /// Weekday-derived difficulty level 1–7.
    pub fn difficulty(&self) -> u8 {
        self.puzzle.difficulty
    }

    /// English weekday name for the day this session was built for.
    pub fn day_name(&self) -> &'static str {
        self.day_name
    }

    /// All six question sessions in category order.
    pub fn sessions(&self) -> &[QuestionSession] {
        &self.puzzle.sessions
    }

    /// The question currently in play, if any.
    pub fn current(&self) -> Option<&QuestionSession> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.puzzle.sessions.get(self.step)
    }

    /// Elapsed seconds on the current question while the countdown runs.
    pub fn elapsed(&self) -> Option<f64> {
        match (&self.phase, &self.question) {
            (Phase::Playing, QuestionPhase::Armed { elapsed }) => Some(*elapsed),
            _ => None,
        }
    }

    /// The displayed outcome while Resolved.
    pub fn feedback(&self) -> Option<&Feedback> {
        match (&self.phase, &self.question) {
            (Phase::Playing, QuestionPhase::Resolved { feedback, .. }) => Some(feedback),
            _ => None,
        }
    }

    /// Whether a tile is currently hidden by the disappearance rule.
    ///
    /// Only meaningful while the countdown runs; during Resolved the
    /// full grid is shown with the outcome.
    pub fn is_tile_hidden(&self, tile: &GridTile) -> bool {
        match self.elapsed() {
            Some(elapsed) => scoring::is_hidden(tile, elapsed),
            None => false,
        }
    }

    /// Score for a category, present once it has been answered.
    pub fn category_score(&self, cat: Category) -> Option<u8> {
        self.progress.get(&cat).copied()
    }

    /// All per-category scores recorded so far.
    pub fn progress(&self) -> &BTreeMap<Category, u8> {
        &self.progress
    }

    /// Sum of all recorded category scores.
    pub fn total_score(&self) -> u32 {
        self.progress.values().map(|&p| p as u32).sum()
    }

    /// How many categories have been answered.
    pub fn answered_count(&self) -> usize {
        self.progress.len()
    }

    /// Give the store back, e.g. to rebuild a controller over the same
    /// persistence for a resume.
    pub fn into_store(self) -> S {
        self.store
    }

    // -- events -------------------------------------------------------------

    /// Leave the intro and arm the first question. No-op outside Intro.
    pub fn start(&mut self) {
        if self.phase != Phase::Intro {
            return;
        }
        self.phase = Phase::Playing;
        self.question = QuestionPhase::Armed { elapsed: 0.0 };
        self.persist();
    }

    /// Advance time by `dt` seconds.
    ///
    /// While Armed this runs the countdown; while Resolved it counts
    /// down the fixed display delay and then advances exactly once.
    /// No-op in every other phase.
    pub fn tick(&mut self, dt: f64) {
        if self.phase != Phase::Playing {
            return;
        }
        let advance = match &mut self.question {
            QuestionPhase::Armed { elapsed } => {
                *elapsed += dt;
                false
            }
            QuestionPhase::Resolved { since, .. } => {
                *since += dt;
                *since >= RESOLVED_DELAY_SECONDS
            }
        };
        if advance {
            self.advance();
        }
    }

    /// Handle a tile selection. Returns whether the event was accepted.
    ///
    /// Accepted only while Armed with a known, currently visible tile
    /// id; a correct tile earns the time-decayed points, a wrong tile
    /// records zero. Selections of hidden tiles and any re-entrant
    /// selection while Resolved are silently ignored.
    pub fn choose(&mut self, tile_id: &str) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let elapsed = match &self.question {
            QuestionPhase::Armed { elapsed } => *elapsed,
            QuestionPhase::Resolved { .. } => return false,
        };
        let Some(session) = self.puzzle.sessions.get_mut(self.step) else {
            return false;
        };
        let Some(tile) = session.grid.iter().find(|t| t.id == tile_id) else {
            return false;
        };
        // A tile the disappearance rule has removed is no longer selectable.
        if scoring::is_hidden(tile, elapsed) {
            return false;
        }

        let correct = tile.is_correct;
        let earned = if correct { scoring::points(elapsed) } else { 0 };
        session.category_score = Some(earned);
        self.progress.insert(session.question.cat, earned);

        log::debug!(
            "step {} answered {} at {:.1}s for {} points",
            self.step,
            if correct { "correctly" } else { "wrong" },
            elapsed,
            earned
        );

        self.question = QuestionPhase::Resolved {
            since: 0.0,
            feedback: Feedback {
                tile_id: tile_id.to_string(),
                correct,
            },
        };
        self.persist();
        true
    }

    /// Clear all persisted state and restart the day at Intro.
    ///
    /// Generation is deterministic, so the questions and grids are
    /// unchanged; only progress and phase are wound back.
    pub fn reset(&mut self) {
        self.store.clear();
        self.step = 0;
        self.progress.clear();
        for session in &mut self.puzzle.sessions {
            session.category_score = None;
        }
        self.phase = Phase::Intro;
        self.question = QuestionPhase::Armed { elapsed: 0.0 };
        log::debug!("session reset for seed {}", self.puzzle.seed);
    }

    // -- internals ----------------------------------------------------------

    /// Leave Resolved: either arm the next question or finish the day.
    fn advance(&mut self) {
        self.step += 1;
        if self.step >= QUESTION_COUNT {
            self.phase = Phase::Summary;
        } else {
            self.question = QuestionPhase::Armed { elapsed: 0.0 };
        }
        self.persist();
    }

    /// Write-through on every state change while Playing or Summary.
    fn persist(&mut self) {
        let saved = SavedProgress {
            step: self.step as u8,
            progress: self.progress.clone(),
        };
        self.store.save(self.puzzle.seed, &saved);
    }
}
