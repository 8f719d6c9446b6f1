//! Core game engine — daily puzzle generation, scoring, and session state.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `rng`       | Deterministic sfc32 generator and non-mutating Fisher–Yates shuffle |
//! | `calendar`  | Daily seed, weekday difficulty, and day names from the calendar date |
//! | `models`    | All shared types: categories, questions, tiles, puzzles, saved progress |
//! | `bank`      | Read-only question bank loading and filtering |
//! | `generator` | Single entry point `generate_daily()` — selection, fallback, grid build |
//! | `scoring`   | Pure time-decay scoring and tile-hiding functions |
//! | `store`     | Versioned per-day progress persistence (memory and file backed) |
//! | `session`   | `GameController` state machine driving one day of play |

pub mod bank;
pub mod calendar;
pub mod generator;
pub mod models;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod store;

// Re-export the public API surface so callers can use
// `game_engine::generate_daily` without reaching into sub-modules.
pub use bank::{BankError, QuestionBank};
pub use calendar::{daily_seed, day_name, difficulty_band, difficulty_for, today, DifficultyBand};
pub use generator::{generate_daily, generate_with_seed, GenerateError};
pub use models::{
    Category, DailyPuzzle, GridTile, QuestionRecord, QuestionSession, SavedProgress,
    CATEGORY_ORDER, GRID_DISTRACTORS, GRID_TILES, PLACEHOLDER_TEXT, QUESTION_COUNT,
};
pub use rng::{shuffled, Sfc32};
pub use scoring::{is_hidden, num_hidden, points, GRACE_SECONDS, MAX_POINTS};
pub use session::{Feedback, GameController, Phase, RESOLVED_DELAY_SECONDS, TICK_SECONDS};
pub use store::{storage_key, FileStore, MemoryStore, ProgressStore, SCHEMA_VERSION};
