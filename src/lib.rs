//! # trivia_grid
//!
//! A fully offline, deterministic daily trivia engine.
//!
//! Each calendar day the engine picks six questions (one per category)
//! from a static question bank and lays each out as a 4x4 grid of
//! answer tiles. Points decay over time and distractor tiles vanish one
//! per second after a grace period, in an ordering that is random but
//! identical for every player on the same day. Progress persists across
//! restarts for that day.
//!
//! ## How it works
//!
//! 1. Load a [`QuestionBank`] from JSON (`{cat, diff, q, a, distractors}`
//!    records).
//! 2. Build a [`GameController`] for today's date with a
//!    [`ProgressStore`] — it derives the daily seed from the date,
//!    generates the puzzle, and resumes any save for the day.
//! 3. Drive it: `start()`, then `tick(dt)` on a timer and `choose(id)`
//!    on tile selection. Read phase, grids, scores, and tile visibility
//!    back through accessors.
//!
//! ## Key features
//!
//! - **Deterministic**: all randomness flows from an sfc32 generator
//!   seeded with the date as `YYYYMMDD` — the same day produces the
//!   identical puzzle on every platform.
//! - **Weekday difficulty**: Monday asks level-1 questions, Sunday
//!   level 7, with a closest-difficulty fallback when the bank is thin.
//! - **Resumable**: progress is written through on every change under a
//!   versioned per-day key; malformed or missing saves just start the
//!   day fresh.
//!
//! ## Quick start
//!
//! ```rust
//! use trivia_grid::{today, GameController, MemoryStore, Phase, QuestionBank};
//!
//! let bank = QuestionBank::from_json_str(
//!     r#"[
//!       {"cat": "geo",   "diff": 1, "q": "Capital of France?",         "a": "Paris"},
//!       {"cat": "ent",   "diff": 1, "q": "EGOT's G stands for?",       "a": "Grammy"},
//!       {"cat": "hist",  "diff": 1, "q": "Year the Berlin Wall fell?", "a": "1989"},
//!       {"cat": "art",   "diff": 1, "q": "Who painted the Mona Lisa?", "a": "Da Vinci"},
//!       {"cat": "sci",   "diff": 1, "q": "Chemical symbol for gold?",  "a": "Au"},
//!       {"cat": "sport", "diff": 1, "q": "Players per football side?", "a": "11"}
//!     ]"#,
//! )
//! .unwrap();
//!
//! let mut game = GameController::new(today(), &bank, MemoryStore::new()).unwrap();
//! game.start();
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! // Pick the first tile of the first grid (grids pad short
//! // distractor lists with "?" placeholders).
//! let tile_id = game.current().unwrap().grid[0].id.clone();
//! game.tick(0.1);
//! assert!(game.choose(&tile_id));
//! println!("score so far: {}", game.total_score());
//! ```

pub mod game_engine;

// Convenience re-exports so callers can use `trivia_grid::GameController`
// directly without reaching into `game_engine::`.
pub use game_engine::{
    daily_seed, day_name, difficulty_band, difficulty_for, generate_daily, generate_with_seed,
    is_hidden, num_hidden, points, shuffled, storage_key, today, BankError, Category, DailyPuzzle,
    DifficultyBand, Feedback, FileStore, GameController, GenerateError, GridTile, MemoryStore,
    Phase, ProgressStore, QuestionBank, QuestionRecord, QuestionSession, SavedProgress, Sfc32,
    CATEGORY_ORDER, GRACE_SECONDS, GRID_DISTRACTORS, GRID_TILES, MAX_POINTS, PLACEHOLDER_TEXT,
    QUESTION_COUNT, RESOLVED_DELAY_SECONDS, SCHEMA_VERSION, TICK_SECONDS,
};
