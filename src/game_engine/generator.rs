//! Daily puzzle generation — seeded selection, fallback, grid construction.
//!
//! ## RNG ordering
//!
//! Each category consumes draws in a fixed sequence: one draw to select
//! the question, then three shuffles (distractor pool, disappear-order
//! permutation, 16-tile grid). Categories are processed in
//! [`CATEGORY_ORDER`]. Reordering any of these calls changes the puzzle
//! for every player on that day, so this sequence is load-bearing the
//! same way a determinism test is.

use chrono::NaiveDate;
use thiserror::Error;

use crate::game_engine::{
    bank::QuestionBank,
    calendar,
    models::{
        Category, DailyPuzzle, GridTile, QuestionRecord, QuestionSession, CATEGORY_ORDER,
        GRID_DISTRACTORS, PLACEHOLDER_TEXT,
    },
    rng::{shuffled, Sfc32},
};

/// Candidates kept after the closest-difficulty fallback sort.
const FALLBACK_POOL_SIZE: usize = 5;

/// Fatal generation failures. There is no partial puzzle: any of these
/// means no game is offered for the day.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// The bank holds zero questions for a category, even ignoring
    /// difficulty.
    #[error("no questions available for category {0}")]
    EmptyCategory(Category),
}

/// Generate the puzzle for a calendar date.
///
/// Seed and difficulty both derive from the date, so calling this twice
/// for the same date yields identical output.
pub fn generate_daily(date: NaiveDate, bank: &QuestionBank) -> Result<DailyPuzzle, GenerateError> {
    generate_with_seed(calendar::daily_seed(date), calendar::difficulty_for(date), bank)
}

/// Generate from an explicit seed and difficulty level.
///
/// This is the deterministic core of [`generate_daily`]; it exists as
/// its own entry point so callers can reproduce a specific day.
pub fn generate_with_seed(
    seed: u32,
    difficulty: u8,
    bank: &QuestionBank,
) -> Result<DailyPuzzle, GenerateError> {
    let mut rng = Sfc32::from_seed(seed);

    let mut sessions = Vec::with_capacity(CATEGORY_ORDER.len());
    for cat in CATEGORY_ORDER {
        let record = select_question(&mut rng, bank, cat, difficulty)?;
        let grid = build_grid(&mut rng, &record, cat);
        sessions.push(QuestionSession {
            question: record,
            grid,
            category_score: None,
        });
    }

    log::info!(
        "generated daily puzzle: seed={} difficulty={} sessions={}",
        seed,
        difficulty,
        sessions.len()
    );

    Ok(DailyPuzzle {
        seed,
        difficulty,
        sessions,
    })
}

/// Pick one question for a category. Consumes exactly one draw.
fn select_question(
    rng: &mut Sfc32,
    bank: &QuestionBank,
    cat: Category,
    difficulty: u8,
) -> Result<QuestionRecord, GenerateError> {
    let mut pool = bank.filter(cat, difficulty);

    if pool.is_empty() {
        // Closest-difficulty fallback: stable sort keeps bank order on
        // ties, truncated to a fixed candidate count before selection.
        let mut all = bank.by_category(cat);
        all.sort_by_key(|r| (r.diff as i16 - difficulty as i16).abs());
        all.truncate(FALLBACK_POOL_SIZE);
        pool = all;
    }

    if pool.is_empty() {
        return Err(GenerateError::EmptyCategory(cat));
    }

    Ok(pool[rng.next_index(pool.len())].clone())
}

/// Build the 16-tile grid for a selected question.
///
/// Consumes three shuffles in order: padded distractor pool,
/// disappear-order permutation, combined grid.
fn build_grid(rng: &mut Sfc32, record: &QuestionRecord, cat: Category) -> Vec<GridTile> {
    // Pad with placeholders so malformed bank entries still fill a grid.
    let mut source = record.distractors.clone();
    while source.len() < GRID_DISTRACTORS {
        source.push(PLACEHOLDER_TEXT.to_string());
    }

    let mut distractors = shuffled(&source, rng);
    distractors.truncate(GRID_DISTRACTORS);

    // Random but day-stable order in which distractors vanish: a
    // permutation of [0, 14] assigned element-wise.
    let identity: Vec<u8> = (0..GRID_DISTRACTORS as u8).collect();
    let orders = shuffled(&identity, rng);

    let mut tiles = Vec::with_capacity(GRID_DISTRACTORS + 1);
    tiles.push(GridTile {
        id: String::new(),
        text: record.a.clone(),
        is_correct: true,
        disappear_order: None,
    });
    for (text, order) in distractors.into_iter().zip(orders) {
        tiles.push(GridTile {
            id: String::new(),
            text,
            is_correct: false,
            disappear_order: Some(order),
        });
    }

    // Final display shuffle, then positional ids.
    let mut grid = shuffled(&tiles, rng);
    for (idx, tile) in grid.iter_mut().enumerate() {
        tile.id = format!("{}-{}", cat.tag(), idx);
    }
    grid
}
