use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The six fixed question categories, in daily play order.
///
/// Bank data carries these as short lowercase tags (`"geo"`, `"ent"`, ...);
/// the serde rename enforces the closed set at the loading boundary, so a
/// misspelled tag fails the parse instead of leaking a loose string in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Geo,
    Ent,
    Hist,
    Art,
    Sci,
    Sport,
}

/// Daily play order. Category order is the session order — not randomized.
pub const CATEGORY_ORDER: [Category; 6] = [
    Category::Geo,
    Category::Ent,
    Category::Hist,
    Category::Art,
    Category::Sci,
    Category::Sport,
];

impl Category {
    /// Short tag as it appears in bank data and storage keys.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Geo => "geo",
            Category::Ent => "ent",
            Category::Hist => "hist",
            Category::Art => "art",
            Category::Sci => "sci",
            Category::Sport => "sport",
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Category::Geo => "Geography",
            Category::Ent => "Entertainment",
            Category::Hist => "History",
            Category::Art => "Art & Lit",
            Category::Sci => "Science",
            Category::Sport => "Sports",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// ---------------------------------------------------------------------------
// Question bank records
// ---------------------------------------------------------------------------

/// One immutable question as stored in the bank.
///
/// Field names match the bank's JSON wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Category tag.
    pub cat: Category,
    /// Difficulty 1–7 (matched against the weekday-derived level).
    pub diff: u8,
    /// Question text.
    pub q: String,
    /// The correct answer.
    pub a: String,
    /// Incorrect options, in bank order.
    #[serde(default)]
    pub distractors: Vec<String>,
}

// ---------------------------------------------------------------------------
// Generated puzzle types
// ---------------------------------------------------------------------------

/// Tiles per grid: one correct answer plus fifteen distractors.
pub const GRID_TILES: usize = 16;

/// Distractors per grid.
pub const GRID_DISTRACTORS: usize = 15;

/// Placeholder text padding out grids when the bank record is short.
pub const PLACEHOLDER_TEXT: &str = "?";

/// Questions per day — one per category.
pub const QUESTION_COUNT: usize = 6;

/// One answer tile in the 4x4 grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridTile {
    /// Positional id unique within the question, e.g. `"geo-3"`.
    pub id: String,
    /// Displayed text.
    pub text: String,
    /// Exactly one tile per grid carries `true`.
    pub is_correct: bool,
    /// Rank in `[0, 14]` controlling when this distractor vanishes.
    /// `None` for the correct tile, which never hides.
    pub disappear_order: Option<u8>,
}

/// One question with its generated grid and (once answered) its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSession {
    pub question: QuestionRecord,
    /// Exactly [`GRID_TILES`] tiles in display order.
    pub grid: Vec<GridTile>,
    /// Points earned, set exactly once when the player picks a tile.
    pub category_score: Option<u8>,
}

/// A full day's generated puzzle: six sessions in category order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPuzzle {
    /// The date-derived seed all randomness came from.
    pub seed: u32,
    /// Weekday-derived difficulty level 1–7.
    pub difficulty: u8,
    /// One session per category, in [`CATEGORY_ORDER`].
    pub sessions: Vec<QuestionSession>,
}

// ---------------------------------------------------------------------------
// Persisted progress
// ---------------------------------------------------------------------------

/// Per-day progress as written to the store.
///
/// Wire shape: `{"step": n, "progress": {"geo": 15, ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedProgress {
    /// Questions resolved so far, 0–6; 6 means the day is complete.
    pub step: u8,
    /// Score per answered category (0 for a wrong answer).
    pub progress: BTreeMap<Category, u8>,
}
