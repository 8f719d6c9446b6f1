//! Question bank loading and filtering.
//!
//! The bank is read-only input: an ordered list of [`QuestionRecord`]s
//! parsed from JSON. Category tags are enforced as the closed
//! [`Category`] enum during the parse, so loose strings never make it
//! past this boundary. Bank order is preserved — the generator's
//! fallback sort is stable and relies on it for tie-breaking.

use thiserror::Error;

use crate::game_engine::models::{Category, QuestionRecord};

/// Errors raised while loading bank data.
#[derive(Debug, Error)]
pub enum BankError {
    /// The JSON failed to parse, including unknown category tags.
    #[error("malformed question bank: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The read-only question bank.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    records: Vec<QuestionRecord>,
}

impl QuestionBank {
    /// Wrap an already-built record list, keeping its order.
    pub fn from_records(records: Vec<QuestionRecord>) -> Self {
        for rec in &records {
            if !(1..=7).contains(&rec.diff) {
                log::warn!(
                    "bank record {:?} has out-of-range difficulty {}; \
                     it will only ever be reachable via fallback",
                    rec.q,
                    rec.diff
                );
            }
        }
        Self { records }
    }

    /// Parse a JSON array of records, e.g. the contents of `questions.json`.
    pub fn from_json_str(json: &str) -> Result<Self, BankError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// All records in bank order.
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    /// Records matching both category and difficulty, in bank order.
    pub fn filter(&self, cat: Category, diff: u8) -> Vec<&QuestionRecord> {
        self.records
            .iter()
            .filter(|r| r.cat == cat && r.diff == diff)
            .collect()
    }

    /// All records for a category regardless of difficulty, in bank order.
    pub fn by_category(&self, cat: Category) -> Vec<&QuestionRecord> {
        self.records.iter().filter(|r| r.cat == cat).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(cat: Category, diff: u8, q: &str) -> QuestionRecord {
        QuestionRecord {
            cat,
            diff,
            q: q.to_string(),
            a: format!("answer to {q}"),
            distractors: vec!["x".into(), "y".into()],
        }
    }

    #[test]
    fn parses_a_json_bank() {
        let json = r#"[
            {"cat": "geo", "diff": 1, "q": "Capital of France?", "a": "Paris",
             "distractors": ["Lyon", "Nice"]},
            {"cat": "sport", "diff": 7, "q": "Holes on a golf course?", "a": "18",
             "distractors": ["9", "16"]}
        ]"#;
        let bank = QuestionBank::from_json_str(json).unwrap();
        assert_eq!(bank.records().len(), 2);
        assert_eq!(bank.records()[0].cat, Category::Geo);
    }

    #[test]
    fn rejects_unknown_category_tag() {
        let json = r#"[{"cat": "bogus", "diff": 1, "q": "?", "a": "x"}]"#;
        let err = QuestionBank::from_json_str(json).unwrap_err();
        assert!(matches!(err, BankError::Parse(_)));
    }

    #[test]
    fn filter_matches_category_and_difficulty() {
        let bank = QuestionBank::from_records(vec![
            rec(Category::Geo, 3, "g3"),
            rec(Category::Geo, 4, "g4"),
            rec(Category::Sci, 3, "s3"),
        ]);
        let hits = bank.filter(Category::Geo, 3);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].q, "g3");
    }

    #[test]
    fn by_category_keeps_bank_order() {
        let bank = QuestionBank::from_records(vec![
            rec(Category::Geo, 5, "first"),
            rec(Category::Sci, 5, "other"),
            rec(Category::Geo, 2, "second"),
        ]);
        let geo: Vec<&str> = bank
            .by_category(Category::Geo)
            .iter()
            .map(|r| r.q.as_str())
            .collect();
        assert_eq!(geo, vec!["first", "second"]);
    }
}
