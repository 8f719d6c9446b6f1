//! Time-decay scoring and tile-hiding functions.
//!
//! Both are pure step functions of elapsed seconds. Points plateau at 15
//! for the first three seconds, then drop by one per started second,
//! reaching zero at 18 s. Tile hiding follows the same clock: after the
//! grace period one more distractor is hidden per started second, in
//! the grid's day-stable disappear ordering.

use crate::game_engine::models::GridTile;

/// Maximum points per question, earned inside the grace period.
pub const MAX_POINTS: u8 = 15;

/// Seconds before decay and tile-hiding begin.
pub const GRACE_SECONDS: f64 = 3.0;

/// Points for a correct answer at `elapsed` seconds.
///
/// `15` for `elapsed <= 3`, else `max(0, 15 - ceil(elapsed - 3))`.
/// Monotonically non-increasing; hits zero at exactly 18 s.
pub fn points(elapsed: f64) -> u8 {
    if elapsed <= GRACE_SECONDS {
        return MAX_POINTS;
    }
    let penalty = (elapsed - GRACE_SECONDS).ceil() as i64;
    (MAX_POINTS as i64 - penalty).max(0) as u8
}

/// How many distractors are hidden at `elapsed` seconds.
///
/// `0` within the grace period, then `ceil(elapsed - 3)`. The value is
/// uncapped; a grid only has 15 distractors to hide.
pub fn num_hidden(elapsed: f64) -> u32 {
    if elapsed <= GRACE_SECONDS {
        return 0;
    }
    (elapsed - GRACE_SECONDS).ceil() as u32
}

/// Whether a tile is hidden at `elapsed` seconds.
///
/// The correct tile has no disappear order and is never hidden.
pub fn is_hidden(tile: &GridTile, elapsed: f64) -> bool {
    match tile.disappear_order {
        Some(order) => (order as u32) < num_hidden(elapsed),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_plateau_then_decay() {
        assert_eq!(points(0.0), 15);
        assert_eq!(points(2.5), 15);
        assert_eq!(points(3.0), 15);
        assert_eq!(points(3.1), 14);
        assert_eq!(points(4.0), 14);
        assert_eq!(points(4.1), 13);
        assert_eq!(points(5.5), 12);
        // Last second worth a point: ceil(e - 3) = 14 on (16, 17].
        assert_eq!(points(16.5), 1);
        assert_eq!(points(17.0), 1);
        assert_eq!(points(17.9), 0);
        assert_eq!(points(18.0), 0);
        assert_eq!(points(1000.0), 0);
    }

    #[test]
    fn points_never_increase() {
        let mut last = points(0.0);
        let mut e = 0.0;
        while e < 25.0 {
            let p = points(e);
            assert!(p <= last, "points increased at e={e}");
            last = p;
            e += 0.05;
        }
    }

    #[test]
    fn num_hidden_steps_per_started_second() {
        assert_eq!(num_hidden(0.0), 0);
        assert_eq!(num_hidden(3.0), 0);
        assert_eq!(num_hidden(3.1), 1);
        assert_eq!(num_hidden(4.0), 1);
        assert_eq!(num_hidden(4.1), 2);
        assert_eq!(num_hidden(18.0), 15);
        assert_eq!(num_hidden(30.0), 27);
    }

    #[test]
    fn correct_tile_is_never_hidden() {
        let tile = GridTile {
            id: "geo-0".into(),
            text: "Paris".into(),
            is_correct: true,
            disappear_order: None,
        };
        assert!(!is_hidden(&tile, 0.0));
        assert!(!is_hidden(&tile, 1000.0));
    }

    #[test]
    fn distractor_hides_once_its_rank_is_reached() {
        let tile = GridTile {
            id: "geo-1".into(),
            text: "Lyon".into(),
            is_correct: false,
            disappear_order: Some(2),
        };
        assert!(!is_hidden(&tile, 3.0));
        assert!(!is_hidden(&tile, 4.5)); // num_hidden = 2, rank 2 not yet hidden
        assert!(is_hidden(&tile, 5.1)); // num_hidden = 3
    }
}
