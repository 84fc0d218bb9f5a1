use crate::roster::Player;
use super::types::{RotationConfig, Shift};

/// Safety cap on the number of generated shifts. A very small shift length
/// would otherwise produce an unbounded schedule.
pub const MAX_PERIODS: i64 = 100;

/// Outcome of [`plan_rotation`], when the caller wants to know which guard
/// rejected the configuration instead of re-checking it.
#[derive(Debug, Clone, PartialEq)]
pub enum RotationOutcome {
    Shifts(Vec<Shift>),
    InvalidConfig,
    TooManyShifts,
}

/// Number of shifts a configuration asks for: `ceil(game_minutes / period_length)`.
/// Returns 0 when the shift length is not positive.
pub fn total_periods(config: &RotationConfig) -> i64 {
    if config.period_length <= 0 || config.game_minutes <= 0 {
        return 0;
    }
    (config.game_minutes - 1) / config.period_length + 1
}

/// Generates the substitution rotation for a game.
///
/// The pool is cycled round-robin in ascending player-id order, with one
/// cursor shared across all shifts so coverage stays fair over the whole
/// game. Invalid or degenerate configurations (non-positive durations, an
/// empty pool, or more than [`MAX_PERIODS`] computed shifts) yield an empty
/// list rather than an error; callers that need to tell those cases apart
/// re-check the guards themselves or use [`plan_rotation`].
///
/// The engine does not require `players.len() >= config.players_on_court`:
/// with an undersized pool the cursor wraps and the same player can appear
/// more than once within a single shift. Pre-validating the pool size is the
/// caller's job (the web layer rejects such requests up front).
pub fn generate_rotation(players: &[Player], config: &RotationConfig) -> Vec<Shift> {
    // Non-positive durations and an empty pool cannot produce a schedule
    if config.period_length <= 0 || config.game_minutes <= 0 || players.is_empty() {
        return Vec::new();
    }

    let periods = total_periods(config);
    if periods > MAX_PERIODS {
        return Vec::new();
    }

    // Sort players by ID to keep the rotation consistent regardless of input order
    let mut pool: Vec<&Player> = players.iter().collect();
    pool.sort_by(|a, b| a.id.cmp(&b.id));

    let mut shifts = Vec::with_capacity(periods as usize);
    let mut cursor = 0usize;

    for period in 1..=periods as u32 {
        let mut on_court = Vec::with_capacity(config.players_on_court);
        for _ in 0..config.players_on_court {
            on_court.push(pool[cursor % pool.len()].id.clone());
            cursor += 1;
        }
        shifts.push(Shift {
            period,
            players: on_court,
        });
    }

    shifts
}

/// Whether the pool can fill the court without repeating a player within a
/// shift. This is the pre-validation the engine leaves to its callers; both
/// the CLI and the web layer check it before scheduling.
pub fn pool_covers_court(players: &[Player], config: &RotationConfig) -> bool {
    players.len() >= config.players_on_court
}

/// Like [`generate_rotation`], but reports which guard failed instead of
/// collapsing every rejection into an empty list. Built on the same checks,
/// so the two can never disagree about a configuration.
pub fn plan_rotation(players: &[Player], config: &RotationConfig) -> RotationOutcome {
    if config.period_length <= 0 || config.game_minutes <= 0 {
        return RotationOutcome::InvalidConfig;
    }
    if total_periods(config) > MAX_PERIODS {
        return RotationOutcome::TooManyShifts;
    }
    RotationOutcome::Shifts(generate_rotation(players, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Team;

    fn player(id: &str) -> Player {
        Player::new(id, format!("Player {}", id), "0", Team::Home)
    }

    fn config(game_minutes: i64, players_on_court: usize, period_length: i64) -> RotationConfig {
        RotationConfig {
            game_minutes,
            players_on_court,
            period_length,
        }
    }

    #[test]
    fn pool_is_consumed_in_id_order_with_a_shared_cursor() {
        let players = vec![player("p3"), player("p1"), player("p2")];
        let shifts = generate_rotation(&players, &config(12, 2, 4));

        assert_eq!(shifts.len(), 3);
        assert_eq!(shifts[0].players, vec!["p1", "p2"]);
        assert_eq!(shifts[1].players, vec!["p3", "p1"]);
        assert_eq!(shifts[2].players, vec!["p2", "p3"]);
    }

    #[test]
    fn shift_count_is_rounded_up() {
        let players: Vec<Player> = (1..=6).map(|i| player(&format!("p{}", i))).collect();
        // 10 / 4 rounds up to 3 shifts
        let shifts = generate_rotation(&players, &config(10, 5, 4));
        assert_eq!(shifts.len(), 3);
        assert_eq!(shifts[0].period, 1);
        assert_eq!(shifts[2].period, 3);
    }

    #[test]
    fn undersized_pool_wraps_within_a_shift() {
        let players = vec![player("p1"), player("p2")];
        let shifts = generate_rotation(&players, &config(4, 3, 4));

        // Documented caller responsibility: with fewer players than court
        // spots the cursor wraps and a player repeats inside one shift.
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].players, vec!["p1", "p2", "p1"]);
    }

    #[test]
    fn guards_yield_empty_lists() {
        let players = vec![player("p1"), player("p2")];

        assert!(generate_rotation(&players, &config(20, 5, 0)).is_empty());
        assert!(generate_rotation(&players, &config(20, 5, -1)).is_empty());
        assert!(generate_rotation(&players, &config(0, 5, 4)).is_empty());
        assert!(generate_rotation(&[], &config(20, 5, 4)).is_empty());
        // 500 one-minute shifts is over the cap
        assert!(generate_rotation(&players, &config(500, 5, 1)).is_empty());
    }

    #[test]
    fn pool_coverage_is_a_simple_size_check() {
        let players = vec![player("p1"), player("p2"), player("p3")];

        assert!(pool_covers_court(&players, &config(20, 3, 4)));
        assert!(!pool_covers_court(&players, &config(20, 4, 4)));
        assert!(!pool_covers_court(&[], &config(20, 1, 4)));
    }

    #[test]
    fn plan_rotation_names_the_failed_guard() {
        let players = vec![player("p1")];

        assert_eq!(
            plan_rotation(&players, &config(0, 5, 4)),
            RotationOutcome::InvalidConfig
        );
        assert_eq!(
            plan_rotation(&players, &config(500, 5, 1)),
            RotationOutcome::TooManyShifts
        );
        match plan_rotation(&players, &config(8, 1, 4)) {
            RotationOutcome::Shifts(shifts) => assert_eq!(shifts.len(), 2),
            other => panic!("expected shifts, got {:?}", other),
        }
    }
}
