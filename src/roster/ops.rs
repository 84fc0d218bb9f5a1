use chrono::Utc;

use super::player::{CourtPosition, Player, Team};

/// Fresh player id derived from the clock (millisecond epoch timestamp)
fn next_player_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Validates a new-player request before it touches the roster
pub fn validate_new_player(
    players: &[Player],
    name: &str,
    number: &str,
    team: Team,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Player name is required".to_string());
    }

    if number.trim().is_empty() {
        return Err("Jersey number is required".to_string());
    }
    if !number.trim().chars().all(|c| c.is_ascii_digit()) {
        return Err("Jersey number must contain only digits".to_string());
    }

    // Numbers may repeat across teams but not within one
    if players
        .iter()
        .any(|p| p.team == team && p.number == number.trim())
    {
        return Err(format!("Jersey number {} is already taken on this team", number.trim()));
    }

    Ok(())
}

/// Adds a player to the roster; returns the created record.
/// Callers validate first with [`validate_new_player`].
pub fn add_player(players: &mut Vec<Player>, name: &str, number: &str, team: Team) -> Player {
    let player = Player::new(next_player_id(), name.trim(), number.trim(), team);
    players.push(player.clone());
    player
}

/// Removes a player by id; returns whether anything was removed.
pub fn remove_player(players: &mut Vec<Player>, id: &str) -> bool {
    let before = players.len();
    players.retain(|p| p.id != id);
    players.len() != before
}

/// Flips a player's availability flag; returns the new state, or None if
/// the id is unknown.
pub fn toggle_availability(players: &mut [Player], id: &str) -> Option<bool> {
    let player = players.iter_mut().find(|p| p.id == id)?;
    player.available = !player.available;
    Some(player.available)
}

/// Stores the latest court position for a player; returns whether the id
/// was found. Coordinates are taken as-is; the position input layer clamps
/// them to the visible court first.
pub fn update_position(players: &mut [Player], id: &str, x: f64, y: f64) -> bool {
    match players.iter_mut().find(|p| p.id == id) {
        Some(player) => {
            player.position = CourtPosition { x, y };
            true
        }
        None => false,
    }
}

/// All players on one team, in roster order
pub fn team_players<'a>(players: &'a [Player], team: Team) -> Vec<&'a Player> {
    players.iter().filter(|p| p.team == team).collect()
}

/// Snapshot of the available players on one team, the pool the rotation
/// engine is fed
pub fn available_players(players: &[Player], team: Team) -> Vec<Player> {
    players
        .iter()
        .filter(|p| p.team == team && p.available)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::default_roster;

    #[test]
    fn add_and_remove() {
        let mut players = Vec::new();
        let added = add_player(&mut players, "  Dana  ", " 12 ", Team::Home);

        assert_eq!(players.len(), 1);
        assert_eq!(added.name, "Dana");
        assert_eq!(added.number, "12");
        assert!(added.available);
        assert_eq!(added.position, CourtPosition { x: 50.0, y: 50.0 });

        assert!(remove_player(&mut players, &added.id));
        assert!(players.is_empty());
        assert!(!remove_player(&mut players, "missing"));
    }

    #[test]
    fn toggle_flips_and_filters_the_pool() {
        let mut players = default_roster();
        assert_eq!(available_players(&players, Team::Home).len(), 5);

        assert_eq!(toggle_availability(&mut players, "h3"), Some(false));
        assert_eq!(available_players(&players, Team::Home).len(), 4);
        assert_eq!(toggle_availability(&mut players, "h3"), Some(true));
        assert_eq!(toggle_availability(&mut players, "nope"), None);
    }

    #[test]
    fn validation_rejects_bad_requests() {
        let players = default_roster();

        assert!(validate_new_player(&players, "", "9", Team::Home).is_err());
        assert!(validate_new_player(&players, "Sam", "", Team::Home).is_err());
        assert!(validate_new_player(&players, "Sam", "9a", Team::Home).is_err());
        // "4" is already taken on the home team
        assert!(validate_new_player(&players, "Sam", "4", Team::Home).is_err());
        assert!(validate_new_player(&players, "Sam", "9", Team::Home).is_ok());
    }

    #[test]
    fn numbers_may_repeat_across_teams() {
        let mut players = Vec::new();
        add_player(&mut players, "A", "7", Team::Home);
        assert!(validate_new_player(&players, "B", "7", Team::Away).is_ok());
        assert!(validate_new_player(&players, "B", "7", Team::Home).is_err());
    }

    #[test]
    fn position_updates_stick() {
        let mut players = default_roster();
        assert!(update_position(&mut players, "h1", 30.5, 71.25));
        let p = players.iter().find(|p| p.id == "h1").unwrap();
        assert_eq!(p.position, CourtPosition { x: 30.5, y: 71.25 });
        assert!(!update_position(&mut players, "missing", 10.0, 10.0));
    }
}
