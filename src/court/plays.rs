use chrono::Utc;
use serde::{Serialize, Deserialize};

use crate::roster::Player;

/// One player's spot within a saved play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaySnapshot {
    pub player_id: String,
    pub player_number: String,
    pub x: f64,
    pub y: f64,
}

/// A saved whiteboard layout in the plays library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub id: String,
    pub name: String,
    /// Creation time as a millisecond epoch timestamp
    pub timestamp: i64,
    pub snapshots: Vec<PlaySnapshot>,
}

/// Snapshots every player's current position
pub fn snapshot_players(players: &[Player]) -> Vec<PlaySnapshot> {
    players
        .iter()
        .map(|p| PlaySnapshot {
            player_id: p.id.clone(),
            player_number: p.number.clone(),
            x: p.position.x,
            y: p.position.y,
        })
        .collect()
}

/// Captures the current court layout as a named play
pub fn capture_play(name: &str, players: &[Player]) -> Play {
    let now = Utc::now().timestamp_millis();
    Play {
        id: now.to_string(),
        name: name.trim().to_string(),
        timestamp: now,
        snapshots: snapshot_players(players),
    }
}

/// Files a play into the library, newest first
pub fn record_play(plays: &mut Vec<Play>, play: Play) {
    plays.insert(0, play);
}

/// Deletes a play by id; returns whether anything was removed.
pub fn delete_play(plays: &mut Vec<Play>, id: &str) -> bool {
    let before = plays.len();
    plays.retain(|p| p.id != id);
    plays.len() != before
}
