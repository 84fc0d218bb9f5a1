use serde::{Serialize, Deserialize};

/// Game-time configuration for a rotation calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationConfig {
    /// Total game duration in minutes; zero or negative is invalid
    pub game_minutes: i64,
    /// How many players are on court at the same time
    pub players_on_court: usize,
    /// Length of one shift in minutes; zero or negative is invalid
    pub period_length: i64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        // A standard junior game: 20 minutes, 5 on court, 4-minute shifts
        Self {
            game_minutes: 20,
            players_on_court: 5,
            period_length: 4,
        }
    }
}

/// One shift: a period number (1-based) and the players on court for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub period: u32,
    pub players: Vec<String>, // IDs of players on court, in selection order
}
