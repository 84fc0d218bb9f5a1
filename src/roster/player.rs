use serde::{Serialize, Deserialize};

/// Which bench a player belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Home,
    Away,
}

/// A spot on the court in percentage coordinates (0-100 on each axis)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtPosition {
    pub x: f64,
    pub y: f64,
}

/// A rostered player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Jersey number as printed; may repeat across teams but not within one
    pub number: String,
    pub position: CourtPosition,
    pub team: Team,
    pub available: bool,
}

impl Player {
    /// Creates a player at centre court, marked available.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        number: impl Into<String>,
        team: Team,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
            position: CourtPosition { x: 50.0, y: 50.0 },
            team,
            available: true,
        }
    }
}

/// The roster seeded on first run, before anything has been persisted:
/// five home players in formation and five away markers opposite them.
pub fn default_roster() -> Vec<Player> {
    fn seeded(id: &str, name: &str, number: &str, x: f64, y: f64, team: Team) -> Player {
        Player {
            id: id.to_string(),
            name: name.to_string(),
            number: number.to_string(),
            position: CourtPosition { x, y },
            team,
            available: true,
        }
    }

    vec![
        seeded("h1", "Jordan", "1", 50.0, 75.0, Team::Home),
        seeded("h2", "LeBron", "2", 25.0, 60.0, Team::Home),
        seeded("h3", "Steph", "3", 75.0, 60.0, Team::Home),
        seeded("h4", "Kobe", "4", 35.0, 45.0, Team::Home),
        seeded("h5", "Shaq", "5", 65.0, 45.0, Team::Home),
        seeded("a1", "Away 1", "1", 50.0, 82.0, Team::Away),
        seeded("a2", "Away 2", "2", 29.0, 65.0, Team::Away),
        seeded("a3", "Away 3", "3", 71.0, 65.0, Team::Away),
        seeded("a4", "Away 4", "4", 38.0, 52.0, Team::Away),
        seeded("a5", "Away 5", "5", 62.0, 52.0, Team::Away),
    ]
}
