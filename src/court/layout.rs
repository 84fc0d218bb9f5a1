use crate::roster::{CourtPosition, Player, Team};
use super::plays::PlaySnapshot;

/// Margin keeping dragged tokens inside the visible court
pub const POSITION_MIN: f64 = 2.0;
pub const POSITION_MAX: f64 = 98.0;

/// Clamps percentage coordinates to the visible court margin
pub fn clamp_to_court(x: f64, y: f64) -> (f64, f64) {
    (
        x.clamp(POSITION_MIN, POSITION_MAX),
        y.clamp(POSITION_MIN, POSITION_MAX),
    )
}

/// Team a snapshot was taken for, read off its player-id prefix
fn snapshot_team(snapshot: &PlaySnapshot) -> Team {
    if snapshot.player_id.starts_with('h') {
        Team::Home
    } else {
        Team::Away
    }
}

/// Moves players to the positions a play (or the default layout) recorded.
///
/// Each player is matched by id first; if the roster changed since the play
/// was saved, a snapshot with the same jersey number on the same team is
/// used instead. Players with no matching snapshot keep their position.
pub fn apply_snapshots(players: &mut [Player], snapshots: &[PlaySnapshot]) {
    for player in players.iter_mut() {
        let snap = snapshots
            .iter()
            .find(|s| s.player_id == player.id)
            .or_else(|| {
                snapshots
                    .iter()
                    .find(|s| s.player_number == player.number && snapshot_team(s) == player.team)
            });

        if let Some(snap) = snap {
            player.position = CourtPosition { x: snap.x, y: snap.y };
        }
    }
}

/// Resets the court to the saved default layout, or to the fallback grid
/// formation when no default has been set (home rows low on the court,
/// away rows high, five tokens per row).
pub fn reset_positions(players: &mut [Player], default_layout: Option<&[PlaySnapshot]>) {
    if let Some(layout) = default_layout {
        apply_snapshots(players, layout);
        return;
    }

    let mut home_seen = 0usize;
    let mut away_seen = 0usize;
    for player in players.iter_mut() {
        let (i, base_y) = match player.team {
            Team::Home => {
                let i = home_seen;
                home_seen += 1;
                (i, 65.0)
            }
            Team::Away => {
                let i = away_seen;
                away_seen += 1;
                (i, 25.0)
            }
        };
        player.position = CourtPosition {
            x: 20.0 + (i % 5) as f64 * 15.0,
            y: base_y + (i / 5) as f64 * 10.0,
        };
    }
}
