pub mod export;
pub mod ops;
pub mod player;

pub use export::{export_roster_to_csv, roster_to_csv};
pub use ops::{
    add_player, available_players, remove_player, team_players, toggle_availability,
    update_position, validate_new_player,
};
pub use player::{default_roster, CourtPosition, Player, Team};
