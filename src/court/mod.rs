pub mod layout;
pub mod plays;

pub use layout::{apply_snapshots, clamp_to_court, reset_positions, POSITION_MAX, POSITION_MIN};
pub use plays::{capture_play, delete_play, record_play, snapshot_players, Play, PlaySnapshot};
