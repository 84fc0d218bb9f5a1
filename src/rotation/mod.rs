pub mod engine;
pub mod types;

pub use engine::{
    generate_rotation, plan_rotation, pool_covers_court, total_periods, RotationOutcome,
    MAX_PERIODS,
};
pub use types::{RotationConfig, Shift};
