//! Coach Pro: a basketball coaching toolkit with a tactics whiteboard,
//! roster management, and a playing-time rotation calculator.
//!
//! The rotation engine in [`rotation`] is a pure function over a player
//! snapshot and a game-time configuration; everything else (roster,
//! plays library, court layout, persistence, web API) feeds it inputs.

pub mod court;
pub mod display;
pub mod roster;
pub mod rotation;
pub mod store;
pub mod web;
