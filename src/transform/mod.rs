// src/transform/mod.rs
//
// Pure record → row shaping. Nothing here touches the network or the disk.

pub mod breakdown;
pub mod schedule;
pub mod teams;

pub use breakdown::{breakdown_rows, Breakdown, Station};
pub use schedule::schedule_rows;
pub use teams::team_rows;
