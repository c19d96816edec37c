//! # Payload “specs” module
//!
//! Shapes of the TBA v3 JSON bodies this crate reads. Each spec mirrors one
//! endpoint and only names the fields the exporters use; serde drops the rest.
//!
//! ## What lives here
//! - `serde` types for `/event/{key}/matches` and `/event/{key}/teams`.
//! - Small accessors that make per-alliance / per-robot reads uniform
//!   (`Alliances::side`, `RapidReactAlliance::taxi`).
//!
//! ## What does **not** live here
//! - Networking (`core::net`), sorting/filtering and row shaping
//!   (`transform`), output (`csv`, `file`).
//!
//! ## Current specs
//! - `matches` – match list; `Match` for schedules, `ScoredMatch` when the
//!   2022 score breakdown is needed.
//! - `teams` – team list.
pub mod matches;
pub mod teams;

pub use matches::{Alliance, AllianceColor, Alliances, Match, RapidReactAlliance, ScoredMatch};
pub use teams::Team;
