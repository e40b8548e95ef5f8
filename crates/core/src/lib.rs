//! Domain logic for VentureVibe analysis sessions.
//!
//! Everything in this crate is pure: no database, no network, no clock
//! reads. Callers pass `now` and the provider output in explicitly so the
//! rules here can be unit tested exhaustively.

pub mod analysis;
pub mod error;
pub mod fallback;
pub mod idea;
pub mod leaderboard;
pub mod prompt;
pub mod quota;
pub mod scoring;
pub mod types;
