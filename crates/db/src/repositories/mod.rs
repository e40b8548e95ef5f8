//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or any Postgres executor) as the first argument.

pub mod leaderboard_repo;
pub mod user_repo;
pub mod venture_session_repo;

pub use leaderboard_repo::LeaderboardRepo;
pub use user_repo::UserRepo;
pub use venture_session_repo::VentureSessionRepo;
