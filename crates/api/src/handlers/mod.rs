pub mod leaderboard;
pub mod quota;
pub mod sessions;
