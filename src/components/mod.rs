pub mod app;
pub mod facts_view;
pub mod footer;
pub mod game_over_view;
pub mod header;
pub mod home_view;
pub mod leaderboard_view;
pub mod quiz_view;
