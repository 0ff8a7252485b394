pub mod game;
pub mod quiz;
pub mod round;

pub use game::{GameAction, GameState, View, save_score};
pub use quiz::{QuizAction, QuizSession};
pub use round::RoundGuard;
