//! Top-level view state machine.
//!
//! HOME → QUIZ → GAME_OVER → LEADERBOARD is the main loop; the header can jump
//! to HOME, FACTS or LEADERBOARD from anywhere. Quiz and facts screens are
//! identified by a round number so that every visit starts a fresh request and
//! late reports from an old visit are ignored.

use std::rc::Rc;
use yew::Reducible;

use crate::model::ScoreEntry;
use crate::store::{KeyValueStore, ScoreStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Quiz,
    Facts,
    Leaderboard,
    GameOver,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameState {
    pub view: View,
    /// Score of the last completed quiz.
    pub final_score: u32,
    /// Hero name as typed on the game-over screen.
    pub player_name: String,
    pub quiz_round: u64,
    pub facts_round: u64,
}

#[derive(Clone, Debug)]
pub enum GameAction {
    Play,
    Learn,
    /// Header navigation. GAME_OVER is only reachable by finishing a quiz.
    Navigate(View),
    QuizCompleted { round: u64, score: u32 },
    SetName(String),
    ScoreSaved,
}

impl GameState {
    fn enter(&mut self, view: View) -> bool {
        if view == self.view {
            return false;
        }
        match view {
            View::Quiz => self.quiz_round += 1,
            View::Facts => self.facts_round += 1,
            View::GameOver => return false,
            View::Home | View::Leaderboard => {}
        }
        self.view = view;
        true
    }

    pub fn can_save(&self) -> bool {
        self.view == View::GameOver && !self.player_name.trim().is_empty()
    }

    /// The entry a save would write, or `None` while saving is not allowed.
    pub fn pending_entry(&self, id: String, date: String) -> Option<ScoreEntry> {
        if self.view != View::GameOver {
            return None;
        }
        ScoreEntry::for_player(id, &self.player_name, self.final_score, date)
    }

    /// Applies `action`; returns false when it was ignored.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Play if self.view == View::Home => self.enter(View::Quiz),
            GameAction::Learn if self.view == View::Home => self.enter(View::Facts),
            GameAction::Play | GameAction::Learn => false,
            GameAction::Navigate(view) => self.enter(view),
            GameAction::QuizCompleted { round, score } => {
                if self.view != View::Quiz || round != self.quiz_round {
                    return false;
                }
                self.final_score = score;
                self.player_name.clear();
                self.view = View::GameOver;
                true
            }
            GameAction::SetName(name) => {
                if self.view != View::GameOver {
                    return false;
                }
                self.player_name = name;
                true
            }
            GameAction::ScoreSaved => {
                if !self.can_save() {
                    return false;
                }
                self.player_name.clear();
                self.view = View::Leaderboard;
                true
            }
        }
    }
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        if new.apply(action) { Rc::new(new) } else { self }
    }
}

/// Writes the score for the current game-over screen. Returns whether the
/// machine should move on (`GameAction::ScoreSaved`); a blank name writes nothing.
/// A failed write is logged and still moves on.
pub fn save_score<S: KeyValueStore>(
    state: &GameState,
    scores: &ScoreStore<S>,
    id: String,
    date: String,
) -> bool {
    let Some(entry) = state.pending_entry(id, date) else {
        return false;
    };
    log::info!("saving score {} for {}", entry.score, entry.name);
    if let Err(e) = scores.append(entry) {
        log::error!("score not persisted: {e}");
    }
    true
}
