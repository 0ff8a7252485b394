// Per-screen quiz progress, driven by the quiz view.
use std::rc::Rc;
use yew::Reducible;

use crate::model::{POINTS_PER_CORRECT, QuizQuestion};

#[derive(Clone, Debug, PartialEq)]
pub struct QuizSession {
    /// Round of the quiz screen this session belongs to.
    pub round: u64,
    pub questions: Vec<QuizQuestion>,
    pub index: usize,
    pub score: u32,
    /// Locked once set, until `Next`.
    pub selected: Option<String>,
    pub loading: bool,
    pub completed: bool,
}

#[derive(Clone, Debug)]
pub enum QuizAction {
    Loaded { round: u64, questions: Vec<QuizQuestion> },
    Answer(String),
    Next,
}

impl QuizSession {
    pub fn new(round: u64) -> Self {
        Self {
            round,
            questions: Vec::new(),
            index: 0,
            score: 0,
            selected: None,
            loading: true,
            completed: false,
        }
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        if self.loading || self.completed {
            return None;
        }
        self.questions.get(self.index)
    }

    /// Whether the locked-in answer for the current question was right.
    pub fn answered_correctly(&self) -> Option<bool> {
        let q = self.current()?;
        self.selected.as_deref().map(|a| q.is_correct(a))
    }

    /// Share of the quiz reached, counting the question on screen.
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.index + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    /// Applies `action`; returns false when it was ignored.
    pub fn apply(&mut self, action: QuizAction) -> bool {
        match action {
            QuizAction::Loaded { round, questions } => {
                if round != self.round || !self.loading {
                    return false;
                }
                self.loading = false;
                // nothing to ask means nothing to wait for
                self.completed = questions.is_empty();
                self.questions = questions;
                true
            }
            QuizAction::Answer(answer) => {
                if self.selected.is_some() {
                    return false;
                }
                let Some(q) = self.current() else { return false };
                if !q.has_option(&answer) {
                    return false;
                }
                let correct = q.is_correct(&answer);
                if correct {
                    self.score = self.score.saturating_add(POINTS_PER_CORRECT);
                }
                self.selected = Some(answer);
                true
            }
            QuizAction::Next => {
                if self.completed || self.selected.is_none() {
                    return false;
                }
                if self.is_last() {
                    self.completed = true;
                } else {
                    self.index += 1;
                    self.selected = None;
                }
                true
            }
        }
    }
}

impl Reducible for QuizSession {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        if new.apply(action) { Rc::new(new) } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(n: usize) -> Vec<QuizQuestion> {
        (0..n)
            .map(|i| QuizQuestion {
                question: format!("Question {i}"),
                options: vec!["🍌 Yes".into(), "🥥 No".into(), "🌴 Maybe".into()],
                correct_answer: "🍌 Yes".into(),
                explanation: "Hooray!".into(),
            })
            .collect()
    }

    fn loaded(n: usize) -> QuizSession {
        let mut s = QuizSession::new(1);
        assert!(s.apply(QuizAction::Loaded { round: 1, questions: questions(n) }));
        s
    }

    fn play(s: &mut QuizSession, answers: &[&str]) {
        for a in answers {
            assert!(s.apply(QuizAction::Answer(a.to_string())));
            assert!(s.apply(QuizAction::Next));
        }
    }

    #[test]
    fn all_correct_scores_ten_each() {
        let mut s = loaded(5);
        play(&mut s, &["🍌 Yes"; 5]);
        assert!(s.completed);
        assert_eq!(s.score, 50);
    }

    #[test]
    fn all_wrong_scores_zero_and_mixed_is_a_multiple_of_ten() {
        let mut s = loaded(3);
        play(&mut s, &["🥥 No"; 3]);
        assert_eq!(s.score, 0);

        let mut s = loaded(4);
        play(&mut s, &["🍌 Yes", "🥥 No", "🌴 Maybe", "🍌 Yes"]);
        assert_eq!(s.score, 20);
        assert_eq!(s.score % POINTS_PER_CORRECT, 0);
    }

    #[test]
    fn answer_is_locked_until_next() {
        let mut s = loaded(2);
        assert!(s.apply(QuizAction::Answer("🥥 No".into())));
        assert!(!s.apply(QuizAction::Answer("🍌 Yes".into())));
        assert_eq!(s.selected.as_deref(), Some("🥥 No"));
        assert_eq!(s.answered_correctly(), Some(false));
        assert_eq!(s.score, 0);
    }

    #[test]
    fn next_requires_an_answer_and_unknown_options_are_ignored() {
        let mut s = loaded(2);
        assert!(!s.apply(QuizAction::Next));
        assert!(!s.apply(QuizAction::Answer("🦈 Shark".into())));
        assert_eq!(s.index, 0);
        assert!(s.selected.is_none());
    }

    #[test]
    fn completion_happens_once() {
        let mut s = loaded(1);
        play(&mut s, &["🍌 Yes"]);
        assert!(s.completed);
        let done = s.clone();
        assert!(!s.apply(QuizAction::Next));
        assert!(!s.apply(QuizAction::Answer("🍌 Yes".into())));
        assert_eq!(s, done);
    }

    #[test]
    fn nothing_to_answer_before_questions_arrive() {
        let mut s = QuizSession::new(3);
        assert!(s.current().is_none());
        assert!(!s.apply(QuizAction::Answer("🍌 Yes".into())));
    }

    #[test]
    fn empty_quiz_completes_immediately() {
        let s = loaded(0);
        assert!(s.completed);
        assert_eq!(s.score, 0);
        assert!(s.current().is_none());
    }

    #[test]
    fn stale_round_and_repeat_loads_are_dropped() {
        let mut s = QuizSession::new(2);
        assert!(!s.apply(QuizAction::Loaded { round: 1, questions: questions(3) }));
        assert!(s.loading);
        assert!(s.apply(QuizAction::Loaded { round: 2, questions: questions(3) }));
        assert!(!s.apply(QuizAction::Loaded { round: 2, questions: questions(5) }));
        assert_eq!(s.questions.len(), 3);
    }

    #[test]
    fn progress_counts_the_current_question() {
        let mut s = loaded(4);
        assert_eq!(s.progress_percent(), 25.0);
        play(&mut s, &["🍌 Yes"]);
        assert_eq!(s.progress_percent(), 50.0);
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_ignored() {
        let s = Rc::new(QuizSession::new(1));
        let after = s.clone().reduce(QuizAction::Next);
        assert!(Rc::ptr_eq(&s, &after));
    }
}
