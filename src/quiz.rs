// src/quiz.rs
//
// The knowledge-check section: a fixed five-question bank and the session
// state machine that walks it. All delays (answer review, completion) are
// presentation timers; the session itself only transitions on calls.

use crate::config::ModuleConfig;

/// One multiple-choice question.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub explanation: &'static str,
}

pub static QUESTIONS: [Question; 5] = [
    Question {
        prompt: "What are the three main subatomic particles in an atom?",
        options: [
            "Protons, neutrons, and electrons",
            "Protons, ions, and electrons",
            "Neutrons, ions, and electrons",
            "Protons, neutrons, and photons",
        ],
        correct: 0,
        explanation: "Atoms are made up of protons (positive charge), neutrons (neutral), and electrons (negative charge).",
    },
    Question {
        prompt: "Where are electrons located in Bohr's atomic model?",
        options: [
            "Inside the nucleus",
            "In fixed energy levels around the nucleus",
            "Randomly distributed throughout the atom",
            "Only in the outermost shell",
        ],
        correct: 1,
        explanation: "In Bohr's model, electrons orbit the nucleus in fixed energy levels or shells.",
    },
    Question {
        prompt: "What is the maximum number of electrons in the second shell?",
        options: [
            "2 electrons",
            "6 electrons",
            "8 electrons",
            "18 electrons",
        ],
        correct: 2,
        explanation: "The second shell can hold a maximum of 8 electrons (2n\u{b2} where n=2).",
    },
    Question {
        prompt: "Which model described the atom as a 'plum pudding'?",
        options: [
            "Rutherford's model",
            "Bohr's model",
            "Thomson's model",
            "Dalton's model",
        ],
        correct: 2,
        explanation: "Thomson's model described the atom as a positive sphere with embedded electrons, like plums in pudding.",
    },
    Question {
        prompt: "What determines the atomic number of an element?",
        options: [
            "Number of neutrons",
            "Number of electrons",
            "Number of protons",
            "Total number of particles",
        ],
        correct: 2,
        explanation: "The atomic number is determined by the number of protons in the nucleus.",
    },
];

/// Where the session is within one question, or past the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Picking an option; submit is open.
    Answering,
    /// Submitted; the verdict and explanation are on display. The
    /// presentation calls `advance` when its review delay elapses.
    Review,
    Finished,
}

/// Result band shown on the summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsReview,
}

impl ScoreBand {
    pub fn for_percentage(percentage: u32) -> ScoreBand {
        if percentage >= 80 {
            ScoreBand::Excellent
        } else if percentage >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsReview
        }
    }

    pub fn feedback(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => {
                "Excellent! You have a strong understanding of atomic structure."
            }
            ScoreBand::Good => "Good work! Review the concepts you missed.",
            ScoreBand::NeedsReview => "Keep studying! Review the atomic structure concepts again.",
        }
    }
}

/// What `advance` tells the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceOutcome {
    pub finished: bool,
    /// True exactly once, when the quiz finishes with a passing score.
    /// The presentation arms the module-completion timer on it.
    pub arm_completion: bool,
}

/// One run through the question bank.
#[derive(Debug, Clone)]
pub struct QuizSession {
    current: usize,
    selected: Option<usize>,
    answers: Vec<bool>,
    phase: QuizPhase,
    pass_score: u32,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::with_config(&ModuleConfig::default())
    }

    pub fn with_config(config: &ModuleConfig) -> Self {
        QuizSession {
            current: 0,
            selected: None,
            answers: Vec::new(),
            phase: QuizPhase::Answering,
            pass_score: config.quiz_pass_score,
        }
    }

    /// Picks an option for the current question. Ignored outside the
    /// answering phase and for out-of-range indices.
    pub fn select(&mut self, option: usize) {
        if self.phase != QuizPhase::Answering {
            return;
        }
        match QUESTIONS.get(self.current) {
            Some(q) if option < q.options.len() => self.selected = Some(option),
            _ => log::debug!("option {} out of range, ignoring", option),
        }
    }

    /// Locks the selected option in and enters review. Returns whether the
    /// answer was correct, or `None` (and no state change) when nothing is
    /// selected or the session is not answering.
    pub fn submit(&mut self) -> Option<bool> {
        if self.phase != QuizPhase::Answering {
            return None;
        }
        let selected = self.selected?;
        let correct = selected == QUESTIONS[self.current].correct;
        self.answers.push(correct);
        self.phase = QuizPhase::Review;
        log::debug!(
            "question {} answered {}",
            self.current + 1,
            if correct { "correctly" } else { "incorrectly" }
        );
        Some(correct)
    }

    /// Leaves review: steps to the next question, or finishes after the
    /// last one. Called by the presentation when its review delay elapses.
    /// No-op outside review.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.phase != QuizPhase::Review {
            return AdvanceOutcome {
                finished: self.phase == QuizPhase::Finished,
                arm_completion: false,
            };
        }
        if self.current + 1 < QUESTIONS.len() {
            self.current += 1;
            self.selected = None;
            self.phase = QuizPhase::Answering;
            return AdvanceOutcome {
                finished: false,
                arm_completion: false,
            };
        }
        self.phase = QuizPhase::Finished;
        let passed = self.passed();
        log::info!(
            "quiz finished: {}/{} ({}%), {}",
            self.score(),
            QUESTIONS.len(),
            self.percentage(),
            if passed { "passed" } else { "not passed" }
        );
        AdvanceOutcome {
            finished: true,
            arm_completion: passed,
        }
    }

    /// Back to question one with a clean slate.
    pub fn restart(&mut self) {
        self.current = 0;
        self.selected = None;
        self.answers.clear();
        self.phase = QuizPhase::Answering;
    }

    /// The question on display; `None` once finished.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.phase == QuizPhase::Finished {
            None
        } else {
            QUESTIONS.get(self.current)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Correct answers so far.
    pub fn score(&self) -> u32 {
        self.answers.iter().filter(|&&correct| correct).count() as u32
    }

    /// Questions answered so far.
    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Per-question verdicts in answer order.
    pub fn answers(&self) -> &[bool] {
        &self.answers
    }

    /// Score over the whole bank, in rounded percent.
    pub fn percentage(&self) -> u32 {
        ((self.score() as f64 / QUESTIONS.len() as f64) * 100.0).round() as u32
    }

    /// Whether the score clears the pass bar. Meaningful once finished.
    pub fn passed(&self) -> bool {
        self.score() >= self.pass_score
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_percentage(self.percentage())
    }

    /// Header bar value: questions reached over the whole bank, in percent.
    pub fn progress_percent(&self) -> f64 {
        ((self.current + 1) as f64 / QUESTIONS.len() as f64) * 100.0
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with_answers(picks: impl Fn(usize, &Question) -> usize) -> (QuizSession, AdvanceOutcome) {
        let mut session = QuizSession::new();
        let mut last = AdvanceOutcome {
            finished: false,
            arm_completion: false,
        };
        for i in 0..QUESTIONS.len() {
            let q = session.current_question().unwrap();
            session.select(picks(i, q));
            assert!(session.submit().is_some());
            last = session.advance();
        }
        (session, last)
    }

    #[test]
    fn test_bank_shape() {
        assert_eq!(QUESTIONS.len(), 5);
        for q in QUESTIONS.iter() {
            assert!(q.correct < q.options.len());
            assert!(!q.explanation.is_empty());
        }
        assert_eq!(QUESTIONS[0].options[QUESTIONS[0].correct], "Protons, neutrons, and electrons");
        assert_eq!(QUESTIONS[3].options[QUESTIONS[3].correct], "Thomson's model");
    }

    #[test]
    fn test_perfect_run() {
        let (session, last) = run_with_answers(|_, q| q.correct);
        assert_eq!(session.phase(), QuizPhase::Finished);
        assert!(session.current_question().is_none());
        assert_eq!(session.score(), 5);
        assert_eq!(session.percentage(), 100);
        assert!(session.passed());
        assert_eq!(session.band(), ScoreBand::Excellent);
        assert!(last.finished);
        assert!(last.arm_completion);
    }

    #[test]
    fn test_all_wrong_run() {
        let (session, last) = run_with_answers(|_, q| (q.correct + 1) % 4);
        assert_eq!(session.score(), 0);
        assert!(!session.passed());
        assert_eq!(session.band(), ScoreBand::NeedsReview);
        assert!(last.finished);
        assert!(!last.arm_completion);
    }

    #[test]
    fn test_pass_bar_at_three() {
        // First three right, last two wrong: 60%, the lowest passing score.
        let (session, last) = run_with_answers(|i, q| {
            if i < 3 {
                q.correct
            } else {
                (q.correct + 1) % 4
            }
        });
        assert_eq!(session.score(), 3);
        assert_eq!(session.percentage(), 60);
        assert_eq!(session.band(), ScoreBand::Good);
        assert!(last.arm_completion);
    }

    #[test]
    fn test_submit_needs_a_selection() {
        let mut session = QuizSession::new();
        assert_eq!(session.submit(), None);
        assert_eq!(session.answered(), 0);
        assert_eq!(session.phase(), QuizPhase::Answering);
    }

    #[test]
    fn test_review_locks_selection() {
        let mut session = QuizSession::new();
        session.select(0);
        assert_eq!(session.submit(), Some(true));
        assert_eq!(session.phase(), QuizPhase::Review);

        // Changing the pick or re-submitting during review does nothing.
        session.select(3);
        assert_eq!(session.selected(), Some(0));
        assert_eq!(session.submit(), None);
        assert_eq!(session.answered(), 1);
    }

    #[test]
    fn test_advance_outside_review_is_noop() {
        let mut session = QuizSession::new();
        let outcome = session.advance();
        assert!(!outcome.finished);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_advance_steps_and_resets_selection() {
        let mut session = QuizSession::new();
        session.select(2);
        session.submit();
        let outcome = session.advance();
        assert!(!outcome.finished);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.selected(), None);
        assert_eq!(session.phase(), QuizPhase::Answering);
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let mut session = QuizSession::new();
        session.select(17);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_restart_clears_everything() {
        let (mut session, _) = run_with_answers(|_, q| q.correct);
        session.restart();
        assert_eq!(session.phase(), QuizPhase::Answering);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.answered(), 0);
        assert!(session.current_question().is_some());
    }

    #[test]
    fn test_finished_advance_does_not_rearm() {
        let (mut session, _) = run_with_answers(|_, q| q.correct);
        let again = session.advance();
        assert!(again.finished);
        assert!(!again.arm_completion);
    }

    #[test]
    fn test_custom_pass_bar() {
        let config = ModuleConfig {
            quiz_pass_score: 5,
            ..ModuleConfig::default()
        };
        let mut session = QuizSession::with_config(&config);
        let mut last = AdvanceOutcome {
            finished: false,
            arm_completion: false,
        };
        for i in 0..QUESTIONS.len() {
            // Four right, one wrong no longer clears a bar of five.
            let q = session.current_question().unwrap();
            let pick = if i == 0 { (q.correct + 1) % 4 } else { q.correct };
            session.select(pick);
            session.submit();
            last = session.advance();
        }
        assert_eq!(session.score(), 4);
        assert!(!last.arm_completion);
    }
}
