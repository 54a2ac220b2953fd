// src/builder.rs
//
// The shell-configuration exercise: a learner fills electron shells one
// electron at a time and checks the result against the curated answer key.

use crate::model::elements::{self, Element, ElementError};
use crate::model::shells;

/// In-progress shell occupancy plus the active-shell cursor.
///
/// All operations are total: out-of-range and over-capacity actions are
/// silent no-ops, and the cursor is clamped to the target's shell range by
/// construction. State lives in memory for the duration of one exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildState {
    filled: Vec<u32>,
    cursor: usize,
    target: &'static [u32],
    budget: u32,
}

impl BuildState {
    /// An empty build toward `target`, allowed to place at most `budget`
    /// electrons in total.
    pub fn new(target: &'static [u32], budget: u32) -> Self {
        BuildState {
            filled: Vec::new(),
            cursor: 0,
            target,
            budget,
        }
    }

    /// An empty build for a curated exercise element.
    pub fn for_element(symbol: &str) -> Result<Self, ElementError> {
        let element = elements::get(symbol)
            .ok_or_else(|| ElementError::UnknownSymbol(symbol.to_string()))?;
        let target = shells::canonical(symbol)
            .ok_or_else(|| ElementError::NoCanonicalConfig(symbol.to_string()))?;
        Ok(BuildState::new(target, element.electrons))
    }

    /// Places one electron in the active shell. No-op when the total already
    /// equals the electron budget, when the cursor is past the last target
    /// shell, or when the active shell is at the teaching-rule capacity.
    /// Reaching the canonical count for the active shell advances the cursor,
    /// unless it is already on the last shell.
    pub fn add_electron(&mut self) {
        if self.total_electrons() >= self.budget {
            return;
        }
        if self.cursor >= self.target.len() {
            return;
        }
        while self.filled.len() <= self.cursor {
            self.filled.push(0);
        }
        if self.filled[self.cursor] < shells::builder_capacity(self.cursor) {
            self.filled[self.cursor] += 1;
            if self.filled[self.cursor] == self.target[self.cursor]
                && self.cursor + 1 < self.target.len()
            {
                self.cursor += 1;
            }
        }
    }

    /// Takes one electron out of the active shell. When the active shell is
    /// empty the cursor rewinds past trailing empty shells to the outermost
    /// one still holding electrons, so removal keeps working without a
    /// reset. On a wholly empty build this is a no-op, state untouched.
    pub fn remove_electron(&mut self) {
        if self.total_electrons() == 0 {
            return;
        }
        while self.filled.last() == Some(&0) {
            self.filled.pop();
        }
        self.cursor = self.cursor.min(self.filled.len() - 1);
        if self.filled[self.cursor] > 0 {
            self.filled[self.cursor] -= 1;
        }
    }

    pub fn total_electrons(&self) -> u32 {
        shells::total(&self.filled)
    }

    /// Strict element-wise comparison including length: `[2, 4, 0]` does not
    /// match `[2, 4]`. Only meaningful once `total_electrons` equals the
    /// element's electron count; callers gate on that, the comparison itself
    /// does not re-validate it.
    pub fn check_complete(&self, canonical: &[u32]) -> bool {
        self.filled.as_slice() == canonical
    }

    pub fn reset(&mut self) {
        self.filled.clear();
        self.cursor = 0;
    }

    /// Shell counts built so far, innermost first. May be shorter than the
    /// target and may carry a trailing zero for a just-emptied shell.
    pub fn shells(&self) -> &[u32] {
        &self.filled
    }

    /// Index of the shell the next electron goes into.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn target(&self) -> &'static [u32] {
        self.target
    }

    /// Number of shells the finished configuration has.
    pub fn shell_count(&self) -> usize {
        self.target.len()
    }

    /// Total electrons the element owns; adding stops here.
    pub fn electron_budget(&self) -> u32 {
        self.budget
    }
}

/// What a single answer check tells the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub correct: bool,
    /// True exactly once, when the build first matches the answer key.
    /// The presentation arms the section-completion timer on it.
    pub arm_completion: bool,
}

/// One sitting of the configuration exercise: the selected element, the
/// build in progress, and the attempt history.
#[derive(Debug, Clone)]
pub struct BuilderSession {
    element: &'static Element,
    state: BuildState,
    attempts: u32,
    solved: bool,
}

impl BuilderSession {
    /// Opens the exercise on a curated element. The section starts on
    /// Carbon, matching the menu default.
    pub fn with_element(symbol: &str) -> Result<Self, ElementError> {
        let element = elements::get(symbol)
            .ok_or_else(|| ElementError::UnknownSymbol(symbol.to_string()))?;
        let state = BuildState::for_element(symbol)?;
        Ok(BuilderSession {
            element,
            state,
            attempts: 0,
            solved: false,
        })
    }

    /// Switches the exercise to another curated element and discards the
    /// current build. The attempt counter spans the whole sitting and is
    /// not cleared. On error the session is left untouched.
    pub fn select(&mut self, symbol: &str) -> Result<(), ElementError> {
        let element = elements::get(symbol)
            .ok_or_else(|| ElementError::UnknownSymbol(symbol.to_string()))?;
        let replacement = BuildState::for_element(symbol)?;
        log::debug!("exercise element -> {}", symbol);
        self.element = element;
        self.state = replacement;
        self.solved = false;
        Ok(())
    }

    /// Compares the build against the answer key and records the attempt.
    /// Checks made before the electron budget is spent are ignored: no
    /// attempt is recorded and the outcome is negative, so a premature
    /// check can never read as success.
    pub fn check_answer(&mut self) -> CheckOutcome {
        if self.state.total_electrons() != self.element.electrons {
            log::debug!(
                "answer check before budget is spent ({}/{}), ignoring",
                self.state.total_electrons(),
                self.element.electrons
            );
            return CheckOutcome {
                correct: false,
                arm_completion: false,
            };
        }
        self.attempts += 1;
        let correct = self.state.check_complete(self.state.target());
        let first_solve = correct && !self.solved;
        if first_solve {
            self.solved = true;
            log::info!(
                "{} configuration solved after {} attempt(s)",
                self.element.symbol,
                self.attempts
            );
        }
        CheckOutcome {
            correct,
            arm_completion: first_solve,
        }
    }

    pub fn add_electron(&mut self) {
        self.state.add_electron();
    }

    pub fn remove_electron(&mut self) {
        self.state.remove_electron();
    }

    /// Clears the build and the solved flag; attempts stay.
    pub fn reset(&mut self) {
        self.state.reset();
        self.solved = false;
    }

    pub fn element(&self) -> &'static Element {
        self.element
    }

    pub fn state(&self) -> &BuildState {
        &self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn solved(&self) -> bool {
        self.solved
    }
}
