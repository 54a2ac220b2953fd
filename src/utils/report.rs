// src/utils/report.rs

use serde::Serialize;

use crate::builder::BuilderSession;
use crate::explorer::Explorer;
use crate::model::elements::PERIODIC_TABLE;
use crate::model::shells;
use crate::quiz::{QuizPhase, QuizSession, QUESTIONS};
use crate::state::{AppState, Section};

fn format_config(config: &[u32]) -> String {
    config
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generates the text for a console-style session overview: section
/// checklist, exploration progress, and the element under the detail pane.
pub fn session_summary(app: &AppState, explorer: &Explorer) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Progress: {:.0}% ({} / {} sections)\n",
        app.progress_percent(),
        app.completed().len(),
        Section::ALL.len()
    ));
    out.push_str("--------------------------------------------------\n");
    for section in Section::ALL {
        let marker = if app.is_complete(section) { "x" } else { " " };
        let here = if app.current == section { "  <- current" } else { "" };
        out.push_str(&format!("[{}] {}{}\n", marker, section.title(), here));
    }
    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!(
        "Explored: {} / {} elements\n",
        explorer.explored().len(),
        PERIODIC_TABLE.len()
    ));

    let e = explorer.selected();
    out.push_str(&format!(
        "Selected: {} ({}), Z={}, group {}, period {}\n",
        e.name, e.symbol, e.atomic_number, e.group, e.period
    ));
    out.push_str(&format!("Family:   {}\n", e.category().label()));
    out.push_str(&format!(
        "Shells:   {}\n",
        format_config(&shells::distribute(e.electrons))
    ));
    out
}

/// Generates the text block next to the configuration builder: one line per
/// shell with the K/L/M label, then totals and attempt history.
pub fn exercise_summary(session: &BuilderSession) -> String {
    let element = session.element();
    let build = session.state();

    let mut out = String::new();
    out.push_str(&format!(
        "Electron Configuration: {} ({})\n",
        element.name, element.symbol
    ));
    out.push_str("--------------------------------------------------\n");
    for (i, &goal) in build.target().iter().enumerate() {
        let filled = build.shells().get(i).copied().unwrap_or(0);
        let active = if build.cursor() == i { " *" } else { "" };
        out.push_str(&format!(
            "Shell {} ({}): {} / {}{}\n",
            i + 1,
            shells::shell_label(i),
            filled,
            goal,
            active
        ));
    }
    out.push_str(&format!(
        "Total: {} / {}\n",
        build.total_electrons(),
        build.electron_budget()
    ));
    out.push_str(&format!(
        "Attempts: {}, solved: {}\n",
        session.attempts(),
        if session.solved() { "yes" } else { "no" }
    ));
    out
}

/// Generates the quiz result text: running score, per-question verdicts,
/// and the feedback band once the quiz is finished.
pub fn quiz_summary(session: &QuizSession) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Knowledge Check: {} / {} correct ({}%)\n",
        session.score(),
        QUESTIONS.len(),
        session.percentage()
    ));
    for (i, correct) in session.answers().iter().enumerate() {
        out.push_str(&format!(
            "  Q{}: {}\n",
            i + 1,
            if *correct { "correct" } else { "wrong" }
        ));
    }
    if session.phase() == QuizPhase::Finished {
        out.push_str(&format!(
            "Result: {}\n",
            if session.passed() { "passed" } else { "not passed" }
        ));
        out.push_str(session.band().feedback());
        out.push('\n');
    }
    out
}

/// In-memory progress snapshot for the header indicator or an embedding
/// shell. Serializes to a compact JSON object.
#[derive(Debug, Serialize)]
pub struct ProgressSnapshot<'a> {
    pub progress_percent: f64,
    pub current_section: &'static str,
    pub completed_sections: Vec<&'static str>,
    pub explored: &'a [&'static str],
    pub exploration_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<ExerciseSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<QuizSnapshot>,
}

#[derive(Debug, Serialize)]
pub struct ExerciseSnapshot {
    pub element: &'static str,
    pub placed: u32,
    pub budget: u32,
    pub attempts: u32,
    pub solved: bool,
}

#[derive(Debug, Serialize)]
pub struct QuizSnapshot {
    pub score: u32,
    pub answered: usize,
    pub percentage: u32,
    pub passed: bool,
}

pub fn progress_snapshot<'a>(
    app: &AppState,
    explorer: &'a Explorer,
    builder: Option<&BuilderSession>,
    quiz: Option<&QuizSession>,
) -> ProgressSnapshot<'a> {
    ProgressSnapshot {
        progress_percent: app.progress_percent(),
        current_section: app.current.id(),
        completed_sections: app.completed().iter().map(|s| s.id()).collect(),
        explored: explorer.explored(),
        exploration_percent: explorer.progress_percent(),
        exercise: builder.map(|session| ExerciseSnapshot {
            element: session.element().symbol,
            placed: session.state().total_electrons(),
            budget: session.state().electron_budget(),
            attempts: session.attempts(),
            solved: session.solved(),
        }),
        quiz: quiz.map(|session| QuizSnapshot {
            score: session.score(),
            answered: session.answered(),
            percentage: session.percentage(),
            passed: session.passed(),
        }),
    }
}

pub fn progress_json(
    app: &AppState,
    explorer: &Explorer,
    builder: Option<&BuilderSession>,
    quiz: Option<&QuizSession>,
) -> serde_json::Result<String> {
    serde_json::to_string(&progress_snapshot(app, explorer, builder, quiz))
}
