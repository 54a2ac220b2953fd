// src/state.rs
use serde::{Deserialize, Serialize};

use crate::config::ModuleConfig;

/// The five sections of the learning module, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Intro,
    Models,
    Periodic,
    Config,
    Quiz,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Intro,
        Section::Models,
        Section::Periodic,
        Section::Config,
        Section::Quiz,
    ];

    /// Stable id used by embedders and snapshots.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Models => "models",
            Section::Periodic => "periodic",
            Section::Config => "config",
            Section::Quiz => "quiz",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Intro => "Introduction to Atoms",
            Section::Models => "Atomic Models",
            Section::Periodic => "Periodic Table",
            Section::Config => "Electron Configuration",
            Section::Quiz => "Knowledge Check",
        }
    }

    /// Explicit reverse lookup; an unknown id is `None`, never a silent
    /// default section.
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.id() == id)
    }
}

/// Live module state owned by the presentation layer: where the learner is,
/// which sections they have finished, and the knobs the module runs with.
pub struct AppState {
    pub current: Section,
    completed: Vec<Section>,
    pub config: ModuleConfig,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(ModuleConfig::default())
    }

    pub fn with_config(config: ModuleConfig) -> Self {
        Self {
            current: Section::Intro,
            completed: Vec::new(),
            config,
        }
    }

    pub fn goto(&mut self, section: Section) {
        if self.current != section {
            log::debug!("section {} -> {}", self.current.id(), section.id());
            self.current = section;
        }
    }

    /// Records a finished section. Idempotent; completion order is kept.
    pub fn mark_complete(&mut self, section: Section) {
        if !self.completed.contains(&section) {
            log::info!("section complete: {}", section.id());
            self.completed.push(section);
        }
    }

    pub fn is_complete(&self, section: Section) -> bool {
        self.completed.contains(&section)
    }

    /// Finished sections in the order they were completed.
    pub fn completed(&self) -> &[Section] {
        &self.completed
    }

    /// Header progress bar value: completed sections over all five, in
    /// percent.
    pub fn progress_percent(&self) -> f64 {
        (self.completed.len() as f64 / Section::ALL.len() as f64) * 100.0
    }

    pub fn all_complete(&self) -> bool {
        self.completed.len() == Section::ALL.len()
    }
}
