// src/lib.rs

pub mod builder;
pub mod config;
pub mod explorer;
pub mod model;
pub mod quiz;
pub mod rendering;
pub mod state;
pub mod timer;
pub mod utils;

// Re-exports for cleaner imports from embedding code
pub use builder::{BuildState, BuilderSession, CheckOutcome};
pub use config::ModuleConfig;
pub use explorer::Explorer;
pub use model::{Element, ElementCategory, ElementError, ModelKind, ModelsTour};
pub use quiz::{QuizPhase, QuizSession, ScoreBand};
pub use state::{AppState, Section};
pub use timer::CompletionTimer;
