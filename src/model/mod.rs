//src/model/mod.rs
pub mod elements;
pub mod history;
pub mod shells;

// Re-exports for cleaner imports
pub use elements::{Element, ElementCategory, ElementError};
pub use history::{ModelInfo, ModelKind, ModelsTour};
pub use shells::{canonical, distribute};
