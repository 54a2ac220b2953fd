pub mod layout;

// Re-export the layout entry points to keep the API clean for embedders
pub use layout::{builder_layout, model_layout, AtomLayout, ModelSize};
