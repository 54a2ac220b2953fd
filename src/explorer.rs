// src/explorer.rs
//
// Exploration state for the periodic-grid section: which element is under
// the detail pane and which tiles the learner has already visited.

use crate::config::ModuleConfig;
use crate::model::elements::{self, Element, ElementError, PERIODIC_TABLE};

/// One sitting in front of the periodic grid. Starts on Hydrogen with
/// Hydrogen already counted as explored, exactly like the section opens.
#[derive(Debug, Clone)]
pub struct Explorer {
    selected: &'static Element,
    explored: Vec<&'static str>,
    strict: bool,
}

impl Explorer {
    pub fn new() -> Self {
        Explorer {
            selected: &PERIODIC_TABLE[0],
            explored: vec![PERIODIC_TABLE[0].symbol],
            strict: true,
        }
    }

    pub fn with_config(config: &ModuleConfig) -> Self {
        Explorer {
            strict: config.strict_lookup,
            ..Explorer::new()
        }
    }

    /// Selects an element and counts it as explored (once). Under strict
    /// lookup an unknown symbol is an error and the state stays untouched;
    /// otherwise the legacy Hydrogen fallback applies.
    pub fn explore(&mut self, symbol: &str) -> Result<&'static Element, ElementError> {
        let element = if self.strict {
            elements::get(symbol)
                .ok_or_else(|| ElementError::UnknownSymbol(symbol.to_string()))?
        } else {
            elements::get_or_default(symbol)
        };
        self.selected = element;
        if !self.explored.contains(&element.symbol) {
            log::debug!(
                "explored {} ({} of {})",
                element.symbol,
                self.explored.len() + 1,
                PERIODIC_TABLE.len()
            );
            self.explored.push(element.symbol);
        }
        Ok(element)
    }

    pub fn selected(&self) -> &'static Element {
        self.selected
    }

    /// Symbols in the order they were first visited.
    pub fn explored(&self) -> &[&'static str] {
        &self.explored
    }

    pub fn is_explored(&self, symbol: &str) -> bool {
        self.explored.contains(&symbol)
    }

    /// Exploration bar value: visited tiles over the whole grid, in percent.
    pub fn progress_percent(&self) -> f64 {
        (self.explored.len() as f64 / PERIODIC_TABLE.len() as f64) * 100.0
    }

    pub fn fully_explored(&self) -> bool {
        self.explored.len() == PERIODIC_TABLE.len()
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}
