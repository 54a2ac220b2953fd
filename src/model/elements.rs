// src/model/elements.rs

use serde::Serialize;
use thiserror::Error;

/// One entry of the module's periodic table.
///
/// Neutron counts are for the most common isotope. The data assumes neutral
/// atoms (`protons == electrons`); the table is fixed at compile time and the
/// invariant is checked by tests rather than enforced at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Element {
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_number: u32,
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
    /// Column (1-18) in the standard periodic grid.
    pub group: u8,
    /// Row (1-3) in the standard periodic grid.
    pub period: u8,
}

/// Lookup failures surfaced to callers that select elements by symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    #[error("unknown element symbol `{0}`")]
    UnknownSymbol(String),

    #[error("element `{0}` is not part of the configuration exercise")]
    NoCanonicalConfig(String),
}

const fn el(
    symbol: &'static str,
    name: &'static str,
    z: u32,
    neutrons: u32,
    group: u8,
    period: u8,
) -> Element {
    Element {
        symbol,
        name,
        atomic_number: z,
        protons: z,
        neutrons,
        electrons: z,
        group,
        period,
    }
}

/// Periods 1-3 in atomic-number order. This is the whole element universe of
/// the module; the exercise subset is the slice of it that has a curated
/// configuration in `shells::canonical`.
pub static PERIODIC_TABLE: [Element; 18] = [
    // --- Period 1 ---
    el("H", "Hydrogen", 1, 0, 1, 1),
    el("He", "Helium", 2, 2, 18, 1),
    // --- Period 2 ---
    el("Li", "Lithium", 3, 4, 1, 2),
    el("Be", "Beryllium", 4, 5, 2, 2),
    el("B", "Boron", 5, 6, 13, 2),
    el("C", "Carbon", 6, 6, 14, 2),
    el("N", "Nitrogen", 7, 7, 15, 2),
    el("O", "Oxygen", 8, 8, 16, 2),
    el("F", "Fluorine", 9, 10, 17, 2),
    el("Ne", "Neon", 10, 10, 18, 2),
    // --- Period 3 ---
    el("Na", "Sodium", 11, 12, 1, 3),
    el("Mg", "Magnesium", 12, 12, 2, 3),
    el("Al", "Aluminum", 13, 14, 13, 3),
    el("Si", "Silicon", 14, 14, 14, 3),
    el("P", "Phosphorus", 15, 16, 15, 3),
    el("S", "Sulfur", 16, 16, 16, 3),
    el("Cl", "Chlorine", 17, 18, 17, 3),
    el("Ar", "Argon", 18, 22, 18, 3),
];

/// Looks an element up by chemical symbol. Symbols are case-sensitive
/// ("Na", not "NA").
pub fn get(symbol: &str) -> Option<&'static Element> {
    PERIODIC_TABLE.iter().find(|e| e.symbol == symbol)
}

/// Legacy lookup: unknown symbols resolve to Hydrogen instead of failing.
/// Kept for presentation code that renders *something* for any input; the
/// fallback is logged so bad symbols no longer disappear silently.
pub fn get_or_default(symbol: &str) -> &'static Element {
    match get(symbol) {
        Some(e) => e,
        None => {
            log::warn!("unknown element symbol `{}`, falling back to Hydrogen", symbol);
            &PERIODIC_TABLE[0]
        }
    }
}

/// Grid-cell lookup for the 18-column periodic layout. Most cells in
/// periods 2-3 are empty (groups 3-12 only exist from period 4 on).
pub fn by_position(group: u8, period: u8) -> Option<&'static Element> {
    PERIODIC_TABLE
        .iter()
        .find(|e| e.group == group && e.period == period)
}

/// Broad family an element belongs to, as the module's periodic grid
/// colors it. Derived from the group column alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElementCategory {
    AlkaliMetal,
    AlkalineEarth,
    Metalloid,
    Halogen,
    NobleGas,
    Other,
}

impl ElementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ElementCategory::AlkaliMetal => "Alkali metals",
            ElementCategory::AlkalineEarth => "Alkaline earth",
            ElementCategory::Metalloid => "Metalloids",
            ElementCategory::Halogen => "Halogens",
            ElementCategory::NobleGas => "Noble gases",
            ElementCategory::Other => "Other",
        }
    }

    /// Tile color for the periodic-grid view.
    pub fn color(&self) -> (f64, f64, f64) {
        match self {
            ElementCategory::AlkaliMetal => (0.94, 0.27, 0.27),   // Red
            ElementCategory::AlkalineEarth => (0.98, 0.45, 0.09), // Orange
            ElementCategory::Metalloid => (0.13, 0.77, 0.37),     // Green
            ElementCategory::Halogen => (0.92, 0.70, 0.03),       // Yellow
            ElementCategory::NobleGas => (0.66, 0.33, 0.97),      // Purple
            ElementCategory::Other => (0.23, 0.51, 0.96),         // Blue
        }
    }
}

impl Element {
    pub fn category(&self) -> ElementCategory {
        match self.group {
            1 => ElementCategory::AlkaliMetal,
            2 => ElementCategory::AlkalineEarth,
            13..=16 => ElementCategory::Metalloid,
            17 => ElementCategory::Halogen,
            18 => ElementCategory::NobleGas,
            _ => ElementCategory::Other,
        }
    }
}
