// src/model/history.rs

use serde::Serialize;

/// Historical atomic models the module walks through, in chronological
/// order. The discriminant doubles as the index into `MODELS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModelKind {
    Thomson,
    Rutherford,
    Bohr,
}

/// Catalog entry backing one card of the models section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub kind: ModelKind,
    pub name: &'static str,
    pub year: u16,
    pub description: &'static str,
    pub features: [&'static str; 3],
}

pub static MODELS: [ModelInfo; 3] = [
    ModelInfo {
        kind: ModelKind::Thomson,
        name: "Thomson's Model",
        year: 1897,
        description: "Plum pudding model - electrons embedded in a positive sphere",
        features: [
            "Discovered electrons",
            "Positive sphere with embedded electrons",
            "No nucleus concept",
        ],
    },
    ModelInfo {
        kind: ModelKind::Rutherford,
        name: "Rutherford's Model",
        year: 1911,
        description: "Nuclear model - dense nucleus with orbiting electrons",
        features: [
            "Dense nucleus discovered",
            "Gold foil experiment",
            "Electrons orbit nucleus",
        ],
    },
    ModelInfo {
        kind: ModelKind::Bohr,
        name: "Bohr's Model",
        year: 1913,
        description: "Electrons in fixed energy levels around nucleus",
        features: [
            "Fixed electron orbits",
            "Quantized energy levels",
            "Explains atomic spectra",
        ],
    },
];

/// Element drawn in the model-comparison pane.
pub const DEMO_SYMBOL: &str = "He";

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::Thomson, ModelKind::Rutherford, ModelKind::Bohr];

    pub fn info(&self) -> &'static ModelInfo {
        &MODELS[*self as usize]
    }

    /// Thomson's picture predates the nucleus; the layout module draws no
    /// nucleus cluster for it.
    pub fn shows_nucleus(&self) -> bool {
        !matches!(self, ModelKind::Thomson)
    }
}

/// Selection state of the models section. Starts at the chronologically
/// first model, exactly one model active at a time.
#[derive(Debug, Clone)]
pub struct ModelsTour {
    current: ModelKind,
}

impl ModelsTour {
    pub fn new() -> Self {
        ModelsTour {
            current: ModelKind::Thomson,
        }
    }

    pub fn select(&mut self, kind: ModelKind) {
        if self.current != kind {
            log::debug!("models tour: {:?} -> {:?}", self.current, kind);
            self.current = kind;
        }
    }

    pub fn current(&self) -> ModelKind {
        self.current
    }
}

impl Default for ModelsTour {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_chronological() {
        assert_eq!(MODELS.len(), 3);
        for pair in MODELS.windows(2) {
            assert!(pair[0].year < pair[1].year);
        }
        for (i, info) in MODELS.iter().enumerate() {
            assert_eq!(info.kind as usize, i);
            assert_eq!(info.kind.info(), info);
        }
    }

    #[test]
    fn test_thomson_has_no_nucleus() {
        assert!(!ModelKind::Thomson.shows_nucleus());
        assert!(ModelKind::Rutherford.shows_nucleus());
        assert!(ModelKind::Bohr.shows_nucleus());
    }

    #[test]
    fn test_tour_selection() {
        let mut tour = ModelsTour::new();
        assert_eq!(tour.current(), ModelKind::Thomson);
        tour.select(ModelKind::Bohr);
        assert_eq!(tour.current(), ModelKind::Bohr);
        tour.select(ModelKind::Bohr);
        assert_eq!(tour.current(), ModelKind::Bohr);
    }
}
