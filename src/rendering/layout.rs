// src/rendering/layout.rs

use nalgebra::Point2;

use crate::builder::BuildState;
use crate::model::elements::Element;
use crate::model::history::ModelKind;
use crate::model::shells;

/// Canvas presets for the model views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSize {
    Small,
    Medium,
    Large,
}

impl ModelSize {
    pub fn px(&self) -> f64 {
        match self {
            ModelSize::Small => 128.0,
            ModelSize::Medium => 192.0,
            ModelSize::Large => 256.0,
        }
    }
}

impl Default for ModelSize {
    fn default() -> Self {
        ModelSize::Medium
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Proton,
    Neutron,
    Electron,
}

impl ParticleKind {
    /// Display color (RGB 0..1).
    pub fn color(&self) -> (f64, f64, f64) {
        match self {
            ParticleKind::Proton => (0.94, 0.27, 0.27),  // Red
            ParticleKind::Neutron => (0.61, 0.64, 0.69), // Grey
            ParticleKind::Electron => (0.38, 0.65, 0.98), // Light Blue
        }
    }

    /// Sprite diameter in logical px.
    pub fn diameter_px(&self) -> f64 {
        match self {
            ParticleKind::Electron => 8.0,
            _ => 12.0,
        }
    }
}

/// Innermost orbit radius, shared by both views.
pub const BASE_RING_RADIUS: f64 = 40.0;
/// Ring-to-ring spacing in the element model view.
pub const MODEL_RING_SPACING: f64 = 30.0;
/// Ring-to-ring spacing in the wider configuration-builder view.
pub const BUILDER_RING_SPACING: f64 = 35.0;

pub fn ring_radius(shell_index: usize) -> f64 {
    BASE_RING_RADIUS + shell_index as f64 * MODEL_RING_SPACING
}

pub fn builder_ring_radius(shell_index: usize) -> f64 {
    BASE_RING_RADIUS + shell_index as f64 * BUILDER_RING_SPACING
}

/// One electron sprite on an orbit. Positions are relative to the atom
/// center; the animation fields parameterize the orbital spin the
/// presentation applies.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectronSprite {
    pub shell: usize,
    pub index: usize,
    pub pos: Point2<f64>,
    /// Seconds for one revolution: outer shells spin slower.
    pub spin_period_s: f64,
    /// Start offset so electrons on one ring don't move in lockstep.
    pub spin_delay_s: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NucleusParticle {
    pub kind: ParticleKind,
    pub pos: Point2<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitRing {
    pub shell: usize,
    pub radius: f64,
    pub electrons: Vec<ElectronSprite>,
}

/// Complete geometry of one rendered atom.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomLayout {
    pub canvas_px: f64,
    /// Atom center in canvas coordinates; everything else is relative to it.
    pub center: Point2<f64>,
    pub rings: Vec<OrbitRing>,
    /// Empty under Thomson's model, which predates the nucleus.
    pub nucleus: Vec<NucleusParticle>,
}

fn polar(radius: f64, angle_deg: f64) -> Point2<f64> {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Point2::new(radius * cos, radius * sin)
}

/// Lays out the auto-filled model of an element: shells from the flattened
/// capacity rule, evenly spread electrons, and the proton/neutron cluster
/// (unless the chosen historical model hides it).
pub fn model_layout(element: &Element, size: ModelSize, model: ModelKind) -> AtomLayout {
    let canvas = size.px();
    let shells = shells::distribute(element.electrons);

    // --- 1. Orbits and electrons ---
    let mut rings = Vec::with_capacity(shells.len());
    for (shell, &count) in shells.iter().enumerate() {
        let radius = ring_radius(shell);
        let mut electrons = Vec::with_capacity(count as usize);
        for index in 0..count as usize {
            let angle = index as f64 * 360.0 / count as f64;
            electrons.push(ElectronSprite {
                shell,
                index,
                pos: polar(radius, angle),
                spin_period_s: 2.0 + shell as f64,
                spin_delay_s: 0.2 * index as f64,
            });
        }
        rings.push(OrbitRing {
            shell,
            radius,
            electrons,
        });
    }

    // --- 2. Nucleus cluster ---
    // Protons and neutrons sit on small interleaved circles so the cluster
    // reads as a clump instead of a single dot.
    let mut nucleus = Vec::new();
    if model.shows_nucleus() {
        for i in 0..element.protons as usize {
            let angle = i as f64 * 360.0 / element.protons as f64;
            let offset = 12.0 + (i % 2) as f64 * 4.0;
            nucleus.push(NucleusParticle {
                kind: ParticleKind::Proton,
                pos: polar(offset, angle),
            });
        }
        for i in 0..element.neutrons as usize {
            let angle = i as f64 * 360.0 / element.neutrons as f64 + 180.0;
            let offset = 8.0 + (i % 2) as f64 * 4.0;
            nucleus.push(NucleusParticle {
                kind: ParticleKind::Neutron,
                pos: polar(offset, angle),
            });
        }
    }

    AtomLayout {
        canvas_px: canvas,
        center: Point2::new(canvas / 2.0, canvas / 2.0),
        rings,
        nucleus,
    }
}

/// One ring of the configuration-builder view.
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderRing {
    pub shell: usize,
    pub radius: f64,
    /// The ring the next electron lands on is highlighted.
    pub active: bool,
    pub filled: u32,
    pub target: u32,
    pub electrons: Vec<ElectronSprite>,
}

/// Geometry of the in-progress build: one ring per target shell, populated
/// with however many electrons the learner has placed.
pub fn builder_layout(build: &BuildState) -> Vec<BuilderRing> {
    let target = build.target();
    let mut rings = Vec::with_capacity(target.len());
    for (shell, &goal) in target.iter().enumerate() {
        let radius = builder_ring_radius(shell);
        let filled = build.shells().get(shell).copied().unwrap_or(0);
        let mut electrons = Vec::with_capacity(filled as usize);
        for index in 0..filled as usize {
            let angle = index as f64 * 360.0 / filled.max(1) as f64;
            electrons.push(ElectronSprite {
                shell,
                index,
                pos: polar(radius, angle),
                spin_period_s: 2.0 + shell as f64,
                // The builder pulses rather than spins; steps are tighter.
                spin_delay_s: 0.1 * index as f64,
            });
        }
        rings.push(BuilderRing {
            shell,
            radius,
            active: build.cursor() == shell,
            filled,
            target: goal,
            electrons,
        });
    }
    rings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::elements;

    fn norm(p: &Point2<f64>) -> f64 {
        p.coords.norm()
    }

    #[test]
    fn test_canvas_presets() {
        assert_eq!(ModelSize::Small.px(), 128.0);
        assert_eq!(ModelSize::Medium.px(), 192.0);
        assert_eq!(ModelSize::Large.px(), 256.0);
        assert_eq!(ModelSize::default(), ModelSize::Medium);
    }

    #[test]
    fn test_ring_radii() {
        assert_eq!(ring_radius(0), 40.0);
        assert_eq!(ring_radius(1), 70.0);
        assert_eq!(ring_radius(2), 100.0);
        assert_eq!(builder_ring_radius(1), 75.0);
        assert_eq!(builder_ring_radius(2), 110.0);
    }

    #[test]
    fn test_model_layout_oxygen() {
        let oxygen = elements::get("O").unwrap();
        let layout = model_layout(oxygen, ModelSize::Large, ModelKind::Bohr);

        assert_eq!(layout.canvas_px, 256.0);
        assert_eq!(layout.center, Point2::new(128.0, 128.0));
        assert_eq!(layout.rings.len(), 2);
        assert_eq!(layout.rings[0].electrons.len(), 2);
        assert_eq!(layout.rings[1].electrons.len(), 6);
        assert_eq!(layout.nucleus.len(), 16, "8 protons + 8 neutrons");
    }

    #[test]
    fn test_electrons_sit_on_their_ring() {
        let sodium = elements::get("Na").unwrap();
        let layout = model_layout(sodium, ModelSize::Medium, ModelKind::Bohr);
        for ring in &layout.rings {
            for sprite in &ring.electrons {
                assert!((norm(&sprite.pos) - ring.radius).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_electrons_are_evenly_spread() {
        // A full ring of evenly spaced points has its centroid at the
        // center of the orbit.
        let oxygen = elements::get("O").unwrap();
        let layout = model_layout(oxygen, ModelSize::Medium, ModelKind::Bohr);
        let outer = &layout.rings[1];
        let (sx, sy) = outer
            .electrons
            .iter()
            .fold((0.0_f64, 0.0_f64), |(x, y), e| (x + e.pos.x, y + e.pos.y));
        assert!(sx.abs() < 1e-9);
        assert!(sy.abs() < 1e-9);
    }

    #[test]
    fn test_spin_parameters() {
        let carbon = elements::get("C").unwrap();
        let layout = model_layout(carbon, ModelSize::Medium, ModelKind::Bohr);
        assert_eq!(layout.rings[0].electrons[0].spin_period_s, 2.0);
        assert_eq!(layout.rings[1].electrons[0].spin_period_s, 3.0);
        assert!((layout.rings[1].electrons[3].spin_delay_s - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_thomson_hides_nucleus() {
        let helium = elements::get("He").unwrap();
        let thomson = model_layout(helium, ModelSize::Large, ModelKind::Thomson);
        assert!(thomson.nucleus.is_empty());
        // Shells are still drawn; only the nucleus is absent.
        assert_eq!(thomson.rings.len(), 1);

        let bohr = model_layout(helium, ModelSize::Large, ModelKind::Bohr);
        assert_eq!(bohr.nucleus.len(), 4);
    }

    #[test]
    fn test_nucleus_offsets_alternate() {
        let helium = elements::get("He").unwrap();
        let layout = model_layout(helium, ModelSize::Medium, ModelKind::Rutherford);
        let protons: Vec<_> = layout
            .nucleus
            .iter()
            .filter(|p| p.kind == ParticleKind::Proton)
            .collect();
        let neutrons: Vec<_> = layout
            .nucleus
            .iter()
            .filter(|p| p.kind == ParticleKind::Neutron)
            .collect();
        assert!((norm(&protons[0].pos) - 12.0).abs() < 1e-9);
        assert!((norm(&protons[1].pos) - 16.0).abs() < 1e-9);
        assert!((norm(&neutrons[0].pos) - 8.0).abs() < 1e-9);
        assert!((norm(&neutrons[1].pos) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_hydrogen_has_no_neutron_sprites() {
        let hydrogen = elements::get("H").unwrap();
        let layout = model_layout(hydrogen, ModelSize::Small, ModelKind::Bohr);
        assert_eq!(layout.nucleus.len(), 1);
        assert_eq!(layout.nucleus[0].kind, ParticleKind::Proton);
    }

    #[test]
    fn test_builder_layout_tracks_build() {
        let mut build = BuildState::for_element("Na").unwrap();
        for _ in 0..4 {
            build.add_electron();
        }
        let rings = builder_layout(&build);
        assert_eq!(rings.len(), 3, "one ring per target shell");
        assert_eq!(rings[0].filled, 2);
        assert_eq!(rings[1].filled, 2);
        assert_eq!(rings[2].filled, 0);
        assert!(rings[1].active);
        assert!(!rings[0].active);
        assert_eq!(rings[2].electrons.len(), 0);
        assert_eq!(rings[0].target, 2);
        assert_eq!(rings[2].target, 1);
        assert_eq!(rings[1].electrons[1].spin_delay_s, 0.1);
    }

    #[test]
    fn test_particle_palette() {
        assert_eq!(ParticleKind::Proton.diameter_px(), 12.0);
        assert_eq!(ParticleKind::Electron.diameter_px(), 8.0);
        assert_ne!(ParticleKind::Proton.color(), ParticleKind::Neutron.color());
    }
}
