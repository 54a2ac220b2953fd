// src/model/shells.rs
//
// Electron-shell arithmetic: the auto-fill rule used to render any element,
// and the stricter teaching rule shown in the build exercise. The two rules
// disagree only from the third shell on, and the exercise set stays inside
// the region where they agree.

/// Exercise menu, in the order the module presents it. Every symbol here has
/// a curated configuration in `canonical`.
pub const EXERCISE_SET: [&str; 8] = ["C", "N", "O", "F", "Na", "Mg", "Al", "Si"];

/// Capacity of shell `shell_index` (0-based) under the auto-fill rule:
/// 2, 8, then 18 for every further shell.
pub fn capacity(shell_index: usize) -> u32 {
    match shell_index {
        0 => 2,
        1 => 8,
        _ => 18,
    }
}

/// Capacity of shell `shell_index` under the teaching rule the build
/// exercise enforces: 2, 8, 8, 18. This is the octet-style simplification
/// presented alongside the curated answer key, not the rule `distribute`
/// fills with; for the exercise elements (Z <= 14) the distinction never
/// becomes visible.
pub fn builder_capacity(shell_index: usize) -> u32 {
    match shell_index {
        0 => 2,
        1 => 8,
        2 => 8,
        _ => 18,
    }
}

/// Fills `electrons` into shells innermost-out, each shell up to
/// `capacity`. Deterministic; `distribute(0)` is the empty configuration.
pub fn distribute(electrons: u32) -> Vec<u32> {
    let mut shells = Vec::new();
    let mut remaining = electrons;
    let mut index = 0;
    while remaining > 0 {
        let take = remaining.min(capacity(index));
        shells.push(take);
        remaining -= take;
        index += 1;
    }
    shells
}

/// Curated answer key for the configuration exercise. `None` for every
/// element outside the exercise set, including ones the periodic grid knows.
pub fn canonical(symbol: &str) -> Option<&'static [u32]> {
    match symbol {
        "C" => Some(&[2, 4]),
        "N" => Some(&[2, 5]),
        "O" => Some(&[2, 6]),
        "F" => Some(&[2, 7]),
        "Na" => Some(&[2, 8, 1]),
        "Mg" => Some(&[2, 8, 2]),
        "Al" => Some(&[2, 8, 3]),
        "Si" => Some(&[2, 8, 4]),
        _ => None,
    }
}

/// Total electron count of a configuration.
pub fn total(config: &[u32]) -> u32 {
    config.iter().sum()
}

/// Shell letter (K, L, M, ...) for display next to ring counts.
pub fn shell_label(shell_index: usize) -> char {
    // K is shell 0; the alphabet continues from there.
    (b'K' + (shell_index as u8 % 16)) as char
}
