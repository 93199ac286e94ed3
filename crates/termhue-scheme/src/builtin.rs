//! Named preset schemes — ready-to-use generation requests.
//!
//! Each preset is a specific combination of primary color, mode and hue
//! count with a fixed output name.

use crate::pattern::Mode;

/// A named generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Output base name (`<name>.sh`, `<name>.colors.Xresources`).
    pub name: &'static str,
    /// Primary color, as a name or hex string.
    pub primary: &'static str,
    /// Hue spread.
    pub mode: Mode,
    /// Hues generated per bucket.
    pub hue_count: u32,
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "pink-complementary",
        primary: "Pink",
        mode: Mode::Complementary,
        hue_count: 6,
    },
    Preset {
        name: "pink-analogous",
        primary: "Pink",
        mode: Mode::Analogous,
        hue_count: 6,
    },
];

/// Look up a builtin preset by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_preset(name: &str) -> Option<Preset> {
    PRESETS.iter().find(|p| p.name == name).copied()
}

/// List all builtin preset names, in the order they run by default.
#[must_use]
pub fn builtin_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

/// All builtin presets.
#[must_use]
pub const fn builtin_presets() -> &'static [Preset] {
    PRESETS
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::{Generation, generate};

    #[test]
    fn all_builtins_generate() {
        for preset in builtin_presets() {
            let g = generate(preset.primary, preset.hue_count, preset.mode);
            assert!(
                matches!(g, Ok(Generation::Scheme(_))),
                "Builtin '{}' failed to generate: {g:?}",
                preset.name
            );
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(builtin_preset("nonexistent").is_none());
    }

    #[test]
    fn names_match_lookup() {
        for name in builtin_names() {
            assert_eq!(builtin_preset(name).map(|p| p.name), Some(name));
        }
    }

    #[test]
    fn pink_presets_differ() {
        let a = builtin_preset("pink-complementary").unwrap();
        let b = builtin_preset("pink-analogous").unwrap();
        let sa = generate(a.primary, a.hue_count, a.mode).unwrap();
        let sb = generate(b.primary, b.hue_count, b.mode).unwrap();
        assert_ne!(sa, sb);
    }
}
