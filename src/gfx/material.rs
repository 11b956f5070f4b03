//! Material roles for per-step visual staging
//!
//! A [MaterialRole] is an enumerated visual treatment, not a mutable object;
//! applying a role to a part means assigning the style the library maps it
//! to. Roles are stored centrally in [MaterialLibrary] so a host can restyle
//! a role without touching the step table.

use std::collections::HashMap;

/// Material definition with PBR-style properties
///
/// A plain value the render host translates into its own material system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialDef {
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub flat_shading: bool,
}

impl Default for MaterialDef {
    fn default() -> Self {
        Self {
            base_color: [0.8, 0.8, 0.8, 1.0],
            metallic: 0.0,
            roughness: 0.5,
            emissive: [0.0, 0.0, 0.0],
            emissive_intensity: 0.0,
            flat_shading: false,
        }
    }
}

impl MaterialDef {
    /// Creates a new material definition with basic PBR properties
    ///
    /// # Arguments
    /// * `base_color` - RGBA base color
    /// * `metallic` - Metallic factor (0.0 = dielectric, 1.0 = metallic)
    /// * `roughness` - Surface roughness (0.0 = mirror, 1.0 = rough)
    pub fn new(base_color: [f32; 4], metallic: f32, roughness: f32) -> Self {
        Self {
            base_color,
            metallic: metallic.clamp(0.0, 1.0),
            roughness: roughness.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    /// Builder pattern: Set emissive color and intensity
    pub fn with_emission(mut self, r: f32, g: f32, b: f32, intensity: f32) -> Self {
        self.emissive = [r, g, b];
        self.emissive_intensity = intensity.max(0.0);
        self
    }

    /// Builder pattern: Enable flat shading
    pub fn with_flat_shading(mut self) -> Self {
        self.flat_shading = true;
        self
    }
}

/// Enumerated visual treatment applied to a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaterialRole {
    /// Untinted wood, the resting state of every part
    #[default]
    Default,
    /// Emissive accent for the parts a step talks about
    Highlight,
    /// Bulk tint for the classifier's short group
    ShortGroup,
    /// Bulk tint for the classifier's long group
    LongGroup,
    /// Per-pair tint for steps that stage parts in couples
    Pair(u8),
}

/// Number of pair colors shipped in the wooden-star palette
pub const PAIR_COLOR_COUNT: u8 = 5;

/// Central role → style mapping
///
/// Lookup never fails: a role without an entry (for instance a `Pair(k)`
/// beyond the palette) falls back to the `Default` role's style, and as a
/// last resort to [MaterialDef::default].
#[derive(Debug, Clone)]
pub struct MaterialLibrary {
    styles: HashMap<MaterialRole, MaterialDef>,
}

impl MaterialLibrary {
    /// Creates an empty library holding only a neutral default style
    pub fn new() -> Self {
        let mut styles = HashMap::new();
        styles.insert(MaterialRole::Default, MaterialDef::default());
        Self { styles }
    }

    /// The wooden-star palette: tan wood, amber highlight, red/yellow group
    /// tints, and five pair colors
    pub fn wooden_star() -> Self {
        let mut library = Self::new();

        library.set(
            MaterialRole::Default,
            MaterialDef::new([0.784, 0.639, 0.416, 1.0], 0.05, 0.55).with_flat_shading(),
        );
        library.set(
            MaterialRole::Highlight,
            MaterialDef::new([1.0, 0.824, 0.290, 1.0], 0.2, 0.4)
                .with_emission(1.0, 0.702, 0.0, 0.5),
        );
        library.set(
            MaterialRole::ShortGroup,
            MaterialDef::new([1.0, 0.333, 0.333, 1.0], 0.05, 0.55).with_flat_shading(),
        );
        library.set(
            MaterialRole::LongGroup,
            MaterialDef::new([1.0, 0.820, 0.0, 1.0], 0.05, 0.55).with_flat_shading(),
        );

        // green, blue, orange, purple, pink
        let pair_colors = [
            [0.235, 0.706, 0.294, 1.0],
            [0.263, 0.388, 0.847, 1.0],
            [0.961, 0.510, 0.192, 1.0],
            [0.569, 0.118, 0.706, 1.0],
            [0.980, 0.745, 0.831, 1.0],
        ];
        for (k, color) in pair_colors.iter().enumerate() {
            library.set(
                MaterialRole::Pair(k as u8),
                MaterialDef::new(*color, 0.05, 0.55).with_flat_shading(),
            );
        }

        library
    }

    /// Assigns or replaces the style for a role
    pub fn set(&mut self, role: MaterialRole, def: MaterialDef) {
        self.styles.insert(role, def);
    }

    /// Gets the style for a role with fallback to the default role
    pub fn get(&self, role: MaterialRole) -> MaterialDef {
        self.styles
            .get(&role)
            .or_else(|| self.styles.get(&MaterialRole::Default))
            .copied()
            .unwrap_or_default()
    }
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        Self::wooden_star()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_lookup() {
        let library = MaterialLibrary::wooden_star();
        let highlight = library.get(MaterialRole::Highlight);
        assert!(highlight.emissive_intensity > 0.0);
        assert_ne!(highlight, library.get(MaterialRole::Default));
    }

    #[test]
    fn test_unknown_pair_falls_back_to_default() {
        let library = MaterialLibrary::wooden_star();
        let beyond_palette = library.get(MaterialRole::Pair(PAIR_COLOR_COUNT + 3));
        assert_eq!(beyond_palette, library.get(MaterialRole::Default));
    }

    #[test]
    fn test_restyling_a_role() {
        let mut library = MaterialLibrary::wooden_star();
        let teal = MaterialDef::new([0.0, 0.5, 0.5, 1.0], 0.0, 0.3);
        library.set(MaterialRole::Highlight, teal);
        assert_eq!(library.get(MaterialRole::Highlight), teal);
    }

    #[test]
    fn test_all_pair_colors_distinct() {
        let library = MaterialLibrary::wooden_star();
        for a in 0..PAIR_COLOR_COUNT {
            for b in (a + 1)..PAIR_COLOR_COUNT {
                assert_ne!(
                    library.get(MaterialRole::Pair(a)),
                    library.get(MaterialRole::Pair(b))
                );
            }
        }
    }
}
