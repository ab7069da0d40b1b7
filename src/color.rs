use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{named, Srgb};

// ---------------------------------------------------------------------------
// Type color map: primary type → Color32
// ---------------------------------------------------------------------------

fn to_color32(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

/// Immutable mapping from primary-type name to its display color.
///
/// Built once at startup; purely presentational. Lookups never fail: a
/// type absent from the table resolves to the neutral default.
#[derive(Debug, Clone)]
pub struct TypeColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl TypeColorMap {
    /// The canonical 18-type color table.
    pub fn standard() -> Self {
        let entries: [(&str, Srgb<u8>); 18] = [
            ("Bug", named::GREEN),
            ("Dark", named::BLACK),
            ("Dragon", named::BLUE),
            ("Electric", named::YELLOW),
            ("Fairy", named::PINK),
            ("Fighting", named::RED),
            ("Fire", named::ORANGE),
            ("Flying", named::LIGHTBLUE),
            ("Ghost", named::PURPLE),
            ("Grass", named::FORESTGREEN),
            ("Ground", named::BROWN),
            ("Ice", named::LIGHTCYAN),
            ("Normal", named::GRAY),
            ("Poison", named::PURPLE),
            ("Psychic", named::FUCHSIA),
            ("Rock", named::GOLD),
            ("Steel", named::SILVER),
            ("Water", named::DODGERBLUE),
        ];

        let mapping = entries
            .iter()
            .map(|&(name, c)| (name.to_string(), to_color32(c)))
            .collect();

        TypeColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the color for a primary type, falling back to the default.
    pub fn color_for(&self, type_name: &str) -> Color32 {
        self.mapping
            .get(type_name)
            .copied()
            .unwrap_or(self.default_color)
    }
}

impl Default for TypeColorMap {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_resolve_to_their_color() {
        let colors = TypeColorMap::standard();
        assert_eq!(colors.color_for("Fire"), to_color32(named::ORANGE));
        assert_eq!(colors.color_for("Water"), to_color32(named::DODGERBLUE));
    }

    #[test]
    fn unknown_type_falls_back_to_the_default() {
        let colors = TypeColorMap::standard();
        assert_eq!(colors.color_for("Shadow"), Color32::GRAY);
        assert_eq!(colors.color_for(""), Color32::GRAY);
    }
}
