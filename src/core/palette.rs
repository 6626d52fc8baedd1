use serde::{Deserialize, Serialize};

/// Name of the single color range synthesized from user colors.
pub const CUSTOM_COLOR_RANGE_NAME: &str = "custom";

/// Engine palette: named color ranges plus index-based assignment rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub color_ranges: Vec<ColorRange>,
    pub color_rules: Vec<ColorRule>,
}

/// Ordered colors, stored without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub name: String,
    pub values: Vec<String>,
}

/// Rule active for series counts in `min..=max`.
///
/// Each `[range_index, color_index]` pair assigns a color of the range to the
/// series at the pair's position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRule {
    pub min: usize,
    pub max: usize,
    pub values: Vec<[usize; 2]>,
}

/// Builds the engine palette for an ordered list of colors.
///
/// Returns `None` for an empty list so the document omits its palette and the
/// engine keeps its default one. Colors are not validated.
#[must_use]
pub fn build_palette<S: AsRef<str>>(colors: &[S]) -> Option<Palette> {
    if colors.is_empty() {
        return None;
    }

    let values = colors
        .iter()
        .map(|color| {
            let color = color.as_ref();
            color.strip_prefix('#').unwrap_or(color).to_owned()
        })
        .collect();
    let assignments = (0..colors.len()).map(|index| [0, index]).collect();

    Some(Palette {
        color_ranges: vec![ColorRange {
            name: CUSTOM_COLOR_RANGE_NAME.to_owned(),
            values,
        }],
        color_rules: vec![ColorRule {
            min: 1,
            max: colors.len(),
            values: assignments,
        }],
    })
}
