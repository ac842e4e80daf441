use rand::seq::SliceRandom;

/// Palette the UI renders tag chips from.
const TAG_COLORS: [&str; 12] = [
    "#FF5733", "#33B5FF", "#33FF99", "#FFC300", "#C70039", "#900C3F", "#581845", "#2ECC71",
    "#9B59B6", "#E67E22", "#1ABC9C", "#34495E",
];

/// Color assigned to a tag created without an explicit one.
pub fn random_tag_color() -> String {
    TAG_COLORS
        .choose(&mut rand::thread_rng())
        .unwrap_or(&TAG_COLORS[0])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_color_comes_from_the_palette() {
        for _ in 0..20 {
            let color = random_tag_color();
            assert!(TAG_COLORS.contains(&color.as_str()));
        }
    }

    #[test]
    fn palette_entries_are_hex_colors() {
        for color in TAG_COLORS {
            assert!(color.starts_with('#'));
            assert_eq!(color.len(), 7);
        }
    }
}
