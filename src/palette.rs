//! Community colors for rendering and export.

use std::collections::BTreeMap;
use std::hash::Hash;

use crate::membership::Membership;

/// Qualitative ten-color palette (matplotlib's `tab10`), as hex strings.
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Color for a community id. Ids beyond the palette wrap around, so distant
/// community ids can share a color.
pub fn color_of(community: usize) -> &'static str {
    PALETTE[community % PALETTE.len()]
}

/// Color per community in `membership`, keyed by community id.
pub fn assign_colors<K: Eq + Hash>(membership: &Membership<K>) -> BTreeMap<usize, &'static str> {
    membership
        .communities()
        .into_iter()
        .map(|community| (community, color_of(community)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wraps() {
        assert_eq!(color_of(0), "#1f77b4");
        assert_eq!(color_of(3), "#d62728");
        assert_eq!(color_of(10), "#1f77b4");
        assert_eq!(color_of(23), "#d62728");
    }

    #[test]
    fn test_assign_colors_covers_all_communities() {
        let membership: Membership<&str> =
            [("a", 0), ("b", 2), ("c", 2), ("d", 11)].into_iter().collect();

        let colors = assign_colors(&membership);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[&0], "#1f77b4");
        assert_eq!(colors[&2], "#2ca02c");
        assert_eq!(colors[&11], "#ff7f0e");
    }
}
