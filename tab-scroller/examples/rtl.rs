// Example: RTL coordinate normalization.
//
// Geometry is measured in natural left-offset terms; under RTL flow every
// leading coordinate is re-expressed as a distance from the right edge.
use tab_scroller::{LayoutDirection, TabStrip};

fn main() {
    // As measured by a host laying tabs out right-to-left: the first tab
    // sits at the visual right.
    let strip = TabStrip::from_tabs((0..9u64).map(|i| (800 - i * 100, 100)));

    for i in 0..strip.len() {
        let raw = strip.leading_offset(i).unwrap();
        let norm = strip.normalized_leading_offset(i).unwrap();
        println!(
            "tab {i}: raw={raw} normalized={norm} (raw + width + normalized = {})",
            raw + 100 + norm
        );
    }

    let dir = LayoutDirection::Rtl;
    let target = strip.resolve_forward_target(250, 0, dir).unwrap();
    println!(
        "forward from 0 -> tab {target}, offset {:?}",
        strip.scroll_target_offset(target, 250, dir)
    );
}
