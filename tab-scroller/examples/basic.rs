// Example: resolving scroll targets for an overflowing tab bar.
use tab_scroller::{LayoutDirection, TabStrip};

fn main() {
    // 9 tabs of 100px in a 250px frame.
    let strip = TabStrip::from_widths([100; 9]);
    let frame = 250;
    let dir = LayoutDirection::Ltr;

    println!(
        "total={} overflowing={} max_offset={}",
        strip.total_width(),
        strip.is_overflowing(frame),
        strip.max_translate_offset(frame)
    );

    let mut offset = 0u64;
    while let Some(target) = strip.resolve_forward_target(frame, offset, dir) {
        offset = strip.scroll_target_offset(target, frame, dir).unwrap();
        println!(
            "forward -> tab {target}, offset {offset}, indicators {:?}",
            strip.indicator_states(frame, offset)
        );
    }

    while offset > 0 {
        let target = strip.resolve_back_target(frame, offset, dir).unwrap();
        offset = strip.scroll_target_offset(target, frame, dir).unwrap();
        println!("back -> tab {target}, offset {offset}");
    }
}
