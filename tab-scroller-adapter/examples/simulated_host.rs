// Example: full foundation lifecycle against the in-memory reference host.
//
// A real binding would implement TabScrollerAdapter over element geometry and
// call run_frame from its animation-frame callback; everything else is
// identical.
use tab_scroller::{LayoutDirection, TabStrip};
use tab_scroller_adapter::{FocusEvent, SimulatedHost, TabScrollerFoundation};

fn main() {
    let host = SimulatedHost::new(TabStrip::from_widths([100; 9]), 250, LayoutDirection::Ltr);
    let mut f = TabScrollerFoundation::new(host);
    f.init().unwrap();

    // Initial attach: the first frame runs the layout pass.
    f.adapter_mut().run_frame();
    println!(
        "scrollable={} indicators={:?}",
        f.adapter().is_scrollable(),
        f.adapter().indicators()
    );

    // Forward indicator clicked twice before the next frame: the deferred
    // shift coalesces and applies the final offset once.
    f.scroll_forward();
    f.scroll_forward();
    println!("state={:?}", f.adapter().state());
    println!("frame applied shift {:?}", f.adapter_mut().run_frame());

    // Keyboard focus lands on a tab outside the view.
    f.handle_focus(FocusEvent::tab(8));
    println!("after focus: state={:?}", f.adapter().state());
    f.adapter_mut().run_frame();

    // The window grows past the strip width; relayout resets the scroll.
    f.handle_resize();
    f.adapter_mut().set_frame_width(1200);
    f.adapter_mut().run_frame();
    println!(
        "after resize: scrollable={} state={:?}",
        f.adapter().is_scrollable(),
        f.adapter().state()
    );

    f.destroy().unwrap();
    println!("residual handlers: {}", f.adapter().residual_handlers());
}
