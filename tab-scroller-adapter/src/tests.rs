use crate::*;

use tab_scroller::{LayoutDirection, TabStrip};

/// 9 tabs of 100px in a 250px frame: the reference overflow scenario.
fn scenario_host(direction: LayoutDirection) -> SimulatedHost {
    let strip = match direction {
        LayoutDirection::Ltr => TabStrip::from_widths([100; 9]),
        // Measured under RTL flow the first tab sits at the visual right.
        LayoutDirection::Rtl => TabStrip::from_tabs((0..9u64).map(|i| (800 - i * 100, 100))),
    };
    SimulatedHost::new(strip, 250, direction)
}

fn active_foundation(direction: LayoutDirection) -> TabScrollerFoundation<SimulatedHost> {
    let mut f = TabScrollerFoundation::new(scenario_host(direction));
    f.init().unwrap();
    // Initial attach schedules the first layout pass.
    f.adapter_mut().run_frame();
    f
}

#[test]
fn init_then_destroy_leaves_no_residual_handlers() {
    let mut f = TabScrollerFoundation::new(scenario_host(LayoutDirection::Ltr));
    assert_eq!(f.lifecycle(), Lifecycle::Uninitialized);

    f.init().unwrap();
    assert_eq!(f.lifecycle(), Lifecycle::Active);
    for kind in HandlerKind::ALL {
        assert_eq!(f.adapter().register_count(kind), 1);
        assert_eq!(f.adapter().deregister_count(kind), 0);
    }

    f.destroy().unwrap();
    assert_eq!(f.lifecycle(), Lifecycle::Destroyed);
    for kind in HandlerKind::ALL {
        assert_eq!(f.adapter().register_count(kind), 1);
        assert_eq!(f.adapter().deregister_count(kind), 1);
    }
    assert_eq!(f.adapter().residual_handlers(), 0);
}

#[test]
fn lifecycle_misuse_is_rejected() {
    let mut f = TabScrollerFoundation::new(scenario_host(LayoutDirection::Ltr));

    assert_eq!(f.destroy(), Err(LifecycleError::NotActive));

    f.init().unwrap();
    assert_eq!(f.init(), Err(LifecycleError::AlreadyInitialized));

    f.destroy().unwrap();
    assert_eq!(f.destroy(), Err(LifecycleError::Destroyed));
    // Re-initialization after destroy is not supported.
    assert_eq!(f.init(), Err(LifecycleError::Destroyed));

    assert_eq!(
        LifecycleError::NotActive.to_string(),
        "foundation is not active"
    );
}

#[test]
fn scroll_entry_points_are_noops_outside_active_state() {
    let mut f = TabScrollerFoundation::new(scenario_host(LayoutDirection::Ltr));

    f.scroll_forward();
    f.scroll_back();
    f.handle_focus(FocusEvent::tab(5));
    f.handle_resize();
    assert_eq!(f.adapter().state().translate_offset, 0);
    assert_eq!(f.adapter().state().scroll_target, None);
    assert_eq!(f.adapter().state().focused_target, None);

    f.init().unwrap();
    f.destroy().unwrap();
    f.scroll_forward();
    assert_eq!(f.adapter().state().scroll_target, None);
}

#[test]
fn forward_click_walks_the_reference_scenario() {
    let mut f = active_foundation(LayoutDirection::Ltr);

    // boundary = 250; tab 2 spans [200,300): first not fully contained.
    f.scroll_forward();
    assert_eq!(f.adapter().state().scroll_target, Some(2));
    assert_eq!(f.adapter().state().translate_offset, 200);

    // The style write happens on the next frame, LTR shifts negative.
    assert_eq!(f.adapter_mut().run_frame(), Some(-200));
    assert!(f.adapter().indicators().back_enabled);
    assert!(f.adapter().indicators().forward_enabled);
}

#[test]
fn repeated_forward_clicks_stop_at_full_reveal() {
    let mut f = active_foundation(LayoutDirection::Ltr);

    let mut offsets = Vec::new();
    for _ in 0..8 {
        f.scroll_forward();
        offsets.push(f.adapter().state().translate_offset);
    }
    assert_eq!(offsets, [200, 400, 600, 650, 650, 650, 650, 650]);

    // The last tab's trailing edge fits the view boundary.
    let boundary = 650 + 250;
    assert!(f.adapter().strip().trailing_edge(8).unwrap() <= boundary);

    f.adapter_mut().run_frame();
    assert!(!f.adapter().indicators().forward_enabled);
}

#[test]
fn back_click_returns_to_start_from_scenario_offset() {
    let mut f = active_foundation(LayoutDirection::Ltr);
    f.scroll_forward();
    assert_eq!(f.adapter().state().translate_offset, 200);

    // Only 200px of tabs precede the offset, below one frame width: the
    // back scan falls back to tab 0.
    f.scroll_back();
    assert_eq!(f.adapter().state().scroll_target, Some(0));
    assert_eq!(f.adapter().state().translate_offset, 0);

    assert_eq!(f.adapter_mut().run_frame(), Some(0));
    assert!(!f.adapter().indicators().back_enabled);
}

#[test]
fn focus_past_view_selects_same_target_as_forward_click() {
    let mut f = active_foundation(LayoutDirection::Ltr);
    f.scroll_forward(); // offset 200

    let mut equivalent = f.clone();
    equivalent.scroll_forward();
    let expected = equivalent.adapter().state();

    // Tab 5 spans [500,600), past the view boundary at 450.
    f.handle_focus(FocusEvent::tab(5));
    assert_eq!(f.adapter().state().focused_target, Some(5));
    assert_eq!(f.adapter().state().scroll_target, expected.scroll_target);
    assert_eq!(
        f.adapter().state().translate_offset,
        expected.translate_offset
    );
}

#[test]
fn focus_before_view_selects_same_target_as_back_click() {
    let mut f = active_foundation(LayoutDirection::Ltr);
    f.scroll_forward();
    f.scroll_forward(); // offset 400

    let mut equivalent = f.clone();
    equivalent.scroll_back();
    let expected = equivalent.adapter().state();

    f.handle_focus(FocusEvent::tab(0));
    assert_eq!(f.adapter().state().focused_target, Some(0));
    assert_eq!(f.adapter().state().scroll_target, expected.scroll_target);
    assert_eq!(
        f.adapter().state().translate_offset,
        expected.translate_offset
    );
}

#[test]
fn focus_on_visible_tab_moves_nothing() {
    let mut f = active_foundation(LayoutDirection::Ltr);
    f.scroll_forward(); // view now [200, 450)

    f.handle_focus(FocusEvent::tab(3)); // spans [300,400)
    assert_eq!(f.adapter().state().focused_target, Some(3));
    assert_eq!(f.adapter().state().translate_offset, 200);
    assert_eq!(f.adapter().state().scroll_target, Some(2));
}

#[test]
fn focus_from_non_tab_element_is_ignored() {
    let mut f = active_foundation(LayoutDirection::Ltr);
    f.handle_focus(FocusEvent::non_tab());
    assert_eq!(f.adapter().state().focused_target, None);
    assert_eq!(f.adapter().state().translate_offset, 0);
}

#[test]
fn rtl_focus_correction_uses_normalized_edges() {
    let mut f = active_foundation(LayoutDirection::Rtl);
    f.scroll_forward();
    assert_eq!(f.adapter().state().translate_offset, 200);
    assert_eq!(f.adapter_mut().run_frame(), Some(200)); // RTL shifts positive

    // Tab 5's normalized leading is 500; its trailing edge (600) lies past
    // the view boundary (450), so focus scrolls forward to tab 4.
    f.handle_focus(FocusEvent::tab(5));
    assert_eq!(f.adapter().state().scroll_target, Some(4));
    assert_eq!(f.adapter().state().translate_offset, 400);
    assert_eq!(f.adapter_mut().run_frame(), Some(400));
}

#[test]
fn deferred_shift_coalesces_and_applies_last_write() {
    let mut f = active_foundation(LayoutDirection::Ltr);

    f.scroll_forward(); // offset 200, shift scheduled
    f.scroll_forward(); // offset 400, coalesces into the pending slot

    assert_eq!(f.adapter_mut().run_frame(), Some(-400));
    assert_eq!(f.adapter_mut().run_frame(), None);
    assert_eq!(f.adapter().last_applied_shift(), Some(-400));
}

#[test]
fn resize_relayout_resets_offset_when_strip_fits() {
    let mut f = active_foundation(LayoutDirection::Ltr);
    f.scroll_forward();
    f.scroll_forward(); // offset 400
    f.adapter_mut().run_frame();

    f.handle_resize();
    f.adapter_mut().set_frame_width(1000); // frame now wider than the strip
    assert_eq!(f.adapter().state().translate_offset, 400); // nothing yet

    assert_eq!(f.adapter_mut().run_frame(), Some(0));
    assert!(!f.adapter().is_scrollable());
    assert_eq!(f.adapter().state().translate_offset, 0);
    assert!(!f.adapter().indicators().back_enabled);
    assert!(!f.adapter().indicators().forward_enabled);
}

#[test]
fn resize_relayout_clamps_a_stranded_offset() {
    let mut f = active_foundation(LayoutDirection::Ltr);
    for _ in 0..4 {
        f.scroll_forward();
    }
    assert_eq!(f.adapter().state().translate_offset, 650);

    f.handle_resize();
    f.adapter_mut().set_frame_width(400); // max offset shrinks to 500
    assert_eq!(f.adapter_mut().run_frame(), Some(-500));
    assert!(f.adapter().is_scrollable());
    assert_eq!(f.adapter().state().translate_offset, 500);
}

#[test]
fn initial_attach_lays_out_on_first_frame() {
    // A strip that fits applies the zero shift and hides both indicators.
    let mut host = SimulatedHost::new(TabStrip::from_widths([50; 3]), 300, LayoutDirection::Ltr);
    assert_eq!(host.run_frame(), Some(0));
    assert!(!host.is_scrollable());
    assert!(!host.indicators().back_enabled);
    assert!(!host.indicators().forward_enabled);

    // An overflowing strip becomes scrollable with forward enabled.
    let mut host = scenario_host(LayoutDirection::Ltr);
    host.run_frame();
    assert!(host.is_scrollable());
    assert!(host.indicators().forward_enabled);
    assert!(!host.indicators().back_enabled);
}

#[test]
fn pending_shift_is_a_single_slot() {
    let mut slot = PendingShift::new();
    assert!(!slot.is_pending());

    assert!(slot.schedule());
    assert!(!slot.schedule()); // coalesced
    assert!(slot.is_pending());

    assert!(slot.take());
    assert!(!slot.take());
    assert!(!slot.is_pending());
}

#[test]
fn residual_handlers_saturates_per_kind() {
    let mut host = scenario_host(LayoutDirection::Ltr);

    // A host driven outside the foundation may see an unbalanced deregister;
    // the excess counts as zero rather than underflowing.
    host.deregister_handler(HandlerKind::Focus);
    assert_eq!(host.residual_handlers(), 0);

    host.register_handler(HandlerKind::Resize);
    assert_eq!(host.residual_handlers(), 1);
    assert_eq!(host.deregister_count(HandlerKind::Focus), 1);
}

#[cfg(feature = "serde")]
#[test]
fn value_types_implement_serde() {
    fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
    assert_serde::<HandlerKind>();
    assert_serde::<Lifecycle>();
    assert_serde::<FocusEvent>();
    assert_serde::<PendingShift>();
}

#[test]
fn adapter_default_accessors_are_self_consistent() {
    let mut host = scenario_host(LayoutDirection::Rtl);
    for i in 0..host.tab_count() {
        let raw = host.leading_offset(i);
        let norm = host.normalized_leading_offset(i);
        let width = host.tab_width(i) as u64;
        assert_eq!(norm + width + raw, host.strip_width());
    }

    assert_eq!(host.focused_width(), None);
    host.set_focused_target(5);
    assert_eq!(host.focused_width(), Some(100));
    assert_eq!(host.focused_leading_offset(), Some(300));
    assert_eq!(host.normalized_focused_leading_offset(), Some(500));
}
