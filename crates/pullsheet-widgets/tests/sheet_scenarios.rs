#![forbid(unsafe_code)]

//! End-to-end sheet scenarios: mount, open, drag, dismiss, close.
//!
//! All scenarios use an 800pt sheet resting at 25% (offset 200) with a
//! 100pt pull-to-close threshold.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use pullsheet_core::event::PointerEvent;
use pullsheet_core::gesture::TouchSample;
use pullsheet_widgets::sheet::{CloseReason, GesturePhase, TransitionPhase, TransitionSpec};
use pullsheet_widgets::{PullSheet, SheetAction, SheetConfig};

const FRAME: Duration = Duration::from_millis(16);

fn config() -> SheetConfig {
    SheetConfig::new(800.0, 0.25, 100.0)
}

fn mounted(config: SheetConfig) -> (PullSheet<&'static str>, Rc<Cell<u32>>) {
    let closes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&closes);
    let mut sheet = PullSheet::new(config, move || counter.set(counter.get() + 1))
        .expect("valid config");
    sheet
        .mount(|region| region.wrap("content").into_inner())
        .expect("mount");
    (sheet, closes)
}

/// Tick frames until an action is produced or `limit` elapses.
fn run_until_action(sheet: &mut PullSheet<&'static str>, limit: Duration) -> Option<SheetAction> {
    let mut elapsed = Duration::ZERO;
    while elapsed < limit {
        if let Some(action) = sheet.tick(FRAME) {
            return Some(action);
        }
        elapsed += FRAME;
    }
    None
}

fn opened() -> (PullSheet<&'static str>, Rc<Cell<u32>>) {
    let (mut sheet, closes) = mounted(config());
    assert_eq!(
        run_until_action(&mut sheet, Duration::from_secs(1)),
        Some(SheetAction::Opened)
    );
    (sheet, closes)
}

// ============================================================================
// Open
// ============================================================================

#[test]
fn open_transition_settles_at_rest() {
    let (sheet, closes) = opened();
    assert_eq!(sheet.offset(), 200.0);
    assert_eq!(sheet.dim(), 1.0);
    assert_eq!(sheet.transition_phase(), TransitionPhase::Open);
    assert_eq!(sheet.gesture_phase(), GesturePhase::Ready);
    assert_eq!(closes.get(), 0);
}

#[test]
fn open_moves_surface_up_and_brightens_backdrop() {
    let (mut sheet, _) = mounted(config());
    let mut last_offset = sheet.offset();
    let mut last_dim = sheet.dim();
    assert_eq!(last_offset, 800.0);
    assert_eq!(last_dim, 0.0);
    while sheet.tick(FRAME).is_none() {
        assert!(sheet.offset() <= last_offset);
        assert!(sheet.dim() >= last_dim);
        last_offset = sheet.offset();
        last_dim = sheet.dim();
    }
    assert!(sheet.is_armed());
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn pulling_down_past_rest_dismisses() {
    let (mut sheet, closes) = opened();
    sheet.handle_touch(TouchSample::begin());
    for dy in [10.0, 25.0, 40.0, 50.0] {
        assert_eq!(sheet.handle_touch(TouchSample::active(dy)), None);
    }
    assert_eq!(sheet.offset(), 250.0);

    let action = sheet.handle_touch(TouchSample::end(50.0));
    assert_eq!(action, Some(SheetAction::Dismissing(CloseReason::RestLine)));
    assert_eq!(sheet.model().baseline(), 250.0);
    assert!(!sheet.is_armed());

    assert_eq!(
        run_until_action(&mut sheet, Duration::from_secs(1)),
        Some(SheetAction::Closed)
    );
    assert_eq!(closes.get(), 1);
    assert_eq!(sheet.offset(), 800.0);
}

#[test]
fn pulling_up_keeps_sheet_open_and_freezes_dim() {
    let (mut sheet, closes) = opened();
    sheet.handle_touch(TouchSample::begin());
    for dy in [-5.0, -15.0, -30.0] {
        sheet.handle_touch(TouchSample::active(dy));
        assert_eq!(sheet.dim(), 1.0);
    }
    assert_eq!(sheet.handle_touch(TouchSample::end(-30.0)), None);
    assert_eq!(sheet.model().baseline(), 170.0);
    assert_eq!(sheet.offset(), 170.0);
    assert_eq!(sheet.dim(), 1.0);
    assert!(sheet.is_armed());

    for _ in 0..100 {
        assert_eq!(sheet.tick(FRAME), None);
    }
    assert_eq!(closes.get(), 0);
}

#[test]
fn second_session_measures_from_new_baseline() {
    let (mut sheet, _) = opened();
    sheet.handle_touch(TouchSample::begin());
    sheet.handle_touch(TouchSample::active(-30.0));
    sheet.handle_touch(TouchSample::end(-30.0));

    sheet.handle_touch(TouchSample::begin());
    sheet.handle_touch(TouchSample::active(20.0));
    assert_eq!(sheet.offset(), 190.0);
    assert_eq!(sheet.handle_touch(TouchSample::end(20.0)), None);
    assert_eq!(sheet.model().baseline(), 190.0);
}

#[test]
fn fling_past_threshold_reports_pull() {
    let (mut sheet, _) = opened();
    sheet.handle_touch(TouchSample::begin());
    sheet.handle_touch(TouchSample::active(100.0));
    assert_eq!(
        sheet.handle_touch(TouchSample::end(100.0)),
        Some(SheetAction::Dismissing(CloseReason::PullThreshold))
    );
}

#[test]
fn cancelled_session_returns_sheet_to_rest() {
    let (mut sheet, _) = opened();
    sheet.handle_touch(TouchSample::begin());
    sheet.handle_touch(TouchSample::active(300.0));
    assert_eq!(sheet.offset(), 500.0);
    assert_eq!(sheet.handle_touch(TouchSample::cancelled(300.0)), None);
    assert_eq!(sheet.model().baseline(), 200.0);
    assert_eq!(sheet.offset(), 200.0);
    assert_eq!(sheet.dim(), 1.0);
    assert!(sheet.is_armed());
}

// ============================================================================
// Backdrop
// ============================================================================

#[test]
fn backdrop_tap_closes_after_close_duration() {
    let (mut sheet, closes) = opened();
    assert_eq!(
        sheet.tap_backdrop(),
        Some(SheetAction::Dismissing(CloseReason::Manual))
    );
    assert_eq!(sheet.tick(Duration::from_millis(150)), None);
    assert!(sheet.offset() > 200.0 && sheet.offset() < 800.0);
    assert_eq!(closes.get(), 0);
    assert_eq!(sheet.tick(Duration::from_millis(150)), Some(SheetAction::Closed));
    assert_eq!(closes.get(), 1);
    assert_eq!(sheet.dim(), 0.0);
}

#[test]
fn backdrop_tap_mid_drag_closes_from_current_position() {
    let (mut sheet, closes) = opened();
    sheet.handle_touch(TouchSample::begin());
    sheet.handle_touch(TouchSample::active(40.0));
    assert!(sheet.tap_backdrop().is_some());
    // Samples of the interrupted session no longer move the sheet.
    sheet.handle_touch(TouchSample::active(-100.0));
    sheet.tick(Duration::from_millis(1));
    assert!(sheet.offset() >= 240.0);
    run_until_action(&mut sheet, Duration::from_secs(1));
    assert_eq!(closes.get(), 1);
}

#[test]
fn pointer_stream_tap_on_backdrop() {
    let (mut sheet, closes) = opened();
    assert_eq!(sheet.handle_pointer(&PointerEvent::down(10.0, 20.0), None), None);
    assert!(sheet
        .handle_pointer(&PointerEvent::up(10.0, 20.0), None)
        .is_some());
    run_until_action(&mut sheet, Duration::from_secs(1));
    assert_eq!(closes.get(), 1);
}

// ============================================================================
// Reduced motion and custom transitions
// ============================================================================

#[test]
fn reduced_motion_snaps_transitions() {
    let closes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&closes);
    let mut sheet = PullSheet::new(config(), move || counter.set(counter.get() + 1)).unwrap();
    sheet.set_reduced_motion(true);
    sheet.mount(|_| ()).unwrap();
    assert_eq!(sheet.tick(Duration::from_millis(1)), Some(SheetAction::Opened));
    assert_eq!(sheet.offset(), 200.0);
    sheet.dismiss();
    assert_eq!(sheet.tick(Duration::from_millis(1)), Some(SheetAction::Closed));
    assert_eq!(closes.get(), 1);
}

#[test]
fn custom_close_duration_is_honored() {
    let spec = TransitionSpec::new().close_duration(Duration::from_millis(100));
    let (mut sheet, closes) = mounted(config().transitions(spec));
    run_until_action(&mut sheet, Duration::from_secs(1));
    sheet.dismiss();
    assert_eq!(sheet.tick(Duration::from_millis(99)), None);
    assert_eq!(sheet.tick(Duration::from_millis(1)), Some(SheetAction::Closed));
    assert_eq!(closes.get(), 1);
}
