// src/orchestrator/tests.rs

use super::*;
use crate::display::drivers::headless::{DrawOp, HeadlessDisplayDriver};
use crate::input::adapter::{AxisField, Bindings};
use crate::input::InputEvent;
use crate::keys::KeySymbol;
use crate::platform::MockPlatform;
use crate::ticker::CountingTicker;
use test_log::test;

const BACKGROUND: Color = Color::Rgba(0, 0, 0, 255);

/// Records what the loop asked of it.
#[derive(Default)]
struct RecordingScene {
    renders: usize,
    actions: Vec<Action>,
    device_counts: Vec<usize>,
}

impl<D: DisplayDriver> Scene<D> for RecordingScene {
    fn render(&mut self, driver: &mut D) {
        self.renders += 1;
        let _ = driver.fill_circle(Default::default(), 1, Color::default());
    }

    fn apply(&mut self, action: Action) {
        self.actions.push(action);
    }

    fn devices_changed(&mut self, count: usize) {
        self.device_counts.push(count);
    }
}

type TestLoop = FrameLoop<MockPlatform, HeadlessDisplayDriver, CountingTicker>;

fn new_loop(bindings: Bindings) -> TestLoop {
    FrameLoop::new(
        MockPlatform::new(),
        HeadlessDisplayDriver::new(),
        CountingTicker::new(),
        InputAdapter::new(bindings),
        BACKGROUND,
    )
}

#[test]
fn it_should_clear_render_and_present_in_order() {
    let mut frame_loop = new_loop(Bindings::default());
    let mut scene = RecordingScene::default();

    assert_eq!(frame_loop.run_frame(&mut scene), LoopState::Running);

    let ops = frame_loop.driver().ops();
    assert_eq!(ops.first(), Some(&DrawOp::Clear(BACKGROUND)));
    assert!(matches!(ops[1], DrawOp::Circle { .. }));
    assert_eq!(ops.last(), Some(&DrawOp::Present));
    assert_eq!(frame_loop.ticker().ticks(), 1);
}

#[test]
fn it_should_finish_the_current_frame_before_stopping() {
    let mut frame_loop = new_loop(Bindings::default());
    let mut scene = RecordingScene::default();
    frame_loop.platform_mut().push_event(InputEvent::Quit);

    assert_eq!(frame_loop.run(&mut scene), LoopState::Stopped);

    assert_eq!(frame_loop.frames(), 1);
    assert_eq!(frame_loop.driver().presents(), 1);
    assert_eq!(frame_loop.ticker().ticks(), 1);
    assert_eq!(scene.renders, 1);
}

#[test]
fn it_should_not_tick_or_render_once_stopped() {
    let mut frame_loop = new_loop(Bindings::default());
    let mut scene = RecordingScene::default();
    frame_loop.platform_mut().push_event(InputEvent::Key {
        symbol: KeySymbol::Escape,
        pressed: true,
    });
    frame_loop.run_frame(&mut scene);
    assert_eq!(frame_loop.state(), LoopState::Stopped);

    assert_eq!(frame_loop.run_frame(&mut scene), LoopState::Stopped);
    assert_eq!(frame_loop.ticker().ticks(), 1);
    assert_eq!(frame_loop.driver().presents(), 1);
}

#[test]
fn it_should_keep_running_until_quit_arrives() {
    let mut frame_loop = new_loop(Bindings::default());
    let mut scene = RecordingScene::default();

    for _ in 0..3 {
        frame_loop.run_frame(&mut scene);
    }
    frame_loop.platform_mut().push_event(InputEvent::Quit);
    frame_loop.run(&mut scene);

    assert_eq!(frame_loop.frames(), 4);
    assert_eq!(frame_loop.ticker().ticks(), 4);
}

#[test]
fn it_should_dispatch_drained_events_in_arrival_order() {
    let mut frame_loop = new_loop(Bindings::selection_only());
    let mut scene = RecordingScene::default();
    frame_loop.platform_mut().push_events([
        InputEvent::Key {
            symbol: KeySymbol::Right,
            pressed: true,
        },
        InputEvent::Quit,
        InputEvent::JoyButton {
            which: 0,
            button: 4,
            pressed: true,
        },
    ]);

    frame_loop.run_frame(&mut scene);

    // Events after the quit are still dispatched within the same drain.
    assert_eq!(
        scene.actions,
        vec![Action::AdvanceSelection, Action::AdvanceSelection]
    );
    assert_eq!(frame_loop.platform().pending_events(), 0);
    assert_eq!(frame_loop.state(), LoopState::Stopped);
}

#[test]
fn it_should_apply_input_on_the_next_frame() {
    let mut frame_loop = new_loop(Bindings {
        axes: vec![crate::input::adapter::AxisBinding {
            axis: 0,
            indicator: 0,
            field: AxisField::X,
        }],
        ..Bindings::default()
    });
    let mut scene = RecordingScene::default();
    frame_loop.run_frame(&mut scene);
    assert!(scene.actions.is_empty());

    frame_loop.platform_mut().push_event(InputEvent::JoyAxis {
        which: 0,
        axis: 0,
        value: 32768,
    });
    frame_loop.run_frame(&mut scene);
    assert_eq!(
        scene.actions,
        vec![Action::SetOffset {
            indicator: 0,
            field: AxisField::X,
            value: 1.0
        }]
    );
    assert_eq!(scene.renders, 2);
}

#[test]
fn it_should_register_and_release_devices() {
    let mut frame_loop = new_loop(Bindings::default());
    let mut scene = RecordingScene::default();
    frame_loop.platform_mut().push_events([
        InputEvent::DeviceAdded { index: 0 },
        InputEvent::DeviceAdded { index: 1 },
        InputEvent::DeviceRemoved { index: 0 },
    ]);

    frame_loop.run_frame(&mut scene);

    assert_eq!(frame_loop.platform().opened(), &[0, 1]);
    assert!(!frame_loop.devices().is_occupied(0));
    assert!(frame_loop.devices().is_occupied(1));
    assert_eq!(frame_loop.platform().open_devices(), 1);
    assert_eq!(scene.device_counts, vec![1, 2, 1]);
}

#[test]
fn it_should_ignore_detach_of_unknown_device() {
    let mut frame_loop = new_loop(Bindings::default());
    let mut scene = RecordingScene::default();
    frame_loop
        .platform_mut()
        .push_event(InputEvent::DeviceRemoved { index: 5 });

    frame_loop.run_frame(&mut scene);

    assert!(frame_loop.devices().is_empty());
    assert!(scene.device_counts.is_empty());
    assert_eq!(frame_loop.state(), LoopState::Running);
}

#[test]
fn it_should_survive_device_open_failures_and_bad_indices() {
    let mut frame_loop = new_loop(Bindings::default());
    let mut scene = RecordingScene::default();
    frame_loop.platform_mut().fail_device(2);
    frame_loop.platform_mut().push_events([
        InputEvent::DeviceAdded { index: 2 },
        InputEvent::DeviceAdded { index: 40 },
    ]);

    frame_loop.run_frame(&mut scene);

    assert!(frame_loop.devices().is_empty());
    // Out-of-range indices are rejected before anything is opened.
    assert!(frame_loop.platform().opened().is_empty());
    assert!(scene.device_counts.is_empty());
    assert_eq!(frame_loop.state(), LoopState::Running);
}

#[test]
fn it_should_replace_a_device_attached_twice() {
    let mut frame_loop = new_loop(Bindings::default());
    let mut scene = RecordingScene::default();
    frame_loop.platform_mut().push_events([
        InputEvent::DeviceAdded { index: 3 },
        InputEvent::DeviceAdded { index: 3 },
    ]);

    frame_loop.run_frame(&mut scene);

    assert_eq!(frame_loop.platform().opened(), &[3, 3]);
    assert_eq!(frame_loop.platform().open_devices(), 1);
}

#[test]
fn it_should_release_devices_on_shutdown() {
    let mut frame_loop = new_loop(Bindings::default());
    let mut scene = RecordingScene::default();
    frame_loop
        .platform_mut()
        .push_event(InputEvent::DeviceAdded { index: 0 });
    frame_loop.run_frame(&mut scene);
    assert_eq!(frame_loop.platform().open_devices(), 1);

    frame_loop.shutdown();
    assert_eq!(frame_loop.platform().open_devices(), 0);
}
