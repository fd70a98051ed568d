use std::cell::RefCell;

use super::{Application, InitError, Lifecycle, Platform, Scene};
use crate::config::WindowConfig;

thread_local! {
	static JOURNAL: RefCell<Vec<String>> = RefCell::new(Vec::new());
	static SCRIPT: RefCell<Script> = RefCell::new(Script::default());
}

#[derive(Default, Clone, Copy)]
struct Script {
	fail_init: bool,
	/// Close after this many polled frames, unless the scene closes first.
	frames: usize,
}

fn note(entry: impl Into<String>) {
	JOURNAL.with(|j| j.borrow_mut().push(entry.into()));
}

fn journal() -> Vec<String> {
	JOURNAL.with(|j| j.borrow().clone())
}

fn script(script: Script) {
	JOURNAL.with(|j| j.borrow_mut().clear());
	SCRIPT.with(|s| *s.borrow_mut() = script);
}

struct FakeWindow {
	close_requested: bool,
}

struct FakePlatform {
	window: FakeWindow,
	polled: usize,
	frames: usize,
}

impl Platform for FakePlatform {
	type Window = FakeWindow;

	fn init(config: &WindowConfig) -> Result<Self, InitError> {
		let script = SCRIPT.with(|s| *s.borrow());
		note(format!("init {}x{}", config.width, config.height));

		match script.fail_init {
			true => Err(InitError::CreateWindow),
			false => Ok(Self {
				window: FakeWindow {
					close_requested: false,
				},
				polled: 0,
				frames: script.frames,
			}),
		}
	}

	fn window(&mut self) -> &mut FakeWindow {
		&mut self.window
	}

	fn should_close(&self) -> bool {
		note("should_close");
		self.window.close_requested || self.polled >= self.frames
	}

	fn swap_buffers(&mut self) {
		note("swap");
	}

	fn poll_events(&mut self) {
		self.polled += 1;
		note("poll");
	}
}

impl Drop for FakePlatform {
	fn drop(&mut self) {
		note("cleanup");
	}
}

#[derive(Default)]
struct RecordingScene {
	close_on_frame: Option<usize>,
	frames: usize,
}

impl Scene<FakeWindow> for RecordingScene {
	fn setup(&mut self, _: &mut FakeWindow) {
		note("setup");
	}

	fn process_inputs(&mut self, window: &mut FakeWindow) {
		note("input");
		if self.close_on_frame == Some(self.frames) {
			window.close_requested = true;
		}
	}

	fn render(&mut self, _: &mut FakeWindow) {
		self.frames += 1;
		note("render");
	}

	fn teardown(&mut self) {
		note("teardown");
	}
}

#[test]
fn frames_run_in_fixed_order() {
	script(Script {
		fail_init: false,
		frames: 2,
	});

	let mut app = Application::<FakePlatform>::new(WindowConfig::default());
	assert_eq!(app.state(), Lifecycle::Uninitialized);

	let status = app.run(&mut RecordingScene::default());

	assert_eq!(status, 0);
	assert_eq!(app.state(), Lifecycle::Terminated);
	assert_eq!(journal(), vec![
		"init 800x600",
		"setup",
		"should_close",
		"input",
		"render",
		"swap",
		"poll",
		"should_close",
		"input",
		"render",
		"swap",
		"poll",
		"should_close",
		"teardown",
		"cleanup",
	]);
}

#[test]
fn close_flag_is_checked_before_input() {
	script(Script {
		fail_init: false,
		frames: 0,
	});

	let mut scene = RecordingScene::default();
	let status = Application::<FakePlatform>::new(WindowConfig::default()).run(&mut scene);

	assert_eq!(status, 0);
	assert_eq!(scene.frames, 0);
	assert_eq!(journal(), vec!["init 800x600", "setup", "should_close", "teardown", "cleanup"]);
}

#[test]
fn scene_closing_window_finishes_current_frame() {
	script(Script {
		fail_init: false,
		frames: 100,
	});

	let mut scene = RecordingScene {
		close_on_frame: Some(1),
		..RecordingScene::default()
	};
	let status = Application::<FakePlatform>::new(WindowConfig::default()).run(&mut scene);

	assert_eq!(status, 0);
	// the frame that requested the close still renders and polls
	assert_eq!(scene.frames, 2);
	let journal = journal();
	assert_eq!(journal.iter().filter(|e| *e == "teardown").count(), 1);
	assert_eq!(&journal[journal.len() - 2..], ["teardown", "cleanup"]);
}

#[test]
fn failed_init_skips_scene_and_reports_error() {
	script(Script {
		fail_init: true,
		frames: 1,
	});

	let mut scene = RecordingScene::default();
	let mut app = Application::<FakePlatform>::new(WindowConfig::with_title("broken"));
	let status = app.run(&mut scene);

	assert_eq!(status, -1);
	assert_eq!(app.state(), Lifecycle::Terminated);
	assert_eq!(journal(), vec!["init 800x600"]);
}

#[test]
fn terminated_application_does_not_rerun() {
	script(Script {
		fail_init: false,
		frames: 1,
	});

	let mut app = Application::<FakePlatform>::new(WindowConfig::default());
	assert_eq!(app.run(&mut RecordingScene::default()), 0);

	script(Script {
		fail_init: false,
		frames: 1,
	});
	assert_eq!(app.run(&mut RecordingScene::default()), -1);
	assert_eq!(app.state(), Lifecycle::Terminated);
	assert!(journal().is_empty());
}
