use super::{ColourCycler, Phase, Rgb};

#[test]
fn starts_full_red() {
	let cycler = ColourCycler::new();
	assert_eq!(cycler.phase(), Phase::Red);
	assert_eq!(cycler.current(), Rgb::RED);
}

#[test]
fn current_does_not_advance() {
	let mut cycler = ColourCycler::new();
	for _ in 0..37 {
		cycler.advance();
	}

	let first = cycler.current();
	let second = cycler.current();
	assert_eq!(first, second);
	assert_eq!(cycler.phase(), Phase::Red);
}

#[test]
fn advance_returns_updated_colour() {
	let mut cycler = ColourCycler::new();
	let next = cycler.advance();

	assert_eq!(next, cycler.current());
	assert!((next.r - 0.99).abs() < 1e-12);
	assert!((next.g - 0.01).abs() < 1e-12);
	assert_eq!(next.b, 0.0);
}

#[test]
fn red_is_exhausted_after_one_hundred_steps() {
	let mut cycler = ColourCycler::new();
	for _ in 0..99 {
		cycler.advance();
	}
	assert_eq!(cycler.phase(), Phase::Red);

	cycler.advance();
	assert_eq!(cycler.phase(), Phase::Green);
}

#[test]
fn fading_channel_may_dip_below_zero() {
	let mut cycler = ColourCycler::new();
	let mut colour = cycler.current();
	for _ in 0..100 {
		colour = cycler.advance();
	}

	// the flip happens on the step that crosses zero, not before
	assert!(colour.r <= 0.0);
	assert!(colour.r > -ColourCycler::STEP);
	assert!((colour.g - 1.0).abs() < 1e-9);
}

#[test]
fn phases_cycle_in_order() {
	let mut cycler = ColourCycler::new();
	let mut transitions = Vec::new();
	let mut last = cycler.phase();

	for step in 1..=900 {
		cycler.advance();
		if cycler.phase() != last {
			assert_eq!(cycler.phase(), last.next());
			transitions.push((step, cycler.phase()));
			last = cycler.phase();
		}
	}

	assert_eq!(transitions, vec![
		(100, Phase::Green),
		(200, Phase::Blue),
		(300, Phase::Red),
		(400, Phase::Green),
		(500, Phase::Blue),
		(600, Phase::Red),
		(700, Phase::Green),
		(800, Phase::Blue),
		(900, Phase::Red),
	]);
}

#[test]
fn only_two_channels_move_per_phase() {
	let mut cycler = ColourCycler::new();
	for _ in 0..100 {
		cycler.advance();
	}
	assert_eq!(cycler.phase(), Phase::Green);

	let before = cycler.current();
	let after = cycler.advance();
	assert_eq!(before.r, after.r);
	assert!(after.g < before.g);
	assert!(after.b > before.b);
}
