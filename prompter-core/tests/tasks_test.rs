use prompter_core::sequencer::{Fade, Typewriter};

#[test]
fn typewriter_reveals_one_character_per_delay() {
    let mut tw = Typewriter::default();
    let mut out = String::new();
    tw.start("abcd", 0.1);
    assert!(tw.is_active());

    tw.tick(0.1, &mut out);
    assert_eq!(out, "a");
    tw.tick(0.1, &mut out);
    assert_eq!(out, "ab");

    // A large frame reveals several characters at once.
    tw.tick(0.2, &mut out);
    assert_eq!(out, "abcd");
    assert!(!tw.is_active());
}

#[test]
fn typewriter_skip_fills_the_rest_without_discarding_prefix() {
    let mut tw = Typewriter::default();
    let mut out = String::new();
    tw.start("hello", 0.1);
    tw.tick(0.2, &mut out);
    assert_eq!(out, "he");

    tw.skip(&mut out);
    assert_eq!(out, "hello");
    assert!(!tw.is_active());
}

#[test]
fn typewriter_cancel_stops_future_insertions_only() {
    let mut tw = Typewriter::default();
    let mut out = String::new();
    tw.start("hello", 0.1);
    tw.tick(0.2, &mut out);
    assert_eq!(out, "he");

    tw.cancel();
    tw.tick(1.0, &mut out);
    assert_eq!(out, "he");
    assert!(!tw.is_active());
}

#[test]
fn typewriter_is_multibyte_safe() {
    let mut tw = Typewriter::default();
    let mut out = String::new();
    tw.start("héllo→", 0.1);
    tw.tick(0.2, &mut out);
    assert_eq!(out, "hé");
    tw.skip(&mut out);
    assert_eq!(out, "héllo→");
}

#[test]
fn typewriter_start_replaces_previous_reveal() {
    let mut tw = Typewriter::default();
    let mut out = String::new();
    tw.start("first", 0.1);
    tw.tick(0.3, &mut out);

    out.clear();
    tw.start("second", 0.1);
    tw.tick(0.1, &mut out);
    assert_eq!(out, "s");
}

#[test]
fn typewriter_empty_text_is_inactive() {
    let mut tw = Typewriter::default();
    tw.start("", 0.1);
    assert!(!tw.is_active());
}

#[test]
fn typewriter_zero_delay_reveals_instantly() {
    let mut tw = Typewriter::default();
    let mut out = String::new();
    tw.start("fast", 0.0);
    tw.tick(0.0, &mut out);
    assert_eq!(out, "fast");
    assert!(!tw.is_active());
}

#[test]
fn fade_interpolates_linearly() {
    let mut fade = Fade::new(0.0, 1.0, 0.4);
    assert_eq!(fade.tick(0.1), 0.25);
    assert_eq!(fade.tick(0.1), 0.5);
    assert!(!fade.finished());
    assert_eq!(fade.tick(0.2), 1.0);
    assert!(fade.finished());
}

#[test]
fn fade_clamps_past_the_target() {
    let mut fade = Fade::new(1.0, 0.0, 0.2);
    let alpha = fade.tick(10.0);
    assert_eq!(alpha, 0.0);
    assert!(fade.finished());
    assert_eq!(fade.target(), 0.0);
}

#[test]
fn fade_starts_from_partial_opacity() {
    let mut fade = Fade::new(0.5, 1.0, 0.2);
    assert_eq!(fade.tick(0.1), 0.75);
}

#[test]
fn zero_duration_fade_finishes_on_first_tick() {
    let mut fade = Fade::new(0.0, 1.0, 0.0);
    assert_eq!(fade.tick(0.016), 1.0);
    assert!(fade.finished());
}
