use super::*;

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

#[test]
fn key_press_resets_timer() {
    let timer = ActivityTimer::new(ActivitySource::KeyPress);
    assert_eq!(timer.since(at(1_500)), 1_500);

    timer.record_press(at(1_000));
    assert_eq!(timer.since(at(1_250)), 250);

    timer.observe_typing_speed(90, at(1_200));
    assert_eq!(timer.last_activity(), at(1_000));
}

#[test]
fn typing_speed_resets_on_rise_only() {
    let timer = ActivityTimer::new(ActivitySource::TypingSpeed);

    timer.record_press(at(100));
    assert_eq!(timer.last_activity(), at(0));

    timer.observe_typing_speed(20, at(200));
    assert_eq!(timer.last_activity(), at(200));

    timer.observe_typing_speed(20, at(400));
    assert_eq!(timer.last_activity(), at(200));

    timer.observe_typing_speed(15, at(600));
    timer.observe_typing_speed(18, at(800));
    assert_eq!(timer.last_activity(), at(800));
}

#[test]
fn elapsed_never_negative() {
    let timer = ActivityTimer::default();
    timer.record_press(at(5_000));
    assert_eq!(timer.since(at(4_000)), 0);
    assert_eq!(millis_between(at(10), at(10)), 0);
}
