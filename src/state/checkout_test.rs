use super::*;

#[test]
fn countdown_starts_at_three() {
    let countdown = Countdown::default();
    assert_eq!(countdown.remaining(), 3);
}

#[test]
fn countdown_shows_every_second_down_to_zero() {
    let mut countdown = Countdown::default();
    let mut shown = vec![countdown.remaining()];
    while !countdown.tick() {
        shown.push(countdown.remaining());
    }
    assert_eq!(shown, vec![3, 2, 1, 0]);
}

#[test]
fn redirect_fires_only_after_zero_was_shown() {
    let mut countdown = Countdown::default();
    assert!(!countdown.tick()); // 2
    assert!(!countdown.tick()); // 1
    assert!(!countdown.tick()); // 0
    assert!(countdown.tick()); // past zero
}

#[test]
fn ticking_past_the_end_stays_done_and_displayable() {
    let mut countdown = Countdown::default();
    for _ in 0..4 {
        countdown.tick();
    }
    assert!(countdown.tick());
    assert_eq!(countdown.remaining(), 0);
}
