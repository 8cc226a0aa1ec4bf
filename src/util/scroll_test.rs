use super::*;

#[test]
fn row_at_origin_dims_only_the_prev_arrow() {
    let arrows = ArrowState::from_metrics(0, 400, 1200);
    assert!(arrows.at_start);
    assert!(!arrows.at_end);
    assert_eq!(arrows.prev_opacity(), "0.33");
    assert_eq!(arrows.next_opacity(), "1");
}

#[test]
fn row_scrolled_to_the_end_dims_only_the_next_arrow() {
    let arrows = ArrowState::from_metrics(800, 400, 1200);
    assert!(!arrows.at_start);
    assert!(arrows.at_end);
    assert_eq!(arrows.prev_opacity(), "1");
    assert_eq!(arrows.next_opacity(), "0.33");
}

#[test]
fn row_in_the_middle_dims_neither_arrow() {
    let arrows = ArrowState::from_metrics(350, 400, 1200);
    assert!(!arrows.at_start);
    assert!(!arrows.at_end);
}

#[test]
fn content_that_fits_dims_both_arrows() {
    let arrows = ArrowState::from_metrics(0, 1200, 1200);
    assert!(arrows.at_start);
    assert!(arrows.at_end);
}

#[test]
fn default_matches_a_fresh_row() {
    assert_eq!(
        ArrowState::default(),
        ArrowState {
            at_start: true,
            at_end: false
        }
    );
}
