use super::*;

#[test]
fn default_shows_no_stars() {
    let rating = RatingState::default();
    assert_eq!(rating.displayed(), 0);
    assert!(!rating.is_lit(0));
}

#[test]
fn hover_previews_without_committing() {
    let mut rating = RatingState::default();
    rating.preview(4);
    assert_eq!(rating.displayed(), 4);
    assert_eq!(rating.selected, 0);
}

#[test]
fn mouse_out_reverts_to_committed_value() {
    let mut rating = RatingState::default();
    rating.commit(2);
    rating.preview(5);
    rating.clear_preview();
    assert_eq!(rating.displayed(), 2);
}

#[test]
fn click_commits_and_ends_the_preview() {
    let mut rating = RatingState::default();
    rating.preview(3);
    rating.commit(3);
    assert_eq!(rating.selected, 3);
    assert!(rating.hover.is_none());
}

#[test]
fn lit_stars_match_the_displayed_rating() {
    let mut rating = RatingState::default();
    rating.commit(3);
    assert!(rating.is_lit(0));
    assert!(rating.is_lit(2));
    assert!(!rating.is_lit(3));
}

#[test]
fn ratings_are_capped_at_five() {
    let mut rating = RatingState::default();
    rating.commit(9);
    assert_eq!(rating.selected, RatingState::MAX_STARS);
    rating.preview(200);
    assert_eq!(rating.displayed(), RatingState::MAX_STARS);
}
