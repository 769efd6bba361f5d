use super::*;
use crate::color::parse_rgb;
use crate::consts::COLOR_CHANNEL_MIN;

fn test_client() -> BoardClient {
    BoardClient::with_color("rgb(100,150,200)".to_owned())
}

#[test]
fn new_client_is_empty() {
    let client = test_client();
    assert!(client.is_empty());
    assert_eq!(client.len(), 0);
    assert!(client.points().is_empty());
}

#[test]
fn new_generates_well_formed_user_color() {
    let client = BoardClient::new();
    let (r, g, b) = parse_rgb(client.user_color()).expect("rgb(r,g,b) color");
    for channel in [r, g, b] {
        assert!(channel >= COLOR_CHANNEL_MIN);
    }
}

#[test]
fn drag_appends_exactly_one_point() {
    let mut client = test_client();
    for i in 1..=10 {
        let before = client.len();
        client.on_drag(f64::from(i), f64::from(i) * 2.0);
        assert_eq!(client.len(), before + 1);
    }
}

#[test]
fn drag_returns_the_appended_point() {
    let mut client = test_client();
    let point = client.on_drag(42.0, 7.0);
    assert_eq!(client.points().last(), Some(&point));
    assert!((point.x - 42.0).abs() < f64::EPSILON);
    assert!((point.y - 7.0).abs() < f64::EPSILON);
}

#[test]
fn every_dragged_point_carries_the_session_color() {
    let mut client = test_client();
    client.on_drag(1.0, 1.0);
    client.on_drag(2.0, 2.0);
    client.on_drag(3.0, 3.0);
    for point in client.points() {
        assert_eq!(point.color, "rgb(100,150,200)");
    }
}

#[test]
fn duplicate_drag_positions_are_kept() {
    let mut client = test_client();
    client.on_drag(5.0, 5.0);
    client.on_drag(5.0, 5.0);
    assert_eq!(client.len(), 2);
    assert_eq!(client.points()[0], client.points()[1]);
}

#[test]
fn snapshot_replaces_collection_wholesale() {
    let mut client = test_client();
    client.on_drag(1.0, 1.0);
    client.on_drag(2.0, 2.0);

    let snapshot = vec![Point::new(9.0, 9.0, "rgb(10,10,10)")];
    client.apply_snapshot(snapshot.clone());
    assert_eq!(client.points(), snapshot.as_slice());
}

#[test]
fn snapshot_discards_unacknowledged_local_points() {
    // The known race: a local point the server hasn't caught up to vanishes
    // when the poll response lands, until a later poll returns it.
    let mut client = test_client();
    client.on_drag(100.0, 100.0);

    client.apply_snapshot(Vec::new());
    assert!(client.is_empty());
}

#[test]
fn empty_snapshot_over_empty_board_is_noop() {
    let mut client = test_client();
    client.apply_snapshot(Vec::new());
    assert!(client.is_empty());
}

#[test]
fn clear_empties_the_collection() {
    let mut client = test_client();
    client.on_drag(1.0, 1.0);
    client.on_drag(2.0, 2.0);
    client.apply_clear();
    assert!(client.is_empty());
}

#[test]
fn drag_after_clear_starts_fresh() {
    let mut client = test_client();
    client.on_drag(1.0, 1.0);
    client.apply_clear();
    client.on_drag(2.0, 2.0);
    assert_eq!(client.len(), 1);
    assert!((client.points()[0].x - 2.0).abs() < f64::EPSILON);
}

#[test]
fn user_color_is_stable_across_mutations() {
    let mut client = BoardClient::new();
    let color = client.user_color().to_owned();
    client.on_drag(1.0, 1.0);
    client.apply_snapshot(Vec::new());
    client.apply_clear();
    assert_eq!(client.user_color(), color);
}

#[test]
fn off_surface_coordinates_are_accepted() {
    // Pointer positions are never clamped; off-board dots are simply not visible.
    let mut client = test_client();
    client.on_drag(-20.0, 10_000.0);
    assert_eq!(client.len(), 1);
}
