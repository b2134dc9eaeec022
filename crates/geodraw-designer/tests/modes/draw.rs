use geodraw_core::DistanceUnit;
use geodraw_designer::geodesy::{adaptive_steps, distance, distance_m, ellipse_axes};
use geodraw_designer::model::{Geometry, Position, ShapeType};
use geodraw_designer::modes::{
    ClickEvent, DrawCircleMode, DrawEllipseMode, DrawLineStringMode, DrawPointMode,
    DrawPolygonMode, DrawRectangleMode, DrawState, EditType, InteractionMode, Key, Modifiers,
    PointerMoveEvent,
};

use crate::support::Harness;

fn click(lon: f64, lat: f64) -> ClickEvent {
    ClickEvent::at(Position::new(lon, lat))
}

fn pointer(lon: f64, lat: f64) -> PointerMoveEvent {
    PointerMoveEvent::at(Position::new(lon, lat))
}

#[test]
fn test_point_completes_on_first_click() {
    let mut h = Harness::new();
    let mut mode = DrawPointMode::new();

    let actions = h.run(&mut mode, |m, p| m.handle_click(&click(4.0, 5.0), p));
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].edit_type, EditType::AddFeature);
    assert_eq!(actions[0].edit_context.feature_indexes, vec![0]);

    let feature = h.data.get(0).unwrap();
    assert_eq!(feature.geometry, Geometry::Point(Position::new(4.0, 5.0)));
    assert_eq!(feature.shape_type(), ShapeType::Point);
    assert!(mode.tooltips().is_empty());
}

#[test]
fn test_line_string_accumulates_then_finishes() {
    let mut h = Harness::new();
    let mut mode = DrawLineStringMode::new();

    let actions = h.run(&mut mode, |m, p| m.handle_click(&click(0.0, 0.0), p));
    assert_eq!(actions[0].edit_type, EditType::AddTentativePosition);
    assert_eq!(mode.clicks().state(), DrawState::Accumulating);

    h.run(&mut mode, |m, p| m.handle_pointer_move(&pointer(0.01, 0.0), p));
    let tooltips = mode.tooltips();
    assert_eq!(tooltips.len(), 1);
    assert_eq!(tooltips[0].text, "1.11 km");

    h.run(&mut mode, |m, p| m.handle_click(&click(0.01, 0.0), p));
    let actions = h.run(&mut mode, |m, p| m.finish(p));
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].edit_type, EditType::AddFeature);
    assert_eq!(
        h.data.get(0).unwrap().geometry,
        Geometry::LineString(vec![Position::new(0.0, 0.0), Position::new(0.01, 0.0)])
    );
    assert_eq!(mode.clicks().state(), DrawState::Idle);
    assert!(mode.tooltips().is_empty());
}

#[test]
fn test_line_string_finish_needs_two_points() {
    let mut h = Harness::new();
    let mut mode = DrawLineStringMode::new();

    assert!(h.run(&mut mode, |m, p| m.finish(p)).is_empty());

    h.run(&mut mode, |m, p| m.handle_click(&click(1.0, 1.0), p));
    assert!(h.run(&mut mode, |m, p| m.finish(p)).is_empty());
    assert_eq!(mode.clicks().len(), 1);
}

#[test]
fn test_double_click_duplicate_is_trimmed() {
    let mut h = Harness::new();
    let mut mode = DrawLineStringMode::new();

    h.run(&mut mode, |m, p| m.handle_click(&click(0.0, 0.0), p));
    h.run(&mut mode, |m, p| m.handle_click(&click(1.0, 1.0), p));
    h.run(&mut mode, |m, p| m.handle_click(&click(1.0, 1.0), p));
    h.run(&mut mode, |m, p| m.finish(p));

    assert_eq!(
        h.data.get(0).unwrap().geometry,
        Geometry::LineString(vec![Position::new(0.0, 0.0), Position::new(1.0, 1.0)])
    );
}

#[test]
fn test_polygon_closes_ring_on_finish() {
    let mut h = Harness::new();
    let mut mode = DrawPolygonMode::new();

    for (lon, lat) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)] {
        h.run(&mut mode, |m, p| m.handle_click(&click(lon, lat), p));
    }
    let actions = h.run(&mut mode, |m, p| m.handle_key_up(&Key::Enter, p));
    assert_eq!(actions.len(), 1);

    let Geometry::Polygon(rings) = &h.data.get(0).unwrap().geometry else {
        panic!("expected a polygon");
    };
    assert_eq!(rings[0].len(), 4);
    assert_eq!(rings[0].first(), rings[0].last());
}

#[test]
fn test_polygon_finish_needs_three_points() {
    let mut h = Harness::new();
    let mut mode = DrawPolygonMode::new();

    h.run(&mut mode, |m, p| m.handle_click(&click(0.0, 0.0), p));
    h.run(&mut mode, |m, p| m.handle_click(&click(1.0, 0.0), p));
    assert!(h.run(&mut mode, |m, p| m.finish(p)).is_empty());
    assert!(h.data.is_empty());
}

#[test]
fn test_polygon_tentative_preview() {
    let mut h = Harness::new();
    let mut mode = DrawPolygonMode::new();
    assert!(mode.tentative().is_none());

    h.run(&mut mode, |m, p| m.handle_click(&click(0.0, 0.0), p));
    h.run(&mut mode, |m, p| m.handle_pointer_move(&pointer(1.0, 0.0), p));
    assert!(matches!(mode.tentative(), Some(Geometry::LineString(ref l)) if l.len() == 2));

    h.run(&mut mode, |m, p| m.handle_click(&click(1.0, 0.0), p));
    h.run(&mut mode, |m, p| m.handle_pointer_move(&pointer(1.0, 1.0), p));
    assert!(matches!(mode.tentative(), Some(Geometry::Polygon(ref r)) if r[0].len() == 4));
}

#[test]
fn test_escape_cancels_draw() {
    let mut h = Harness::new();
    let mut mode = DrawPolygonMode::new();

    h.run(&mut mode, |m, p| m.handle_click(&click(0.0, 0.0), p));
    h.run(&mut mode, |m, p| m.handle_pointer_move(&pointer(1.0, 0.0), p));
    h.run(&mut mode, |m, p| m.handle_key_up(&Key::Escape, p));

    assert_eq!(mode.clicks().state(), DrawState::Idle);
    assert!(mode.tooltips().is_empty());
    assert!(mode.tentative().is_none());
}

#[test]
fn test_rectangle_tooltip_uses_ground_distances() {
    let mut h = Harness::new();
    let mut mode = DrawRectangleMode::new();

    h.run(&mut mode, |m, p| m.handle_click(&click(-122.5, 37.8), p));
    h.run(&mut mode, |m, p| m.handle_pointer_move(&pointer(-122.4, 37.9), p));

    let tooltips = mode.tooltips();
    assert_eq!(tooltips.len(), 1);
    let text = &tooltips[0].text;
    assert!(text.starts_with("Width: 8.79 km\nHeight: 11.12 km\nArea: "), "{text}");

    let actions = h.run(&mut mode, |m, p| m.handle_click(&click(-122.4, 37.9), p));
    assert_eq!(actions.len(), 1);
    let feature = h.data.get(0).unwrap();
    assert_eq!(feature.shape_type(), ShapeType::Rectangle);
    let ring = feature.geometry.outer_ring().unwrap();
    assert_eq!(ring.len(), 5);
    assert_eq!(ring[0], Position::new(-122.5, 37.8));
    assert_eq!(ring[2], Position::new(-122.4, 37.9));
    assert!(mode.tooltips().is_empty());
}

#[test]
fn test_constrained_rectangle_is_square() {
    let mut h = Harness::new();
    let mut mode = DrawRectangleMode::new();

    h.run(&mut mode, |m, p| m.handle_click(&click(10.0, 60.0), p));
    let second = click(10.05, 60.01).with_modifiers(Modifiers::constrained());
    h.run(&mut mode, |m, p| m.handle_click(&second, p));

    let ring = h.data.get(0).unwrap().geometry.outer_ring().unwrap().to_vec();
    let sides: Vec<f64> = ring.windows(2).map(|w| distance_m(w[0], w[1])).collect();
    for side in &sides {
        assert!((side - sides[0]).abs() / sides[0] < 1e-2, "{sides:?}");
    }
}

#[test]
fn test_rectangle_zero_height_click_is_ignored() {
    let mut h = Harness::new();
    let mut mode = DrawRectangleMode::new();

    h.run(&mut mode, |m, p| m.handle_click(&click(0.0, 0.0), p));
    assert!(h.run(&mut mode, |m, p| m.handle_click(&click(1.0, 0.0), p)).is_empty());
    assert_eq!(mode.clicks().len(), 1);
}

#[test]
fn test_circle_tessellation_and_tooltip() {
    let mut h = Harness::new();
    let mut mode = DrawCircleMode::new();
    let center = Position::new(-122.4, 37.8);
    let edge = Position::new(-122.39, 37.8);

    h.run(&mut mode, |m, p| m.handle_click(&ClickEvent::at(center), p));
    h.run(&mut mode, |m, p| m.handle_pointer_move(&PointerMoveEvent::at(edge), p));
    assert!(mode.tooltips()[0].text.starts_with("Area: "));
    assert!(mode.tentative().is_some());

    h.run(&mut mode, |m, p| m.handle_click(&ClickEvent::at(edge), p));
    let feature = h.data.get(0).unwrap();
    assert_eq!(feature.shape_type(), ShapeType::Circle);

    let radius_km = distance(center, edge, DistanceUnit::Kilometers);
    let steps = adaptive_steps(radius_km, &h.config.tessellation);
    assert_eq!(feature.geometry.outer_ring().unwrap().len(), steps + 1);
}

#[test]
fn test_circle_zero_radius_is_ignored() {
    let mut h = Harness::new();
    let mut mode = DrawCircleMode::new();

    h.run(&mut mode, |m, p| m.handle_click(&click(3.0, 3.0), p));
    assert!(h.run(&mut mode, |m, p| m.handle_click(&click(3.0, 3.0), p)).is_empty());
    assert_eq!(mode.clicks().len(), 1);
}

#[test]
fn test_ellipse_three_clicks() {
    let mut h = Harness::new();
    let mut mode = DrawEllipseMode::new();
    let a = Position::new(0.0, 0.0);
    let b = Position::new(0.02, 0.0);

    h.run(&mut mode, |m, p| m.handle_click(&ClickEvent::at(a), p));
    h.run(&mut mode, |m, p| m.handle_pointer_move(&pointer(0.02, 0.0), p));
    assert_eq!(mode.tooltips()[0].text, "2.22 km");

    h.run(&mut mode, |m, p| m.handle_click(&ClickEvent::at(b), p));
    h.run(&mut mode, |m, p| m.handle_pointer_move(&pointer(0.01, 0.005), p));
    assert!(mode.tooltips()[0].text.starts_with("Major: 2.22 km\nMinor: "));

    let actions = h.run(&mut mode, |m, p| m.handle_click(&click(0.01, 0.005), p));
    assert_eq!(actions.len(), 1);
    let feature = h.data.get(0).unwrap();
    assert_eq!(feature.shape_type(), ShapeType::Ellipse);

    let ring = feature.geometry.outer_ring().unwrap();
    assert_eq!((ring.len() - 1) % 2, 0);
    let axes = ellipse_axes(ring, DistanceUnit::Meters).unwrap();
    let expected = distance_m(a, b) / 2.0;
    assert!((axes.semi_major - expected).abs() / expected < 1e-2);
    assert!(axes.semi_minor < axes.semi_major);
}
