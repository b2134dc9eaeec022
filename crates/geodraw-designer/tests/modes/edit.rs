use geodraw_core::DistanceUnit;
use geodraw_designer::geodesy::{
    centroid, circle_params, circle_polygon, destination, distance_m, ellipse_polygon,
    rectangle_ring, RadiusMode,
};
use geodraw_designer::model::{Feature, FeatureCollection, Geometry, Position, ShapeType};
use geodraw_designer::modes::edit::ActiveSubMode;
use geodraw_designer::modes::{
    DragEvent, EditHandle, EditType, HandleType, InteractionMode, Modifiers, ModifyMode, Pick,
    ResizeCircleMode, ResizeRectangleMode, ScaleMode,
};

use crate::support::Harness;

fn handle(feature_index: usize, position_indexes: Vec<usize>, handle_type: HandleType, position: Position) -> Pick {
    Pick::handle(EditHandle {
        position,
        feature_index,
        position_indexes,
        handle_type,
    })
}

fn square() -> Geometry {
    Geometry::Polygon(vec![vec![
        Position::new(0.0, 0.0),
        Position::new(0.0, 1.0),
        Position::new(1.0, 1.0),
        Position::new(1.0, 0.0),
        Position::new(0.0, 0.0),
    ]])
}

fn rectangle_data() -> (FeatureCollection, Position, Position) {
    let anchor = Position::new(10.0, 50.0);
    let corner = Position::new(10.1, 50.05);
    let feature = Feature::new(Geometry::Polygon(vec![rectangle_ring(anchor, corner)]))
        .with_shape(ShapeType::Rectangle);
    (FeatureCollection::new().with_feature(feature), anchor, corner)
}

fn circle_data() -> (FeatureCollection, Position, Vec<Position>) {
    let center = Position::new(0.0, 0.0);
    let ring = circle_polygon(center, 1_000.0, 64);
    let feature = Feature::new(Geometry::Polygon(vec![ring.clone()])).with_shape(ShapeType::Circle);
    (FeatureCollection::new().with_feature(feature), center, ring)
}

#[test]
fn test_modify_moves_single_vertex() {
    let mut h = Harness::with_data(FeatureCollection::new().with_feature(Feature::new(square())));
    let mut mode = ModifyMode::new();
    let start = DragEvent::at(Position::new(1.0, 1.0)).with_picks(vec![handle(
        0,
        vec![0, 2],
        HandleType::Existing,
        Position::new(1.0, 1.0),
    )]);

    assert!(h.run(&mut mode, |m, p| m.handle_drag_start(&start, p)).is_empty());
    assert!(mode.is_dragging());

    let actions = h.run(&mut mode, |m, p| m.handle_dragging(&DragEvent::at(Position::new(1.5, 1.5)), p));
    assert_eq!(actions[0].edit_type, EditType::MovePosition);
    assert_eq!(actions[0].edit_context.position_indexes, vec![0, 2]);

    let actions = h.run(&mut mode, |m, p| m.handle_drag_stop(&DragEvent::at(Position::new(2.0, 2.0)), p));
    assert_eq!(actions[0].edit_type, EditType::FinishMovePosition);
    assert!(!mode.is_dragging());

    let ring = h.data.get(0).unwrap().geometry.outer_ring().unwrap().to_vec();
    assert_eq!(ring[2], Position::new(2.0, 2.0));
    assert_eq!(ring[1], Position::new(0.0, 1.0));
    assert_eq!(ring[3], Position::new(1.0, 0.0));
}

#[test]
fn test_modify_intermediate_handle_inserts_vertex() {
    let mut h = Harness::with_data(FeatureCollection::new().with_feature(Feature::new(square())));
    let mut mode = ModifyMode::new();
    let start = DragEvent::at(Position::new(0.0, 0.5)).with_picks(vec![handle(
        0,
        vec![0, 1],
        HandleType::Intermediate,
        Position::new(0.0, 0.5),
    )]);

    let actions = h.run(&mut mode, |m, p| m.handle_drag_start(&start, p));
    assert_eq!(actions[0].edit_type, EditType::AddPosition);
    assert_eq!(h.data.get(0).unwrap().geometry.outer_ring().unwrap().len(), 6);

    h.run(&mut mode, |m, p| m.handle_drag_stop(&DragEvent::at(Position::new(-0.5, 0.5)), p));
    let ring = h.data.get(0).unwrap().geometry.outer_ring().unwrap().to_vec();
    assert_eq!(ring[1], Position::new(-0.5, 0.5));
    assert_eq!(ring.first(), ring.last());
}

#[test]
fn test_locked_feature_is_not_edited() {
    let feature = Feature::new(square()).locked(true);
    let mut h = Harness::with_data(FeatureCollection::new().with_feature(feature));
    let mut mode = ModifyMode::new();
    let start = DragEvent::at(Position::new(1.0, 1.0)).with_picks(vec![handle(
        0,
        vec![0, 2],
        HandleType::Existing,
        Position::new(1.0, 1.0),
    )]);

    h.run(&mut mode, |m, p| m.handle_drag_start(&start, p));
    assert!(!mode.is_dragging());
    assert!(h
        .run(&mut mode, |m, p| m.handle_dragging(&DragEvent::at(Position::new(3.0, 3.0)), p))
        .is_empty());
}

#[test]
fn test_label_picks_are_filtered() {
    let mut h = Harness::with_data(FeatureCollection::new().with_feature(Feature::new(square())));
    let mut mode = ModifyMode::new();
    let start = DragEvent::at(Position::new(1.0, 1.0)).with_picks(vec![Pick::label(0)]);

    assert!(h.run(&mut mode, |m, p| m.handle_drag_start(&start, p)).is_empty());
    assert!(!mode.is_dragging());
}

#[test]
fn test_modify_guides_for_selected_polygon() {
    let mut h = Harness::with_data(FeatureCollection::new().with_feature(Feature::new(square())));
    h.selected = vec![0];
    let mut mode = ModifyMode::new();

    let mut guides = Vec::new();
    h.run(&mut mode, |m, p| guides = m.guides(p));

    let existing = guides.iter().filter(|g| g.handle.handle_type == HandleType::Existing).count();
    let intermediate = guides
        .iter()
        .filter(|g| g.handle.handle_type == HandleType::Intermediate)
        .count();
    assert_eq!(existing, 4);
    assert_eq!(intermediate, 4);
}

#[test]
fn test_constrained_rectangle_resize_keeps_anchor_and_squares() {
    let (data, anchor, corner) = rectangle_data();
    let mut h = Harness::with_data(data);
    let mut mode = ResizeRectangleMode::new();
    let start = DragEvent::at(corner).with_picks(vec![handle(0, vec![0, 2], HandleType::Existing, corner)]);

    h.run(&mut mode, |m, p| m.handle_drag_start(&start, p));
    assert_eq!(mode.anchor(), Some(anchor));

    let drag = DragEvent::at(Position::new(10.2, 50.06)).with_modifiers(Modifiers::constrained());
    let actions = h.run(&mut mode, |m, p| m.handle_dragging(&drag, p));
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].edit_type, EditType::MovePosition);
    assert!(mode.tooltips().is_empty());

    let ring = h.data.get(0).unwrap().geometry.outer_ring().unwrap().to_vec();
    assert_eq!(ring.len(), 5);
    assert_eq!(ring[0], anchor);
    assert_eq!(ring[4], anchor);
    assert_eq!(ring[1].lon, anchor.lon);
    assert_eq!(ring[3].lat, anchor.lat);
    let sides: Vec<f64> = ring.windows(2).map(|w| distance_m(w[0], w[1])).collect();
    for side in &sides {
        assert!((side - sides[0]).abs() / sides[0] < 1e-2, "{sides:?}");
    }

    let actions = h.run(&mut mode, |m, p| m.handle_drag_stop(&drag, p));
    assert_eq!(actions[0].edit_type, EditType::FinishMovePosition);
    assert_eq!(mode.anchor(), None);
    assert!(mode.tooltips().is_empty());
}

#[test]
fn test_constrained_resize_reports_rewritten_corner_index() {
    let (data, anchor, corner) = rectangle_data();
    let mut h = Harness::with_data(data);
    let mut mode = ResizeRectangleMode::new();
    let start = DragEvent::at(anchor).with_picks(vec![handle(0, vec![0, 0], HandleType::Existing, anchor)]);

    h.run(&mut mode, |m, p| m.handle_drag_start(&start, p));
    assert_eq!(mode.anchor(), Some(corner));

    let drag = DragEvent::at(Position::new(9.9, 49.97)).with_modifiers(Modifiers::constrained());
    let actions = h.run(&mut mode, |m, p| m.handle_dragging(&drag, p));
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].edit_context.position_indexes, vec![0, 2]);

    let ring = h.data.get(0).unwrap().geometry.outer_ring().unwrap().to_vec();
    assert_eq!(ring[0], corner);
    assert_ne!(ring[2], corner);
    assert!(ring[2].lon < corner.lon && ring[2].lat < corner.lat);
}

#[test]
fn test_free_rectangle_resize_shows_dimensions() {
    let (data, anchor, corner) = rectangle_data();
    let mut h = Harness::with_data(data);
    let mut mode = ResizeRectangleMode::new();
    let start = DragEvent::at(corner).with_picks(vec![handle(0, vec![0, 2], HandleType::Existing, corner)]);

    h.run(&mut mode, |m, p| m.handle_drag_start(&start, p));
    h.run(&mut mode, |m, p| m.handle_dragging(&DragEvent::at(Position::new(10.2, 50.1)), p));

    let ring = h.data.get(0).unwrap().geometry.outer_ring().unwrap().to_vec();
    assert_eq!(
        ring,
        vec![
            anchor,
            Position::new(10.0, 50.1),
            Position::new(10.2, 50.1),
            Position::new(10.2, 50.0),
            anchor,
        ]
    );
    let tooltips = mode.tooltips();
    assert_eq!(tooltips.len(), 1);
    assert!(tooltips[0].text.starts_with("Width: "));
}

#[test]
fn test_rectangle_mode_falls_back_for_plain_polygons() {
    let mut h = Harness::with_data(FeatureCollection::new().with_feature(Feature::new(square())));
    let mut mode = ResizeRectangleMode::new();
    let start = DragEvent::at(Position::new(0.0, 1.0)).with_picks(vec![handle(
        0,
        vec![0, 1],
        HandleType::Existing,
        Position::new(0.0, 1.0),
    )]);

    h.run(&mut mode, |m, p| m.handle_drag_start(&start, p));
    assert_eq!(mode.anchor(), None);
    h.run(&mut mode, |m, p| m.handle_dragging(&DragEvent::at(Position::new(-1.0, 2.0)), p));

    let ring = h.data.get(0).unwrap().geometry.outer_ring().unwrap().to_vec();
    assert_eq!(ring[1], Position::new(-1.0, 2.0));
    assert_eq!(ring[2], Position::new(1.0, 1.0));
}

#[test]
fn test_rectangle_guides_hide_midpoints() {
    let (data, _, _) = rectangle_data();
    let mut h = Harness::with_data(data);
    h.selected = vec![0];
    let mut mode = ResizeRectangleMode::new();

    let mut guides = Vec::new();
    h.run(&mut mode, |m, p| guides = m.guides(p));
    assert_eq!(guides.len(), 4);
    assert!(guides.iter().all(|g| g.handle.handle_type == HandleType::Existing));
}

#[test]
fn test_circle_edge_drag_resizes() {
    let (data, center, ring) = circle_data();
    let mut h = Harness::with_data(data);
    let mut mode = ResizeCircleMode::new();
    let start = DragEvent::at(ring[5]).with_picks(vec![handle(0, vec![0, 5], HandleType::Existing, ring[5])]);

    h.run(&mut mode, |m, p| m.handle_drag_start(&start, p));
    assert_eq!(mode.active_sub_mode(), ActiveSubMode::Resize);

    let edge = destination(center, 2_000.0, 90.0);
    let actions = h.run(&mut mode, |m, p| m.handle_dragging(&DragEvent::at(edge), p));
    assert_eq!(actions[0].edit_type, EditType::Scaling);
    assert_eq!(mode.tooltips()[0].text, "Diameter: 4.00 km\nArea: 12.57 km²");

    let actions = h.run(&mut mode, |m, p| m.handle_drag_stop(&DragEvent::at(edge), p));
    assert_eq!(actions[0].edit_type, EditType::FinishScaling);
    assert_eq!(mode.active_sub_mode(), ActiveSubMode::None);
    assert!(mode.tooltips().is_empty());

    let resized = h.data.get(0).unwrap().geometry.outer_ring().unwrap().to_vec();
    let params = circle_params(&resized, RadiusMode::Precise, DistanceUnit::Meters).unwrap();
    assert!((params.radius - 2_000.0).abs() < 2.0);
}

#[test]
fn test_circle_body_drag_translates_for_whole_drag() {
    let (data, center, ring) = circle_data();
    let mut h = Harness::with_data(data);
    let mut mode = ResizeCircleMode::new();
    let start = DragEvent::at(center).with_picks(vec![Pick::feature(0)]);

    h.run(&mut mode, |m, p| m.handle_drag_start(&start, p));
    assert_eq!(mode.active_sub_mode(), ActiveSubMode::Translate);

    // A handle under the pointer mid-drag does not switch behaviour.
    let drag = DragEvent::at(Position::new(0.0, 0.01))
        .with_picks(vec![handle(0, vec![0, 5], HandleType::Existing, ring[5])]);
    let actions = h.run(&mut mode, |m, p| m.handle_dragging(&drag, p));
    assert_eq!(actions[0].edit_type, EditType::Translating);
    assert_eq!(mode.active_sub_mode(), ActiveSubMode::Translate);

    let actions = h.run(&mut mode, |m, p| m.handle_drag_stop(&drag, p));
    assert_eq!(actions[0].edit_type, EditType::FinishTranslating);

    let moved = h.data.get(0).unwrap().geometry.outer_ring().unwrap().to_vec();
    let c = centroid(&moved[..moved.len() - 1]).unwrap();
    assert!(c.lon.abs() < 1e-6);
    assert!((c.lat - 0.01).abs() < 1e-6);
    let radius = circle_params(&moved, RadiusMode::Precise, DistanceUnit::Meters).unwrap().radius;
    assert!((radius - 1_000.0).abs() < 1.0);
}

#[test]
fn test_circle_drag_on_empty_space_does_nothing() {
    let (data, center, _) = circle_data();
    let mut h = Harness::with_data(data);
    let mut mode = ResizeCircleMode::new();

    h.run(&mut mode, |m, p| m.handle_drag_start(&DragEvent::at(center).with_picks(vec![Pick::label(0)]), p));
    assert_eq!(mode.active_sub_mode(), ActiveSubMode::None);
    assert!(h.run(&mut mode, |m, p| m.handle_dragging(&DragEvent::at(center), p)).is_empty());
}

fn ellipse_data() -> FeatureCollection {
    let ring = ellipse_polygon(Position::new(0.0, 0.0), 2_000.0, 1_000.0, 90.0, 64);
    FeatureCollection::new()
        .with_feature(Feature::new(Geometry::Polygon(vec![ring])).with_shape(ShapeType::Ellipse))
}

#[test]
fn test_scale_ellipse_reports_axes() {
    let mut h = Harness::with_data(ellipse_data());
    let mut mode = ScaleMode::new();
    let bbox = h.data.get(0).unwrap().geometry.bounding_box().unwrap();
    let [sw, _, ne, _] = bbox.corners();

    let start = DragEvent::at(ne).with_picks(vec![handle(0, vec![2], HandleType::Scale, ne)]);
    h.run(&mut mode, |m, p| m.handle_drag_start(&start, p));

    let pointer = Position::new(sw.lon + 2.0 * (ne.lon - sw.lon), ne.lat);
    let actions = h.run(&mut mode, |m, p| m.handle_dragging(&DragEvent::at(pointer), p));
    assert_eq!(actions[0].edit_type, EditType::Scaling);
    let text = &mode.tooltips()[0].text;
    assert!(text.starts_with("Major: "), "{text}");
    assert!(text.contains("Minor: 2.00 km"), "{text}");

    let actions = h.run(&mut mode, |m, p| m.handle_drag_stop(&DragEvent::at(pointer), p));
    assert_eq!(actions[0].edit_type, EditType::FinishScaling);
    assert!(mode.tooltips().is_empty());

    let scaled = h.data.get(0).unwrap().geometry.bounding_box().unwrap();
    assert!((scaled.corners()[0].lon - sw.lon).abs() < 1e-12);
    assert!((scaled.corners()[2].lon - pointer.lon).abs() < 1e-9);
}

#[test]
fn test_scale_rectangle_reports_width_and_height() {
    let (data, _, corner) = rectangle_data();
    let mut h = Harness::with_data(data);
    let mut mode = ScaleMode::new();

    let start = DragEvent::at(corner).with_picks(vec![handle(0, vec![2], HandleType::Scale, corner)]);
    h.run(&mut mode, |m, p| m.handle_drag_start(&start, p));
    h.run(&mut mode, |m, p| m.handle_dragging(&DragEvent::at(Position::new(10.2, 50.1)), p));

    assert!(mode.tooltips()[0].text.starts_with("Width: "));
}

#[test]
fn test_scale_to_zero_is_ignored() {
    let mut h = Harness::with_data(ellipse_data());
    let mut mode = ScaleMode::new();
    let [sw, _, ne, _] = h.data.get(0).unwrap().geometry.bounding_box().unwrap().corners();

    let start = DragEvent::at(ne).with_picks(vec![handle(0, vec![2], HandleType::Scale, ne)]);
    h.run(&mut mode, |m, p| m.handle_drag_start(&start, p));
    let collapse = DragEvent::at(Position::new(sw.lon, ne.lat));
    assert!(h.run(&mut mode, |m, p| m.handle_dragging(&collapse, p)).is_empty());
}
