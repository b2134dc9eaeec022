use geodraw_designer::model::{Feature, Geometry, Position, ShapeType};
use geodraw_designer::validation::{
    validate_feature, validate_geometry, validate_line_string, validate_point, validate_polygon,
};

fn positions(points: &[[f64; 2]]) -> Vec<Position> {
    points.iter().map(|p| Position::from(*p)).collect()
}

#[test]
fn test_duplicate_line_points_warn_only() {
    let result = validate_line_string(&positions(&[[0.0, 0.0], [0.0, 0.0], [1.0, 1.0]]));
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.warnings, vec!["Duplicate consecutive points at index 1".to_string()]);
}

#[test]
fn test_short_line_is_invalid() {
    let result = validate_line_string(&positions(&[[0.0, 0.0]]));
    assert!(!result.is_valid);
    assert!(result.errors[0].contains("at least 2 points"));
}

#[test]
fn test_point_ranges() {
    assert!(validate_point(Position::new(180.0, -90.0)).is_valid);

    let result = validate_point(Position::new(180.5, 0.0));
    assert!(!result.is_valid);
    assert!(result.errors[0].starts_with("Longitude 180.5"));

    let result = validate_point(Position::new(0.0, 91.0));
    assert!(result.errors[0].starts_with("Latitude 91"));

    let result = validate_point(Position::new(f64::NAN, 0.0));
    assert!(result.errors[0].contains("not a finite number"));
}

#[test]
fn test_unclosed_ring() {
    let ring = positions(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]);
    let result = validate_polygon(&[ring], true);
    assert!(!result.is_valid);
    assert!(result.errors.contains(&"Ring 0 is not closed".to_string()));
}

#[test]
fn test_hole_rules_apply() {
    let outer = positions(&[[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0], [0.0, 0.0]]);
    let hole = positions(&[[1.0, 1.0], [1.0, 2.0], [1.0, 1.0]]);
    let result = validate_polygon(&[outer, hole], true);
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["Ring 1 must have at least 4 points, found 3".to_string()]);
}

#[test]
fn test_bowtie_rejected_except_for_circles() {
    let bowtie = Geometry::Polygon(vec![positions(&[
        [0.0, 0.0],
        [1.0, 1.0],
        [1.0, 0.0],
        [0.0, 1.0],
        [0.0, 0.0],
    ])]);

    let result = validate_geometry(&bowtie, ShapeType::Polygon);
    assert_eq!(result.errors, vec!["Polygon outer ring must not self-intersect".to_string()]);
    assert!(!validate_geometry(&bowtie, ShapeType::Rectangle).is_valid);
    assert!(validate_geometry(&bowtie, ShapeType::Circle).is_valid);
}

#[test]
fn test_feature_uses_shape_flag() {
    let bowtie = Geometry::Polygon(vec![positions(&[
        [0.0, 0.0],
        [1.0, 1.0],
        [1.0, 0.0],
        [0.0, 1.0],
        [0.0, 0.0],
    ])]);
    assert!(!validate_feature(&Feature::new(bowtie.clone())).is_valid);
    assert!(validate_feature(&Feature::new(bowtie).with_shape(ShapeType::Circle)).is_valid);
}
