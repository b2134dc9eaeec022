use geodraw_core::same_instance;
use geodraw_designer::model::ShapeType;
use geodraw_designer::modes::{InteractionMode, ModeKind, ModeRegistry};

#[test]
fn test_registry_is_lazy() {
    let mut registry = ModeRegistry::new();
    assert!(registry.is_empty());

    registry.get(ModeKind::DrawCircle);
    assert_eq!(registry.len(), 1);
    assert!(registry.contains(ModeKind::DrawCircle));
    assert!(!registry.contains(ModeKind::DrawEllipse));
}

#[test]
fn test_registry_returns_same_instance() {
    let mut registry = ModeRegistry::new();
    for kind in ModeKind::ALL {
        let first = registry.get(kind);
        let second = registry.get(kind);
        assert!(same_instance(&first, &second), "{kind} was recreated");
    }
    assert_eq!(registry.len(), ModeKind::ALL.len());
}

#[test]
fn test_distinct_kinds_get_distinct_instances() {
    let mut registry = ModeRegistry::new();
    let circle = registry.get(ModeKind::DrawCircle);
    let ellipse = registry.get(ModeKind::DrawEllipse);
    assert!(!same_instance(&circle, &ellipse));
    assert_eq!(circle.borrow().name(), "draw-circle");
    assert_eq!(ellipse.borrow().name(), "draw-ellipse");
}

#[test]
fn test_shape_type_lookup() {
    let mut registry = ModeRegistry::new();
    let by_shape = registry.draw_mode_for(ShapeType::Rectangle);
    let by_kind = registry.get(ModeKind::DrawRectangle);
    assert!(same_instance(&by_shape, &by_kind));

    assert_eq!(registry.edit_mode_for(ShapeType::Circle).borrow().name(), "resize-circle");
    assert_eq!(registry.edit_mode_for(ShapeType::Rectangle).borrow().name(), "resize-rectangle");
    assert_eq!(registry.edit_mode_for(ShapeType::Ellipse).borrow().name(), "scale");
    assert_eq!(registry.edit_mode_for(ShapeType::Polygon).borrow().name(), "modify");
}

#[test]
fn test_kind_shape_mapping_round_trips() {
    for shape in ShapeType::ALL {
        let kind = ModeKind::draw_for(shape);
        assert!(kind.is_draw());
        assert_eq!(kind.shape_type(), Some(shape));
    }
    assert!(!ModeKind::Modify.is_draw());
    assert_eq!(ModeKind::default(), ModeKind::View);
}
