use egui::{Pos2, Rect, Vec2};
use vector_sketch::element::{factory, Element, ElementType};
use vector_sketch::id_generator::ElementCounter;
use vector_sketch::{Document, DrawingParams, FormState, ShapeKind};

fn params(x: &str, y: &str, width: &str, height: &str, r: &str) -> DrawingParams {
    DrawingParams::read(&FormState {
        x: x.to_owned(),
        y: y.to_owned(),
        width: width.to_owned(),
        height: height.to_owned(),
        r: r.to_owned(),
        ..Default::default()
    })
}

fn create(kind: ShapeKind, params: &DrawingParams, counter: &mut ElementCounter) -> ElementType {
    factory::create(kind, counter.generate_id(kind), params)
}

#[test]
fn test_element_bounds() {
    let mut counter = ElementCounter::new();
    let p = params("10", "20", "100", "50", "25");

    let rect = create(ShapeKind::Rect, &p, &mut counter);
    assert_eq!(
        rect.bounds(),
        Some(Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(100.0, 50.0)))
    );

    let circle = create(ShapeKind::Circle, &p, &mut counter);
    assert_eq!(
        circle.bounds(),
        Some(Rect::from_center_size(Pos2::new(10.0, 20.0), Vec2::splat(50.0)))
    );
}

#[test]
fn test_unrenderable_geometry() {
    let mut counter = ElementCounter::new();

    // Negative radius from an upward circle drag
    let circle = create(ShapeKind::Circle, &params("10", "10", "1", "1", "-30"), &mut counter);
    assert_eq!(circle.attribute("r").as_deref(), Some("-30"));
    assert_eq!(circle.bounds(), None);
    assert!(!circle.hit_test(Pos2::new(10.0, 10.0)));

    // Negative height from an upward rect drag
    let rect = create(ShapeKind::Rect, &params("10", "10", "40", "-30", "1"), &mut counter);
    assert_eq!(rect.bounds(), None);
    assert!(!rect.hit_test(Pos2::new(20.0, 0.0)));
}

#[test]
fn test_hit_testing() {
    let mut counter = ElementCounter::new();

    let rect = create(ShapeKind::Rect, &params("10", "10", "40", "30", "1"), &mut counter);
    assert!(rect.hit_test(Pos2::new(10.0, 10.0)));
    assert!(rect.hit_test(Pos2::new(50.0, 40.0)));
    assert!(!rect.hit_test(Pos2::new(60.0, 20.0)));

    let circle = create(ShapeKind::Circle, &params("50", "50", "1", "1", "10"), &mut counter);
    assert!(circle.hit_test(Pos2::new(55.0, 55.0)));
    assert!(!circle.hit_test(Pos2::new(60.0, 60.0)));

    let line = create(ShapeKind::Line, &params("0", "0", "100", "0", "1"), &mut counter);
    assert!(line.hit_test(Pos2::new(50.0, 1.5)));
    assert!(!line.hit_test(Pos2::new(50.0, 5.0)));
}

#[test]
fn test_document_lookup() {
    let mut counter = ElementCounter::new();
    let mut document = Document::new();
    assert!(document.is_empty());

    let rect = create(ShapeKind::Rect, &params("0", "0", "10", "10", "1"), &mut counter);
    let rect_id = rect.id();
    document.add_element(rect);

    assert_eq!(document.len(), 1);
    assert_eq!(document.find_element_by_id(rect_id).map(|e| e.id()), Some(rect_id));
    assert_eq!(document.element_at(Pos2::new(5.0, 5.0)), Some(rect_id));
    assert_eq!(document.element_at(Pos2::new(50.0, 50.0)), None);
}

#[test]
fn test_counter_starts_at_one() {
    let mut counter = ElementCounter::new();
    assert_eq!(counter.peek(), 1);
    assert_eq!(counter.generate_id(ShapeKind::Line).to_string(), "line_1");
    assert_eq!(counter.generate_id(ShapeKind::Rect).to_string(), "rect_2");
    assert_eq!(counter.peek(), 3);
}
