use std::collections::HashSet;

use egui::Color32;
use vector_sketch::element::{factory, Element, ElementType};
use vector_sketch::id_generator::ElementCounter;
use vector_sketch::{DrawingParams, EditorContext, FormState, ShapeKind, Tool};

fn rect_form() -> FormState {
    FormState {
        x: "10".to_owned(),
        y: "20".to_owned(),
        width: "40".to_owned(),
        height: "30".to_owned(),
        color: "#ff0000".to_owned(),
        stroke: "#000000".to_owned(),
        st_size: "2".to_owned(),
        ..Default::default()
    }
}

fn sorted(mut attrs: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
    attrs.sort();
    attrs
}

#[test]
fn test_rect_factory_attributes() {
    let mut editor = EditorContext::default();
    editor.form = rect_form();
    editor.set_tool(Tool::Rect);

    let id = editor.handle_pointer_down(None).unwrap();
    assert_eq!(id.to_string(), "rect_1");

    let rect = editor.element(id).unwrap();
    let expected = vec![
        ("fill", "#ff0000".to_owned()),
        ("height", "30".to_owned()),
        ("id", "rect_1".to_owned()),
        ("stroke", "#000000".to_owned()),
        ("stroke-width", "2".to_owned()),
        ("width", "40".to_owned()),
        ("x", "10".to_owned()),
        ("y", "20".to_owned()),
    ];
    assert_eq!(sorted(rect.attributes()), expected);
}

#[test]
fn test_circle_duplicates_position_as_center() {
    let mut form = rect_form();
    form.r = "15".to_owned();
    let params = DrawingParams::read(&form);

    let mut counter = ElementCounter::new();
    let circle = factory::create_circle(counter.generate_id(ShapeKind::Circle), &params);

    assert_eq!(circle.element_type(), ShapeKind::Circle);
    assert_eq!(circle.attribute("x").as_deref(), Some("10"));
    assert_eq!(circle.attribute("cx").as_deref(), Some("10"));
    assert_eq!(circle.attribute("y").as_deref(), Some("20"));
    assert_eq!(circle.attribute("cy").as_deref(), Some("20"));
    assert_eq!(circle.attribute("r").as_deref(), Some("15"));
    assert_eq!(circle.attribute("fill").as_deref(), Some("#ff0000"));
    assert_eq!(circle.attribute("width"), None);
}

#[test]
fn test_line_takes_second_endpoint_from_size_fields() {
    let params = DrawingParams::read(&rect_form());
    let mut counter = ElementCounter::new();
    let line = factory::create_line(counter.generate_id(ShapeKind::Line), &params);

    assert_eq!(line.attribute("x1").as_deref(), Some("10"));
    assert_eq!(line.attribute("y1").as_deref(), Some("20"));
    assert_eq!(line.attribute("x2").as_deref(), Some("40"));
    assert_eq!(line.attribute("y2").as_deref(), Some("30"));
    assert_eq!(line.attribute("stroke").as_deref(), Some("#000000"));
    assert_eq!(line.attribute("fill"), None);
}

#[test]
fn test_text_has_no_paint_attributes() {
    let mut form = rect_form();
    form.textin = "hello".to_owned();
    let params = DrawingParams::read(&form);
    let mut counter = ElementCounter::new();
    let text = factory::create_text(counter.generate_id(ShapeKind::Text), &params);

    let names: Vec<_> = text.attributes().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["id", "y", "x"]);
    match &text {
        ElementType::Text(t) => assert_eq!(t.content(), "hello"),
        other => panic!("expected text, got {other:?}"),
    }
    assert!(!text.is_clickable());
}

#[test]
fn test_counter_advances_once_per_creation() {
    let mut editor = EditorContext::default();
    let kinds = [
        (Tool::Rect, "rect"),
        (Tool::Circle, "circle"),
        (Tool::Text, "text"),
        (Tool::Line, "line"),
        (Tool::Rect, "rect"),
    ];

    for (tool, tag) in kinds {
        editor.set_tool(tool);
        let before = editor.next_serial();
        let id = editor.handle_pointer_down(None).unwrap();
        assert_eq!(editor.next_serial(), before + 1);
        assert_eq!(id.to_string(), format!("{tag}_{before}"));
    }
    assert_eq!(editor.document().len(), kinds.len());
}

#[test]
fn test_ids_are_pairwise_distinct() {
    let mut editor = EditorContext::default();
    let tools = [Tool::Rect, Tool::Circle, Tool::Line, Tool::Text];

    let mut seen = HashSet::new();
    for i in 0..40 {
        editor.set_tool(tools[i % tools.len()]);
        let id = editor.handle_pointer_down(None).unwrap();
        assert!(seen.insert(id.to_string()), "duplicate id {id}");
    }
    assert_eq!(seen.len(), 40);
}

#[test]
fn test_malformed_fields_pass_through_silently() {
    let mut editor = EditorContext::default();
    editor.form = rect_form();
    editor.form.width = "wide".to_owned();
    editor.form.color = "reddish".to_owned();
    editor.set_tool(Tool::Rect);

    // Still exactly one node, the bad attributes are simply absent
    let id = editor.handle_pointer_down(None).unwrap();
    let rect = editor.element(id).unwrap();
    assert_eq!(editor.document().len(), 1);
    assert_eq!(rect.attribute("width"), None);
    assert_eq!(rect.attribute("fill"), None);
    assert_eq!(rect.attribute("height").as_deref(), Some("30"));

    // Without a width nothing is painted or clickable
    assert_eq!(rect.bounds(), None);
    assert_eq!(rect.effective_fill(), Some(Color32::BLACK));
}
