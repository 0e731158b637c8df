use vector_sketch::{EditorContext, SketchConfig, Tool};

#[test]
fn test_initial_tool_is_select() {
    let editor = EditorContext::default();
    assert_eq!(editor.active_tool(), Some(Tool::Select));
    assert!(!editor.form.text_input_visible);
}

#[test]
fn test_initial_tool_from_config() {
    let config = SketchConfig {
        initial_tool: Tool::Text,
        ..Default::default()
    };
    let editor = EditorContext::new(&config);
    assert_eq!(editor.active_tool(), Some(Tool::Text));
    assert!(editor.form.text_input_visible);
}

#[test]
fn test_text_tool_shows_text_input() {
    let mut editor = EditorContext::default();

    editor.set_tool(Tool::Text);
    assert!(editor.form.text_input_visible);

    for tool in [Tool::Fill, Tool::Rect, Tool::Circle, Tool::Line, Tool::Select] {
        editor.set_tool(Tool::Text);
        editor.set_tool(tool);
        assert!(!editor.form.text_input_visible, "{tool} should hide the text input");
        assert_eq!(editor.active_tool(), Some(tool));
    }
}

#[test]
fn test_set_tool_by_name() {
    let mut editor = EditorContext::default();

    assert_eq!(editor.set_tool_by_name("circle"), Some(Tool::Circle));
    assert_eq!(editor.active_tool(), Some(Tool::Circle));

    assert_eq!(editor.set_tool_by_name("text"), Some(Tool::Text));
    assert!(editor.form.text_input_visible);
}

#[test]
fn test_unknown_tool_name_disables_dispatch() {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Text);

    assert_eq!(editor.set_tool_by_name("eraser"), None);
    assert_eq!(editor.active_tool(), None);
    assert!(!editor.form.text_input_visible);

    // A press now does nothing at all
    assert_eq!(editor.handle_pointer_down(None), None);
    assert!(editor.document().is_empty());
    assert_eq!(editor.next_serial(), 1);
}
