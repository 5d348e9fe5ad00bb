//! Loading element trees from the JSON source format

use helpdoc_dom::{
    Element, ElementKind, ElementNode, ElementTree, Inline, ListType, SourceElement, TreeError,
};

fn load(json: &str) -> (ElementTree, helpdoc_dom::NodeId) {
    let source: SourceElement = serde_json::from_str(json).expect("source to deserialize");
    ElementTree::from_source(&source).expect("tree to build")
}

#[test]
fn test_load_document_with_sections() {
    let (tree, root) = load(
        r#"{
            "type": "document",
            "caption": "help.txt",
            "top": [{"type": "paragraph", "inlines": ["Intro"]}],
            "sections": [
                {"type": "contents_table"},
                {"type": "container", "caption": "Usage", "sections": [
                    {"type": "container", "caption": "Hidden", "visible_on_contents_table": false}
                ]}
            ]
        }"#,
    );

    assert_eq!(tree.kind(root).unwrap(), ElementKind::Document);
    let doc = tree.element(root).unwrap().as_container().unwrap();
    assert_eq!(doc.top_elements.len(), 1);
    assert_eq!(doc.sub_containers.len(), 2);

    let table = doc.sub_containers[0];
    assert_eq!(tree.element(table).unwrap().caption(), Some("CONTENTS"));

    let descendants = tree.descendant_containers(root);
    assert_eq!(descendants.len(), 3);
    assert!(tree.is_visible_on_contents_table(descendants[1]));
    assert!(!tree.is_visible_on_contents_table(descendants[2]));
}

#[test]
fn test_load_inline_variants() {
    let (tree, root) = load(
        r#"{"type": "paragraph", "inlines": [
            "See",
            {"type": "link", "text": "options"},
            {"type": "tag", "text": "intro"},
            {"type": "code", "text": ":help"},
            {"type": "strong", "text": "Note"}
        ]}"#,
    );

    let paragraph = tree.element(root).unwrap().as_paragraph().unwrap();
    assert_eq!(
        paragraph.inlines,
        vec![
            Inline::Text("See".to_string()),
            Inline::Link("options".to_string()),
            Inline::Tag("intro".to_string()),
            Inline::Code(":help".to_string()),
            Inline::Strong("Note".to_string()),
        ]
    );
}

#[test]
fn test_load_nested_list_items() {
    let (tree, root) = load(
        r#"{"type": "list", "list_type": "ordered", "items": [
            [{"type": "paragraph", "inlines": ["Item1"]}],
            {"type": "list", "list_type": "unordered", "items": [
                [{"type": "paragraph", "inlines": ["Item2"]}]
            ]}
        ]}"#,
    );

    let list = tree.element(root).unwrap().as_list().unwrap();
    assert_eq!(list.list_type, ListType::Ordered);
    assert_eq!(tree.kind(list.items[0]).unwrap(), ElementKind::ListItem);
    assert_eq!(tree.kind(list.items[1]).unwrap(), ElementKind::List);
    assert_eq!(tree.list_type_of_item(list.items[0]), ListType::Ordered);
}

#[test]
fn test_load_definitions_keeps_missing_parts_absent() {
    let (tree, root) = load(
        r#"{"type": "definition_list", "list_type": "unordered", "definitions": [
            {"term": ["tabstop"], "descriptions": [{"type": "paragraph", "inlines": ["Tab width."]}]},
            {"descriptions": []},
            {"term": ["orphan"]}
        ]}"#,
    );

    let list = tree.element(root).unwrap().as_definition_list().unwrap();
    let complete = tree.element(list.definitions[0]).unwrap().as_definition().unwrap();
    assert!(complete.term.is_some());
    assert_eq!(complete.descriptions.as_ref().map(Vec::len), Some(1));

    let no_term = tree.element(list.definitions[1]).unwrap().as_definition().unwrap();
    assert_eq!(no_term.term, None);
    assert_eq!(no_term.descriptions, Some(Vec::new()));

    let no_descriptions = tree.element(list.definitions[2]).unwrap().as_definition().unwrap();
    assert_eq!(no_descriptions.descriptions, None);
}

#[test]
fn test_unknown_list_type_is_rejected() {
    let result: Result<SourceElement, _> =
        serde_json::from_str(r#"{"type": "list", "list_type": "roman", "items": []}"#);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("unknown variant"), "unexpected error: {err}");
}

#[test]
fn test_nested_item_must_be_a_list() {
    let source: SourceElement = serde_json::from_str(
        r#"{"type": "list", "list_type": "ordered", "items": [
            {"type": "paragraph", "inlines": ["not an item"]}
        ]}"#,
    )
    .unwrap();
    let err = ElementTree::from_source(&source).unwrap_err();
    assert_eq!(
        err,
        TreeError::InvalidChild {
            parent: ElementKind::List,
            child: ElementKind::Paragraph,
            slot: "list item",
        }
    );
}

#[test]
fn test_container_not_allowed_as_top_element() {
    let source: SourceElement = serde_json::from_str(
        r#"{"type": "container", "caption": "A", "top": [
            {"type": "container", "caption": "B"}
        ]}"#,
    )
    .unwrap();
    assert!(matches!(
        ElementTree::from_source(&source),
        Err(TreeError::InvalidChild { .. })
    ));
}

#[test]
fn test_display_labels() {
    let (tree, root) = load(r#"{"type": "container", "caption": "Usage"}"#);
    let element: &Element = tree.element(root).unwrap();
    assert_eq!(element.display_label(), "Usage");
}
