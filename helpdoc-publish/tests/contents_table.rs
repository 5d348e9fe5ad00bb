use helpdoc_dom::{Container, ContentsTable, Element, ElementTree, NodeId};
use helpdoc_publish::{publish, PublishConfig};

fn section(tree: &mut ElementTree, parent: NodeId, container: impl Into<Element>) -> NodeId {
    let node = tree.insert(container);
    tree.add_sub_container(parent, node).unwrap();
    node
}

fn table_of(tree: &ElementTree, table: NodeId, config: &PublishConfig) -> String {
    publish(tree, table, config).unwrap()
}

#[test]
fn test_nested_entries_align_under_parent_head() {
    let mut tree = ElementTree::new();
    let doc = tree.insert(Container::new("doc").into_document());
    let table = section(&mut tree, doc, ContentsTable::default());
    let a = section(&mut tree, doc, Container::new("A"));
    let b = section(&mut tree, a, Container::new("B"));
    section(&mut tree, b, Container::new("C"));

    assert_eq!(
        table_of(&tree, table, &PublishConfig::default()),
        "CONTENTS\n  1 A\n    1.1 B\n        1.1.1 C"
    );
}

#[test]
fn test_invisible_container_is_elided() {
    let mut tree = ElementTree::new();
    let doc = tree.insert(Container::new("doc").into_document());
    let table = section(&mut tree, doc, ContentsTable::default());
    let a = section(&mut tree, doc, Container::new("A"));
    let hidden = section(&mut tree, a, Container::new("Hidden").hidden_from_contents_table());
    section(&mut tree, hidden, Container::new("B"));
    section(&mut tree, a, Container::new("C"));

    assert_eq!(
        table_of(&tree, table, &PublishConfig::default()),
        "CONTENTS\n  1 A\n    1.1 B\n    1.2 C"
    );
}

#[test]
fn test_table_options() {
    let mut tree = ElementTree::new();
    let doc = tree.insert(Container::new("doc").into_document());
    let table = section(&mut tree, doc, ContentsTable::new("Index"));
    let a = section(&mut tree, doc, Container::new("A"));
    section(&mut tree, a, Container::new("B"));
    section(&mut tree, doc, Container::new("C"));

    let mut config = PublishConfig::default();
    config.contents_table.table_margin = 0;
    config.contents_table.line_space_height = 1;
    config.contents_table.index_suffix = ".".to_string();

    assert_eq!(
        table_of(&tree, table, &config),
        "Index\n1. A\n\n   1.1. B\n\n2. C"
    );
}

#[test]
fn test_empty_table_has_only_a_header() {
    let mut tree = ElementTree::new();
    let doc = tree.insert(Container::new("doc").into_document());
    let table = section(&mut tree, doc, ContentsTable::default());

    assert_eq!(
        table_of(&tree, table, &PublishConfig::default()),
        "CONTENTS\n"
    );
}

#[test]
fn test_table_under_plain_root_container() {
    let mut tree = ElementTree::new();
    let root = tree.insert(Container::new("root"));
    let table = section(&mut tree, root, ContentsTable::default());
    let a = section(&mut tree, root, Container::new("A"));
    section(&mut tree, a, Container::new("A1"));

    assert_eq!(
        table_of(&tree, table, &PublishConfig::default()),
        "CONTENTS\n  1 A\n    1.1 A1"
    );
}

#[test]
fn test_caption_is_not_indented_or_wrapped() {
    let mut tree = ElementTree::new();
    let doc = tree.insert(Container::new("doc").into_document());
    let outer = section(&mut tree, doc, Container::new("Outer"));
    let table = section(&mut tree, outer, ContentsTable::new("Table of contents"));
    section(&mut tree, doc, Container::new("A"));

    let config = PublishConfig::default().with_display_width(10);
    let output = table_of(&tree, table, &config);
    assert!(output.starts_with("Table of contents\n"), "{output:?}");
}
