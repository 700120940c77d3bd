use super::*;
use pretty_assertions::assert_eq;

#[test]
fn attributes_keep_insertion_order() {
    let element = Element::new("Binary")
        .with_attr("Op", "ADD")
        .with_attr("Type", "int");
    assert_eq!(
        element.attrs().collect::<Vec<_>>(),
        [("Op", "ADD"), ("Type", "int")]
    );
}

#[test]
fn set_attr_replaces_in_place() {
    let mut element = Element::new("Ident")
        .with_attr("Name", "x")
        .with_attr("Type", "unknown");
    element.set_attr("Name", "y");

    assert_eq!(element.attr("Name"), Some("y"));
    assert_eq!(
        element.attrs().map(|(k, _)| k).collect::<Vec<_>>(),
        ["Name", "Type"]
    );
}

#[test]
fn missing_attribute_is_none() {
    assert_eq!(Element::new("Literal").attr("Value"), None);
}

#[test]
fn attr_values_accept_display_types() {
    let element = Element::new("Literal").with_attr("Width", 42);
    assert_eq!(element.attr("Width"), Some("42"));
}

#[test]
fn node_count_and_walk_are_preorder() {
    let tree = Element::new("a")
        .with_child(Element::new("b").with_child(Element::new("c")))
        .with_child(Element::new("d"));

    let mut names = Vec::new();
    tree.walk(&mut |e| names.push(e.name()));

    assert_eq!(tree.node_count(), 4);
    assert_eq!(names, ["a", "b", "c", "d"]);
    assert_eq!(tree.children().len(), 2);
}
