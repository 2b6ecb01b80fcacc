use super::HtmlNode;

/// Asserts the structural invariants of an assembled document tree.
///
/// Panics with a descriptive message on the first violation. Intended for
/// tests: a tree that passes is guaranteed to render without error.
pub fn check(node: &HtmlNode) {
    match node {
        HtmlNode::Leaf(leaf) => {
            assert!(
                leaf.value.is_some(),
                "leaf node has no value (tag: {:?})",
                leaf.tag
            );
        }
        HtmlNode::Parent(parent) => {
            let tag = parent
                .tag
                .as_deref()
                .unwrap_or_else(|| panic!("parent node has no tag: {parent:?}"));
            assert!(
                !parent.children.is_empty(),
                "parent node <{tag}> has no children"
            );
            match tag {
                "ul" | "ol" => {
                    for child in &parent.children {
                        assert_eq!(
                            child.tag(),
                            Some("li"),
                            "list <{tag}> contains a non-item child: {child:?}"
                        );
                    }
                }
                "pre" => {
                    assert!(
                        parent.children.len() == 1 && parent.children[0].tag() == Some("code"),
                        "<pre> must wrap exactly one <code> leaf: {:?}",
                        parent.children
                    );
                }
                _ => {}
            }
            for child in &parent.children {
                check(child);
            }
        }
    }
}
