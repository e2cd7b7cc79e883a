//! Renders a [`Tree`] sideways: the right subtree above its parent and the
//! left subtree below it, so the largest value is printed first.

use std::fmt;

use crate::ordered::{Node, Tree};

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_node(f, root, "", true),
            None => Ok(()),
        }
    }
}

/// Writes `node` and its subtrees. `is_left` says which side of its parent
/// `node` hangs from; the root is drawn as a left child.
fn write_node<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let branch = if is_left { "│   " } else { "    " };
        write_node(f, right, &format!("{}{}", prefix, branch), false)?;
    }

    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{}{}{}", prefix, connector, node.value())?;

    if let Some(left) = node.left() {
        let branch = if is_left { "    " } else { "│   " };
        write_node(f, left, &format!("{}{}", prefix, branch), true)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::Tree;

    #[test]
    fn empty_tree_renders_nothing() {
        let tree: Tree<i32> = Tree::new();
        assert_eq!(tree.to_string(), "");
    }

    #[test]
    fn single_node() {
        let tree = Tree::build(vec![42]);
        assert_eq!(tree.to_string(), "└── 42\n");
    }

    #[test]
    fn built_from_duplicates() {
        let tree = Tree::build(vec![5, 3, 8, 3, 1]);
        let expected = ["│   ┌── 8", "└── 5", "    └── 3", "        └── 1", ""].join("\n");

        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn full_tree() {
        let tree = Tree::build(1..=7);
        let expected = [
            "│       ┌── 7",
            "│   ┌── 6",
            "│   │   └── 5",
            "└── 4",
            "    │   ┌── 3",
            "    └── 2",
            "        └── 1",
            "",
        ]
        .join("\n");

        assert_eq!(tree.to_string(), expected);
    }
}
