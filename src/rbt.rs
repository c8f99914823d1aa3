use crate::balance::{Balance, Removal};
use crate::{Arbor, NodeIndex};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    #[default]
    Red,
    Black,
}

/// Color balancing: no red node has a red child and every root-to-leaf path
/// crosses the same number of black nodes, bounding the depth at 2 log n.
#[derive(Clone, Copy, Debug, Default)]
pub struct RedBlack;

impl Balance for RedBlack {
    // a fresh leaf starts red
    type Meta = Color;

    fn rebalance_insert<K, V>(tree: &mut Arbor<K, V, Self>, node: NodeIndex) {
        fix_double_red(tree, node);
        let root = tree.root;
        tree.node_mut(root).meta = Color::Black;
    }

    fn rebalance_remove<K, V>(tree: &mut Arbor<K, V, Self>, removal: Removal<Color>) {
        if removal.meta == Color::Red {
            // a red node never changes any path's black count
            return;
        }
        if is_red(tree, removal.child) {
            // the replacement absorbs the lost black node
            tree.node_mut(removal.child).meta = Color::Black;
            return;
        }
        fix_double_black(tree, removal.child, removal.parent);
    }
}

fn is_red<K, V>(tree: &Arbor<K, V, RedBlack>, idx: NodeIndex) -> bool {
    !idx.is_nil() && tree.node(idx).meta == Color::Red
}

fn fix_double_red<K, V>(tree: &mut Arbor<K, V, RedBlack>, start: NodeIndex) {
    let mut node = start;
    while is_red(tree, tree.node(node).parent) {
        // a red parent is never the root, so the grandparent exists
        let parent = tree.node(node).parent;
        let grandparent = tree.node(parent).parent;
        let parent_is_right = tree.node(grandparent).right == parent;
        let uncle = if parent_is_right {
            tree.node(grandparent).left
        } else {
            tree.node(grandparent).right
        };

        if is_red(tree, uncle) {
            tree.node_mut(parent).meta = Color::Black;
            tree.node_mut(uncle).meta = Color::Black;
            tree.node_mut(grandparent).meta = Color::Red;
            node = grandparent;
            continue;
        }

        let node_is_inner = if parent_is_right {
            tree.node(parent).left == node
        } else {
            tree.node(parent).right == node
        };
        if node_is_inner {
            // straighten the zig-zag, then handle it as the outer case
            if parent_is_right {
                tree.rotate_right(parent);
            } else {
                tree.rotate_left(parent);
            }
            node = parent;
            continue;
        }

        tree.node_mut(parent).meta = Color::Black;
        tree.node_mut(grandparent).meta = Color::Red;
        if parent_is_right {
            tree.rotate_left(grandparent);
        } else {
            tree.rotate_right(grandparent);
        }
    }
}

// The spliced-out node was black and its replacement (possibly NIL) cannot
// absorb the deficit, so one subtree is short a black node. The pair
// (node, parent) is tracked explicitly because `node` may be NIL.
fn fix_double_black<K, V>(
    tree: &mut Arbor<K, V, RedBlack>,
    start: NodeIndex,
    start_parent: NodeIndex,
) {
    let mut node = start;
    let mut parent = start_parent;
    while !parent.is_nil() && !is_red(tree, node) {
        let node_is_left = tree.node(parent).left == node;
        let mut sibling = if node_is_left {
            tree.node(parent).right
        } else {
            tree.node(parent).left
        };

        if is_red(tree, sibling) {
            // rotate the red sibling above the parent; the new sibling is
            // black and the cases below apply
            tree.node_mut(sibling).meta = Color::Black;
            tree.node_mut(parent).meta = Color::Red;
            if node_is_left {
                tree.rotate_left(parent);
                sibling = tree.node(parent).right;
            } else {
                tree.rotate_right(parent);
                sibling = tree.node(parent).left;
            }
        }

        if !is_red(tree, tree.left_of(sibling)) && !is_red(tree, tree.right_of(sibling)) {
            // push the deficit to the parent
            tree.node_mut(sibling).meta = Color::Red;
            node = parent;
            parent = tree.node(node).parent;
            continue;
        }

        if node_is_left {
            if !is_red(tree, tree.right_of(sibling)) {
                // red nephew on the near side only: rotate it outward first
                let near = tree.node(sibling).left;
                tree.node_mut(near).meta = Color::Black;
                tree.node_mut(sibling).meta = Color::Red;
                tree.rotate_right(sibling);
                sibling = tree.node(parent).right;
            }
            let parent_color = tree.node(parent).meta;
            tree.node_mut(sibling).meta = parent_color;
            tree.node_mut(parent).meta = Color::Black;
            let far = tree.node(sibling).right;
            tree.node_mut(far).meta = Color::Black;
            tree.rotate_left(parent);
        } else {
            if !is_red(tree, tree.left_of(sibling)) {
                let near = tree.node(sibling).right;
                tree.node_mut(near).meta = Color::Black;
                tree.node_mut(sibling).meta = Color::Red;
                tree.rotate_left(sibling);
                sibling = tree.node(parent).left;
            }
            let parent_color = tree.node(parent).meta;
            tree.node_mut(sibling).meta = parent_color;
            tree.node_mut(parent).meta = Color::Black;
            let far = tree.node(sibling).left;
            tree.node_mut(far).meta = Color::Black;
            tree.rotate_right(parent);
        }
        return;
    }
    // either the root was reached or a red node can soak up the deficit
    if !node.is_nil() {
        tree.node_mut(node).meta = Color::Black;
    }
}
