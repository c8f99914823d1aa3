use crate::balance::{Balance, Removal};
use crate::{Arbor, NodeIndex};

/// Height balancing: for every node the child subtree heights differ by at
/// most one, so lookups stay O(log n).
#[derive(Clone, Copy, Debug, Default)]
pub struct Avl;

impl Balance for Avl {
    // subtree height; a leaf stores 0, an absent child counts as -1
    type Meta = u8;

    fn rebalance_insert<K, V>(tree: &mut Arbor<K, V, Self>, node: NodeIndex) {
        let parent = tree.node(node).parent;
        retrace(tree, parent);
    }

    fn rebalance_remove<K, V>(tree: &mut Arbor<K, V, Self>, removal: Removal<u8>) {
        retrace(tree, removal.parent);
    }
}

fn height<K, V>(tree: &Arbor<K, V, Avl>, idx: NodeIndex) -> i32 {
    if idx.is_nil() {
        -1
    } else {
        i32::from(tree.node(idx).meta)
    }
}

fn update_height<K, V>(tree: &mut Arbor<K, V, Avl>, idx: NodeIndex) {
    let node = tree.node(idx);
    let tallest = height(tree, node.left).max(height(tree, node.right));
    tree.node_mut(idx).meta = (1 + tallest) as u8;
}

fn balance_factor<K, V>(tree: &Arbor<K, V, Avl>, idx: NodeIndex) -> i32 {
    let node = tree.node(idx);
    height(tree, node.left) - height(tree, node.right)
}

// Walks from `start` toward the root, refreshing heights and rotating where
// the balance factor leaves [-1, 1]. Stops at the first ancestor whose
// subtree height came out unchanged: nothing above it can have moved. After
// an insertion that means at most one (possibly double) rotation; after a
// removal the walk can rotate repeatedly, all the way up.
fn retrace<K, V>(tree: &mut Arbor<K, V, Avl>, start: NodeIndex) {
    let mut current = start;
    while !current.is_nil() {
        let before = tree.node(current).meta;
        update_height(tree, current);
        let factor = balance_factor(tree, current);
        let subtree = if factor > 1 || factor < -1 {
            rebalance(tree, current, factor)
        } else {
            current
        };
        if tree.node(subtree).meta == before {
            break;
        }
        current = tree.node(subtree).parent;
    }
}

// The four rotation cases; returns the node now rooting this subtree.
fn rebalance<K, V>(tree: &mut Arbor<K, V, Avl>, node: NodeIndex, factor: i32) -> NodeIndex {
    if factor > 1 {
        let left = tree.node(node).left;
        if balance_factor(tree, left) < 0 {
            // left-right: first rotate the left child outward
            let inner = tree.node(left).right;
            tree.rotate_left(left);
            update_height(tree, left);
            update_height(tree, inner);
        }
        let pivot = tree.node(node).left;
        tree.rotate_right(node);
        update_height(tree, node);
        update_height(tree, pivot);
        pivot
    } else {
        let right = tree.node(node).right;
        if balance_factor(tree, right) > 0 {
            // right-left, mirrored
            let inner = tree.node(right).left;
            tree.rotate_right(right);
            update_height(tree, right);
            update_height(tree, inner);
        }
        let pivot = tree.node(node).right;
        tree.rotate_left(node);
        update_height(tree, node);
        update_height(tree, pivot);
        pivot
    }
}
