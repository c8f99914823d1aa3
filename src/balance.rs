use core::fmt::Debug;

use crate::{Arbor, NodeIndex};

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::avl::Avl {}
    impl Sealed for crate::rbt::RedBlack {}
    impl Sealed for super::Unbalanced {}
}

/// Context handed to a balance policy after a node was spliced out:
/// the parent the removed position hung from, the child that took the
/// position (possibly NIL) and the removed node's balance metadata.
#[derive(Clone, Copy, Debug)]
pub struct Removal<M> {
    pub(crate) parent: NodeIndex,
    pub(crate) child: NodeIndex,
    pub(crate) meta: M,
}

/// Rebalancing strategy plugged into [`Arbor`](crate::Arbor).
///
/// A policy owns the per-node balance metadata and the two hooks invoked
/// after a structural change. Rotations are provided by the tree core and
/// never touch the metadata; each policy repairs its own after the relink.
///
/// This trait is sealed: the implementations are [`Unbalanced`],
/// [`Avl`](crate::Avl) and [`RedBlack`](crate::RedBlack).
pub trait Balance: sealed::Sealed + Sized {
    #[doc(hidden)]
    type Meta: Copy + Default + Debug;

    /// Runs after `node` was attached as a fresh leaf.
    #[doc(hidden)]
    fn rebalance_insert<K, V>(tree: &mut Arbor<K, V, Self>, node: NodeIndex);

    /// Runs after a splice, before the storage is compacted.
    #[doc(hidden)]
    fn rebalance_remove<K, V>(tree: &mut Arbor<K, V, Self>, removal: Removal<Self::Meta>);
}

/// No rebalancing at all: the plain binary search tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbalanced;

impl Balance for Unbalanced {
    type Meta = ();

    fn rebalance_insert<K, V>(_tree: &mut Arbor<K, V, Self>, _node: NodeIndex) {}

    fn rebalance_remove<K, V>(_tree: &mut Arbor<K, V, Self>, _removal: Removal<()>) {}
}
