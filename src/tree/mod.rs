//! Tree types: [`FreeTree`] (unrooted) and [`RootedTree`] (rooted, with an
//! invalidatable subtree-size cache).

mod free_tree;
mod rooted_tree;

pub use free_tree::FreeTree;
pub use rooted_tree::RootedTree;
