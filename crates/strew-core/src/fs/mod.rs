//! Filesystem primitives shared across features.

pub mod copy;

pub use copy::{copy_tree, ensure_dir};
