//! Layout system.
//!
//! Declarative node tree, laid out in one constraint-driven pass and then
//! drawn in a second pass against a [`DrawBackend`](crate::backend::DrawBackend).
//!
//! # Architecture
//!
//! ```text
//! build tree -> layout() stores sizes and offsets -> draw() issues backend calls
//! ```
//!
//! Every node is a [`Node`] wrapping one [`NodeKind`]. Parents hand their
//! children a [`LayoutContext`] going down and read back a size; nothing
//! points back up the tree.

pub mod base;
pub mod constraints;
pub mod context;
pub mod length;

// Flex distribution shared by Row and Column
mod flex;

pub mod column;
pub mod container;
pub mod elements;
pub mod field;
pub mod modifiers;
pub mod multipage;
pub mod node;
pub mod row;
pub mod table;
pub mod text;
pub mod tree;

// Re-export core types
pub use base::{Border, BorderSide};
pub use constraints::BoxConstraints;
pub use context::{DrawContext, Frame, LayoutContext, ParentKind};
pub use length::{Alignment, CrossAxisAlignment, EdgeInset, Length, MainAxisAlignment};

// Re-export node types
pub use node::{Node, NodeKind, Widget};
pub use tree::LayoutTree;

// Re-export widgets
pub use column::Column;
pub use container::{BoxNode, Container, sized_box};
pub use elements::Image;
pub use field::{LabelPosition, LabeledField};
pub use modifiers::{Align, Center, Divider, Expanded, Padding};
pub use multipage::MultiPage;
pub use row::Row;
pub use table::{Cell, MultiPageTable, Table, TableColumn, TableRow};
pub use text::{Text, TextLine};
