//! dll-rust - Arena 支撑的双向链表
//!
//! 节点存放在 Arena 中，链表只持有 head/tail 句柄。
//! 启用 `python` feature 时额外导出 pyo3 扩展模块 `dll_rs`。

pub mod arena;
pub mod error;
pub mod list;

#[cfg(feature = "python")]
mod python;

pub use arena::{NodeId, Value};
pub use error::{InvariantViolation, ListError, Result};
pub use list::DoublyLinkedList;
