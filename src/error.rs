use thiserror::Error;

use crate::arena::{NodeId, Value};

/// delete_node 的两种失败结果，互斥
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// 空表上删除，优先于 ValueNotFound
    #[error("attempted to delete from empty list")]
    EmptyList,
    #[error("value {0} not found in the list")]
    ValueNotFound(Value),
}

/// 结构不变式被破坏
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("head is {head:?} but tail is {tail:?}")]
    HeadTailMismatch {
        head: Option<NodeId>,
        tail: Option<NodeId>,
    },
    #[error("list is empty but len is {0}")]
    EmptyWithLen(usize),
    #[error("link points at released node {0}")]
    DanglingHandle(NodeId),
    #[error("head node {0} has a predecessor")]
    HeadHasPrev(NodeId),
    #[error("tail node {0} has a successor")]
    TailHasNext(NodeId),
    #[error("node {node} links to {next} but {next} points back to {back:?}")]
    BrokenBackLink {
        node: NodeId,
        next: NodeId,
        back: Option<NodeId>,
    },
    #[error("walk from head ended at {reached} instead of tail {tail}")]
    TailNotReached { reached: NodeId, tail: NodeId },
    #[error("walk from head exceeded len {len} (cycle?)")]
    TooManyNodes { len: usize },
    #[error("walk from head found {found} nodes, len is {len}")]
    LenMismatch { found: usize, len: usize },
    #[error("arena holds {live} live nodes but only {reachable} are reachable")]
    LeakedNodes { live: usize, reachable: usize },
}

pub type Result<T> = std::result::Result<T, ListError>;
