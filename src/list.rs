//! 双向链表
//!
//! 节点存放在 [`NodeArena`] 中，链表本身只保存 head/tail 句柄和长度。
//! 不变式（每次公开操作前后都成立）：
//! 1. head 为空 ⇔ tail 为空 ⇔ 长度为 0
//! 2. a.next == b ⇔ b.prev == a
//! 3. 从 head 沿 next 走 len-1 步恰好到达 tail，无环
//! 4. head.prev 与 tail.next 恒为空
//!
//! `validate` 逐条检查上述不变式。

use std::fmt;

use crate::arena::{NodeArena, NodeData, NodeId, Value};
use crate::error::{InvariantViolation, ListError, Result};

#[derive(Clone, Default)]
pub struct DoublyLinkedList {
    arena: NodeArena,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl DoublyLinkedList {
    pub fn new() -> Self {
        DoublyLinkedList {
            arena: NodeArena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// 预分配节点存储
    pub fn with_capacity(capacity: usize) -> Self {
        DoublyLinkedList {
            arena: NodeArena::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn front(&self) -> Option<Value> {
        self.head.map(|id| self.arena.get(id).value)
    }

    pub fn back(&self) -> Option<Value> {
        self.tail.map(|id| self.arena.get(id).value)
    }

    /// O(1) 尾部追加
    pub fn append(&mut self, value: Value) {
        let id = self.arena.alloc(value);

        match self.tail {
            None => self.head = Some(id),
            Some(tail) => {
                self.arena.get_mut(id).prev = Some(tail);
                self.arena.get_mut(tail).next = Some(id);
            }
        }
        self.tail = Some(id);
        self.len += 1;

        log::trace!("appended {value} as node {id}");
    }

    /// 删除从 head 起第一个值等于 `value` 的节点
    ///
    /// 空表返回 `EmptyList`（先于扫描检查），找不到返回 `ValueNotFound`。
    /// 失败时链表不做任何修改。
    pub fn delete_node(&mut self, value: Value) -> Result<()> {
        if self.is_empty() {
            log::debug!("delete {value}: list is empty");
            return Err(ListError::EmptyList);
        }

        let Some(id) = self.find(value) else {
            log::debug!("delete {value}: not found among {} nodes", self.len);
            return Err(ListError::ValueNotFound(value));
        };

        self.unlink(id);
        log::trace!("deleted {value} (node {id})");
        Ok(())
    }

    /// 线性扫描
    pub fn contains(&self, value: Value) -> bool {
        self.find(value).is_some()
    }

    /// 按 head → tail 顺序收集所有值
    pub fn traverse(&self) -> Vec<Value> {
        let mut values = Vec::with_capacity(self.len);
        values.extend(self.values());
        values
    }

    /// 沿 next 链逐个释放节点，返回释放数量
    ///
    /// 空表上为 no-op。槽位留在 Arena 的空闲链表中供后续 append 复用。
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        let mut cursor = self.head.take();

        while let Some(id) = cursor {
            match self.arena.release(id) {
                Some(node) => {
                    released += 1;
                    cursor = node.next;
                }
                None => break,
            }
        }

        self.tail = None;
        self.len = 0;

        if released > 0 {
            log::debug!("released {released} nodes");
        }
        released
    }

    /// 检查结构不变式
    pub fn validate(&self) -> std::result::Result<(), InvariantViolation> {
        let (head, tail) = match (self.head, self.tail) {
            (None, None) => {
                if self.len != 0 {
                    return Err(InvariantViolation::EmptyWithLen(self.len));
                }
                if self.arena.live() != 0 {
                    return Err(InvariantViolation::LeakedNodes {
                        live: self.arena.live(),
                        reachable: 0,
                    });
                }
                return Ok(());
            }
            (Some(head), Some(tail)) => (head, tail),
            (head, tail) => return Err(InvariantViolation::HeadTailMismatch { head, tail }),
        };

        if self.checked(head)?.prev.is_some() {
            return Err(InvariantViolation::HeadHasPrev(head));
        }
        if self.checked(tail)?.next.is_some() {
            return Err(InvariantViolation::TailHasNext(tail));
        }

        let mut found = 1;
        let mut current = head;
        while let Some(next) = self.checked(current)?.next {
            let back = self.checked(next)?.prev;
            if back != Some(current) {
                return Err(InvariantViolation::BrokenBackLink {
                    node: current,
                    next,
                    back,
                });
            }

            found += 1;
            if found > self.len {
                return Err(InvariantViolation::TooManyNodes { len: self.len });
            }
            current = next;
        }

        if current != tail {
            return Err(InvariantViolation::TailNotReached {
                reached: current,
                tail,
            });
        }
        if found != self.len {
            return Err(InvariantViolation::LenMismatch {
                found,
                len: self.len,
            });
        }
        if self.arena.live() != found {
            return Err(InvariantViolation::LeakedNodes {
                live: self.arena.live(),
                reachable: found,
            });
        }
        Ok(())
    }

    fn find(&self, value: Value) -> Option<NodeId> {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.arena.get(id);
            if node.value == value {
                return Some(id);
            }
            cursor = node.next;
        }
        None
    }

    /// 把节点从链中摘除并释放
    fn unlink(&mut self, id: NodeId) {
        let NodeData { prev, next, .. } = *self.arena.get(id);

        match prev {
            Some(prev) => self.arena.get_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.arena.get_mut(next).prev = prev,
            None => self.tail = prev,
        }

        self.arena.release(id);
        self.len -= 1;
    }

    fn values(&self) -> impl Iterator<Item = Value> + '_ {
        std::iter::successors(self.head, move |&id| self.arena.get(id).next)
            .map(move |id| self.arena.get(id).value)
    }

    fn checked(&self, id: NodeId) -> std::result::Result<&NodeData, InvariantViolation> {
        if self.arena.is_live(id) {
            Ok(self.arena.get(id))
        } else {
            Err(InvariantViolation::DanglingHandle(id))
        }
    }
}

impl Extend<Value> for DoublyLinkedList {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Value>,
    {
        for value in iter {
            self.append(value);
        }
    }
}

impl FromIterator<Value> for DoublyLinkedList {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<const N: usize> From<[Value; N]> for DoublyLinkedList {
    fn from(values: [Value; N]) -> Self {
        let mut list = DoublyLinkedList::with_capacity(N);
        list.extend(values);
        list
    }
}

impl PartialEq for DoublyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}

impl Eq for DoublyLinkedList {}

impl fmt::Debug for DoublyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

/// 空格分隔的打印形式，如 `1 2 3`
impl fmt::Display for DoublyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[Value]) -> DoublyLinkedList {
        values.iter().copied().collect()
    }

    #[test]
    fn test_new_is_empty() {
        let list = DoublyLinkedList::new();

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.traverse(), Vec::<Value>::new());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        list.validate().unwrap();
    }

    #[test]
    fn test_append_order() {
        let mut list = DoublyLinkedList::new();
        list.append(1);
        list.append(2);
        list.append(3);

        assert!(!list.is_empty());
        assert_eq!(list.traverse(), vec![1, 2, 3]);
        assert_eq!(list.front(), Some(1));
        assert_eq!(list.back(), Some(3));
        list.validate().unwrap();
    }

    #[test]
    fn test_single_append_is_head_and_tail() {
        let mut list = DoublyLinkedList::new();
        list.append(5);

        assert_eq!(list.head, list.tail);
        let node = list.arena.get(list.head.unwrap());
        assert_eq!(node.prev, None);
        assert_eq!(node.next, None);
    }

    #[test]
    fn test_delete_from_empty() {
        let mut list = DoublyLinkedList::new();

        for value in [0, 1, -1, Value::MAX] {
            assert_eq!(list.delete_node(value), Err(ListError::EmptyList));
        }
        assert!(list.is_empty());
    }

    #[test]
    fn test_delete_absent_leaves_list_unchanged() {
        let mut list = list_of(&[1, 2, 3]);
        let before = list.clone();

        assert_eq!(list.delete_node(4), Err(ListError::ValueNotFound(4)));
        assert_eq!(list, before);
        assert_eq!(list.len(), 3);
        list.validate().unwrap();
    }

    #[test]
    fn test_delete_middle() {
        let mut list = list_of(&[1, 2, 3]);
        list.delete_node(2).unwrap();

        assert_eq!(list.traverse(), vec![1, 3]);
        assert_eq!(list.len(), 2);
        assert!(list.head.is_some() && list.tail.is_some());
        list.validate().unwrap();
    }

    #[test]
    fn test_delete_only_element() {
        let mut list = list_of(&[5]);
        list.delete_node(5).unwrap();

        assert!(list.is_empty());
        assert_eq!(list.tail, None);
        list.validate().unwrap();
    }

    #[test]
    fn test_delete_head() {
        let mut list = list_of(&[1, 2, 3]);
        let second = list.arena.get(list.head.unwrap()).next;
        list.delete_node(1).unwrap();

        assert_eq!(list.traverse(), vec![2, 3]);
        assert_eq!(list.head, second);
        list.validate().unwrap();
    }

    #[test]
    fn test_delete_tail() {
        let mut list = list_of(&[1, 2, 3]);
        let second = list.arena.get(list.tail.unwrap()).prev;
        list.delete_node(3).unwrap();

        assert_eq!(list.traverse(), vec![1, 2]);
        assert_eq!(list.tail, second);
        list.validate().unwrap();
    }

    #[test]
    fn test_delete_first_duplicate_only() {
        let mut list = list_of(&[2, 2, 3]);
        list.delete_node(2).unwrap();

        assert_eq!(list.traverse(), vec![2, 3]);
        list.delete_node(2).unwrap();
        assert_eq!(list.traverse(), vec![3]);
        assert_eq!(list.delete_node(2), Err(ListError::ValueNotFound(2)));
    }

    #[test]
    fn test_empty_takes_precedence_after_draining() {
        let mut list = list_of(&[1]);
        list.delete_node(1).unwrap();

        assert_eq!(list.delete_node(1), Err(ListError::EmptyList));
    }

    #[test]
    fn test_append_after_delete_reuses_slot() {
        let mut list = list_of(&[1, 2, 3]);
        list.delete_node(2).unwrap();
        list.append(4);

        assert_eq!(list.traverse(), vec![1, 3, 4]);
        assert_eq!(list.arena.slot_count(), 3);
        list.validate().unwrap();
    }

    #[test]
    fn test_clear_releases_every_node_once() {
        let mut list: DoublyLinkedList = (0..100).collect();
        list.delete_node(50).unwrap();

        assert_eq!(list.clear(), 99);
        assert!(list.is_empty());
        assert_eq!(list.arena.live(), 0);
        assert_eq!(list.arena.free_count(), list.arena.slot_count());
        list.validate().unwrap();

        // 再次 clear 是 no-op
        assert_eq!(list.clear(), 0);
        assert_eq!(list.arena.free_count(), list.arena.slot_count());
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut list = list_of(&[1, 2, 3]);
        list.clear();
        list.extend([7, 8]);

        assert_eq!(list.traverse(), vec![7, 8]);
        assert_eq!(list.arena.slot_count(), 3);
        list.validate().unwrap();
    }

    #[test]
    fn test_contains() {
        let list = list_of(&[4, 5, 6]);

        assert!(list.contains(5));
        assert!(!list.contains(7));
        assert!(!DoublyLinkedList::new().contains(0));
    }

    #[test]
    fn test_display_and_debug() {
        let list = DoublyLinkedList::from([1, 2, 3]);

        assert_eq!(list.to_string(), "1 2 3");
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
        assert_eq!(DoublyLinkedList::new().to_string(), "");
    }

    #[test]
    fn test_validate_detects_broken_back_link() {
        let mut list = list_of(&[1, 2, 3]);
        let second = list.arena.get(list.head.unwrap()).next.unwrap();
        list.arena.get_mut(second).prev = None;

        assert!(matches!(
            list.validate(),
            Err(InvariantViolation::BrokenBackLink { .. })
        ));
    }

    #[test]
    fn test_validate_detects_cycle() {
        let mut list = list_of(&[1, 2, 3]);
        let (head, tail) = (list.head.unwrap(), list.tail.unwrap());
        list.arena.get_mut(tail).next = Some(head);

        assert_eq!(
            list.validate(),
            Err(InvariantViolation::TailHasNext(tail))
        );
    }

    #[test]
    fn test_validate_detects_head_tail_mismatch() {
        let mut list = list_of(&[1]);
        list.tail = None;

        assert!(matches!(
            list.validate(),
            Err(InvariantViolation::HeadTailMismatch { .. })
        ));
    }

    #[test]
    fn test_long_list_mixed_operations() {
        let mut list: DoublyLinkedList = (0..10_000).collect();
        for value in (0..10_000).step_by(3) {
            list.delete_node(value).unwrap();
        }

        let expected: Vec<Value> = (0..10_000).filter(|v| v % 3 != 0).collect();
        assert_eq!(list.traverse(), expected);
        list.validate().unwrap();
    }
}
