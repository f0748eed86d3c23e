/// Arena-based 节点存储
///
/// 链表的所有节点都住在这里，通过 NodeId (u32 句柄) 互相引用：
/// - 槽位释放后进入空闲链表，下一次 alloc 优先复用
/// - 句柄只是下标，不持有任何所有权，释放只能经由 release

pub type NodeId = u32;
pub type Value = i32;

/// 节点数据（存储在 Arena 中）
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeData {
    pub value: Value,
    pub prev: Option<NodeId>, // 前驱（非拥有的回指）
    pub next: Option<NodeId>, // 后继
}

impl NodeData {
    pub fn new(value: Value) -> Self {
        NodeData {
            value,
            prev: None,
            next: None,
        }
    }
}

#[derive(Clone, Debug)]
enum Slot {
    Occupied(NodeData),
    /// 空闲槽位，串成单向空闲链表
    Vacant { next_free: Option<NodeId> },
}

/// Arena 上下文 - 所有链表节点的存储
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    slots: Vec<Slot>,
    free: Option<NodeId>,
    live: usize,
}

impl NodeArena {
    pub fn new() -> Self {
        NodeArena {
            slots: Vec::new(),
            free: None,
            live: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            slots: Vec::with_capacity(capacity),
            free: None,
            live: 0,
        }
    }

    /// 分配一个孤立节点（无前驱、无后继）
    ///
    /// 优先复用空闲链表头部的槽位，否则在末尾追加
    pub fn alloc(&mut self, value: Value) -> NodeId {
        self.live += 1;

        if let Some(id) = self.free {
            let slot = &mut self.slots[id as usize];
            if let Slot::Vacant { next_free } = *slot {
                self.free = next_free;
            }
            *slot = Slot::Occupied(NodeData::new(value));
            return id;
        }

        let id = self.slots.len() as NodeId;
        self.slots.push(Slot::Occupied(NodeData::new(value)));
        id
    }

    /// 释放节点，返回其数据
    ///
    /// 对空闲或越界的句柄返回 None 且不做任何修改，所以同一节点不会被释放两次
    pub fn release(&mut self, id: NodeId) -> Option<NodeData> {
        let slot = self.slots.get_mut(id as usize)?;
        if let Slot::Vacant { .. } = slot {
            return None;
        }

        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        let node = match std::mem::replace(slot, vacant) {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!(),
        };
        self.free = Some(id);
        self.live -= 1;
        Some(node)
    }

    /// 获取节点引用
    ///
    /// 悬空句柄说明链接结构已损坏，直接 panic
    #[inline]
    pub fn get(&self, id: NodeId) -> &NodeData {
        match &self.slots[id as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("dangling node handle {id}"),
        }
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut NodeData {
        match &mut self.slots[id as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("dangling node handle {id}"),
        }
    }

    /// 句柄是否指向存活节点
    #[inline]
    pub fn is_live(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id as usize), Some(Slot::Occupied(_)))
    }

    /// 存活节点数量
    #[inline]
    pub fn live(&self) -> usize {
        self.live
    }

    /// 槽位总数（存活 + 空闲）
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// 沿空闲链表计数（O(F)）
    pub fn free_count(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.free;
        while let Some(id) = cursor {
            count += 1;
            cursor = match self.slots[id as usize] {
                Slot::Vacant { next_free } => next_free,
                Slot::Occupied(_) => break,
            };
        }
        count
    }

    /// 清空 Arena（丢弃所有槽位）
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.live = 0;
    }
}
