//! Python 绑定
//!
//! Python 只持有 DoublyLinkedList 句柄，节点全部留在 Rust 侧的 Arena 中。
//! `ListError` 映射为两个独立的 Python 异常类型。

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyValueError};
use pyo3::prelude::*;

use crate::arena::Value;
use crate::error::ListError;
use crate::list::DoublyLinkedList;

create_exception!(dll_rs, EmptyListError, PyException);
create_exception!(dll_rs, ValueNotFoundError, PyValueError);

impl From<ListError> for PyErr {
    fn from(err: ListError) -> PyErr {
        match err {
            ListError::EmptyList => EmptyListError::new_err(err.to_string()),
            ListError::ValueNotFound(_) => ValueNotFoundError::new_err(err.to_string()),
        }
    }
}

#[pyclass(name = "DoublyLinkedList")]
pub struct PyDoublyLinkedList {
    inner: DoublyLinkedList,
}

#[pymethods]
impl PyDoublyLinkedList {
    /// 创建链表，可选地按顺序追加初始值
    #[new]
    #[pyo3(signature = (values=None))]
    fn new(values: Option<Vec<Value>>) -> Self {
        PyDoublyLinkedList {
            inner: values.unwrap_or_default().into_iter().collect(),
        }
    }

    /// 创建带预分配容量的链表
    #[staticmethod]
    fn with_capacity(capacity: usize) -> Self {
        PyDoublyLinkedList {
            inner: DoublyLinkedList::with_capacity(capacity),
        }
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn append(&mut self, value: Value) {
        self.inner.append(value);
    }

    /// 删除第一个匹配的值
    ///
    /// Raises:
    ///     EmptyListError: 链表为空
    ///     ValueNotFoundError: 值不存在（链表保持不变）
    fn delete_node(&mut self, value: Value) -> PyResult<()> {
        self.inner.delete_node(value)?;
        Ok(())
    }

    /// Returns:
    ///     List[int]: head → tail 顺序的所有值
    fn traverse(&self) -> Vec<Value> {
        self.inner.traverse()
    }

    /// 释放所有节点，返回释放数量
    fn clear(&mut self) -> usize {
        self.inner.clear()
    }

    fn __contains__(&self, value: Value) -> bool {
        self.inner.contains(value)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("<DoublyLinkedList {:?}>", self.inner)
    }
}

/// Python 模块定义
#[pymodule]
fn dll_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDoublyLinkedList>()?;
    m.add("EmptyListError", m.py().get_type::<EmptyListError>())?;
    m.add("ValueNotFoundError", m.py().get_type::<ValueNotFoundError>())?;
    Ok(())
}
