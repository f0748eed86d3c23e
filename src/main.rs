//! 演示程序：追加 1 2 3，删除 2，再删除不存在的 4
//!
//! 删除失败只报告到 stderr，进程正常退出。日志级别由 RUST_LOG 控制。

use dll_rs::{DoublyLinkedList, ListError};

fn run(list: &mut DoublyLinkedList) -> Result<(), ListError> {
    list.extend([1, 2, 3]);
    println!("{list}");

    list.delete_node(2)?;
    println!("{list}");

    list.delete_node(4)?;
    println!("{list}");
    Ok(())
}

fn main() {
    env_logger::init();

    let mut list = DoublyLinkedList::new();
    match run(&mut list) {
        Ok(()) => {}
        Err(e @ ListError::EmptyList) => eprintln!("Empty list exception: {e}"),
        Err(e @ ListError::ValueNotFound(_)) => eprintln!("Value not found: {e}"),
    }

    log::debug!("final list: {list:?}");
}
