//! 最大堆优先队列
//!
//! 基于数组的二叉堆，按键降序出队。没有 decrease-key 操作，
//! 调用方对已确定的顶点采用惰性删除（弹出后忽略）。

use crate::error::{Error, Result};

/// 堆元素
#[derive(Debug, Clone)]
struct HeapItem<K, V> {
    key: K,
    value: V,
}

/// 最大堆
#[derive(Debug, Clone)]
pub struct MaxHeap<K, V> {
    data: Vec<HeapItem<K, V>>,
}

impl<K: PartialOrd, V> MaxHeap<K, V> {
    /// 创建空堆
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// 预分配容量
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 插入键值对
    pub fn add(&mut self, key: K, value: V) {
        self.data.push(HeapItem { key, value });
        self.sift_up(self.data.len() - 1);
    }

    /// 查看最大元素（不移除）
    pub fn peek_max(&self) -> Result<(&K, &V)> {
        let item = self.data.first().ok_or(Error::EmptyHeap)?;
        Ok((&item.key, &item.value))
    }

    /// 移除并返回最大元素
    pub fn remove_max(&mut self) -> Result<(K, V)> {
        if self.data.is_empty() {
            return Err(Error::EmptyHeap);
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let item = self.data.pop().ok_or(Error::EmptyHeap)?;
        self.sift_down(0);
        Ok((item.key, item.value))
    }

    /// 清空
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// 按堆数组顺序导出所有元素
    pub fn into_vec(self) -> Vec<(K, V)> {
        self.data.into_iter().map(|i| (i.key, i.value)).collect()
    }

    fn sift_up(&mut self, mut j: usize) {
        while j > 0 {
            let parent = (j - 1) / 2;
            if self.data[j].key > self.data[parent].key {
                self.data.swap(j, parent);
                j = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut j: usize) {
        let n = self.data.len();
        loop {
            let left = 2 * j + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            // 右孩子严格更大时才选右孩子
            let mut big_child = left;
            if right < n && self.data[right].key > self.data[left].key {
                big_child = right;
            }
            if self.data[big_child].key > self.data[j].key {
                self.data.swap(j, big_child);
                j = big_child;
            } else {
                break;
            }
        }
    }
}

impl<K: PartialOrd, V> Default for MaxHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
