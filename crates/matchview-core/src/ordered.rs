//! 按插入顺序迭代的文件名映射
use std::collections::HashMap;
use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// 文件名 -> 值 的有序映射
/// - 迭代顺序即键首次插入的顺序（同名覆盖不改变位置）
/// - 查找走 HashMap 下标，O(1)
#[derive(Debug, Clone, PartialEq)]
pub struct FileMap<V> {
    entries: Vec<(String, V)>,
    positions: HashMap<String, usize>,
}

impl<V> Default for FileMap<V> {
    fn default() -> Self {
        Self { entries: Vec::new(), positions: HashMap::new() }
    }
}

impl<V> FileMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.positions.get(name).map(|&i| &self.entries[i].1)
    }

    /// 插入或整体替换；返回被替换的旧值
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        let name = name.into();
        match self.positions.get(&name) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.positions.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
                None
            }
        }
    }

    /// 取得键对应的值，不存在时先用 `make` 构造
    pub(crate) fn get_or_insert_with(&mut self, name: &str, make: impl FnOnce() -> V) -> &mut V {
        let i = match self.positions.get(name) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.positions.insert(name.to_string(), i);
                self.entries.push((name.to_string(), make()));
                i
            }
        };
        &mut self.entries[i].1
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> Index<&str> for FileMap<V> {
    type Output = V;

    fn index(&self, name: &str) -> &V {
        match self.get(name) {
            Some(v) => v,
            None => panic!("no entry for file `{name}`"),
        }
    }
}

impl<V: Serialize> Serialize for FileMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "ordered_test.rs"]
mod tests;
