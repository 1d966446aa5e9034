//! 路径树：由扁平的路径标注条目推导 parent → children 分组
//!
//! build_tree 是纯函数，不持有状态，每次调用从 entries 重新推导；
//! 展开/折叠由调用方以 ExpandedPaths 叠加层单独维护（默认仅根展开）。

use std::cmp::Ordering;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::models::Entry;

/// 合成根的父路径键。
pub const ROOT_PATH: &str = "/";

pub type PathGroups = FxHashMap<String, Vec<Entry>>;

/// 去掉最后一段、`/` 连接其余段；单段路径的父为根。
pub fn parent_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() <= 1 {
        ROOT_PATH.to_string()
    } else {
        format!("/{}", segments[..segments.len() - 1].join("/"))
    }
}

/// 分组仅由路径字符串推导：即使中间目录条目未物化，
/// 深层路径的条目仍会出现在其字符串父键下（孤儿路径照常显示）。
pub fn build_tree(entries: &[Entry]) -> PathGroups {
    let mut groups: PathGroups = FxHashMap::default();
    for entry in entries {
        groups
            .entry(parent_path(&entry.path))
            .or_default()
            .push(entry.clone());
    }
    groups
}

/// 渲染顺序：目录在前，再按名称字节序。
pub fn render_order(group: &mut [Entry]) {
    group.sort_by(|a, b| match (a.is_directory(), b.is_directory()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    });
}

/// 展开状态叠加层，按路径键控；独立于 build_tree 的输出。
#[derive(Debug, Clone)]
pub struct ExpandedPaths {
    set: FxHashSet<String>,
}

impl Default for ExpandedPaths {
    fn default() -> Self {
        let mut set = FxHashSet::default();
        set.insert(ROOT_PATH.to_string());
        Self { set }
    }
}

impl ExpandedPaths {
    pub fn is_expanded(&self, path: &str) -> bool {
        self.set.contains(path)
    }

    pub fn expand(&mut self, path: &str) {
        self.set.insert(path.to_string());
    }

    pub fn collapse(&mut self, path: &str) {
        self.set.remove(path);
    }

    pub fn toggle(&mut self, path: &str) {
        if !self.set.remove(path) {
            self.set.insert(path.to_string());
        }
    }
}

#[derive(Debug, Clone)]
pub struct TreeRow {
    pub entry: Entry,
    pub depth: u16,
}

/// 按渲染顺序展平可见行：只下钻已展开的目录。
pub fn flatten(groups: &PathGroups, expanded: &ExpandedPaths) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    if expanded.is_expanded(ROOT_PATH) {
        walk(groups, expanded, ROOT_PATH, 0, &mut rows);
    }
    rows
}

fn walk(
    groups: &PathGroups,
    expanded: &ExpandedPaths,
    parent: &str,
    depth: u16,
    rows: &mut Vec<TreeRow>,
) {
    let Some(group) = groups.get(parent) else {
        return;
    };
    let mut ordered = group.clone();
    render_order(&mut ordered);
    for entry in ordered {
        let descend = entry.is_directory() && expanded.is_expanded(&entry.path);
        let path = entry.path.clone();
        rows.push(TreeRow { entry, depth });
        if descend {
            walk(groups, expanded, &path, depth + 1, rows);
        }
    }
}
