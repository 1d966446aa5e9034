//! 数据模型

pub mod entry;
pub mod path_tree;

pub use entry::{
    language_for_path, Entry, EntryBody, EntryKind, EntryPatch, NewEntry, NewProject, Project,
};
pub use path_tree::{
    build_tree, flatten, parent_path, render_order, ExpandedPaths, PathGroups, TreeRow, ROOT_PATH,
};
