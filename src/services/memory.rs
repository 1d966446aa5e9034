//! 内存存储 adapter
//!
//! 显式的存储对象 + 注入式 id 计数器，测试可各自实例化隔离的存储，
//! 不依赖模块级全局量。无事务与乐观锁：按条目 id last-write-wins。

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use rustc_hash::FxHashMap;

use crate::models::{
    language_for_path, Entry, EntryBody, EntryKind, EntryPatch, NewEntry, NewProject, Project,
};

use super::ports::{EntryStore, StoreError, StoreResult};

#[derive(Debug)]
struct MemInner {
    projects: FxHashMap<i64, Project>,
    entries: FxHashMap<i64, Entry>,
    next_project_id: i64,
    next_entry_id: i64,
}

#[derive(Debug)]
pub struct MemStore {
    inner: Mutex<MemInner>,
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStore {
    pub fn new() -> Self {
        Self::with_start_ids(1, 1)
    }

    /// 注入起始 id，便于测试构造可预测的代理键。
    pub fn with_start_ids(project_start: i64, entry_start: i64) -> Self {
        Self {
            inner: Mutex::new(MemInner {
                projects: FxHashMap::default(),
                entries: FxHashMap::default(),
                next_project_id: project_start,
                next_entry_id: entry_start,
            }),
        }
    }

    fn locked(&self) -> MutexGuard<'_, MemInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 空库时播种一个示例项目，返回其 id；非空时不动。
    pub async fn seed_demo(&self) -> StoreResult<Option<i64>> {
        if !self.locked().projects.is_empty() {
            return Ok(None);
        }
        let project = self
            .create_project(NewProject {
                name: "my-project".to_string(),
                description: Some("A sample project".to_string()),
            })
            .await?;

        let samples: [(&str, &str, &str); 4] = [
            (
                "index.html",
                "/index.html",
                "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <title>My Web Project</title>\n    <link rel=\"stylesheet\" href=\"styles.css\">\n</head>\n<body>\n    <div id=\"app\">\n        <h1>Hello, World!</h1>\n    </div>\n    <script src=\"index.js\"></script>\n</body>\n</html>\n",
            ),
            (
                "index.js",
                "/index.js",
                "// Main JavaScript file\nconsole.log('Hello from JavaScript!');\n",
            ),
            (
                "styles.css",
                "/styles.css",
                "/* Main stylesheet */\nbody {\n  font-family: Arial, sans-serif;\n  max-width: 800px;\n  margin: 0 auto;\n}\n",
            ),
            (
                "README.md",
                "/README.md",
                "# My Project\n\nA simple web project.\n\nOpen index.html in your browser to see it in action.\n",
            ),
        ];
        for (name, path, content) in samples {
            self.create_entry(NewEntry {
                project_id: project.id,
                name: name.to_string(),
                path: path.to_string(),
                content: content.to_string(),
                kind: EntryKind::File,
                language: None,
            })
            .await?;
        }
        Ok(Some(project.id))
    }
}

#[async_trait]
impl EntryStore for MemStore {
    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        let inner = self.locked();
        let mut projects: Vec<Project> = inner.projects.values().cloned().collect();
        projects.sort_by_key(|p| p.id);
        Ok(projects)
    }

    async fn get_project(&self, id: i64) -> StoreResult<Project> {
        self.locked()
            .projects
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create_project(&self, new: NewProject) -> StoreResult<Project> {
        let mut inner = self.locked();
        let id = inner.next_project_id;
        inner.next_project_id += 1;
        let now = Utc::now();
        let project = Project {
            id,
            name: new.name,
            description: new.description,
            created_at: now,
            updated_at: now,
        };
        inner.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn delete_project(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.locked();
        if inner.projects.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }
        inner.entries.retain(|_, e| e.project_id != id);
        Ok(())
    }

    async fn list_entries(&self, project_id: i64) -> StoreResult<Vec<Entry>> {
        let inner = self.locked();
        let mut entries: Vec<Entry> = inner
            .entries
            .values()
            .filter(|e| e.project_id == project_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.id);
        Ok(entries)
    }

    async fn get_entry(&self, id: i64) -> StoreResult<Entry> {
        self.locked()
            .entries
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_entry_by_path(&self, project_id: i64, path: &str) -> StoreResult<Entry> {
        self.locked()
            .entries
            .values()
            .find(|e| e.project_id == project_id && e.path == path)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create_entry(&self, new: NewEntry) -> StoreResult<Entry> {
        let mut inner = self.locked();
        if !inner.projects.contains_key(&new.project_id) {
            return Err(StoreError::NotFound);
        }
        if inner
            .entries
            .values()
            .any(|e| e.project_id == new.project_id && e.path == new.path)
        {
            return Err(StoreError::Conflict(format!(
                "path {:?} already exists in project {}",
                new.path, new.project_id
            )));
        }
        let id = inner.next_entry_id;
        inner.next_entry_id += 1;
        let now = Utc::now();
        let body = match new.kind {
            EntryKind::File => EntryBody::File {
                language: new
                    .language
                    .or_else(|| language_for_path(&new.path).map(String::from)),
                content: new.content,
            },
            EntryKind::Directory => EntryBody::Directory,
        };
        let entry = Entry {
            id,
            project_id: new.project_id,
            name: new.name,
            path: new.path,
            body,
            created_at: now,
            updated_at: now,
        };
        inner.entries.insert(id, entry.clone());
        Ok(entry)
    }

    async fn update_entry(&self, id: i64, patch: EntryPatch) -> StoreResult<Entry> {
        let mut inner = self.locked();
        let entry = inner.entries.get_mut(&id).ok_or(StoreError::NotFound)?;

        if let Some(name) = patch.name {
            // 改名同步重写 path 末段，维持 path/name 不变量。
            let parent = crate::models::parent_path(&entry.path);
            entry.path = if parent == "/" {
                format!("/{name}")
            } else {
                format!("{parent}/{name}")
            };
            entry.name = name;
        }
        if let EntryBody::File { content, language } = &mut entry.body {
            if let Some(text) = patch.content {
                *content = text;
            }
            if let Some(lang) = patch.language {
                *language = Some(lang);
            }
        }
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    async fn delete_entry(&self, id: i64) -> StoreResult<()> {
        match self.locked().entries.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/memory.rs"]
mod tests;
