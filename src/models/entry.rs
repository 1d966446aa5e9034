//! 条目与项目数据模型
//!
//! Entry 是文件/目录两变体的和类型：content 只对文件有意义。
//! 线上格式保持扁平（`type` + 可选 `content`/`language` 字段）。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewProject {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("project name must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// 文件携带内容与语言标签，目录不携带任何负载。
#[derive(Debug, Clone, PartialEq)]
pub enum EntryBody {
    File {
        content: String,
        language: Option<String>,
    },
    Directory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireEntry", into = "WireEntry")]
pub struct Entry {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    /// 绝对路径，`/` 分隔，项目内唯一；最后一段等于 `name`。
    pub path: String,
    pub body: EntryBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self.body {
            EntryBody::File { .. } => EntryKind::File,
            EntryBody::Directory => EntryKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.body, EntryBody::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.body, EntryBody::Directory)
    }

    pub fn content(&self) -> Option<&str> {
        match &self.body {
            EntryBody::File { content, .. } => Some(content),
            EntryBody::Directory => None,
        }
    }

    pub fn language(&self) -> Option<&str> {
        match &self.body {
            EntryBody::File { language, .. } => language.as_deref(),
            EntryBody::Directory => None,
        }
    }

    /// 重写文件内容；目录返回 false。
    pub fn set_content(&mut self, text: String) -> bool {
        match &mut self.body {
            EntryBody::File { content, .. } => {
                *content = text;
                true
            }
            EntryBody::Directory => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireEntry {
    id: i64,
    project_id: i64,
    name: String,
    path: String,
    #[serde(default)]
    content: String,
    #[serde(rename = "type")]
    kind: EntryKind,
    #[serde(default)]
    language: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<WireEntry> for Entry {
    fn from(wire: WireEntry) -> Self {
        let body = match wire.kind {
            EntryKind::File => EntryBody::File {
                content: wire.content,
                language: wire.language,
            },
            EntryKind::Directory => EntryBody::Directory,
        };
        Self {
            id: wire.id,
            project_id: wire.project_id,
            name: wire.name,
            path: wire.path,
            body,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        }
    }
}

impl From<Entry> for WireEntry {
    fn from(entry: Entry) -> Self {
        let kind = entry.kind();
        let (content, language) = match entry.body {
            EntryBody::File { content, language } => (content, language),
            EntryBody::Directory => (String::new(), None),
        };
        Self {
            id: entry.id,
            project_id: entry.project_id,
            name: entry.name,
            path: entry.path,
            content,
            kind,
            language,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub project_id: i64,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub language: Option<String>,
}

impl NewEntry {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("file name must not be empty".to_string());
        }
        if !self.path.starts_with('/') {
            return Err("path must be absolute (start with '/')".to_string());
        }
        let last = self.path.rsplit('/').find(|seg| !seg.is_empty());
        if last != Some(self.name.as_str()) {
            return Err(format!(
                "path must end with the entry name: {:?} vs {:?}",
                self.path, self.name
            ));
        }
        Ok(())
    }
}

/// PUT /api/files/{id} 的部分更新负载。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPatch {
    pub name: Option<String>,
    pub content: Option<String>,
    pub language: Option<String>,
}

impl EntryPatch {
    pub fn content(content: String) -> Self {
        Self {
            content: Some(content),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.content.is_none() && self.language.is_none()
    }
}

/// 由扩展名推断语言标签，供创建文件时的默认值。
pub fn language_for_path(path: &str) -> Option<&'static str> {
    let ext = path.rsplit('.').next()?;
    match ext {
        "html" | "htm" => Some("html"),
        "css" => Some("css"),
        "js" | "jsx" => Some("javascript"),
        "ts" | "tsx" => Some("typescript"),
        "json" => Some("json"),
        "md" => Some("markdown"),
        "py" => Some("python"),
        "rs" => Some("rust"),
        _ => None,
    }
}
