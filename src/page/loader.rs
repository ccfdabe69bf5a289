//! Loading page documents from JSON descriptions

use super::arena::Page;
use super::element::{ButtonContent, Display, ElementHandle, ElementKind, Icon, Input};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a page description
#[derive(Error, Debug)]
pub enum PageError {
    #[error("failed to read page file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid page description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("page description contains no elements")]
    Empty,
}

/// Serialized element tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeSpec {
    Button {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        icon: Icon,
        label: String,
    },
    Container {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        display: Display,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    Form {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    Input {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        value: String,
        #[serde(default)]
        readonly: bool,
    },
}

/// Top-level page description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    #[serde(default)]
    pub title: String,
    pub elements: Vec<NodeSpec>,
}

impl Page {
    /// Flatten a description into an arena, preserving document order
    pub fn from_spec(spec: &PageSpec) -> Result<Self, PageError> {
        let mut page = Page::new(&spec.title);
        for node in &spec.elements {
            insert(&mut page, None, node);
        }
        if page.is_empty() {
            return Err(PageError::Empty);
        }
        Ok(page)
    }
}

fn insert(page: &mut Page, parent: Option<ElementHandle>, node: &NodeSpec) {
    match node {
        NodeSpec::Button { id, icon, label } => {
            page.push(
                parent,
                id.as_deref(),
                ElementKind::Button(ButtonContent::new(*icon, label)),
            );
        }
        NodeSpec::Container {
            id,
            display,
            children,
        } => {
            let handle = page.push(parent, id.as_deref(), ElementKind::Container(*display));
            for child in children {
                insert(page, Some(handle), child);
            }
        }
        NodeSpec::Form { id, children } => {
            let handle = page.push(parent, id.as_deref(), ElementKind::Form);
            for child in children {
                insert(page, Some(handle), child);
            }
        }
        NodeSpec::Input {
            id,
            name,
            label,
            value,
            readonly,
        } => {
            page.push(
                parent,
                id.as_deref(),
                ElementKind::Input(Input {
                    name: name.clone(),
                    label: label.clone(),
                    value: value.clone(),
                    readonly: *readonly,
                }),
            );
        }
    }
}

/// Parse a page from its JSON description
pub fn parse_page(content: &str) -> Result<Page, PageError> {
    let spec: PageSpec = serde_json::from_str(content)?;
    Page::from_spec(&spec)
}

/// Read and parse a page description file
pub async fn load_page(path: &Path) -> Result<Page, PageError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let page = parse_page(&content)?;
    tracing::debug!(
        "Loaded page {:?} with {} elements from {}",
        page.title,
        page.len(),
        path.display()
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Document;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "title": "Sample",
        "elements": [
            {"kind": "button", "id": "toggle-details", "icon": "edit", "label": "Open"},
            {"kind": "form", "id": "eval-form", "children": [
                {"kind": "container", "id": "details-container", "display": "grid", "children": [
                    {"kind": "input", "name": "aptitude", "value": "3"}
                ]},
                {"kind": "input", "id": "total_score", "readonly": true}
            ]}
        ]
    }"#;

    #[test]
    fn test_parse_page_builds_tree() {
        let page = parse_page(SAMPLE).unwrap();
        assert_eq!(page.title, "Sample");
        assert_eq!(page.len(), 5);
        assert_eq!(page.roots().len(), 2);

        let form = page.element_by_id("eval-form").unwrap();
        let aptitude = page.query_by_name(form, "aptitude").unwrap();
        assert_eq!(page.value(aptitude), Some("3".to_string()));

        let container = page.element_by_id("details-container").unwrap();
        assert_eq!(page.display(container), Some(Display::Grid));
    }

    #[test]
    fn test_parse_page_defaults() {
        let page = parse_page(
            r#"{"elements": [{"kind": "container", "children": [{"kind": "input"}]}]}"#,
        )
        .unwrap();
        let container = page.roots()[0];
        assert_eq!(page.display(container), Some(Display::Block));
        assert_eq!(page.title, "");
    }

    #[test]
    fn test_parse_page_rejects_empty() {
        let err = parse_page(r#"{"elements": []}"#).unwrap_err();
        assert!(matches!(err, PageError::Empty));
    }

    #[test]
    fn test_parse_page_rejects_unknown_kind() {
        let err = parse_page(r#"{"elements": [{"kind": "marquee"}]}"#).unwrap_err();
        assert!(matches!(err, PageError::Json(_)));
    }

    #[tokio::test]
    async fn test_load_page_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let page = load_page(file.path()).await.unwrap();
        assert!(page.element_by_id("toggle-details").is_some());
    }

    #[tokio::test]
    async fn test_load_page_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_page(&dir.path().join("missing.json")).await.unwrap_err();
        assert!(matches!(err, PageError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
