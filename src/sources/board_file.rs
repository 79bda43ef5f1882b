use super::BoardSource;
use crate::config::BoardConfig;
use crate::errors::{AppError, AppResult};
use crate::models::day_analysis::BossPreparationData;
use log::debug;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid html tag regex"));

/// One mind-map node as exported from the board.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardNode {
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub is_root: bool,
}

/// Board backed by a JSON array of mind-map nodes.
pub struct FileBoard {
    path: PathBuf,
    root_id: String,
    root_label: String,
    thoughts_label: String,
    selection_label: String,
}

/// Strip HTML tags and decode the entities the board editor emits.
pub fn clean_content(html: &str) -> String {
    HTML_TAG
        .replace_all(html, "")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#34;", "\"")
        .replace("&#39;", "'")
        .replace("&#43;", "+")
        .replace("&#61;", "=")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}

impl FileBoard {
    pub fn new(cfg: &BoardConfig) -> Self {
        Self {
            path: crate::utils::path::expand_tilde(&cfg.board_file),
            root_id: cfg.root_id.clone(),
            root_label: cfg.root_label.clone(),
            thoughts_label: cfg.conceptual_thoughts_label.clone(),
            selection_label: cfg.meeting_selection_label.clone(),
        }
    }

    pub fn load_nodes(&self) -> AppResult<Vec<BoardNode>> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| AppError::Board(format!("cannot read {}: {}", self.path.display(), e)))?;
        let mut nodes: Vec<BoardNode> = serde_json::from_str(&content)
            .map_err(|e| AppError::Board(format!("invalid {}: {}", self.path.display(), e)))?;

        for node in nodes.iter_mut() {
            node.content = clean_content(&node.content);
        }

        debug!("Fetched {} mind-map nodes", nodes.len());
        Ok(nodes)
    }

    /// Root by configured id, then by label, then the board's own root.
    fn find_root<'a>(&self, nodes: &'a [BoardNode]) -> AppResult<&'a BoardNode> {
        if let Some(n) = nodes.iter().find(|n| !self.root_id.is_empty() && n.id == self.root_id) {
            return Ok(n);
        }

        debug!("Root node '{}' not found by id, searching by content", self.root_id);
        let label = self.root_label.to_lowercase();
        nodes
            .iter()
            .find(|n| !label.is_empty() && n.content.to_lowercase().contains(&label))
            .or_else(|| nodes.iter().find(|n| n.is_root))
            .ok_or_else(|| AppError::Board(format!("root node '{}' not found", self.root_label)))
    }

    fn children_of<'a>(nodes: &'a [BoardNode], parent: &str) -> Vec<&'a BoardNode> {
        nodes
            .iter()
            .filter(|n| n.parent_id.as_deref() == Some(parent))
            .collect()
    }

    fn labelled_children(nodes: &[BoardNode], label: &str) -> Vec<String> {
        if label.is_empty() {
            return Vec::new();
        }
        nodes
            .iter()
            .filter(|n| n.content == label)
            .flat_map(|n| Self::children_of(nodes, &n.id))
            .filter(|c| !c.content.is_empty())
            .map(|c| c.content.clone())
            .collect()
    }
}

impl BoardSource for FileBoard {
    fn fetch_focus_areas(&self) -> AppResult<Vec<String>> {
        let nodes = self.load_nodes()?;
        let root = self.find_root(&nodes)?;

        let areas: Vec<String> = Self::children_of(&nodes, &root.id)
            .into_iter()
            .filter(|n| !n.content.is_empty())
            .map(|n| n.content.clone())
            .collect();

        debug!("Found {} first-level focus areas", areas.len());
        Ok(areas)
    }

    fn fetch_preparation_notes(&self) -> AppResult<Option<BossPreparationData>> {
        let nodes = self.load_nodes()?;

        let has_label =
            |label: &str| !label.is_empty() && nodes.iter().any(|n| n.content == label);
        let has_thoughts = has_label(&self.thoughts_label);
        let has_selection = has_label(&self.selection_label);
        if !has_thoughts && !has_selection {
            return Ok(None);
        }

        Ok(Some(BossPreparationData {
            conceptual_thoughts: Self::labelled_children(&nodes, &self.thoughts_label),
            meeting_selection: Self::labelled_children(&nodes, &self.selection_label),
        }))
    }
}
