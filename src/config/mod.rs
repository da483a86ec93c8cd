//! Configuration loading and management

use crate::core::error::{Result, ViewError};
use crate::view::paginate::DEFAULT_PAGE_SIZE;
use crate::view::selection::SelectAllPolicy;
use crate::view::sort::SortKey;
use serde::{Deserialize, Serialize};

/// Configuration of one list screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// View name (e.g., "transactions", "documents")
    pub name: String,

    /// Fixed number of rows per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Initial sort expression (`field`, `field:asc` or `field:desc`)
    #[serde(default)]
    pub default_sort: Option<String>,

    /// What "select all" covers on this screen
    #[serde(default)]
    pub select_all: SelectAllPolicy,

    /// Numeric fields summed over the selection
    #[serde(default)]
    pub totals: Vec<String>,

    /// Fields scanned by the search box; empty uses the record's own list
    #[serde(default)]
    pub search_fields: Vec<String>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl ViewConfig {
    /// A view with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: None,
            select_all: SelectAllPolicy::default(),
            totals: Vec::new(),
            search_fields: Vec::new(),
        }
    }

    /// Parse the configured default sort, if any
    pub fn default_sort_key(&self) -> Result<Option<SortKey>> {
        self.default_sort.as_deref().map(SortKey::parse).transpose()
    }
}

/// Complete configuration of the list screens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewsConfig {
    /// List of view configurations
    #[serde(default)]
    pub views: Vec<ViewConfig>,
}

impl ViewsConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    ///
    /// Default sort expressions are validated while loading.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        for view in &config.views {
            view.default_sort_key()?;
        }
        Ok(config)
    }

    /// Find a view by name
    pub fn find(&self, name: &str) -> Result<&ViewConfig> {
        self.views
            .iter()
            .find(|view| view.name == name)
            .ok_or_else(|| ViewError::UnknownView {
                name: name.to_string(),
            })
    }

    /// Merge several configurations
    ///
    /// A view defined in a later configuration replaces the view of the same
    /// name from an earlier one and keeps the earlier position.
    pub fn merge(configs: Vec<ViewsConfig>) -> Self {
        let mut merged: Vec<ViewConfig> = Vec::new();

        for config in configs {
            for view in config.views {
                match merged.iter_mut().find(|existing| existing.name == view.name) {
                    Some(existing) => *existing = view,
                    None => merged.push(view),
                }
            }
        }

        Self { views: merged }
    }

    /// The standard screens of the accounting front-end
    pub fn default_config() -> Self {
        Self {
            views: vec![
                ViewConfig {
                    page_size: 10,
                    default_sort: Some("date:desc".to_string()),
                    totals: vec!["amount".to_string()],
                    ..ViewConfig::new("transactions")
                },
                ViewConfig {
                    page_size: 15,
                    default_sort: Some("client_name:asc".to_string()),
                    totals: vec!["revenue".to_string(), "pending_documents".to_string()],
                    ..ViewConfig::new("dossiers")
                },
                ViewConfig {
                    page_size: 12,
                    default_sort: Some("uploaded_at:desc".to_string()),
                    select_all: SelectAllPolicy::AllFiltered,
                    totals: vec!["size_bytes".to_string()],
                    ..ViewConfig::new("documents")
                },
                ViewConfig {
                    default_sort: Some("name:asc".to_string()),
                    search_fields: vec![
                        "name".to_string(),
                        "reference".to_string(),
                        "email".to_string(),
                    ],
                    ..ViewConfig::new("clients")
                },
                ViewConfig {
                    default_sort: Some("name:asc".to_string()),
                    totals: vec!["unit_price".to_string()],
                    search_fields: vec![
                        "name".to_string(),
                        "reference".to_string(),
                        "category".to_string(),
                    ],
                    ..ViewConfig::new("products")
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::sort::SortDirection;

    #[test]
    fn test_view_config_defaults_from_yaml() {
        let config = ViewsConfig::from_yaml_str("views:\n  - name: transactions\n").unwrap();
        let view = config.find("transactions").unwrap();
        assert_eq!(view.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(view.select_all, SelectAllPolicy::CurrentPage);
        assert!(view.default_sort_key().unwrap().is_none());
    }

    #[test]
    fn test_default_sort_key() {
        let view = ViewConfig {
            default_sort: Some("date:desc".to_string()),
            ..ViewConfig::new("transactions")
        };
        let key = view.default_sort_key().unwrap().unwrap();
        assert_eq!(key.field, "date");
        assert_eq!(key.direction, SortDirection::Descending);
    }

    #[test]
    fn test_find_unknown_view() {
        let config = ViewsConfig::default_config();
        let err = config.find("payroll").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_VIEW");
    }

    #[test]
    fn test_default_config_sorts_are_valid() {
        let config = ViewsConfig::default_config();
        assert_eq!(config.views.len(), 5);
        for view in &config.views {
            assert!(view.default_sort_key().is_ok(), "{}", view.name);
        }
    }
}
