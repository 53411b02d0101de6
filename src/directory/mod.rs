//! Read-only directory of well-known services.
//!
//! The data set is loaded once at startup, either from the copy embedded in
//! the binary or from a YAML file named in the configuration, validated, and
//! then shared immutably.

pub mod model;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use url::Url;

pub use model::{Category, ServiceRecord};

use crate::error::DirectoryError;

const EMBEDDED_SERVICES: &str = include_str!("../../data/services.yml");

#[derive(Debug, Clone)]
pub struct Directory {
    records: Vec<ServiceRecord>,
}

impl Directory {
    /// Validate and wrap a set of records. Ids must be unique and every url
    /// must be an absolute `http`/`https` URL.
    pub fn new(records: Vec<ServiceRecord>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(DirectoryError::DuplicateId(record.id.clone()));
            }
            let usable = Url::parse(&record.url)
                .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
                .unwrap_or(false);
            if !usable {
                return Err(DirectoryError::InvalidUrl {
                    id: record.id.clone(),
                    url: record.url.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, DirectoryError> {
        let records: Vec<ServiceRecord> = serde_yaml::from_str(yaml)?;
        Self::new(records)
    }

    /// The data set compiled into the binary.
    pub fn embedded() -> Result<Self, DirectoryError> {
        Self::from_yaml(EMBEDDED_SERVICES)
    }

    pub fn from_file(path: &Path) -> Result<Self, DirectoryError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| DirectoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Load from `path` when given, otherwise the embedded data set.
    pub fn load(path: Option<&Path>) -> Result<Self, DirectoryError> {
        let directory = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::embedded()?,
        };
        log::info!(
            "Loaded {} services from {}",
            directory.len(),
            path.map(|p| p.display().to_string())
                .unwrap_or_else(|| "embedded data set".to_string())
        );
        Ok(directory)
    }

    /// All records in declaration order.
    pub fn records(&self) -> &[ServiceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&ServiceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Every category in display order, each with its records sorted by name.
    /// Categories without records are included with an empty list.
    pub fn list_by_category(&self) -> Vec<(Category, Vec<&ServiceRecord>)> {
        let mut grouped: BTreeMap<Category, Vec<&ServiceRecord>> = BTreeMap::new();
        for record in &self.records {
            grouped.entry(record.category).or_default().push(record);
        }

        Category::DISPLAY_ORDER
            .iter()
            .map(|category| {
                let mut records = grouped.remove(category).unwrap_or_default();
                records.sort_by(|a, b| a.name.cmp(&b.name));
                (*category, records)
            })
            .collect()
    }

    /// Number of records per category, in display order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::DISPLAY_ORDER
            .iter()
            .map(|category| {
                let count = self.records.iter().filter(|r| r.category == *category).count();
                (*category, count)
            })
            .collect()
    }

    /// Categories that have at least one record, in display order.
    pub fn categories_in_use(&self) -> Vec<Category> {
        self.category_counts()
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(category, _)| category)
            .collect()
    }

    /// Records whose id, name or aliases contain `query`, in declaration order.
    pub fn search(&self, query: &str) -> Vec<&ServiceRecord> {
        self.records.iter().filter(|r| r.matches(query)).collect()
    }
}
