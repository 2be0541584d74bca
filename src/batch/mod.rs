pub mod validator;

use crate::error::BatchError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One requested pull request. Every key is optional in a batch file so an
/// incomplete entry reaches the validator instead of failing the parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub head: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<String>,
    #[serde(default)]
    pub draft: bool,
}

/// A single parsed batch file.
pub type BatchSource = BTreeMap<String, WorkItem>;

/// All work items of one run, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    items: BTreeMap<String, WorkItem>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&WorkItem> {
        self.items.get(name)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut WorkItem)> {
        self.items.iter_mut()
    }

    pub fn into_items(self) -> impl Iterator<Item = (String, WorkItem)> {
        self.items.into_iter()
    }
}

impl FromIterator<(String, WorkItem)> for Batch {
    fn from_iter<I: IntoIterator<Item = (String, WorkItem)>>(iter: I) -> Self {
        Batch {
            items: iter.into_iter().collect(),
        }
    }
}

/// Merges sources in order. A name seen again replaces the earlier entry.
pub fn merge<I>(sources: I) -> Result<Batch, BatchError>
where
    I: IntoIterator<Item = BatchSource>,
{
    let mut merged = BTreeMap::new();

    for source in sources {
        for (name, item) in source {
            if merged.insert(name.to_owned(), item).is_some() {
                log::debug!("{} redefined by a later source, keeping the last one", name);
            }
        }
    }

    if merged.is_empty() {
        return Err(BatchError::EmptyBatch);
    }

    Ok(Batch { items: merged })
}
