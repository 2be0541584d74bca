use crate::batch::{BatchSource, WorkItem};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

const GLOB_CHARS: [char; 3] = ['*', '?', '['];

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BatchFile {
    #[serde(default)]
    pub repos: BTreeMap<String, WorkItem>,
}

impl BatchFile {
    pub async fn load(path: &Path) -> Result<BatchFile> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read file {}", path.display()))?;

        if content.trim().is_empty() {
            return Ok(BatchFile::default());
        }

        let batch_file = serde_yaml::from_str::<BatchFile>(&content)
            .with_context(|| format!("failed to unmarshal YAML from file {}", path.display()))?;

        Ok(batch_file)
    }
}

/// Reads every batch file in argument order, one source per file.
pub async fn load(paths: &[String]) -> Result<Vec<BatchSource>> {
    let mut sources = vec![];

    for path in expand(paths)? {
        log::debug!("reading batch file {}", path.display());
        let batch_file = BatchFile::load(&path).await?;
        sources.push(batch_file.repos);
    }

    Ok(sources)
}

/// Expands glob patterns. Plain paths are kept so a missing file still
/// fails with a read error.
fn expand(paths: &[String]) -> Result<Vec<PathBuf>> {
    let mut expanded = vec![];

    for path in paths {
        if !path.contains(GLOB_CHARS) {
            expanded.push(PathBuf::from(path));
            continue;
        }

        let matches = glob::glob(path).context("Cannot read glob pattern")?;
        let before = expanded.len();
        for entry in matches {
            let path = entry.context("Cannot get path")?;
            if path.is_file() {
                expanded.push(path);
            }
        }

        if expanded.len() == before {
            log::warn!("no batch files match {}", path);
        }
    }

    Ok(expanded)
}
