use super::{Batch, WorkItem};
use crate::error::BatchError;
use std::{io::ErrorKind, path::PathBuf};

/// An item that passed validation, tagged with its batch name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleItem {
    pub name: String,
    pub item: WorkItem,
}

pub fn is_eligible(item: &WorkItem) -> bool {
    !(item.repo.is_empty() || item.base.is_empty() || item.head.is_empty())
}

/// Replaces each body that names a readable file with the file contents.
///
/// A missing file means the body is literal text. Any other read failure is
/// logged and the body is kept as is.
pub async fn resolve_bodies(batch: &mut Batch) {
    for (name, item) in batch.iter_mut() {
        if let Err(warning) = resolve_body(name, item).await {
            log::warn!("{}. Using raw string as body.", error_chain(&warning));
        }
    }
}

async fn resolve_body(name: &str, item: &mut WorkItem) -> Result<(), BatchError> {
    match tokio::fs::read(&item.body).await {
        Ok(content) => {
            log::debug!("using body file {} for {}", item.body, name);
            item.body = String::from_utf8_lossy(&content).into_owned();
            Ok(())
        }
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(BatchError::BodyUnreadable {
            name: name.to_owned(),
            path: PathBuf::from(&item.body),
            source,
        }),
    }
}

fn error_chain(error: &BatchError) -> String {
    match std::error::Error::source(error) {
        Some(source) => format!("{}: {}", error, source),
        None => error.to_string(),
    }
}

/// Splits the batch into the items to dispatch, logging every skipped one.
///
/// Fails with [`BatchError::NoEligibleItems`] when nothing is left to attempt.
pub fn eligible_items(batch: Batch) -> Result<Vec<EligibleItem>, BatchError> {
    let present = batch.len();

    let eligible: Vec<EligibleItem> = batch
        .into_items()
        .filter_map(|(name, item)| {
            if is_eligible(&item) {
                Some(EligibleItem { name, item })
            } else {
                log::warn!("Invalid repository configuration for {}, skipping", name);
                None
            }
        })
        .collect();

    if eligible.is_empty() && present > 0 {
        return Err(BatchError::NoEligibleItems { present });
    }

    Ok(eligible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempdir::TempDir;

    fn complete(body: &str) -> WorkItem {
        WorkItem {
            repo: "org/repo".to_owned(),
            base: "main".to_owned(),
            head: "feature".to_owned(),
            title: "title".to_owned(),
            body: body.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn should_require_repo_base_and_head() {
        assert!(is_eligible(&complete("body")));

        let mut item = complete("body");
        item.repo.clear();
        assert!(!is_eligible(&item));

        let mut item = complete("body");
        item.base.clear();
        assert!(!is_eligible(&item));

        let mut item = complete("body");
        item.head.clear();
        assert!(!is_eligible(&item));
    }

    #[test]
    fn should_not_require_title_or_body() {
        let mut item = complete("");
        item.title.clear();

        assert!(is_eligible(&item));
    }

    #[test]
    fn should_skip_items_with_empty_base() {
        let mut invalid = complete("body");
        invalid.base.clear();

        let batch: Batch = [
            ("valid".to_owned(), complete("body")),
            ("invalid".to_owned(), invalid),
        ]
        .into_iter()
        .collect();

        let eligible = eligible_items(batch).unwrap();

        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].name, "valid");
    }

    #[test]
    fn should_fail_with_no_eligible_items() {
        let mut invalid = complete("body");
        invalid.head.clear();

        let batch: Batch = [("invalid".to_owned(), invalid)].into_iter().collect();

        let result = eligible_items(batch);

        assert!(matches!(
            result,
            Err(BatchError::NoEligibleItems { present: 1 })
        ));
    }

    #[tokio::test]
    async fn should_read_body_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("body")?;
        let path = dir.path().join("body.md");
        File::create(&path)?.write_all(b"## Summary\nfrom file")?;

        let mut batch: Batch = [(
            "item".to_owned(),
            complete(path.to_str().unwrap()),
        )]
        .into_iter()
        .collect();

        resolve_bodies(&mut batch).await;

        assert_eq!(batch.get("item").unwrap().body, "## Summary\nfrom file");

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_keep_literal_body_when_no_such_file() {
        let mut batch: Batch = [("item".to_owned(), complete("Just a literal body"))]
            .into_iter()
            .collect();

        resolve_bodies(&mut batch).await;

        assert_eq!(batch.get("item").unwrap().body, "Just a literal body");
    }

    #[tokio::test]
    async fn should_keep_body_and_warn_when_path_is_unreadable() -> Result<(), Box<dyn std::error::Error>>
    {
        let dir = TempDir::new("body")?;
        let path = dir.path().to_str().unwrap().to_owned();
        let mut item = complete(&path);

        let result = resolve_body("item", &mut item).await;

        assert!(matches!(result, Err(BatchError::BodyUnreadable { .. })));
        assert_eq!(item.body, path);

        dir.close()?;
        Ok(())
    }
}
