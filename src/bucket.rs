use anyhow::Result;
use aws_sdk_s3::types::BucketVersioningStatus;
use aws_sdk_s3::Client;

use crate::error::AdminError;

/// Page size for object listings. Buckets larger than one page are drained
/// by the re-list loop in [`drain_bucket`].
const LIST_PAGE_SIZE: i32 = 256;

/// Addresses one object, or one object-version in a versioned bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub key: String,
    pub version_id: Option<String>,
}

impl ObjectRef {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            version_id: None,
        }
    }

    pub fn versioned(key: impl Into<String>, version_id: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            version_id: Some(version_id.into()),
        }
    }
}

/// Sorts objects by key length and applies both prefix lists.
///
/// Exclusion runs first: a key matching an exclude prefix is dropped even if
/// it also matches a filter prefix. With an empty filter list everything
/// that survived exclusion is kept.
pub fn filter_objects(
    mut objects: Vec<ObjectRef>,
    exclude_prefixes: &[String],
    filter_prefixes: &[String],
) -> Vec<ObjectRef> {
    objects.sort_by_key(|object| object.key.len());

    if !exclude_prefixes.is_empty() {
        objects.retain(|object| {
            !exclude_prefixes
                .iter()
                .any(|prefix| object.key.starts_with(prefix.as_str()))
        });
    }

    if !filter_prefixes.is_empty() {
        objects.retain(|object| {
            filter_prefixes
                .iter()
                .any(|prefix| object.key.starts_with(prefix.as_str()))
        });
    }

    objects
}

/// Counts non-empty re-lists while draining a bucket. The initial delete
/// pass is free; the limit bounds only the retries after it.
#[derive(Debug)]
pub struct RetryCycles {
    limit: u32,
    used: u32,
}

impl RetryCycles {
    pub fn new(limit: u32) -> Self {
        Self { limit, used: 0 }
    }

    pub fn consume(&mut self) -> Result<(), AdminError> {
        self.used += 1;
        if self.used >= self.limit {
            Err(AdminError::CycleLimitReached { cycles: self.used })
        } else {
            Ok(())
        }
    }
}

/// Resolves whether a bucket is versioned, asking the service only when the
/// caller did not force an answer.
pub async fn resolve_versioning(
    client: &Client,
    bucket: &str,
    forced: Option<bool>,
) -> Result<bool> {
    if let Some(versioned) = forced {
        return Ok(versioned);
    }

    let response = client
        .get_bucket_versioning()
        .bucket(bucket)
        .send()
        .await?;

    Ok(matches!(
        response.status(),
        Some(BucketVersioningStatus::Enabled)
    ))
}

/// Lists up to one page of objects, version-aware, filtered per
/// [`filter_objects`].
///
/// In a versioned bucket every delete marker and every version is returned,
/// each addressable by its version id.
pub async fn list_bucket_objects(
    client: &Client,
    bucket: &str,
    versioned: bool,
    exclude_prefixes: &[String],
    filter_prefixes: &[String],
) -> Result<Vec<ObjectRef>> {
    let mut objects = Vec::new();

    if versioned {
        let response = client
            .list_object_versions()
            .bucket(bucket)
            .max_keys(LIST_PAGE_SIZE)
            .send()
            .await?;

        for marker in response.delete_markers() {
            if let (Some(key), Some(version_id)) = (marker.key(), marker.version_id()) {
                objects.push(ObjectRef::versioned(key, version_id));
            }
        }

        for version in response.versions() {
            if let (Some(key), Some(version_id)) = (version.key(), version.version_id()) {
                objects.push(ObjectRef::versioned(key, version_id));
            }
        }
    } else {
        let response = client
            .list_objects()
            .bucket(bucket)
            .max_keys(LIST_PAGE_SIZE)
            .send()
            .await?;

        for object in response.contents() {
            if let Some(key) = object.key() {
                objects.push(ObjectRef::plain(key));
            }
        }
    }

    Ok(filter_objects(objects, exclude_prefixes, filter_prefixes))
}

/// Deletes one object, attaching the version id when the reference carries
/// one.
pub async fn delete_object(client: &Client, bucket: &str, object: &ObjectRef) -> Result<()> {
    let mut request = client.delete_object().bucket(bucket).key(&object.key);

    if let Some(version_id) = &object.version_id {
        request = request.version_id(version_id);
    }

    request.send().await?;
    Ok(())
}

/// Deletes every listed object, then re-lists with the same filters until
/// the bucket reads empty or the cycle limit is hit.
///
/// The service is eventually consistent: a listing taken right after a batch
/// of deletes can still show objects, and a bucket holding more than one
/// listing page needs several passes anyway. Each non-empty re-list consumes
/// one retry cycle.
pub async fn drain_bucket(
    client: &Client,
    bucket: &str,
    mut objects: Vec<ObjectRef>,
    versioned: bool,
    exclude_prefixes: &[String],
    filter_prefixes: &[String],
    max_cycles: u32,
    verbose: bool,
) -> Result<()> {
    let mut cycles = RetryCycles::new(max_cycles);

    while !objects.is_empty() {
        for object in &objects {
            delete_object(client, bucket, object).await?;
        }

        if verbose {
            println!("  Delete pass finished, checking for remaining objects");
        }

        objects = list_bucket_objects(client, bucket, versioned, exclude_prefixes, filter_prefixes)
            .await?;

        if !objects.is_empty() {
            cycles.consume()?;
            if verbose {
                println!("  {} object(s) still present, retrying", objects.len());
            }
        }
    }

    Ok(())
}

pub async fn delete_bucket(client: &Client, bucket: &str) -> Result<()> {
    client.delete_bucket().bucket(bucket).send().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(objects: &[ObjectRef]) -> Vec<&str> {
        objects.iter().map(|object| object.key.as_str()).collect()
    }

    #[test]
    fn sorts_by_key_length() {
        let objects = vec![
            ObjectRef::plain("deep/nested/file.txt"),
            ObjectRef::plain("a"),
            ObjectRef::plain("mid.log"),
        ];
        let filtered = filter_objects(objects, &[], &[]);
        assert_eq!(keys(&filtered), ["a", "mid.log", "deep/nested/file.txt"]);
    }

    #[test]
    fn exclude_prefix_drops_matches() {
        let objects = vec![
            ObjectRef::plain("logs/2024.txt"),
            ObjectRef::plain("data/a.csv"),
            ObjectRef::plain("logs/2025.txt"),
        ];
        let filtered = filter_objects(objects, &["logs/".to_string()], &[]);
        assert_eq!(keys(&filtered), ["data/a.csv"]);
    }

    #[test]
    fn filter_prefix_keeps_only_matches() {
        let objects = vec![
            ObjectRef::plain("logs/2024.txt"),
            ObjectRef::plain("data/a.csv"),
            ObjectRef::plain("tmp/x"),
        ];
        let filtered = filter_objects(
            objects,
            &[],
            &["logs/".to_string(), "tmp/".to_string()],
        );
        assert_eq!(keys(&filtered), ["tmp/x", "logs/2024.txt"]);
    }

    #[test]
    fn exclusion_wins_over_inclusion() {
        let objects = vec![
            ObjectRef::plain("logs/keep/a.txt"),
            ObjectRef::plain("logs/drop/b.txt"),
        ];
        let filtered = filter_objects(
            objects,
            &["logs/drop/".to_string()],
            &["logs/".to_string()],
        );
        assert_eq!(keys(&filtered), ["logs/keep/a.txt"]);
    }

    #[test]
    fn versioned_refs_carry_their_version() {
        let object = ObjectRef::versioned("file.txt", "v1");
        assert_eq!(object.version_id.as_deref(), Some("v1"));
        assert_eq!(ObjectRef::plain("file.txt").version_id, None);
    }

    #[test]
    fn retry_cycles_fail_at_the_limit() {
        let mut cycles = RetryCycles::new(3);
        assert!(cycles.consume().is_ok());
        assert!(cycles.consume().is_ok());
        let err = cycles.consume().unwrap_err();
        assert!(matches!(err, AdminError::CycleLimitReached { cycles: 3 }));
    }

    #[test]
    fn zero_cycle_limit_fails_on_first_retry() {
        let mut cycles = RetryCycles::new(0);
        assert!(cycles.consume().is_err());
    }
}
