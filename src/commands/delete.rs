use crate::{
    bucket::{self, ObjectRef},
    config::StorageConfig,
    confirm::confirm_operation,
    s3_client::create_client,
};
use anyhow::Result;

pub async fn delete_object(
    bucket_name: &str,
    key: &str,
    version_id: Option<&str>,
    config: &StorageConfig,
    verbose: bool,
    assume_yes: bool,
) -> Result<()> {
    confirm_operation(
        "bucket object deletion",
        &format!(
            "  Bucket: {}\n  Key: {}\n  Version id: {}",
            bucket_name,
            key,
            version_id.unwrap_or("-")
        ),
        assume_yes,
    )?;

    let client = create_client(config, verbose).await?;
    if verbose {
        println!("🗑️ Deleting object: {}", key);
    }

    let object = match version_id {
        Some(version_id) => ObjectRef::versioned(key, version_id),
        None => ObjectRef::plain(key),
    };
    bucket::delete_object(&client, bucket_name, &object).await?;

    if verbose {
        println!("✅ Deleted object: {}", key);
    }

    Ok(())
}
