use crate::{
    bucket, config::StorageConfig, confirm::confirm_operation, s3_client::create_client,
};
use anyhow::Result;

pub async fn delete_bucket(
    bucket_name: &str,
    forced_versioning: Option<bool>,
    max_cycles: u32,
    config: &StorageConfig,
    verbose: bool,
    assume_yes: bool,
) -> Result<()> {
    let client = create_client(config, verbose).await?;
    let versioned = bucket::resolve_versioning(&client, bucket_name, forced_versioning).await?;

    let objects = bucket::list_bucket_objects(&client, bucket_name, versioned, &[], &[]).await?;

    // One gate covers both the clear and the bucket delete.
    confirm_operation(
        &format!("deletion of bucket {}", bucket_name),
        &format!(
            "  Versioned: {}\n  Objects inside: {}",
            versioned,
            objects.len()
        ),
        assume_yes,
    )?;

    bucket::drain_bucket(
        &client,
        bucket_name,
        objects,
        versioned,
        &[],
        &[],
        max_cycles,
        verbose,
    )
    .await?;

    if verbose {
        println!("🗑️ Deleting bucket {}", bucket_name);
    }
    bucket::delete_bucket(&client, bucket_name).await?;

    println!("✅ Bucket {} deleted", bucket_name);
    Ok(())
}
