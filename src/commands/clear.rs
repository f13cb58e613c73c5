use crate::{
    bucket, config::StorageConfig, confirm::confirm_operation, s3_client::create_client,
};
use anyhow::Result;

pub async fn clear_bucket(
    bucket_name: &str,
    forced_versioning: Option<bool>,
    prefixes: &[String],
    exclude_prefixes: &[String],
    max_cycles: u32,
    config: &StorageConfig,
    verbose: bool,
    assume_yes: bool,
) -> Result<()> {
    let client = create_client(config, verbose).await?;
    let versioned = bucket::resolve_versioning(&client, bucket_name, forced_versioning).await?;

    let objects =
        bucket::list_bucket_objects(&client, bucket_name, versioned, exclude_prefixes, prefixes)
            .await?;

    confirm_operation(
        &format!("clear of bucket {}", bucket_name),
        &format!(
            "  Versioned: {}\n  Objects inside: {}",
            versioned,
            objects.len()
        ),
        assume_yes,
    )?;

    if verbose {
        println!("🧹 Deleting objects from bucket {}", bucket_name);
    }

    bucket::drain_bucket(
        &client,
        bucket_name,
        objects,
        versioned,
        exclude_prefixes,
        prefixes,
        max_cycles,
        verbose,
    )
    .await?;

    println!("✅ All matching objects deleted from {}", bucket_name);
    Ok(())
}
