use crate::{bucket, config::StorageConfig, s3_client::create_client};
use anyhow::Result;

pub async fn list_objects(
    bucket_name: &str,
    versioned: bool,
    prefixes: &[String],
    exclude_prefixes: &[String],
    config: &StorageConfig,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!("📄 Listing objects in bucket {}", bucket_name);
        if versioned {
            println!("  Including versions and delete markers");
        }
        for prefix in prefixes {
            println!("  Prefix: {}", prefix);
        }
        for prefix in exclude_prefixes {
            println!("  Exclude prefix: {}", prefix);
        }
    }

    let client = create_client(config, verbose).await?;
    let objects =
        bucket::list_bucket_objects(&client, bucket_name, versioned, exclude_prefixes, prefixes)
            .await?;

    if objects.is_empty() {
        println!("No objects found");
    } else {
        println!("Found {} object(s):", objects.len());
        for (i, object) in objects.iter().enumerate() {
            match &object.version_id {
                Some(version_id) => {
                    println!("{}. {} (version: {})", i + 1, object.key, version_id)
                }
                None => println!("{}. {}", i + 1, object.key),
            }
        }
    }

    Ok(())
}
