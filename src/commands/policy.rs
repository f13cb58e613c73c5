use crate::{config::StorageConfig, s3_client::create_client};
use anyhow::Result;

pub async fn show_policy(bucket_name: &str, config: &StorageConfig, verbose: bool) -> Result<()> {
    if verbose {
        println!("📜 Fetching policy for bucket {}", bucket_name);
    }

    let client = create_client(config, verbose).await?;
    let response = client
        .get_bucket_policy()
        .bucket(bucket_name)
        .send()
        .await?;

    match response.policy() {
        Some(policy) => println!("{}", policy),
        None => println!("No policy document returned"),
    }

    Ok(())
}
