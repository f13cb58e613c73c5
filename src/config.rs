use anyhow::{bail, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub endpoint: Option<String>,
}

impl StorageConfig {
    pub fn load_from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        fn get_value(cli_value: &Option<String>, env_var: &str, default: &str) -> String {
            cli_value
                .clone()
                .or_else(|| env::var(env_var).ok())
                .unwrap_or_else(|| default.to_string())
        }

        let region = get_value(&cli.region, "STORAGE_REGION", "us-east-1");
        let access_key = get_value(&cli.access_key, "STORAGE_ACCESS_KEY", "");
        let secret_key = get_value(&cli.secret_key, "STORAGE_SECRET_KEY", "");
        let endpoint = cli
            .endpoint
            .clone()
            .or_else(|| env::var("STORAGE_URL").ok());

        if access_key.is_empty() || secret_key.is_empty() {
            bail!("Access key and secret key must be provided via parameters or environment variables");
        }

        Ok(StorageConfig {
            region,
            access_key,
            secret_key,
            endpoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    // One test owns the STORAGE_* variables so parallel tests never race on them.
    #[test]
    fn config_precedence_and_validation() {
        env::set_var("STORAGE_ACCESS_KEY", "env-access");
        env::set_var("STORAGE_SECRET_KEY", "env-secret");
        env::set_var("STORAGE_REGION", "eu-west-1");
        env::remove_var("STORAGE_URL");

        let cli = Cli::parse_from(["s3-admin", "policy", "some-bucket"]);
        let config = StorageConfig::load_from_cli(&cli).unwrap();
        assert_eq!(config.access_key, "env-access");
        assert_eq!(config.secret_key, "env-secret");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.endpoint, None);

        // CLI flags win over the environment.
        let cli = Cli::parse_from([
            "s3-admin",
            "--access-key",
            "cli-access",
            "--region",
            "ap-south-1",
            "--endpoint",
            "http://localhost:9000",
            "policy",
            "some-bucket",
        ]);
        let config = StorageConfig::load_from_cli(&cli).unwrap();
        assert_eq!(config.access_key, "cli-access");
        assert_eq!(config.secret_key, "env-secret");
        assert_eq!(config.region, "ap-south-1");
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:9000"));

        env::remove_var("STORAGE_ACCESS_KEY");
        env::remove_var("STORAGE_SECRET_KEY");
        let cli = Cli::parse_from(["s3-admin", "policy", "some-bucket"]);
        assert!(StorageConfig::load_from_cli(&cli).is_err());

        env::remove_var("STORAGE_REGION");
    }
}
