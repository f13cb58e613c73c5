use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "s3-admin")]
#[command(about = "Administer objects and buckets in S3-compatible storage")]
#[command(version = "1.0")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip confirmation prompts for destructive operations
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Storage region (overrides env STORAGE_REGION)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Storage access key (overrides env STORAGE_ACCESS_KEY)
    #[arg(long, global = true)]
    pub access_key: Option<String>,

    /// Storage secret key (overrides env STORAGE_SECRET_KEY)
    #[arg(long, global = true)]
    pub secret_key: Option<String>,

    /// Storage endpoint URL (overrides env STORAGE_URL)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List objects in a bucket
    List {
        bucket: String,

        /// List object versions and delete markers instead of current objects
        #[arg(long)]
        versioned: bool,

        /// Keep only objects whose key starts with one of these prefixes
        #[arg(long = "prefix")]
        prefixes: Vec<String>,

        /// Drop objects whose key starts with one of these prefixes
        #[arg(long = "exclude-prefix")]
        exclude_prefixes: Vec<String>,
    },

    /// Delete a single object or object version
    Delete {
        bucket: String,
        key: String,

        /// Delete this specific version instead of the current object
        #[arg(long)]
        version_id: Option<String>,
    },

    /// Delete all matching objects in a bucket
    Clear {
        bucket: String,

        /// Treat the bucket as versioned without asking the service
        #[arg(long, conflicts_with = "unversioned")]
        versioned: bool,

        /// Treat the bucket as unversioned without asking the service
        #[arg(long)]
        unversioned: bool,

        /// Delete only objects whose key starts with one of these prefixes
        #[arg(long = "prefix")]
        prefixes: Vec<String>,

        /// Retain objects whose key starts with one of these prefixes
        #[arg(long = "exclude-prefix")]
        exclude_prefixes: Vec<String>,

        /// Give up after this many non-empty re-list cycles
        #[arg(long, default_value_t = 5)]
        max_cycles: u32,
    },

    /// Delete a bucket together with everything inside it
    DeleteBucket {
        bucket: String,

        /// Treat the bucket as versioned without asking the service
        #[arg(long, conflicts_with = "unversioned")]
        versioned: bool,

        /// Treat the bucket as unversioned without asking the service
        #[arg(long)]
        unversioned: bool,

        /// Give up after this many non-empty re-list cycles
        #[arg(long, default_value_t = 5)]
        max_cycles: u32,
    },

    /// Print the bucket policy document
    Policy { bucket: String },
}

/// Collapses the `--versioned`/`--unversioned` flag pair into an override.
/// `None` means the service is asked via GetBucketVersioning.
pub fn forced_versioning(versioned: bool, unversioned: bool) -> Option<bool> {
    if versioned {
        Some(true)
    } else if unversioned {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn forced_versioning_maps_flags() {
        assert_eq!(forced_versioning(true, false), Some(true));
        assert_eq!(forced_versioning(false, true), Some(false));
        assert_eq!(forced_versioning(false, false), None);
    }

    #[test]
    fn versioned_and_unversioned_conflict() {
        let parsed = Cli::try_parse_from([
            "s3-admin",
            "clear",
            "my-bucket",
            "--versioned",
            "--unversioned",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn clear_accepts_repeated_prefixes() {
        let cli = Cli::parse_from([
            "s3-admin",
            "clear",
            "my-bucket",
            "--prefix",
            "logs/",
            "--prefix",
            "tmp/",
            "--exclude-prefix",
            "logs/keep/",
        ]);
        match cli.command {
            Commands::Clear {
                prefixes,
                exclude_prefixes,
                max_cycles,
                ..
            } => {
                assert_eq!(prefixes, ["logs/", "tmp/"]);
                assert_eq!(exclude_prefixes, ["logs/keep/"]);
                assert_eq!(max_cycles, 5);
            }
            _ => panic!("expected clear subcommand"),
        }
    }
}
