//! Object storage client configuration.
//!
//! The client configs are reused under `storage_config` and
//! `common.storage`; each use registers its flags under its own prefix.

use std::path::PathBuf;
use std::time::Duration;

use crate::flags::{FlagError, FlagRegistrar, RegisterFlags};
use crate::schema::{Describe, Field};

/// Retry backoff shared by the storage clients.
#[derive(Debug, Clone, Default)]
pub struct BackoffConfig {
    pub min_period: Duration,
    pub max_period: Duration,
    pub max_retries: u32,
}

impl Describe for BackoffConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("min_period", "min_period", &self.min_period),
            Field::leaf("max_period", "max_period", &self.max_period),
            Field::leaf("max_retries", "max_retries", &self.max_retries),
        ]
    }
}

impl RegisterFlags for BackoffConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.min_period,
            "min_period",
            "backoff-min-period",
            Duration::from_millis(100),
            "Minimum backoff wait time.",
        )?;
        f.var(
            &mut self.max_period,
            "max_period",
            "backoff-max-period",
            Duration::from_secs(3),
            "Maximum backoff wait time.",
        )?;
        f.var(
            &mut self.max_retries,
            "max_retries",
            "backoff-retries",
            5,
            "Maximum number of times to retry when a request fails.",
        )
    }
}

/// Amazon S3 client.
#[derive(Debug, Clone, Default)]
pub struct S3Config {
    pub endpoint: String,
    pub region: String,
    pub bucket_names: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub insecure: bool,
    pub storage_class: Option<String>,
    pub backoff: BackoffConfig,
}

impl Describe for S3Config {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("endpoint", "endpoint", &self.endpoint),
            Field::leaf("region", "region", &self.region),
            Field::leaf("bucket_names", "bucketnames", &self.bucket_names),
            Field::leaf("access_key_id", "access_key_id", &self.access_key_id),
            Field::leaf("secret_access_key", "secret_access_key", &self.secret_access_key),
            Field::leaf("insecure", "insecure", &self.insecure),
            Field::leaf("storage_class", "storage_class,omitempty", &self.storage_class),
            Field::nested("backoff", "backoff_config", &self.backoff),
        ]
    }
}

impl RegisterFlags for S3Config {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.endpoint,
            "endpoint",
            "s3.endpoint",
            String::new(),
            "S3 endpoint URL with escaped Key and Secret encoded.",
        )?;
        f.var(
            &mut self.region,
            "region",
            "s3.region",
            String::new(),
            "AWS region to use.",
        )?;
        f.var(
            &mut self.bucket_names,
            "bucket_names",
            "s3.buckets",
            String::new(),
            "Comma separated list of bucket names to evenly distribute chunks over.",
        )?;
        f.var(
            &mut self.access_key_id,
            "access_key_id",
            "s3.access-key-id",
            String::new(),
            "AWS Access Key ID.",
        )?;
        f.var(
            &mut self.secret_access_key,
            "secret_access_key",
            "s3.secret-access-key",
            String::new(),
            "AWS Secret Access Key.",
        )?;
        f.var(
            &mut self.insecure,
            "insecure",
            "s3.insecure",
            false,
            "Disable https on s3 connection.",
        )?;
        f.with_prefix("s3.", |f| f.config("backoff", &mut self.backoff))
    }
}

/// Google Cloud Storage client.
#[derive(Debug, Clone, Default)]
pub struct GcsConfig {
    pub bucket_name: String,
    pub service_account: String,
    pub chunk_buffer_size: usize,
    pub request_timeout: Duration,
    pub enable_http2: bool,
}

impl Describe for GcsConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("bucket_name", "bucket_name", &self.bucket_name),
            Field::leaf("service_account", "service_account", &self.service_account),
            Field::leaf("chunk_buffer_size", "chunk_buffer_size", &self.chunk_buffer_size),
            Field::leaf("request_timeout", "request_timeout", &self.request_timeout),
            Field::leaf("enable_http2", "enable_http2", &self.enable_http2),
        ]
    }
}

impl RegisterFlags for GcsConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.bucket_name,
            "bucket_name",
            "gcs.bucketname",
            String::new(),
            "Name of GCS bucket.",
        )?;
        f.var(
            &mut self.service_account,
            "service_account",
            "gcs.service-account",
            String::new(),
            "Service account key content in JSON format.",
        )?;
        f.var(
            &mut self.chunk_buffer_size,
            "chunk_buffer_size",
            "gcs.chunk-buffer-size",
            0,
            "The size of the buffer that GCS client for each PUT request. 0 to disable buffering.",
        )?;
        f.var(
            &mut self.request_timeout,
            "request_timeout",
            "gcs.request-timeout",
            Duration::ZERO,
            "The duration after which the requests to GCS should be timed out.",
        )?;
        f.var(
            &mut self.enable_http2,
            "enable_http2",
            "gcs.enable-http2",
            true,
            "Enable HTTP2 connections.",
        )
    }
}

/// Azure Blob Storage client.
#[derive(Debug, Clone, Default)]
pub struct AzureConfig {
    pub environment: String,
    pub container_name: String,
    pub account_name: String,
    pub account_key: String,
    pub max_retries: u32,
}

impl Describe for AzureConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("environment", "environment", &self.environment),
            Field::leaf("container_name", "container_name", &self.container_name),
            Field::leaf("account_name", "account_name", &self.account_name),
            Field::leaf("account_key", "account_key", &self.account_key),
            Field::leaf("max_retries", "max_retries", &self.max_retries),
        ]
    }
}

impl RegisterFlags for AzureConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.environment,
            "environment",
            "azure.environment",
            "AzureGlobal".to_string(),
            "Azure Cloud environment.",
        )?;
        f.var(
            &mut self.container_name,
            "container_name",
            "azure.container-name",
            "loki".to_string(),
            "Name of the blob container used to store chunks.",
        )?;
        f.var(
            &mut self.account_name,
            "account_name",
            "azure.account-name",
            String::new(),
            "The Microsoft Azure account name to be used.",
        )?;
        f.var(
            &mut self.account_key,
            "account_key",
            "azure.account-key",
            String::new(),
            "The Microsoft Azure account key to use.",
        )?;
        f.var(
            &mut self.max_retries,
            "max_retries",
            "azure.max-retries",
            5,
            "Number of retries for a request which times out.",
        )
    }
}

/// OpenStack Swift client.
#[derive(Debug, Clone, Default)]
pub struct SwiftConfig {
    pub auth_url: String,
    pub username: String,
    pub container_name: String,
    pub max_retries: u32,
}

impl Describe for SwiftConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("auth_url", "auth_url", &self.auth_url),
            Field::leaf("username", "username", &self.username),
            Field::leaf("container_name", "container_name", &self.container_name),
            Field::leaf("max_retries", "max_retries", &self.max_retries),
        ]
    }
}

impl RegisterFlags for SwiftConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.auth_url,
            "auth_url",
            "swift.auth-url",
            String::new(),
            "OpenStack Swift authentication URL.",
        )?;
        f.var(
            &mut self.username,
            "username",
            "swift.username",
            String::new(),
            "OpenStack Swift username.",
        )?;
        f.var(
            &mut self.container_name,
            "container_name",
            "swift.container-name",
            "cortex".to_string(),
            "Name of the OpenStack Swift container to put chunks in.",
        )?;
        f.var(
            &mut self.max_retries,
            "max_retries",
            "swift.max-retries",
            3,
            "Max retries on requests error.",
        )
    }
}

/// Local filesystem storage.
#[derive(Debug, Clone, Default)]
pub struct FilesystemConfig {
    pub chunks_directory: PathBuf,
    pub rules_directory: PathBuf,
}

impl Describe for FilesystemConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("chunks_directory", "chunks_directory", &self.chunks_directory),
            Field::leaf("rules_directory", "rules_directory", &self.rules_directory),
        ]
    }
}

impl RegisterFlags for FilesystemConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.chunks_directory,
            "chunks_directory",
            "local.chunk-directory",
            PathBuf::new(),
            "Directory to store chunks in.",
        )?;
        f.var(
            &mut self.rules_directory,
            "rules_directory",
            "local.rules-directory",
            PathBuf::new(),
            "Directory to store rules in.",
        )
    }
}

/// Request hedging against slow storage responses.
#[derive(Debug, Clone, Default)]
pub struct HedgingConfig {
    pub at: Duration,
    pub up_to: u32,
    pub max_per_second: u32,
}

impl Describe for HedgingConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("at", "at", &self.at),
            Field::leaf("up_to", "up_to", &self.up_to),
            Field::leaf("max_per_second", "max_per_second", &self.max_per_second),
        ]
    }
}

impl RegisterFlags for HedgingConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.at,
            "at",
            "hedge-requests-at",
            Duration::ZERO,
            "If set to a non-zero value a second request will be issued at the provided duration.",
        )?;
        f.var(
            &mut self.up_to,
            "up_to",
            "hedge-requests-up-to",
            2,
            "The maximum of hedge requests allowed.",
        )?;
        f.var(
            &mut self.max_per_second,
            "max_per_second",
            "hedge-max-per-second",
            5,
            "The maximum of hedge requests allowed per seconds.",
        )
    }
}

/// Chunk and index storage backends.
#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    pub aws: S3Config,
    pub azure: AzureConfig,
    pub gcs: GcsConfig,
    pub swift: SwiftConfig,
    pub filesystem: FilesystemConfig,
    pub hedging: HedgingConfig,
    pub max_parallel_get_chunk: usize,
}

impl Describe for StorageConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::nested("aws", "aws,omitempty", &self.aws),
            Field::nested("azure", "azure,omitempty", &self.azure),
            Field::nested("gcs", "gcs,omitempty", &self.gcs),
            Field::nested("swift", "swift,omitempty", &self.swift),
            Field::nested("filesystem", "filesystem,omitempty", &self.filesystem),
            Field::nested("hedging", "hedging,omitempty", &self.hedging),
            Field::leaf(
                "max_parallel_get_chunk",
                "max_parallel_get_chunk",
                &self.max_parallel_get_chunk,
            ),
        ]
    }
}

impl RegisterFlags for StorageConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.config("aws", &mut self.aws)?;
        f.config("azure", &mut self.azure)?;
        f.config("gcs", &mut self.gcs)?;
        f.config("swift", &mut self.swift)?;
        f.config("filesystem", &mut self.filesystem)?;
        f.with_prefix("store.", |f| f.config("hedging", &mut self.hedging))?;
        f.var(
            &mut self.max_parallel_get_chunk,
            "max_parallel_get_chunk",
            "store.max-parallel-get-chunk",
            150,
            "Maximum number of parallel chunk reads.",
        )
    }
}

/// Storage shared by all components unless overridden.
#[derive(Debug, Clone, Default)]
pub struct CommonStorageConfig {
    pub s3: S3Config,
    pub gcs: GcsConfig,
    pub filesystem: FilesystemConfig,
}

impl Describe for CommonStorageConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::nested("s3", "s3", &self.s3),
            Field::nested("gcs", "gcs", &self.gcs),
            Field::nested("filesystem", "filesystem", &self.filesystem),
        ]
    }
}

impl RegisterFlags for CommonStorageConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.config("s3", &mut self.s3)?;
        f.config("gcs", &mut self.gcs)?;
        f.config("filesystem", &mut self.filesystem)
    }
}
