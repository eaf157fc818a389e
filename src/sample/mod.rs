//! Bundled sample: the configuration of a log aggregation service.
//!
//! Serves as the configuration provider and block registry provider for
//! the `doctool` binary. The block table is pure data.
//!
//! # Shape
//!
//! - Storage client configs appear both under `storage_config` and under
//!   `common.storage`, so the same block matches in two places.
//! - The querier promotes the fields of an inlined sharding config.
//! - `schema_config.configs` is a list of structs, documented as a leaf.

mod components;
mod server;
mod storage;


pub use components::{
    CommonConfig, DistributorConfig, EngineConfig, IngesterConfig, KvConfig, PeriodConfig,
    QuerierConfig, RingConfig, SchemaConfig, ShardingConfig, WalConfig,
};
pub use server::ServerConfig;
pub use storage::{
    AzureConfig, BackoffConfig, CommonStorageConfig, FilesystemConfig, GcsConfig, HedgingConfig,
    S3Config, StorageConfig, SwiftConfig,
};

use crate::blocks::{Block, BlockError, BlockRegistry};
use crate::flags::{FlagError, FlagRegistrar, RegisterFlags};
use crate::schema::{Describe, Field};

/// Root configuration of the sample service.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub target: String,
    pub auth_enabled: bool,
    pub server: ServerConfig,
    pub distributor: DistributorConfig,
    pub querier: QuerierConfig,
    pub ingester: IngesterConfig,
    pub storage_config: StorageConfig,
    pub schema_config: SchemaConfig,
    pub common: CommonConfig,
    pub ballast_bytes: usize,
    pub use_buffered_logger: bool,
    pub legacy_read_mode: bool,
}

impl Describe for Config {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("target", "target,omitempty", &self.target),
            Field::leaf("auth_enabled", "auth_enabled,omitempty", &self.auth_enabled),
            Field::nested("server", "server,omitempty", &self.server),
            Field::nested("distributor", "distributor,omitempty", &self.distributor),
            Field::nested("querier", "querier,omitempty", &self.querier),
            Field::nested("ingester", "ingester,omitempty", &self.ingester),
            Field::nested("storage_config", "storage_config,omitempty", &self.storage_config),
            Field::nested("schema_config", "schema_config,omitempty", &self.schema_config),
            Field::nested("common", "common,omitempty", &self.common),
            Field::leaf("ballast_bytes", "ballast_bytes", &self.ballast_bytes),
            Field::leaf("use_buffered_logger", "-", &self.use_buffered_logger),
            Field::leaf("legacy_read_mode", "legacy_read_target,omitempty", &self.legacy_read_mode),
        ]
    }
}

impl RegisterFlags for Config {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.target,
            "target",
            "target",
            "all".to_string(),
            "A comma-separated list of components to run.",
        )?;
        f.var(
            &mut self.auth_enabled,
            "auth_enabled",
            "auth.enabled",
            true,
            "Enables authentication through the X-Scope-OrgID header.",
        )?;
        f.config("server", &mut self.server)?;
        f.config("distributor", &mut self.distributor)?;
        f.config("querier", &mut self.querier)?;
        f.config("ingester", &mut self.ingester)?;
        f.config("storage_config", &mut self.storage_config)?;
        f.config("common", &mut self.common)?;
        f.var(
            &mut self.ballast_bytes,
            "ballast_bytes",
            "config.ballast-bytes",
            0,
            "The amount of virtual memory to reserve as a ballast in order to optimise garbage collection.",
        )?;
        f.var(
            &mut self.use_buffered_logger,
            "use_buffered_logger",
            "log.use-buffered",
            true,
            "Uses a line-buffered logger to improve performance.",
        )?;
        f.deprecated(
            &self.legacy_read_mode,
            "legacy_read_mode",
            "legacy-read-mode",
            "Set to false to disable the legacy read mode.",
        )
    }
}

/// Blocks documented as independent units, in priority order.
///
/// # Errors
///
/// Returns an error if two blocks share a type.
pub fn blocks() -> Result<BlockRegistry, BlockError> {
    BlockRegistry::new([
        Block::of::<CommonConfig>(
            "common_config",
            "Common configuration shared between multiple modules.\n\
             If a more specific configuration is given in other sections, the related \
             configuration within this section will be ignored.",
        ),
        Block::of::<ServerConfig>(
            "server_config",
            "Configures the HTTP/gRPC server of the started module(s).",
        ),
        Block::of::<DistributorConfig>(
            "distributor_config",
            "Configures the distributors and how they connect to each other via the ring.",
        ),
        Block::of::<QuerierConfig>(
            "querier_config",
            "Configures the queriers.\nOnly applicable when running target `all` or `querier`.",
        ),
        Block::of::<IngesterConfig>(
            "ingester_config",
            "Configures the ingesters and how they register themselves to the distributor ring.",
        ),
        Block::of::<AzureConfig>(
            "azure_storage_config",
            "Configures the client for Azure Blob Storage as storage.",
        ),
        Block::of::<GcsConfig>("gcs_storage_config", "Configures the client for GCS as storage."),
        Block::of::<S3Config>("s3_storage_config", "Configures the client for Amazon S3 as storage."),
        Block::of::<SwiftConfig>("swift_storage_config", "Configures Swift as storage."),
        Block::of::<FilesystemConfig>(
            "filesystem_storage_config",
            "Configures a (local) file system as storage.",
        ),
        Block::of::<HedgingConfig>(
            "hedging_config",
            "Configures how to hedge requests for the storage.",
        ),
    ])
}
