//! Per-component configuration of the sample service.

use std::path::PathBuf;
use std::time::Duration;

use crate::flags::{FlagError, FlagRegistrar, RegisterFlags};
use crate::schema::{Classify, Describe, Field, TypeDescriptor};

use super::storage::CommonStorageConfig;

/// Key-value store backing a hash ring.
#[derive(Debug, Clone, Default)]
pub struct KvConfig {
    pub store: String,
    pub prefix: String,
}

impl Describe for KvConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("store", "store", &self.store),
            Field::leaf("prefix", "prefix", &self.prefix),
        ]
    }
}

impl RegisterFlags for KvConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.store,
            "store",
            "store",
            "consul".to_string(),
            "Backend storage to use for the ring. Supported values are: consul, etcd, inmemory, memberlist.",
        )?;
        f.var(
            &mut self.prefix,
            "prefix",
            "prefix",
            "collectors/".to_string(),
            "The prefix for the keys in the store.",
        )
    }
}

/// Hash ring membership.
#[derive(Debug, Clone, Default)]
pub struct RingConfig {
    pub kvstore: KvConfig,
    pub heartbeat_timeout: Duration,
    pub replication_factor: usize,
}

impl Describe for RingConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::nested("kvstore", "kvstore", &self.kvstore),
            Field::leaf("heartbeat_timeout", "heartbeat_timeout", &self.heartbeat_timeout),
            Field::leaf(
                "replication_factor",
                "replication_factor",
                &self.replication_factor,
            ),
        ]
    }
}

impl RegisterFlags for RingConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.with_prefix("ring.", |f| f.config("kvstore", &mut self.kvstore))?;
        f.var(
            &mut self.heartbeat_timeout,
            "heartbeat_timeout",
            "ring.heartbeat-timeout",
            Duration::from_secs(60),
            "The heartbeat timeout after which instances are assumed to be unhealthy.",
        )?;
        f.var(
            &mut self.replication_factor,
            "replication_factor",
            "replication-factor",
            3,
            "The number of instances to write to.",
        )
    }
}

/// Distributors and their ring.
#[derive(Debug, Clone, Default)]
pub struct DistributorConfig {
    pub ring: RingConfig,
    pub rate_store_max_parallelism: u32,
}

impl Describe for DistributorConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::nested("ring", "ring,omitempty", &self.ring),
            Field::leaf(
                "rate_store_max_parallelism",
                "rate_store_max_parallelism",
                &self.rate_store_max_parallelism,
            ),
        ]
    }
}

impl RegisterFlags for DistributorConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.with_prefix("distributor.", |f| f.config("ring", &mut self.ring))?;
        f.var(
            &mut self.rate_store_max_parallelism,
            "rate_store_max_parallelism",
            "distributor.rate-store.max-request-parallelism",
            200,
            "The max number of concurrent requests to make to ingester stream apis.",
        )
    }
}

/// Query engine tuning.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub timeout: Duration,
    pub max_look_back_period: Duration,
}

impl Describe for EngineConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("timeout", "timeout", &self.timeout),
            Field::leaf("max_look_back_period", "max_look_back_period", &self.max_look_back_period),
        ]
    }
}

impl RegisterFlags for EngineConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.deprecated(
            &self.timeout,
            "timeout",
            "querier.engine.timeout",
            "Use querier.query-timeout instead.",
        )?;
        f.var(
            &mut self.max_look_back_period,
            "max_look_back_period",
            "querier.engine.max-lookback-period",
            Duration::from_secs(30),
            "The maximum amount of time to look back for log lines.",
        )
    }
}

/// Query sharding, promoted into the querier block.
#[derive(Debug, Clone, Default)]
pub struct ShardingConfig {
    pub shard_factor: u32,
    pub split_queries_by_interval: Duration,
}

impl Describe for ShardingConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("shard_factor", "shard_factor", &self.shard_factor),
            Field::leaf(
                "split_queries_by_interval",
                "split_queries_by_interval",
                &self.split_queries_by_interval,
            ),
        ]
    }
}

impl RegisterFlags for ShardingConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.shard_factor,
            "shard_factor",
            "querier.shard-factor",
            16,
            "Number of shards a query is split into.",
        )?;
        f.var(
            &mut self.split_queries_by_interval,
            "split_queries_by_interval",
            "querier.split-queries-by-interval",
            Duration::from_secs(30 * 60),
            "Split queries by a time interval and execute in parallel.",
        )
    }
}

/// Queriers.
#[derive(Debug, Clone, Default)]
pub struct QuerierConfig {
    pub sharding: ShardingConfig,
    pub query_timeout: Duration,
    pub tail_max_duration: Duration,
    pub query_ingesters_within: Duration,
    pub max_concurrent: usize,
    pub engine: EngineConfig,
}

impl Describe for QuerierConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::embedded("sharding", ",inline", &self.sharding),
            Field::leaf("query_timeout", "query_timeout", &self.query_timeout),
            Field::leaf("tail_max_duration", "tail_max_duration", &self.tail_max_duration),
            Field::leaf(
                "query_ingesters_within",
                "query_ingesters_within,omitempty",
                &self.query_ingesters_within,
            ),
            Field::leaf("max_concurrent", "max_concurrent", &self.max_concurrent),
            Field::nested("engine", "engine,omitempty", &self.engine),
        ]
    }
}

impl RegisterFlags for QuerierConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.config("sharding", &mut self.sharding)?;
        f.var(
            &mut self.query_timeout,
            "query_timeout",
            "querier.query-timeout",
            Duration::from_secs(60),
            "Timeout when querying backends (ingesters or storage) during the execution of a query request.",
        )?;
        f.var(
            &mut self.tail_max_duration,
            "tail_max_duration",
            "querier.tail-max-duration",
            Duration::from_secs(3600),
            "Limit the duration for which live tailing request would be served.",
        )?;
        f.var(
            &mut self.query_ingesters_within,
            "query_ingesters_within",
            "querier.query-ingesters-within",
            Duration::from_secs(3 * 3600),
            "Maximum lookback beyond which queries are not sent to ingester.",
        )?;
        f.var(
            &mut self.max_concurrent,
            "max_concurrent",
            "querier.max-concurrent",
            10,
            "The maximum number of concurrent queries.",
        )?;
        f.config("engine", &mut self.engine)
    }
}

/// Write-ahead log of the ingesters.
#[derive(Debug, Clone, Default)]
pub struct WalConfig {
    pub enabled: bool,
    pub dir: PathBuf,
    pub replay_memory_ceiling: u64,
}

impl Describe for WalConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("enabled", "enabled", &self.enabled),
            Field::leaf("dir", "dir", &self.dir),
            Field::leaf(
                "replay_memory_ceiling",
                "replay_memory_ceiling",
                &self.replay_memory_ceiling,
            ),
        ]
    }
}

impl RegisterFlags for WalConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.enabled,
            "enabled",
            "ingester.wal-enabled",
            true,
            "Enable writing of ingested data into WAL.",
        )?;
        f.var(
            &mut self.dir,
            "dir",
            "ingester.wal-dir",
            PathBuf::from("wal"),
            "Directory where the WAL data should be stored and/or recovered from.",
        )?;
        f.var(
            &mut self.replay_memory_ceiling,
            "replay_memory_ceiling",
            "ingester.wal-replay-memory-ceiling",
            4 * 1024 * 1024 * 1024,
            "Memory ceiling (bytes) for WAL replay before flushing.",
        )
    }
}

/// Ingesters and their lifecycle.
#[derive(Debug, Clone, Default)]
pub struct IngesterConfig {
    pub ring: RingConfig,
    pub join_after: Duration,
    pub chunk_idle_period: Duration,
    pub chunk_target_size: usize,
    pub chunk_encoding: String,
    pub max_chunk_age: Duration,
    pub wal: WalConfig,
    pub index_shards: u32,
    pub flush_op_timeout_legacy: Duration,
}

impl Describe for IngesterConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::nested("ring", "lifecycler,omitempty", &self.ring),
            Field::leaf("join_after", "join_after", &self.join_after),
            Field::leaf("chunk_idle_period", "chunk_idle_period", &self.chunk_idle_period),
            Field::leaf("chunk_target_size", "chunk_target_size", &self.chunk_target_size),
            Field::leaf("chunk_encoding", "chunk_encoding", &self.chunk_encoding),
            Field::leaf("max_chunk_age", "max_chunk_age", &self.max_chunk_age),
            Field::nested("wal", "wal,omitempty", &self.wal),
            Field::leaf("index_shards", "index_shards", &self.index_shards),
            Field::leaf("flush_op_timeout_legacy", "-", &self.flush_op_timeout_legacy),
        ]
    }
}

impl RegisterFlags for IngesterConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.with_prefix("ingester.", |f| f.config("ring", &mut self.ring))?;
        f.var(
            &mut self.join_after,
            "join_after",
            "ingester.join-after",
            Duration::ZERO,
            "Period to wait for a claim from another member; will join automatically after this.",
        )?;
        f.var(
            &mut self.chunk_idle_period,
            "chunk_idle_period",
            "ingester.chunks-idle-period",
            Duration::from_secs(30 * 60),
            "How long chunks should sit in-memory with no updates before being flushed.",
        )?;
        f.var(
            &mut self.chunk_target_size,
            "chunk_target_size",
            "ingester.chunk-target-size",
            1_572_864,
            "A target compressed size for chunks (bytes).",
        )?;
        f.var(
            &mut self.chunk_encoding,
            "chunk_encoding",
            "ingester.chunk-encoding",
            "gzip".to_string(),
            "The algorithm to use for compressing chunk.",
        )?;
        f.var(
            &mut self.max_chunk_age,
            "max_chunk_age",
            "ingester.max-chunk-age",
            Duration::from_secs(2 * 3600),
            "Maximum chunk age before flushing.",
        )?;
        f.config("wal", &mut self.wal)?;
        f.var(
            &mut self.index_shards,
            "index_shards",
            "ingester.index-shards",
            32,
            "Shard factor used in the ingesters for the in process reverse index.",
        )?;
        f.var(
            &mut self.flush_op_timeout_legacy,
            "flush_op_timeout_legacy",
            "ingester.flush-op-timeout-legacy",
            Duration::from_secs(10),
            "Superseded flush timeout.",
        )
    }
}

/// One period of the index schema.
#[derive(Debug, Clone, Default)]
pub struct PeriodConfig {
    pub from: String,
    pub store: String,
    pub schema: String,
}

impl Classify for PeriodConfig {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::structure::<Self>()
    }
}

/// Index schema periods.
#[derive(Debug, Clone, Default)]
pub struct SchemaConfig {
    pub configs: Vec<PeriodConfig>,
}

impl Describe for SchemaConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::leaf("configs", "configs", &self.configs)]
    }
}

/// Settings shared between components.
#[derive(Debug, Clone, Default)]
pub struct CommonConfig {
    pub path_prefix: String,
    pub storage: CommonStorageConfig,
    pub replication_factor: usize,
    pub instance_addr: String,
}

impl Describe for CommonConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("path_prefix", "path_prefix", &self.path_prefix),
            Field::nested("storage", "storage", &self.storage),
            Field::leaf("replication_factor", "replication_factor", &self.replication_factor),
            Field::leaf("instance_addr", "instance_addr", &self.instance_addr),
        ]
    }
}

impl RegisterFlags for CommonConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.path_prefix,
            "path_prefix",
            "common.path-prefix",
            String::new(),
            "Directory prefix for all component data.",
        )?;
        f.with_prefix("common.storage.", |f| f.config("storage", &mut self.storage))?;
        f.var(
            &mut self.replication_factor,
            "replication_factor",
            "common.replication-factor",
            3,
            "Default replication factor for components using a ring.",
        )?;
        f.var(
            &mut self.instance_addr,
            "instance_addr",
            "common.instance-addr",
            String::new(),
            "Address advertised to other members of the ring.",
        )
    }
}
