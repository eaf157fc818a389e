//! Shared configuration fixtures for unit tests.

use std::path::PathBuf;
use std::time::Duration;

use crate::flags::{DEPRECATED, FlagError, FlagRegistrar, FlagSet, RegisterFlags};
use crate::schema::{Describe, Field};

#[derive(Debug, Default)]
pub struct TlsConfig {
    pub cert_path: PathBuf,
}

impl Describe for TlsConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::leaf("cert_path", "cert_path", &self.cert_path)]
    }
}

impl RegisterFlags for TlsConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.cert_path,
            "cert_path",
            "tls.cert-path",
            PathBuf::from("/etc/tls/cert.pem"),
            "Path to the TLS certificate.",
        )
    }
}

#[derive(Debug, Default)]
pub struct ServerConfig {
    pub port: u16,
    pub timeout: Duration,
    pub tls: TlsConfig,
}

impl Describe for ServerConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("port", "port", &self.port),
            Field::leaf("timeout", "timeout,omitempty", &self.timeout),
            Field::nested("tls", "tls", &self.tls),
        ]
    }
}

impl RegisterFlags for ServerConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(&mut self.port, "port", "port", 80, "Listen port.")?;
        f.var(
            &mut self.timeout,
            "timeout",
            "timeout",
            Duration::from_secs(30),
            "Request timeout.",
        )?;
        f.config("tls", &mut self.tls)
    }
}

#[derive(Debug, Default)]
pub struct LimitsConfig {
    pub max_size: usize,
    pub ratios: Vec<f64>,
    pub internal: u32,
    pub untagged: u32,
}

impl Describe for LimitsConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("max_size", "max_size", &self.max_size),
            Field::leaf("ratios", "ratios", &self.ratios),
            Field::leaf("internal", "-", &self.internal),
            Field::leaf("untagged", "", &self.untagged),
        ]
    }
}

impl RegisterFlags for LimitsConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(&mut self.max_size, "max_size", "max-size", 5, "Maximum size.")?;
        f.var(&mut self.internal, "internal", "limits.internal", 1, "Not documented.")
    }
}

#[derive(Debug, Default)]
pub struct EmptyConfig {}

impl Describe for EmptyConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }
}

/// A small configuration exercising every shape the builder handles.
#[derive(Debug, Default)]
pub struct TestConfig {
    pub name1: String,
    pub name2: u32,
    pub skipped: ServerConfig,
    pub server: ServerConfig,
    pub limits: LimitsConfig,
    pub empty: EmptyConfig,
    pub legacy: String,
    pub old_mode: String,
}

impl Describe for TestConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("name1", "name1", &self.name1),
            Field::leaf("name2", "name2,omitempty", &self.name2),
            Field::nested("skipped", "-", &self.skipped),
            Field::nested("server", "server", &self.server),
            Field::nested("limits", "limits", &self.limits),
            Field::nested("empty", "empty", &self.empty),
            Field::leaf("legacy", "legacy", &self.legacy),
            Field::leaf("old_mode", "old_mode", &self.old_mode),
        ]
    }
}

impl RegisterFlags for TestConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.name1,
            "name1",
            "name1",
            "alpha".to_string(),
            "First name.",
        )?;
        f.with_prefix("skipped.", |f| f.config("skipped", &mut self.skipped))?;
        f.with_prefix("server.", |f| f.config("server", &mut self.server))?;
        f.config("limits", &mut self.limits)?;
        f.deprecated(&self.legacy, "legacy", "legacy-flag", "Old flag.")?;
        f.var(
            &mut self.old_mode,
            "old_mode",
            "old-mode",
            DEPRECATED.to_string(),
            "Old mode.",
        )
    }
}

/// Returns the fixture configuration with its populated flag set.
pub fn registered_config() -> (TestConfig, FlagSet) {
    let mut config = TestConfig::default();
    let mut flags = FlagSet::new("test");
    config
        .register_flags(&mut flags.registrar())
        .unwrap();
    (config, flags)
}
