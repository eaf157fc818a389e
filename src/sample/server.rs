//! HTTP/gRPC server configuration.

use std::time::Duration;

use crate::flags::{FlagError, FlagRegistrar, RegisterFlags};
use crate::schema::{Describe, Field};

/// Listener and protocol settings of the started modules.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub http_listen_address: String,
    pub http_listen_port: u16,
    pub grpc_listen_port: u16,
    pub graceful_shutdown_timeout: Duration,
    pub http_server_read_timeout: Duration,
    pub grpc_server_max_recv_msg_size: usize,
    pub log_level: String,
    pub register_instrumentation: bool,
}

impl Describe for ServerConfig {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("http_listen_address", "http_listen_address", &self.http_listen_address),
            Field::leaf("http_listen_port", "http_listen_port", &self.http_listen_port),
            Field::leaf("grpc_listen_port", "grpc_listen_port", &self.grpc_listen_port),
            Field::leaf(
                "graceful_shutdown_timeout",
                "graceful_shutdown_timeout",
                &self.graceful_shutdown_timeout,
            ),
            Field::leaf(
                "http_server_read_timeout",
                "http_server_read_timeout",
                &self.http_server_read_timeout,
            ),
            Field::leaf(
                "grpc_server_max_recv_msg_size",
                "grpc_server_max_recv_msg_size",
                &self.grpc_server_max_recv_msg_size,
            ),
            Field::leaf("log_level", "log_level", &self.log_level),
            Field::leaf(
                "register_instrumentation",
                "register_instrumentation",
                &self.register_instrumentation,
            ),
        ]
    }
}

impl RegisterFlags for ServerConfig {
    fn register_flags(&mut self, f: &mut FlagRegistrar<'_>) -> Result<(), FlagError> {
        f.var(
            &mut self.http_listen_address,
            "http_listen_address",
            "server.http-listen-address",
            String::new(),
            "HTTP server listen address.",
        )?;
        f.var(
            &mut self.http_listen_port,
            "http_listen_port",
            "server.http-listen-port",
            80,
            "HTTP server listen port.",
        )?;
        f.var(
            &mut self.grpc_listen_port,
            "grpc_listen_port",
            "server.grpc-listen-port",
            9095,
            "gRPC server listen port.",
        )?;
        f.var(
            &mut self.graceful_shutdown_timeout,
            "graceful_shutdown_timeout",
            "server.graceful-shutdown-timeout",
            Duration::from_secs(30),
            "Timeout for graceful shutdowns.",
        )?;
        f.var(
            &mut self.http_server_read_timeout,
            "http_server_read_timeout",
            "server.http-read-timeout",
            Duration::from_secs(30),
            "Read timeout for HTTP server.",
        )?;
        f.var(
            &mut self.grpc_server_max_recv_msg_size,
            "grpc_server_max_recv_msg_size",
            "server.grpc-max-recv-msg-size-bytes",
            4 * 1024 * 1024,
            "Limit on the size of a gRPC message this server can receive (bytes).",
        )?;
        f.var(
            &mut self.log_level,
            "log_level",
            "log.level",
            "info".to_string(),
            "Only log messages with the given severity or above.",
        )?;
        f.var(
            &mut self.register_instrumentation,
            "register_instrumentation",
            "server.register-instrumentation",
            true,
            "Register the instrumentation handlers (/metrics etc).",
        )
    }
}
