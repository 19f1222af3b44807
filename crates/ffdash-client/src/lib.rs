//! Remote service client for the transcoder dashboard.
//!
//! The remote service is the source of truth for servers, configurations and
//! their statuses. This crate exposes it through the [`DashboardApi`] trait so
//! the synchronization layer can be driven by the real HTTP implementation
//! ([`HttpClient`]) or by an in-memory double in tests.
//!
//! # Example
//!
//! ```no_run
//! use ffdash_client::{ClientConfig, DashboardApi, HttpClient};
//!
//! async fn list() -> ffdash_client::Result<()> {
//!     let client = HttpClient::new(&ClientConfig::default())?;
//!     for server in client.list_servers().await? {
//!         println!("{} {}", server.uid, server.name);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::DashboardApi;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use http::HttpClient;
