//! # unkey-client
//!
//! Async client for the [Unkey](https://unkey.com) v2 REST API, limited to
//! the operations needed to manage APIs, keys, permissions, roles and
//! identities.
//!
//! ```rust,no_run
//! use secrecy::SecretString;
//! use unkey_client::{ClientConfig, UnkeyApi, UnkeyClient, models::GetApiRequest};
//!
//! # async fn run() -> unkey_client::Result<()> {
//! let config = ClientConfig::new(SecretString::from("unkey_root".to_string()));
//! let client = UnkeyClient::new(&config)?;
//! let api = client
//!     .get_api(GetApiRequest {
//!         api_id: "api_123".into(),
//!     })
//!     .await?;
//! println!("{}", api.name);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use api::{SharedClient, UnkeyApi};
pub use client::UnkeyClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
