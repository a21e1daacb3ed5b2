//! # Hunter.io Client
//! Asynchronous wrapper around the Hunter.io v2 REST API, providing typed methods to verify addresses, inspect the account, search domains, find emails, and list leads from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who want Hunter.io lookups inside scripts, backends, or tooling: load a [`Config`], build a [`Client`], and call the endpoint methods. [`EmailCheckService`] pairs the client with a pluggable [`ResultStore`] so that verification results can be persisted and managed by id.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest` with an explicit per-request timeout.
//!
//! ## Out of scope
//! No rate limiting, retries, caching, or batching. Business rules live on the Hunter.io side; this crate forwards parameters and returns what the service answers.
//!
//! ## Errors
//! Transport failures surface as [`Error::Request`] and non-2xx statuses as [`Error::Status`]; both classify as [`ErrorKind::Request`]. Bodies that do not match the expected shape become [`Error::Parse`]. Every runtime error names the operation that failed. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use hunter_client::{Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hunter_client::Error> {
//!     let config = Config::from_env()?;
//!     let client = Client::from_config(&config)?;
//!
//!     let verification = client.verification_email("patrick@stripe.com").await?;
//!     println!("Status: {:?}", verification.status);
//!
//!     let account = client.get_info_about_account().await?;
//!     println!("Plan: {:?}", account.plan_name);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
pub mod demo;
mod error;
mod models;
mod service;
mod store;

pub use client::{Client, ClientBuilder};
pub use config::Config;
pub use error::{Error, ErrorKind};
pub use models::{
    Account, DomainEmail, DomainSearch, DomainSearchQuery, EmailFinderQuery, EmailType,
    EmailVerification, FoundEmail, Lead, LeadList, LeadsQuery, RequestUsage, Seniority, Source,
};
pub use service::EmailCheckService;
pub use store::{CheckRecord, MemoryStore, ResultStore, StoreError};

/// Result type alias for Hunter.io operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
