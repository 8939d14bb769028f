/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */

//! Multi-provider cloud API client
//!
//! Typed records for provider responses (e.g. CloudStack template extractions), binders that
//! serialize S3 request payloads into XML bodies, and descriptors for every provider API the
//! library knows about.
//!
//! # Examples
//!
//! ```no_run
//! use multicloud_api::domain::s3::{BucketLogging, Grantee, Permission};
//!
//! fn enable_logging() -> Result<(), multicloud_api::error::Error> {
//!     let client = multicloud_api::Client::new(multicloud_api::from_env().load())?;
//!     let request = client
//!         .put_bucket_logging()
//!         .bucket("my-bucket")
//!         .bucket_logging(
//!             BucketLogging::builder()
//!                 .target_bucket("my-logs")
//!                 .grant(Grantee::log_delivery(), Permission::Write)
//!                 .build(),
//!         )
//!         .prepare()?;
//!     println!("{} {}", request.method(), request.endpoint());
//!     Ok(())
//! }
//! ```

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

/// Error types emitted by `multicloud-api`
pub mod error;

/// Common types used by `multicloud-api`
pub mod types;

/// Records returned by provider APIs
pub mod domain;

/// In-memory HTTP requests
pub mod http;

/// Serialize payloads into request bodies
pub mod binders;

/// Provider API descriptors and their registry
pub mod apis;

/// Client for building provider requests
pub mod client;

/// Client operations
pub mod operation;

/// Configuration for a [`Client`]
pub mod config;

mod interop;

pub use self::client::Client;
pub use self::config::Config;
use self::config::loader::ConfigLoader;

/// Create a config loader that reads the `MULTICLOUD_*` environment variables
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
