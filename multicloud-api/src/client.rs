/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::apis::{ApiMetadata, ApiRegistry, PROPERTY_S3_VIRTUAL_HOST_BUCKETS};
use crate::error::{invalid_input, Error};
use crate::types::ApiType;
use crate::Config;

/// Request factory bound to one provider API.
///
/// Operations return a fully bound [`HttpRequest`](crate::http::HttpRequest); signing and
/// sending it is up to the caller.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations: the config and the provider it resolved to
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: Config,
    pub(crate) metadata: ApiMetadata,
}

impl Handle {
    /// The endpoint override from the config, else the provider's default endpoint.
    pub(crate) fn endpoint(&self) -> Result<&str, Error> {
        self.config
            .endpoint()
            .or_else(|| self.metadata.default_endpoint())
            .ok_or_else(|| {
                invalid_input(format!(
                    "no endpoint configured and `{}` has no default endpoint",
                    self.metadata.id()
                ))
            })
    }

    /// A provider property, with config overrides taking precedence over the defaults.
    pub(crate) fn property(&self, key: &str) -> Option<&str> {
        self.config
            .properties()
            .get(key)
            .or_else(|| self.metadata.default_properties().get(key))
            .map(String::as_str)
    }

    /// Fails unless the provider is a blobstore speaking the S3 dialect.
    pub(crate) fn require_s3(&self) -> Result<(), Error> {
        let is_s3 = self.metadata.api_type() == &ApiType::Blobstore
            && self.property(PROPERTY_S3_VIRTUAL_HOST_BUCKETS).is_some();
        if is_s3 {
            Ok(())
        } else {
            Err(invalid_input(format!(
                "`{}` ({}) does not support S3 bucket operations",
                self.metadata.id(),
                self.metadata.api_type()
            )))
        }
    }

    /// Whether buckets are addressed as virtual hosts rather than path segments.
    pub(crate) fn virtual_host_buckets(&self) -> bool {
        self.property(PROPERTY_S3_VIRTUAL_HOST_BUCKETS)
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }
}

impl Client {
    /// Creates a new client, resolving the configured provider against
    /// [`ApiRegistry::builtin`].
    pub fn new(config: Config) -> Result<Client, Error> {
        Self::from_registry(config, ApiRegistry::builtin())
    }

    /// Creates a new client, resolving the configured provider against `registry`.
    pub fn from_registry(config: Config, registry: &ApiRegistry) -> Result<Client, Error> {
        let metadata = registry.lookup(config.provider())?.clone();
        tracing::debug!("client bound to {metadata}");
        let handle = Arc::new(Handle { config, metadata });
        Ok(Client { handle })
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Returns the descriptor of the provider this client talks to
    pub fn api_metadata(&self) -> &ApiMetadata {
        &self.handle.metadata
    }

    /// The endpoint requests are sent to: the configured override, else the provider's
    /// default endpoint.
    pub fn endpoint(&self) -> Result<&str, Error> {
        self.handle.endpoint()
    }

    /// Enable access logging on a bucket.
    ///
    /// Constructs a fluent builder for the
    /// [`PutBucketLogging`](crate::operation::put_bucket_logging::builders::PutBucketLoggingFluentBuilder)
    /// operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use multicloud_api::domain::s3::{BucketLogging, Grantee, Permission};
    ///
    /// fn enable_logging(client: &multicloud_api::Client) -> Result<(), multicloud_api::error::Error> {
    ///     let logging = BucketLogging::builder()
    ///         .target_bucket("my-logs")
    ///         .target_prefix("access-")
    ///         .grant(Grantee::log_delivery(), Permission::Write)
    ///         .build();
    ///
    ///     let request = client
    ///         .put_bucket_logging()
    ///         .bucket("my-bucket")
    ///         .bucket_logging(logging)
    ///         .prepare()?;
    ///
    ///     // sign and send `request.into_http()` with an HTTP client of your choice
    ///     Ok(())
    /// }
    /// ```
    pub fn put_bucket_logging(
        &self,
    ) -> crate::operation::put_bucket_logging::builders::PutBucketLoggingFluentBuilder {
        crate::operation::put_bucket_logging::builders::PutBucketLoggingFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Disable access logging on a bucket.
    ///
    /// Constructs a fluent builder for the
    /// [`DisableBucketLogging`](crate::operation::disable_bucket_logging::builders::DisableBucketLoggingFluentBuilder)
    /// operation.
    pub fn disable_bucket_logging(
        &self,
    ) -> crate::operation::disable_bucket_logging::builders::DisableBucketLoggingFluentBuilder {
        crate::operation::disable_bucket_logging::builders::DisableBucketLoggingFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Replace the access control list of a bucket.
    ///
    /// Constructs a fluent builder for the
    /// [`PutBucketAcl`](crate::operation::put_bucket_acl::builders::PutBucketAclFluentBuilder)
    /// operation.
    pub fn put_bucket_acl(&self) -> crate::operation::put_bucket_acl::builders::PutBucketAclFluentBuilder {
        crate::operation::put_bucket_acl::builders::PutBucketAclFluentBuilder::new(
            self.handle.clone(),
        )
    }
}
