/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::DisableBucketLoggingInputBuilder;
use crate::error::Error;
use crate::http::HttpRequest;

/// Fluent builder for constructing a request that disables logging on a bucket
#[derive(Debug)]
pub struct DisableBucketLoggingFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DisableBucketLoggingInputBuilder,
}

impl DisableBucketLoggingFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Build the request, with an empty logging status bound as its XML body
    pub fn prepare(self) -> Result<HttpRequest, Error> {
        let input = self.inner.build()?;
        crate::operation::disable_bucket_logging::DisableBucketLogging::orchestrate(
            self.handle,
            input,
        )
    }

    /// Set the bucket to stop logging.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket to stop logging.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to stop logging.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }
}

impl DisableBucketLoggingInputBuilder {
    /// Prepare the request for this input using the given client.
    pub fn prepare_with(self, client: &crate::Client) -> Result<HttpRequest, Error> {
        let mut fluent_builder = client.disable_bucket_logging();
        fluent_builder.inner = self;
        fluent_builder.prepare()
    }
}
