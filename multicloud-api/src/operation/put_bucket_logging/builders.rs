/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::PutBucketLoggingInputBuilder;
use crate::domain::s3::BucketLogging;
use crate::error::Error;
use crate::http::HttpRequest;

/// Fluent builder for constructing a request that enables logging on a bucket
#[derive(Debug)]
pub struct PutBucketLoggingFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: PutBucketLoggingInputBuilder,
}

impl PutBucketLoggingFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Build the request, with the logging configuration bound as its XML body
    pub fn prepare(self) -> Result<HttpRequest, Error> {
        let input = self.inner.build()?;
        crate::operation::put_bucket_logging::PutBucketLogging::orchestrate(self.handle, input)
    }

    /// Set the bucket whose access is logged.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket whose access is logged.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket whose access is logged.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Set where the logs go and who may read them.
    pub fn bucket_logging(mut self, input: BucketLogging) -> Self {
        self.inner = self.inner.bucket_logging(input);
        self
    }

    /// Set where the logs go and who may read them.
    pub fn set_bucket_logging(mut self, input: Option<BucketLogging>) -> Self {
        self.inner = self.inner.set_bucket_logging(input);
        self
    }

    /// Where the logs go and who may read them.
    pub fn get_bucket_logging(&self) -> &Option<BucketLogging> {
        self.inner.get_bucket_logging()
    }
}

impl PutBucketLoggingInputBuilder {
    /// Prepare the request for this input using the given client.
    pub fn prepare_with(self, client: &crate::Client) -> Result<HttpRequest, Error> {
        let mut fluent_builder = client.put_bucket_logging();
        fluent_builder.inner = self;
        fluent_builder.prepare()
    }
}
