/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for disabling logging on a bucket
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisableBucketLoggingInput {
    bucket: String,
}

impl DisableBucketLoggingInput {
    /// Creates a new builder-style object to manufacture [`DisableBucketLoggingInput`](crate::operation::disable_bucket_logging::DisableBucketLoggingInput).
    pub fn builder() -> DisableBucketLoggingInputBuilder {
        DisableBucketLoggingInputBuilder::default()
    }

    /// The bucket to stop logging.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

/// A builder for [`DisableBucketLoggingInput`](crate::operation::disable_bucket_logging::DisableBucketLoggingInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct DisableBucketLoggingInputBuilder {
    pub(crate) bucket: Option<String>,
}

impl DisableBucketLoggingInputBuilder {
    /// Set the bucket to stop logging.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket to stop logging.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to stop logging.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Consumes the builder and constructs a [`DisableBucketLoggingInput`](crate::operation::disable_bucket_logging::DisableBucketLoggingInput).
    pub fn build(self) -> Result<DisableBucketLoggingInput, BuildError> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket is required"))?;
        Ok(DisableBucketLoggingInput { bucket })
    }
}
