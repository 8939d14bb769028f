/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::domain::s3::BucketLogging;

/// Input type for enabling logging on a bucket
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct PutBucketLoggingInput {
    bucket: String,
    bucket_logging: BucketLogging,
}

impl PutBucketLoggingInput {
    /// Creates a new builder-style object to manufacture [`PutBucketLoggingInput`](crate::operation::put_bucket_logging::PutBucketLoggingInput).
    pub fn builder() -> PutBucketLoggingInputBuilder {
        PutBucketLoggingInputBuilder::default()
    }

    /// The bucket whose access is logged.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Where the logs go and who may read them.
    pub fn bucket_logging(&self) -> &BucketLogging {
        &self.bucket_logging
    }
}

/// A builder for [`PutBucketLoggingInput`](crate::operation::put_bucket_logging::PutBucketLoggingInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct PutBucketLoggingInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) bucket_logging: Option<BucketLogging>,
}

impl PutBucketLoggingInputBuilder {
    /// Set the bucket whose access is logged.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket whose access is logged.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket whose access is logged.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set where the logs go and who may read them.
    ///
    /// NOTE: A logging configuration is required.
    pub fn bucket_logging(mut self, input: BucketLogging) -> Self {
        self.bucket_logging = Some(input);
        self
    }

    /// Set where the logs go and who may read them.
    ///
    /// NOTE: A logging configuration is required.
    pub fn set_bucket_logging(mut self, input: Option<BucketLogging>) -> Self {
        self.bucket_logging = input;
        self
    }

    /// Where the logs go and who may read them.
    pub fn get_bucket_logging(&self) -> &Option<BucketLogging> {
        &self.bucket_logging
    }

    /// Consumes the builder and constructs a [`PutBucketLoggingInput`](crate::operation::put_bucket_logging::PutBucketLoggingInput).
    pub fn build(self) -> Result<PutBucketLoggingInput, BuildError> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket is required"))?;
        let bucket_logging = self.bucket_logging.ok_or_else(|| {
            BuildError::missing_field("bucket_logging", "A logging configuration is required")
        })?;
        Ok(PutBucketLoggingInput {
            bucket,
            bucket_logging,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::PutBucketLoggingInput;
    use crate::domain::s3::BucketLogging;

    #[test]
    fn test_bucket_is_required() {
        let err = PutBucketLoggingInput::builder()
            .bucket_logging(BucketLogging::builder().target_bucket("logs").build())
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("bucket"));
    }

    #[test]
    fn test_logging_is_required() {
        let err = PutBucketLoggingInput::builder()
            .bucket("b")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("bucket_logging"));
    }
}
