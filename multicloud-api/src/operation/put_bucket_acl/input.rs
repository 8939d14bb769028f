/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::domain::s3::AccessControlList;

/// Input type for replacing the access control list of a bucket
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PutBucketAclInput {
    bucket: String,
    access_control_list: AccessControlList,
}

impl PutBucketAclInput {
    /// Creates a new builder-style object to manufacture [`PutBucketAclInput`](crate::operation::put_bucket_acl::PutBucketAclInput).
    pub fn builder() -> PutBucketAclInputBuilder {
        PutBucketAclInputBuilder::default()
    }

    /// The bucket whose access control list is replaced.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The new access control list.
    pub fn access_control_list(&self) -> &AccessControlList {
        &self.access_control_list
    }
}

/// A builder for [`PutBucketAclInput`](crate::operation::put_bucket_acl::PutBucketAclInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct PutBucketAclInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) access_control_list: Option<AccessControlList>,
}

impl PutBucketAclInputBuilder {
    /// Set the bucket whose access control list is replaced.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket whose access control list is replaced.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket whose access control list is replaced.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the new access control list.
    ///
    /// NOTE: An access control list is required.
    pub fn access_control_list(mut self, input: AccessControlList) -> Self {
        self.access_control_list = Some(input);
        self
    }

    /// Set the new access control list.
    ///
    /// NOTE: An access control list is required.
    pub fn set_access_control_list(mut self, input: Option<AccessControlList>) -> Self {
        self.access_control_list = input;
        self
    }

    /// The new access control list.
    pub fn get_access_control_list(&self) -> &Option<AccessControlList> {
        &self.access_control_list
    }

    /// Consumes the builder and constructs a [`PutBucketAclInput`](crate::operation::put_bucket_acl::PutBucketAclInput).
    pub fn build(self) -> Result<PutBucketAclInput, BuildError> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket is required"))?;
        let access_control_list = self.access_control_list.ok_or_else(|| {
            BuildError::missing_field(
                "access_control_list",
                "An access control list is required",
            )
        })?;
        Ok(PutBucketAclInput {
            bucket,
            access_control_list,
        })
    }
}
