/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::PutBucketAclInputBuilder;
use crate::domain::s3::AccessControlList;
use crate::error::Error;
use crate::http::HttpRequest;

/// Fluent builder for constructing a request that replaces the access control list of a bucket
#[derive(Debug)]
pub struct PutBucketAclFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: PutBucketAclInputBuilder,
}

impl PutBucketAclFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Build the request, with the access control list bound as its XML body
    pub fn prepare(self) -> Result<HttpRequest, Error> {
        let input = self.inner.build()?;
        crate::operation::put_bucket_acl::PutBucketAcl::orchestrate(self.handle, input)
    }

    /// Set the bucket whose access control list is replaced.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket whose access control list is replaced.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket whose access control list is replaced.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Set the new access control list.
    pub fn access_control_list(mut self, input: AccessControlList) -> Self {
        self.inner = self.inner.access_control_list(input);
        self
    }

    /// Set the new access control list.
    pub fn set_access_control_list(mut self, input: Option<AccessControlList>) -> Self {
        self.inner = self.inner.set_access_control_list(input);
        self
    }

    /// The new access control list.
    pub fn get_access_control_list(&self) -> &Option<AccessControlList> {
        self.inner.get_access_control_list()
    }
}

impl PutBucketAclInputBuilder {
    /// Prepare the request for this input using the given client.
    pub fn prepare_with(self, client: &crate::Client) -> Result<HttpRequest, Error> {
        let mut fluent_builder = client.put_bucket_acl();
        fluent_builder.inner = self;
        fluent_builder.prepare()
    }
}
