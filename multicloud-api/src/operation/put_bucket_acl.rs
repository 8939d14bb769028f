/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for replacing the access control list of a bucket
pub use input::{PutBucketAclInput, PutBucketAclInputBuilder};

use std::sync::Arc;

use crate::binders::{BindAclToXmlPayload, Binder};
use crate::error::Error;
use crate::http::HttpRequest;

/// Operation struct for replacing the access control list of a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct PutBucketAcl;

impl PutBucketAcl {
    /// Prepare a single `PutBucketAcl` request
    #[tracing::instrument(skip_all, level = "debug", name = "put-bucket-acl", fields(
        bucket = input.bucket(),
    ))]
    pub(crate) fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: PutBucketAclInput,
    ) -> Result<HttpRequest, Error> {
        let mut request = crate::operation::put_bucket_subresource(&handle, input.bucket(), "acl")?;
        BindAclToXmlPayload::new().bind_to_request(&mut request, input.access_control_list())?;
        Ok(request)
    }
}
