/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for enabling logging on a bucket
pub use input::{PutBucketLoggingInput, PutBucketLoggingInputBuilder};

use std::sync::Arc;

use crate::binders::{BindBucketLoggingToXmlPayload, Binder};
use crate::error::Error;
use crate::http::HttpRequest;

/// Operation struct for enabling logging on a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct PutBucketLogging;

impl PutBucketLogging {
    /// Prepare a single `PutBucketLogging` request
    #[tracing::instrument(skip_all, level = "debug", name = "put-bucket-logging", fields(
        bucket = input.bucket(),
    ))]
    pub(crate) fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: PutBucketLoggingInput,
    ) -> Result<HttpRequest, Error> {
        let mut request =
            crate::operation::put_bucket_subresource(&handle, input.bucket(), "logging")?;
        BindBucketLoggingToXmlPayload::new().bind_to_request(&mut request, input.bucket_logging())?;
        Ok(request)
    }
}
