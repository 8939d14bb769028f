/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for disabling logging on a bucket
pub use input::{DisableBucketLoggingInput, DisableBucketLoggingInputBuilder};

use std::sync::Arc;

use crate::binders::{BindNoBucketLoggingToXmlPayload, Binder};
use crate::error::Error;
use crate::http::HttpRequest;

/// Operation struct for disabling logging on a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct DisableBucketLogging;

impl DisableBucketLogging {
    /// Prepare a single `DisableBucketLogging` request
    #[tracing::instrument(skip_all, level = "debug", name = "disable-bucket-logging", fields(
        bucket = input.bucket(),
    ))]
    pub(crate) fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DisableBucketLoggingInput,
    ) -> Result<HttpRequest, Error> {
        let mut request =
            crate::operation::put_bucket_subresource(&handle, input.bucket(), "logging")?;
        BindNoBucketLoggingToXmlPayload::new().bind_to_request(&mut request, &input)?;
        Ok(request)
    }
}
