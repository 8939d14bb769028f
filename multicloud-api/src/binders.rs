/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::Error;
use crate::http::HttpRequest;

mod acl;
mod bucket_logging;
mod xml;

pub use acl::BindAclToXmlPayload;
pub use bucket_logging::{BindBucketLoggingToXmlPayload, BindNoBucketLoggingToXmlPayload};

/// Namespace of the S3 REST API documents.
pub const S3_REST_API_XML_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

/// Serializes a typed payload into the body of an outgoing request.
///
/// Implementations are stateless: binding the same payload twice yields byte-identical bodies
/// and headers. Besides the body, a binder sets the `Content-Type` and `Content-Length`
/// headers, replacing any value already on the request.
pub trait Binder<P: ?Sized> {
    /// Write `payload` into `request`.
    ///
    /// On failure the request is left untouched.
    fn bind_to_request(&self, request: &mut HttpRequest, payload: &P) -> Result<(), Error>;
}
