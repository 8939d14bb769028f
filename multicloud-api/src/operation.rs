/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use ::http::{Method, Uri};

use crate::client::Handle;
use crate::error::{invalid_input, Error};
use crate::http::HttpRequest;

/// Types for the `PutBucketLogging` operation
pub mod put_bucket_logging;

/// Types for the `DisableBucketLogging` operation
pub mod disable_bucket_logging;

/// Types for the `PutBucketAcl` operation
pub mod put_bucket_acl;

/// Start a `PUT` request against the `subresource` of `bucket`, without a body.
pub(crate) fn put_bucket_subresource(
    handle: &Handle,
    bucket: &str,
    subresource: &str,
) -> Result<HttpRequest, Error> {
    handle.require_s3()?;
    if bucket.is_empty() {
        return Err(invalid_input("bucket name must not be empty"));
    }
    if let Some(c) = bucket.chars().find(|c| !is_bucket_char(*c)) {
        return Err(invalid_input(format!(
            "bucket name `{bucket}` contains `{}`, which is not allowed in a bucket name",
            c.escape_default()
        )));
    }

    let endpoint = handle.endpoint()?;
    let uri = if handle.virtual_host_buckets() && is_dns_compatible(bucket) {
        virtual_host_uri(endpoint, bucket, subresource)?
    } else {
        format!("{}/{bucket}?{subresource}", endpoint.trim_end_matches('/'))
    };
    tracing::trace!("PUT {uri}");

    HttpRequest::builder().method(Method::PUT).endpoint(uri).build()
}

fn virtual_host_uri(endpoint: &str, bucket: &str, subresource: &str) -> Result<String, Error> {
    let endpoint: Uri = endpoint.parse()?;
    let authority = endpoint
        .authority()
        .ok_or_else(|| invalid_input(format!("endpoint `{endpoint}` has no host")))?;
    let scheme = endpoint.scheme_str().unwrap_or("https");
    let path = endpoint.path().trim_end_matches('/');
    Ok(format!("{scheme}://{bucket}.{authority}{path}/?{subresource}"))
}

/// Characters S3 accepts in bucket names, including the legacy upper case and `_` forms.
fn is_bucket_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')
}

/// Whether `bucket` can be used as a DNS label in front of the endpoint host.
fn is_dns_compatible(bucket: &str) -> bool {
    let bytes = bucket.as_bytes();
    (3..=63).contains(&bytes.len())
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        && bytes[0].is_ascii_alphanumeric()
        && bytes[bytes.len() - 1].is_ascii_alphanumeric()
}
