/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use ::http::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};

use super::HttpRequest;

/// Media type for XML request bodies.
pub(crate) const TEXT_XML: &str = "text/xml";

/// Attach `body` to `request` along with its `Content-Type` and `Content-Length`.
///
/// Both headers replace any value already present.
pub(crate) fn set_payload(request: &mut HttpRequest, content_type: &'static str, body: String) {
    let headers = request.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
    tracing::trace!(content_type, content_length = body.len(), "attaching request payload");
    request.set_payload(body);
}

#[cfg(test)]
mod tests {
    use super::{set_payload, TEXT_XML};
    use crate::http::HttpRequest;

    #[test]
    fn test_content_length_counts_utf8_bytes() {
        let mut request = HttpRequest::default();
        set_payload(&mut request, TEXT_XML, "<n>Zoë</n>".to_owned());
        assert_eq!(Some("11"), request.first_header_or_null("content-length"));
    }

    #[test]
    fn test_headers_are_replaced() {
        let mut request = HttpRequest::builder()
            .endpoint("https://example.com")
            .header("Content-Type", "application/json")
            .header("Content-Length", "999")
            .build()
            .unwrap();
        set_payload(&mut request, TEXT_XML, "<a/>".to_owned());

        assert_eq!(1, request.headers().get_all("content-type").iter().count());
        assert_eq!(Some("text/xml"), request.first_header_or_null("content-type"));
        assert_eq!(Some("4"), request.first_header_or_null("content-length"));
    }
}
