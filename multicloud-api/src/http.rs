/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use ::http::header::{HeaderMap, HeaderName, HeaderValue};
use ::http::{Method, Uri};
use aws_smithy_types::body::SdkBody;
use bytes::Bytes;

use crate::error::{invalid_input, Error};

pub(crate) mod header;

/// An outgoing HTTP request assembled in memory.
///
/// Binders write a body and its content headers into it; sending it is left to whatever
/// transport the caller uses (see [`HttpRequest::into_http`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    method: Method,
    endpoint: Uri,
    headers: HeaderMap,
    payload: Option<Bytes>,
}

impl HttpRequest {
    /// Creates a new builder-style object to manufacture [`HttpRequest`].
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::default()
    }

    /// The request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request URI.
    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    /// All request headers. A header name may carry several values.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable access to the request headers.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// The first value of the header `name`, if present and valid UTF-8.
    pub fn first_header_or_null(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// The request body, if one has been attached.
    pub fn payload(&self) -> Option<&Bytes> {
        self.payload.as_ref()
    }

    /// The request body as text, if one has been attached and it is valid UTF-8.
    pub fn payload_as_str(&self) -> Option<&str> {
        self.payload
            .as_ref()
            .and_then(|payload| std::str::from_utf8(payload).ok())
    }

    /// Attach a body, replacing any previous one.
    pub fn set_payload(&mut self, payload: impl Into<Bytes>) {
        self.payload = Some(payload.into());
    }

    /// Convert into an [`http::Request`] carrying an [`SdkBody`], ready for a smithy HTTP client.
    pub fn into_http(self) -> ::http::Request<SdkBody> {
        let body = self.payload.map(SdkBody::from).unwrap_or_else(SdkBody::empty);
        let mut request = ::http::Request::new(body);
        *request.method_mut() = self.method;
        *request.uri_mut() = self.endpoint;
        *request.headers_mut() = self.headers;
        request
    }
}

/// A builder for [`HttpRequest`].
#[derive(Debug, Clone, Default)]
pub struct HttpRequestBuilder {
    method: Option<Method>,
    endpoint: Option<String>,
    headers: Vec<(String, String)>,
    payload: Option<Bytes>,
}

impl HttpRequestBuilder {
    /// Set the request method. Defaults to `GET`.
    pub fn method(mut self, input: Method) -> Self {
        self.method = Some(input);
        self
    }

    /// Set the request URI.
    ///
    /// NOTE: An endpoint is required.
    pub fn endpoint(mut self, input: impl Into<String>) -> Self {
        self.endpoint = Some(input.into());
        self
    }

    /// Append a header value. Repeating a name keeps every value.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request body.
    pub fn payload(mut self, input: impl Into<Bytes>) -> Self {
        self.payload = Some(input.into());
        self
    }

    /// Consumes the builder and constructs an [`HttpRequest`].
    pub fn build(self) -> Result<HttpRequest, Error> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| invalid_input("an endpoint is required"))?;
        let endpoint: Uri = endpoint.parse()?;

        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in self.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(invalid_input)?;
            let value = HeaderValue::from_str(&value).map_err(invalid_input)?;
            headers.append(name, value);
        }

        Ok(HttpRequest {
            method: self.method.unwrap_or(Method::GET),
            endpoint,
            headers,
            payload: self.payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::HttpRequest;
    use crate::error::ErrorKind;
    use ::http::Method;

    #[test]
    fn test_repeated_headers_are_kept() {
        let request = HttpRequest::builder()
            .endpoint("https://s3.amazonaws.com/bucket")
            .header("x-amz-meta-tag", "a")
            .header("x-amz-meta-tag", "b")
            .build()
            .unwrap();

        let values: Vec<_> = request
            .headers()
            .get_all("x-amz-meta-tag")
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(vec!["a", "b"], values);
        assert_eq!(Some("a"), request.first_header_or_null("x-amz-meta-tag"));
        assert_eq!(&Method::GET, request.method());
    }

    #[test]
    fn test_missing_endpoint_error() {
        let err = HttpRequest::builder().build().unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }

    #[test]
    fn test_invalid_header_error() {
        let err = HttpRequest::builder()
            .endpoint("https://example.com")
            .header("bad header", "value")
            .build()
            .unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }

    #[test]
    fn test_into_http_carries_everything() {
        let request = HttpRequest::builder()
            .method(Method::PUT)
            .endpoint("https://s3.amazonaws.com/bucket?logging")
            .header("content-type", "text/xml")
            .payload("<a/>")
            .build()
            .unwrap();

        let http_request = request.into_http();
        assert_eq!(&Method::PUT, http_request.method());
        assert_eq!("/bucket", http_request.uri().path());
        assert_eq!(Some("logging"), http_request.uri().query());
        assert_eq!("text/xml", http_request.headers()["content-type"]);
        assert_eq!(Some(&b"<a/>"[..]), http_request.body().bytes());
    }
}
