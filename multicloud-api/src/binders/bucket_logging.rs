/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use super::xml::XmlBuilder;
use super::{Binder, S3_REST_API_XML_NAMESPACE};
use crate::domain::s3::BucketLogging;
use crate::error::{binding_failed, BoxError, Error};
use crate::http::header::{self, TEXT_XML};
use crate::http::HttpRequest;

/// Binds a [`BucketLogging`] as a `BucketLoggingStatus` document that enables logging.
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct BindBucketLoggingToXmlPayload;

impl BindBucketLoggingToXmlPayload {
    /// Create a new binder.
    pub fn new() -> Self {
        Self
    }

    fn generate(&self, logging: &BucketLogging) -> Result<String, BoxError> {
        let mut xml = XmlBuilder::new();
        xml.start("BucketLoggingStatus", &[("xmlns", S3_REST_API_XML_NAMESPACE)])?;
        xml.start("LoggingEnabled", &[])?;
        xml.text_element("TargetBucket", logging.target_bucket())?;
        xml.text_element("TargetPrefix", logging.target_prefix())?;
        xml.grants("TargetGrants", logging.target_grants())?;
        xml.end("LoggingEnabled")?;
        xml.end("BucketLoggingStatus")?;
        xml.finish()
    }
}

impl Binder<BucketLogging> for BindBucketLoggingToXmlPayload {
    #[tracing::instrument(skip_all, level = "debug", name = "bind-bucket-logging", fields(
        target_bucket = payload.target_bucket(),
        grants = payload.target_grants().len(),
    ))]
    fn bind_to_request(&self, request: &mut HttpRequest, payload: &BucketLogging) -> Result<(), Error> {
        let body = self
            .generate(payload)
            .map_err(binding_failed("bucketLogging", payload))?;
        header::set_payload(request, TEXT_XML, body);
        Ok(())
    }
}

/// The document that turns bucket logging off.
const LOGGING_DISABLED: &str =
    "<BucketLoggingStatus xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\"/>";

/// Binds an empty `BucketLoggingStatus` document, which disables logging on a bucket.
///
/// The payload is ignored, whatever its type.
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct BindNoBucketLoggingToXmlPayload;

impl BindNoBucketLoggingToXmlPayload {
    /// Create a new binder.
    pub fn new() -> Self {
        Self
    }
}

impl<P: ?Sized> Binder<P> for BindNoBucketLoggingToXmlPayload {
    fn bind_to_request(&self, request: &mut HttpRequest, _payload: &P) -> Result<(), Error> {
        tracing::debug!("binding disabled bucket logging status");
        header::set_payload(request, TEXT_XML, LOGGING_DISABLED.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BindBucketLoggingToXmlPayload, BindNoBucketLoggingToXmlPayload, LOGGING_DISABLED};
    use crate::binders::{Binder, S3_REST_API_XML_NAMESPACE};
    use crate::domain::s3::{BucketLogging, Grantee, Permission};
    use crate::error::ErrorKind;
    use crate::http::HttpRequest;
    use aws_smithy_types::error::display::DisplayErrorContext;

    #[test]
    fn test_disabled_document_uses_s3_namespace() {
        assert!(LOGGING_DISABLED.contains(S3_REST_API_XML_NAMESPACE));
    }

    #[test]
    fn test_no_grants_emits_empty_target_grants() {
        let logging = BucketLogging::builder()
            .target_bucket("logs")
            .target_prefix("p/")
            .build();
        let mut request = HttpRequest::default();
        BindBucketLoggingToXmlPayload::new()
            .bind_to_request(&mut request, &logging)
            .unwrap();

        assert_eq!(
            Some(
                "<BucketLoggingStatus xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
                 <LoggingEnabled><TargetBucket>logs</TargetBucket><TargetPrefix>p/</TargetPrefix>\
                 <TargetGrants/></LoggingEnabled></BucketLoggingStatus>"
            ),
            request.payload_as_str()
        );
    }

    #[test]
    fn test_failure_names_the_payload_and_leaves_request_untouched() {
        let logging = BucketLogging::builder()
            .target_bucket("logs")
            .target_prefix("bad\u{1}")
            .grant(Grantee::all_users(), Permission::Read)
            .build();
        let mut request = HttpRequest::default();
        let err = BindBucketLoggingToXmlPayload::new()
            .bind_to_request(&mut request, &logging)
            .unwrap_err();

        assert_eq!(&ErrorKind::BindingFailed, err.kind());
        let rendered = format!("{}", DisplayErrorContext(&err));
        assert!(rendered.contains("error transforming bucketLogging: BucketLogging{targetBucket=logs"));
        assert!(rendered.contains("U+0001"));
        assert_eq!(None, request.payload());
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_disable_binder_ignores_any_payload() {
        let binder = BindNoBucketLoggingToXmlPayload::new();

        let mut from_unit = HttpRequest::default();
        binder.bind_to_request(&mut from_unit, &()).unwrap();

        let mut from_none = HttpRequest::default();
        binder.bind_to_request(&mut from_none, &None::<BucketLogging>).unwrap();

        let mut from_logging = HttpRequest::default();
        let logging = BucketLogging::builder().target_bucket("logs").build();
        binder.bind_to_request(&mut from_logging, &logging).unwrap();

        assert_eq!(from_unit, from_none);
        assert_eq!(from_unit, from_logging);
        assert_eq!(Some(LOGGING_DISABLED), from_unit.payload_as_str());
        assert_eq!(Some("text/xml"), from_unit.first_header_or_null("content-type"));
        assert_eq!(
            Some(LOGGING_DISABLED.len().to_string().as_str()),
            from_unit.first_header_or_null("content-length")
        );
    }
}
