/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use multicloud_api::binders::{BindBucketLoggingToXmlPayload, BindNoBucketLoggingToXmlPayload, Binder};
use multicloud_api::domain::s3::{BucketLogging, Grantee, Permission};
use multicloud_api::http::HttpRequest;
use pretty_assertions::assert_eq;
use test_common::{init_tracing, sample_bucket_logging, SAMPLE_BUCKET_LOGGING_XML};

fn bind(logging: &BucketLogging) -> HttpRequest {
    let mut request = HttpRequest::default();
    BindBucketLoggingToXmlPayload::new()
        .bind_to_request(&mut request, logging)
        .unwrap();
    request
}

#[test]
fn test_bucket_logging_body() {
    init_tracing();
    let request = bind(&sample_bucket_logging());

    assert_eq!(Some(SAMPLE_BUCKET_LOGGING_XML), request.payload_as_str());
    assert_eq!(Some("text/xml"), request.first_header_or_null("Content-Type"));
    assert_eq!(
        Some(SAMPLE_BUCKET_LOGGING_XML.len().to_string().as_str()),
        request.first_header_or_null("Content-Length")
    );
}

#[test]
fn test_grants_keep_insertion_order() {
    let logging = BucketLogging::builder()
        .target_bucket("logs")
        .grant(Grantee::email_address("ops@example.com"), Permission::Write)
        .grant(Grantee::authenticated_users(), Permission::Read)
        .grant(Grantee::canonical_user("abc123"), Permission::FullControl)
        .build();
    let body = bind(&logging).payload_as_str().unwrap().to_owned();

    let email = body.find("<EmailAddress>ops@example.com</EmailAddress>").unwrap();
    let group = body
        .find("<URI>http://acs.amazonaws.com/groups/global/AuthenticatedUsers</URI>")
        .unwrap();
    let user = body.find("<ID>abc123</ID>").unwrap();
    assert!(email < group && group < user);
    assert!(!body.contains("<DisplayName>"));
}

#[test]
fn test_binding_is_deterministic() {
    let logging = sample_bucket_logging();
    assert_eq!(bind(&logging), bind(&logging));
}

#[test]
fn test_binding_replaces_existing_content_headers() {
    let mut request = HttpRequest::builder()
        .endpoint("https://s3.amazonaws.com/bucket?logging")
        .header("Content-Type", "application/json")
        .header("Content-Length", "1")
        .header("x-amz-meta-owner", "alice")
        .build()
        .unwrap();

    BindBucketLoggingToXmlPayload::new()
        .bind_to_request(&mut request, &sample_bucket_logging())
        .unwrap();

    assert_eq!(1, request.headers().get_all("content-type").iter().count());
    assert_eq!(Some("text/xml"), request.first_header_or_null("content-type"));
    assert_eq!(Some("alice"), request.first_header_or_null("x-amz-meta-owner"));
}

#[test]
fn test_disable_after_enable_overwrites_body() {
    let mut request = bind(&sample_bucket_logging());
    BindNoBucketLoggingToXmlPayload::new()
        .bind_to_request(&mut request, &sample_bucket_logging())
        .unwrap();

    let body = request.payload_as_str().unwrap();
    assert_eq!(
        "<BucketLoggingStatus xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\"/>",
        body
    );
    assert_eq!(
        Some(body.len().to_string().as_str()),
        request.first_header_or_null("content-length")
    );
}

#[test]
fn test_special_characters_are_escaped() {
    let logging = BucketLogging::builder()
        .target_bucket("logs")
        .target_prefix("a&b<c>")
        .build();
    let body = bind(&logging).payload_as_str().unwrap().to_owned();
    assert!(body.contains("<TargetPrefix>a&amp;b&lt;c&gt;</TargetPrefix>"));
}

/// Compiles only while every grantee kind is matched without a wildcard arm.
fn grantee_kind(grantee: &Grantee) -> &'static str {
    match grantee {
        Grantee::Group { .. } => "Group",
        Grantee::CanonicalUser { .. } => "CanonicalUser",
        Grantee::EmailAddress { .. } => "AmazonCustomerByEmail",
    }
}

#[test]
fn test_every_grantee_kind_is_tagged_in_the_body() {
    for grantee in [
        Grantee::log_delivery(),
        Grantee::canonical_user("abc123"),
        Grantee::email_address("ops@example.com"),
    ] {
        let logging = BucketLogging::builder()
            .target_bucket("logs")
            .grant(grantee.clone(), Permission::Write)
            .build();
        let body = bind(&logging).payload_as_str().unwrap().to_owned();
        assert!(
            body.contains(&format!("xsi:type=\"{}\"", grantee_kind(&grantee))),
            "{body}"
        );
    }
}
