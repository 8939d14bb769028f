/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use http::Method;
use multicloud_api::domain::s3::{AccessControlList, Grantee, Owner, Permission};
use multicloud_api::error::ErrorKind;
use multicloud_api::operation::put_bucket_logging::PutBucketLoggingInput;
use multicloud_api::{Client, Config};
use pretty_assertions::assert_eq;
use test_common::{init_tracing, path_style_s3_config, sample_bucket_logging, SAMPLE_BUCKET_LOGGING_XML};

#[test]
fn test_put_bucket_logging_virtual_host() {
    init_tracing();
    let client = Client::new(Config::builder().provider("s3").build()).unwrap();
    let request = client
        .put_bucket_logging()
        .bucket("my-bucket")
        .bucket_logging(sample_bucket_logging())
        .prepare()
        .unwrap();

    assert_eq!(&Method::PUT, request.method());
    assert_eq!(
        "https://my-bucket.s3.amazonaws.com/?logging",
        request.endpoint().to_string()
    );
    assert_eq!(Some(SAMPLE_BUCKET_LOGGING_XML), request.payload_as_str());
}

#[test]
fn test_put_bucket_logging_path_style() {
    let client = Client::new(path_style_s3_config("http://localhost:9000/")).unwrap();
    let request = PutBucketLoggingInput::builder()
        .bucket("my-bucket")
        .bucket_logging(sample_bucket_logging())
        .prepare_with(&client)
        .unwrap();

    assert_eq!(
        "http://localhost:9000/my-bucket?logging",
        request.endpoint().to_string()
    );
}

#[test]
fn test_incompatible_bucket_names_fall_back_to_path_style() {
    let client = Client::new(Config::builder().provider("s3").build()).unwrap();
    let request = client
        .disable_bucket_logging()
        .bucket("My_Bucket")
        .prepare()
        .unwrap();
    assert_eq!(
        "https://s3.amazonaws.com/My_Bucket?logging",
        request.endpoint().to_string()
    );
}

#[test]
fn test_disable_bucket_logging() {
    let client = Client::new(path_style_s3_config("http://localhost:9000")).unwrap();
    let request = client
        .disable_bucket_logging()
        .bucket("my-bucket")
        .prepare()
        .unwrap();

    assert_eq!(
        Some("<BucketLoggingStatus xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\"/>"),
        request.payload_as_str()
    );
    assert_eq!(Some("text/xml"), request.first_header_or_null("content-type"));
}

#[test]
fn test_put_bucket_acl() {
    let client = Client::new(path_style_s3_config("http://localhost:9000")).unwrap();
    let acl = AccessControlList::builder()
        .owner(Owner::new("abc123").with_display_name("Alice"))
        .grant(Grantee::canonical_user("abc123"), Permission::FullControl)
        .build();
    let request = client
        .put_bucket_acl()
        .bucket("my-bucket")
        .access_control_list(acl)
        .prepare()
        .unwrap();

    assert_eq!("http://localhost:9000/my-bucket?acl", request.endpoint().to_string());
    assert!(request
        .payload_as_str()
        .unwrap()
        .starts_with("<AccessControlPolicy xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">"));

    let http_request = request.into_http();
    assert_eq!("PUT", http_request.method().as_str());
    assert_eq!(
        Some("text/xml"),
        http_request
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
    );
}

#[test]
fn test_missing_or_empty_bucket() {
    let client = Client::new(path_style_s3_config("http://localhost:9000")).unwrap();

    let err = client
        .put_bucket_logging()
        .bucket_logging(sample_bucket_logging())
        .prepare()
        .unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());

    let err = client.disable_bucket_logging().bucket("").prepare().unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());
}

#[test]
fn test_s3_operations_need_an_s3_provider() {
    let client = Client::new(
        Config::builder()
            .provider("azureblob")
            .endpoint("https://account.blob.core.windows.net")
            .build(),
    )
    .unwrap();
    let err = client
        .disable_bucket_logging()
        .bucket("my-bucket")
        .prepare()
        .unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());
}

#[test]
fn test_unknown_provider() {
    let err = Client::new(Config::builder().provider("nirvanix").build()).unwrap_err();
    assert_eq!(&ErrorKind::NotFound, err.kind());
}

#[test]
fn test_bucket_names_that_would_change_the_target_are_rejected() {
    let client = Client::new(path_style_s3_config("http://localhost:9000")).unwrap();

    for bucket in ["a#b", "a/b", "a?x=1&", "a b", "a%2Fb"] {
        let err = client
            .put_bucket_logging()
            .bucket(bucket)
            .bucket_logging(sample_bucket_logging())
            .prepare()
            .unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind(), "bucket {bucket:?}");

        let err = client
            .put_bucket_acl()
            .bucket(bucket)
            .access_control_list(AccessControlList::builder().build())
            .prepare()
            .unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind(), "bucket {bucket:?}");
    }

    let request = client
        .disable_bucket_logging()
        .bucket("logs.example-1")
        .prepare()
        .unwrap();
    assert_eq!("/logs.example-1", request.endpoint().path());
    assert_eq!(Some("logging"), request.endpoint().query());
}
