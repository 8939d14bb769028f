/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use multicloud_api::domain::s3::{BucketLogging, Grantee, Permission};
use multicloud_api::Config;

/// An `extracttemplate` job as the CloudStack API returns it.
pub const TEMPLATE_EXTRACTION_JSON: &str = r#"{
    "id": 3,
    "accountid": 2,
    "created": "2012-02-10T14:45:15+0000",
    "extractId": 4,
    "extractMode": "HTTP_DOWNLOAD",
    "name": "CentOS 5.6(64-bit) no GUI (XenServer)",
    "state": "DOWNLOAD_URL_CREATED",
    "status": "Download complete",
    "storagetype": "secondary",
    "uploadpercentage": 100,
    "url": "http://10.223.75.10/userdata/a5f3a2f4.vhd",
    "zoneid": 1,
    "zonename": "San Jose 1"
}"#;

/// Logs for a bucket go to `logs` under `access-`, readable by everyone and fully controlled by
/// `abc123` (Alice).
pub fn sample_bucket_logging() -> BucketLogging {
    BucketLogging::builder()
        .target_bucket("logs")
        .target_prefix("access-")
        .grant(Grantee::all_users(), Permission::Read)
        .grant(
            Grantee::canonical_user_named("abc123", "Alice"),
            Permission::FullControl,
        )
        .build()
}

/// The body [`sample_bucket_logging`] binds to.
pub const SAMPLE_BUCKET_LOGGING_XML: &str = concat!(
    "<BucketLoggingStatus xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">",
    "<LoggingEnabled>",
    "<TargetBucket>logs</TargetBucket>",
    "<TargetPrefix>access-</TargetPrefix>",
    "<TargetGrants>",
    "<Grant>",
    "<Grantee xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xsi:type=\"Group\">",
    "<URI>http://acs.amazonaws.com/groups/global/AllUsers</URI>",
    "</Grantee>",
    "<Permission>READ</Permission>",
    "</Grant>",
    "<Grant>",
    "<Grantee xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xsi:type=\"CanonicalUser\">",
    "<ID>abc123</ID>",
    "<DisplayName>Alice</DisplayName>",
    "</Grantee>",
    "<Permission>FULL_CONTROL</Permission>",
    "</Grant>",
    "</TargetGrants>",
    "</LoggingEnabled>",
    "</BucketLoggingStatus>",
);

/// Config for the built-in `s3` provider with path style bucket addressing at `endpoint`.
pub fn path_style_s3_config(endpoint: &str) -> Config {
    Config::builder()
        .provider("s3")
        .identity("AKIDEXAMPLE")
        .credential("wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY")
        .endpoint(endpoint)
        .property("s3.virtual-host-buckets", "false")
        .build()
}

/// Install a `tracing` subscriber writing to the test output, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
