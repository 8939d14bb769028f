/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use ::http::Uri;

use super::{ApiMetadata, PROPERTY_S3_VIRTUAL_HOST_BUCKETS};
use crate::types::ApiType;

/// VMware vCloud 1.0
pub fn vcloud() -> ApiMetadata {
    ApiMetadata::builder()
        .id("vcloud")
        .api_type(ApiType::Compute)
        .name("VCloud 1.0 API")
        .identity_name("User at Organization (user@org)")
        .credential_name("Password")
        .documentation(Uri::from_static(
            "http://www.vmware.com/support/pubs/vcd_pubs.html",
        ))
        .version("1.0")
        .build()
}

/// Microsoft Azure Blob Service
pub fn azureblob() -> ApiMetadata {
    ApiMetadata::builder()
        .id("azureblob")
        .api_type(ApiType::Blobstore)
        .name("Microsoft Azure Blob Service API")
        .identity_name("Account Name")
        .credential_name("Access Key")
        .documentation(Uri::from_static(
            "http://msdn.microsoft.com/en-us/library/dd135733.aspx",
        ))
        .version("2009-09-19")
        .build()
}

/// Citrix CloudStack
pub fn cloudstack() -> ApiMetadata {
    ApiMetadata::builder()
        .id("cloudstack")
        .api_type(ApiType::Compute)
        .name("Citrix CloudStack API")
        .identity_name("API Key")
        .credential_name("Secret Key")
        .documentation(Uri::from_static(
            "http://download.cloud.com/releases/2.2.0/api_2.2.12/TOC_User.html",
        ))
        .version("2.2")
        .build()
}

/// OpenStack Nova, Diablo and later
pub fn openstack_nova() -> ApiMetadata {
    ApiMetadata::builder()
        .id("openstack-nova")
        .api_type(ApiType::Compute)
        .name("OpenStack Nova Diablo+ API")
        .identity_name("tenantName:user or userName")
        .credential_name("password")
        .documentation(Uri::from_static("http://api.openstack.org/"))
        .version("1.1")
        .build()
}

/// Amazon Simple Storage Service
pub fn s3() -> ApiMetadata {
    ApiMetadata::builder()
        .id("s3")
        .api_type(ApiType::Blobstore)
        .name("Amazon Simple Storage Service (S3) API")
        .identity_name("Access Key ID")
        .credential_name("Secret Access Key")
        .documentation(Uri::from_static(
            "http://docs.amazonwebservices.com/AmazonS3/latest/API",
        ))
        .version("2006-03-01")
        .default_endpoint("https://s3.amazonaws.com")
        .default_property(PROPERTY_S3_VIRTUAL_HOST_BUCKETS, "true")
        .build()
}

/// Every descriptor above.
pub fn all() -> Vec<ApiMetadata> {
    vec![vcloud(), azureblob(), cloudstack(), openstack_nova(), s3()]
}
