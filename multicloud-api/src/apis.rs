/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::BTreeMap;
use std::fmt;

use ::http::Uri;

use crate::types::ApiType;

/// Descriptors for the APIs this library knows about
pub mod providers;

/// Lookup of descriptors by id
pub mod registry;

pub use registry::ApiRegistry;

/// Property that marks an API as speaking the S3 dialect. When `true`, buckets are addressed
/// as virtual hosts (`bucket.host`), otherwise as the first path segment.
pub const PROPERTY_S3_VIRTUAL_HOST_BUCKETS: &str = "s3.virtual-host-buckets";

/// Describes one cloud API: what it is called, what kind of service it offers, and what a
/// user has to supply as identity and credential to talk to it.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ApiMetadata {
    id: String,
    api_type: ApiType,
    name: String,
    identity_name: String,
    credential_name: Option<String>,
    documentation: Uri,
    version: Option<String>,
    default_endpoint: Option<String>,
    default_properties: BTreeMap<String, String>,
}

impl ApiMetadata {
    /// Creates a new builder-style object to manufacture [`ApiMetadata`].
    pub fn builder() -> ApiMetadataBuilder {
        ApiMetadataBuilder::default()
    }

    /// A builder seeded with every value of this descriptor, for deriving a variant of it.
    pub fn to_builder(&self) -> ApiMetadataBuilder {
        ApiMetadataBuilder {
            id: self.id.clone(),
            api_type: self.api_type.clone(),
            name: self.name.clone(),
            identity_name: self.identity_name.clone(),
            credential_name: self.credential_name.clone(),
            documentation: self.documentation.clone(),
            version: self.version.clone(),
            default_endpoint: self.default_endpoint.clone(),
            default_properties: self.default_properties.clone(),
        }
    }

    /// Short identifier, unique within a registry (e.g. `vcloud`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The kind of service the API offers.
    pub fn api_type(&self) -> &ApiType {
        &self.api_type
    }

    /// Human readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// What the identity is for this API (e.g. `Account Name`).
    pub fn identity_name(&self) -> &str {
        &self.identity_name
    }

    /// What the credential is for this API (e.g. `Access Key`), if one is needed.
    pub fn credential_name(&self) -> Option<&str> {
        self.credential_name.as_deref()
    }

    /// Where the API is documented.
    pub fn documentation(&self) -> &Uri {
        &self.documentation
    }

    /// Version of the API the descriptor was written against.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Endpoint used when the caller does not supply one.
    pub fn default_endpoint(&self) -> Option<&str> {
        self.default_endpoint.as_deref()
    }

    /// Provider specific settings, e.g. [`PROPERTY_S3_VIRTUAL_HOST_BUCKETS`].
    pub fn default_properties(&self) -> &BTreeMap<String, String> {
        &self.default_properties
    }
}

impl fmt::Display for ApiMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ApiMetadata{{id={}, type={}, name={}, identityName={}, credentialName={}, \
             documentation={}, version={}, defaultEndpoint={}, defaultProperties={{",
            self.id,
            self.api_type,
            self.name,
            self.identity_name,
            self.credential_name.as_deref().unwrap_or("null"),
            self.documentation,
            self.version.as_deref().unwrap_or("null"),
            self.default_endpoint.as_deref().unwrap_or("null"),
        )?;
        for (i, (key, value)) in self.default_properties.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}}")
    }
}

/// A builder for [`ApiMetadata`].
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct ApiMetadataBuilder {
    pub(crate) id: String,
    pub(crate) api_type: ApiType,
    pub(crate) name: String,
    pub(crate) identity_name: String,
    pub(crate) credential_name: Option<String>,
    pub(crate) documentation: Uri,
    pub(crate) version: Option<String>,
    pub(crate) default_endpoint: Option<String>,
    pub(crate) default_properties: BTreeMap<String, String>,
}

impl ApiMetadataBuilder {
    /// Set the short identifier.
    pub fn id(mut self, input: impl Into<String>) -> Self {
        self.id = input.into();
        self
    }

    /// Set the kind of service.
    pub fn api_type(mut self, input: ApiType) -> Self {
        self.api_type = input;
        self
    }

    /// Set the human readable name.
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.name = input.into();
        self
    }

    /// Set what the identity is for this API.
    pub fn identity_name(mut self, input: impl Into<String>) -> Self {
        self.identity_name = input.into();
        self
    }

    /// Set what the credential is for this API.
    pub fn credential_name(mut self, input: impl Into<String>) -> Self {
        self.credential_name = Some(input.into());
        self
    }

    /// Set what the credential is for this API, or that none is needed.
    pub fn set_credential_name(mut self, input: Option<String>) -> Self {
        self.credential_name = input;
        self
    }

    /// Set the documentation link.
    pub fn documentation(mut self, input: Uri) -> Self {
        self.documentation = input;
        self
    }

    /// Set the API version.
    pub fn version(mut self, input: impl Into<String>) -> Self {
        self.version = Some(input.into());
        self
    }

    /// Set the endpoint used when the caller does not supply one.
    pub fn default_endpoint(mut self, input: impl Into<String>) -> Self {
        self.default_endpoint = Some(input.into());
        self
    }

    /// Set the endpoint used when the caller does not supply one.
    pub fn set_default_endpoint(mut self, input: Option<String>) -> Self {
        self.default_endpoint = input;
        self
    }

    /// Add or replace one provider specific setting.
    pub fn default_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_properties.insert(key.into(), value.into());
        self
    }

    /// The short identifier.
    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Consumes the builder and constructs an [`ApiMetadata`].
    pub fn build(self) -> ApiMetadata {
        ApiMetadata {
            id: self.id,
            api_type: self.api_type,
            name: self.name,
            identity_name: self.identity_name,
            credential_name: self.credential_name,
            documentation: self.documentation,
            version: self.version,
            default_endpoint: self.default_endpoint,
            default_properties: self.default_properties,
        }
    }
}
