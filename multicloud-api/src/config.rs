/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::BTreeMap;
use std::fmt;

/// Load a [`Config`] from the environment
pub mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    provider: String,
    identity: Option<String>,
    credential: Option<String>,
    endpoint: Option<String>,
    properties: BTreeMap<String, String>,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Id of the provider API the client talks to (e.g. `s3`)
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// The identity to authenticate as, in the form the provider's
    /// [`identity_name`](crate::apis::ApiMetadata::identity_name) describes
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// The secret that goes with [`identity`](Self::identity)
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Endpoint to use instead of the provider's default
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Settings layered over the provider's
    /// [`default_properties`](crate::apis::ApiMetadata::default_properties)
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("provider", &self.provider)
            .field("identity", &self.identity)
            .field("credential", &self.credential.as_ref().map(|_| "** redacted **"))
            .field("endpoint", &self.endpoint)
            .field("properties", &self.properties)
            .finish()
    }
}

/// Fluent style builder for [Config]
#[derive(Clone, Default)]
pub struct Builder {
    provider: Option<String>,
    identity: Option<String>,
    credential: Option<String>,
    endpoint: Option<String>,
    properties: BTreeMap<String, String>,
}

impl Builder {
    /// Set the id of the provider API to talk to.
    pub fn provider(self, provider: impl Into<String>) -> Self {
        self.set_provider(Some(provider.into()))
    }

    /// Set the id of the provider API to talk to.
    pub fn set_provider(mut self, provider: Option<String>) -> Self {
        self.provider = provider;
        self
    }

    /// Set the identity to authenticate as.
    pub fn identity(self, identity: impl Into<String>) -> Self {
        self.set_identity(Some(identity.into()))
    }

    /// Set the identity to authenticate as.
    pub fn set_identity(mut self, identity: Option<String>) -> Self {
        self.identity = identity;
        self
    }

    /// Set the secret that goes with the identity.
    pub fn credential(self, credential: impl Into<String>) -> Self {
        self.set_credential(Some(credential.into()))
    }

    /// Set the secret that goes with the identity.
    pub fn set_credential(mut self, credential: Option<String>) -> Self {
        self.credential = credential;
        self
    }

    /// Override the provider's default endpoint.
    pub fn endpoint(self, endpoint: impl Into<String>) -> Self {
        self.set_endpoint(Some(endpoint.into()))
    }

    /// Override the provider's default endpoint.
    pub fn set_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Override one of the provider's default properties.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub(crate) fn get_provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub(crate) fn get_identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub(crate) fn get_credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub(crate) fn get_endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    ///
    /// NOTE: An unset provider is left empty and will not resolve to any API.
    pub fn build(self) -> Config {
        Config {
            provider: self.provider.unwrap_or_default(),
            identity: self.identity,
            credential: self.credential,
            endpoint: self.endpoint,
            properties: self.properties,
        }
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("provider", &self.provider)
            .field("identity", &self.identity)
            .field("credential", &self.credential.as_ref().map(|_| "** redacted **"))
            .field("endpoint", &self.endpoint)
            .field("properties", &self.properties)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn test_debug_redacts_credential() {
        let config = Config::builder()
            .provider("s3")
            .identity("AKIDEXAMPLE")
            .credential("wJalrXUtnFEMI/K7MDENG")
            .build();

        let rendered = format!("{config:?}");
        assert!(rendered.contains("AKIDEXAMPLE"));
        assert!(rendered.contains("** redacted **"));
        assert!(!rendered.contains("wJalrXUtnFEMI"));
        assert_eq!(Some("wJalrXUtnFEMI/K7MDENG"), config.credential());
    }

    #[test]
    fn test_unset_provider_is_empty() {
        assert_eq!("", Config::builder().build().provider());
    }
}
