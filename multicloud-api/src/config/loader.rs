/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::config::Builder;
use crate::Config;

/// Provider used when neither the builder nor the environment names one.
pub const DEFAULT_PROVIDER: &str = "s3";

/// Environment variable naming the provider API id
pub const ENV_PROVIDER: &str = "MULTICLOUD_PROVIDER";
/// Environment variable holding the identity
pub const ENV_IDENTITY: &str = "MULTICLOUD_IDENTITY";
/// Environment variable holding the credential
pub const ENV_CREDENTIAL: &str = "MULTICLOUD_CREDENTIAL";
/// Environment variable holding an endpoint override
pub const ENV_ENDPOINT: &str = "MULTICLOUD_ENDPOINT";

/// Load client [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
}

impl ConfigLoader {
    /// Set the id of the provider API to talk to.
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.builder = self.builder.provider(provider);
        self
    }

    /// Set the identity to authenticate as.
    pub fn identity(mut self, identity: impl Into<String>) -> Self {
        self.builder = self.builder.identity(identity);
        self
    }

    /// Set the secret that goes with the identity.
    pub fn credential(mut self, credential: impl Into<String>) -> Self {
        self.builder = self.builder.credential(credential);
        self
    }

    /// Override the provider's default endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.builder = self.builder.endpoint(endpoint);
        self
    }

    /// Override one of the provider's default properties.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.property(key, value);
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the values are read from the `MULTICLOUD_*` environment variables, and
    /// the provider falls back to [`DEFAULT_PROVIDER`].
    pub fn load(self) -> Config {
        self.load_with(|key| std::env::var(key).ok())
    }

    pub(crate) fn load_with(self, env: impl Fn(&str) -> Option<String>) -> Config {
        let from_env = |set: Option<&str>, key: &str| match set {
            Some(value) => Some(value.to_owned()),
            None => env(key).filter(|value| !value.is_empty()),
        };

        let provider = from_env(self.builder.get_provider(), ENV_PROVIDER)
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_owned());
        let identity = from_env(self.builder.get_identity(), ENV_IDENTITY);
        let credential = from_env(self.builder.get_credential(), ENV_CREDENTIAL);
        let endpoint = from_env(self.builder.get_endpoint(), ENV_ENDPOINT);
        tracing::debug!(
            provider = provider.as_str(),
            endpoint = endpoint.as_deref(),
            "loaded client configuration"
        );

        self.builder
            .provider(provider)
            .set_identity(identity)
            .set_credential(credential)
            .set_endpoint(endpoint)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigLoader, ENV_CREDENTIAL, ENV_ENDPOINT, ENV_PROVIDER};
    use std::collections::HashMap;

    fn env(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<_, _> = vars.iter().copied().collect();
        move |key| vars.get(key).map(|value| value.to_string())
    }

    #[test]
    fn test_defaults_to_s3() {
        let config = ConfigLoader::default().load_with(env(&[]));
        assert_eq!("s3", config.provider());
        assert_eq!(None, config.endpoint());
    }

    #[test]
    fn test_reads_environment() {
        let config = ConfigLoader::default().load_with(env(&[
            (ENV_PROVIDER, "cloudstack"),
            (ENV_CREDENTIAL, "secret"),
            (ENV_ENDPOINT, "http://localhost:8080/client/api"),
        ]));
        assert_eq!("cloudstack", config.provider());
        assert_eq!(Some("secret"), config.credential());
        assert_eq!(Some("http://localhost:8080/client/api"), config.endpoint());
    }

    #[test]
    fn test_builder_values_take_precedence() {
        let config = ConfigLoader::default()
            .provider("azureblob")
            .endpoint("http://127.0.0.1:10000")
            .load_with(env(&[(ENV_PROVIDER, "s3"), (ENV_ENDPOINT, "http://ignored")]));
        assert_eq!("azureblob", config.provider());
        assert_eq!(Some("http://127.0.0.1:10000"), config.endpoint());
    }

    #[test]
    fn test_empty_variables_are_unset() {
        let config = ConfigLoader::default().load_with(env(&[(ENV_PROVIDER, "")]));
        assert_eq!("s3", config.provider());
    }
}
