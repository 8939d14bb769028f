/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::{providers, ApiMetadata};
use crate::error::{not_found, Error};
use crate::types::ApiType;

/// Descriptors keyed by their [`id`](ApiMetadata::id).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRegistry {
    entries: BTreeMap<String, ApiMetadata>,
}

impl ApiRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every descriptor in [`providers`].
    pub fn with_builtins() -> Self {
        providers::all().into_iter().collect()
    }

    /// The process wide registry of built-in descriptors.
    pub fn builtin() -> &'static ApiRegistry {
        static BUILTIN: OnceLock<ApiRegistry> = OnceLock::new();
        BUILTIN.get_or_init(ApiRegistry::with_builtins)
    }

    /// Add a descriptor, returning the one it replaced under the same id, if any.
    pub fn register(&mut self, metadata: ApiMetadata) -> Option<ApiMetadata> {
        let replaced = self.entries.insert(metadata.id().to_owned(), metadata);
        if let Some(replaced) = &replaced {
            tracing::debug!("replaced registered api `{}`", replaced.id());
        }
        replaced
    }

    /// The descriptor registered under `id`.
    pub fn get(&self, id: &str) -> Option<&ApiMetadata> {
        self.entries.get(id)
    }

    /// The descriptor registered under `id`, or a [`NotFound`](crate::error::ErrorKind::NotFound)
    /// error naming the ids that are known.
    pub fn lookup(&self, id: &str) -> Result<&ApiMetadata, Error> {
        self.get(id).ok_or_else(|| {
            let known: Vec<_> = self.ids().collect();
            tracing::debug!("api `{id}` is not registered");
            not_found(format!("no api registered as `{id}`; known apis: {known:?}"))
        })
    }

    /// Registered ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Registered descriptors in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &ApiMetadata> {
        self.entries.values()
    }

    /// Registered descriptors of one [`ApiType`].
    pub fn of_type(&self, api_type: ApiType) -> impl Iterator<Item = &ApiMetadata> + '_ {
        self.iter()
            .filter(move |metadata| metadata.api_type() == &api_type)
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ApiMetadata> for ApiRegistry {
    fn from_iter<T: IntoIterator<Item = ApiMetadata>>(iter: T) -> Self {
        let mut registry = ApiRegistry::new();
        registry.extend(iter);
        registry
    }
}

impl Extend<ApiMetadata> for ApiRegistry {
    fn extend<T: IntoIterator<Item = ApiMetadata>>(&mut self, iter: T) {
        for metadata in iter {
            self.register(metadata);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiRegistry;
    use crate::apis::providers;
    use crate::error::ErrorKind;
    use crate::types::ApiType;

    #[test]
    fn test_builtin_ids_are_sorted() {
        let ids: Vec<_> = ApiRegistry::builtin().ids().collect();
        assert_eq!(
            vec!["azureblob", "cloudstack", "openstack-nova", "s3", "vcloud"],
            ids
        );
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut registry = ApiRegistry::new();
        assert!(registry.register(providers::vcloud()).is_none());

        let renamed = providers::vcloud().to_builder().name("vCloud Director").build();
        let replaced = registry.register(renamed).unwrap();

        assert_eq!("VCloud 1.0 API", replaced.name());
        assert_eq!("vCloud Director", registry.lookup("vcloud").unwrap().name());
        assert_eq!(1, registry.len());
    }

    #[test]
    fn test_lookup_unknown_id() {
        let err = ApiRegistry::builtin().lookup("ec2").unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
    }

    #[test]
    fn test_of_type() {
        let blobstores: Vec<_> = ApiRegistry::builtin()
            .of_type(ApiType::Blobstore)
            .map(|metadata| metadata.id())
            .collect();
        assert_eq!(vec!["azureblob", "s3"], blobstores);
        assert_eq!(0, ApiRegistry::builtin().of_type(ApiType::Queue).count());
    }
}
