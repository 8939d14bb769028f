/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::str::FromStr;

/// The category of service an API exposes.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiType {
    /// Virtual machines and the images, networks and volumes around them.
    Compute,

    /// Containers of named blobs, e.g. buckets of objects.
    Blobstore,

    /// Message queues.
    Queue,

    /// Schemaless key/value tables.
    Table,

    /// Load balancers in front of compute nodes.
    LoadBalancer,

    /// A category this library does not know about, kept verbatim. Empty when unset.
    Unrecognized(String),
}

impl Default for ApiType {
    fn default() -> Self {
        ApiType::Unrecognized(String::new())
    }
}

impl ApiType {
    /// The wire/string form of this API type.
    pub fn as_str(&self) -> &str {
        match self {
            ApiType::Compute => "COMPUTE",
            ApiType::Blobstore => "BLOBSTORE",
            ApiType::Queue => "QUEUE",
            ApiType::Table => "TABLE",
            ApiType::LoadBalancer => "LOADBALANCER",
            ApiType::Unrecognized(other) => other,
        }
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "COMPUTE" => ApiType::Compute,
            "BLOBSTORE" => ApiType::Blobstore,
            "QUEUE" => ApiType::Queue,
            "TABLE" => ApiType::Table,
            "LOADBALANCER" => ApiType::LoadBalancer,
            _ => ApiType::Unrecognized(s.to_owned()),
        })
    }
}

impl From<&str> for ApiType {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(api_type) => api_type,
            Err(never) => match never {},
        }
    }
}
