/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Input validation issues (missing bucket, malformed endpoint, unsupported provider, etc)
    InputInvalid,

    /// A payload could not be serialized into a request body
    BindingFailed,

    /// A wire representation could not be turned into a domain record
    Deserialization,

    /// Resource not found (e.g. unknown provider id)
    NotFound,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::BindingFailed => write!(f, "binding failed"),
            ErrorKind::Deserialization => write!(f, "deserialization failed"),
            ErrorKind::NotFound => write!(f, "resource not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::new(ErrorKind::Deserialization, value)
    }
}

impl From<http::Error> for Error {
    fn from(value: http::Error) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(value: http::uri::InvalidUri) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn not_found<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::NotFound, err)
}

/// Describes which payload a binder failed to transform.
#[derive(Debug)]
pub(crate) struct TransformError {
    description: String,
    source: BoxError,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Returns a closure turning a serialization failure for `payload` into a
/// [`ErrorKind::BindingFailed`] error.
///
/// Causes that are already an [`Error`] are passed through untouched so a failure raised by a
/// nested binder is not wrapped twice.
pub(crate) fn binding_failed<'a, P>(
    payload_name: &'a str,
    payload: &'a P,
) -> impl FnOnce(BoxError) -> Error + 'a
where
    P: fmt::Display + ?Sized,
{
    move |err| match err.downcast::<Error>() {
        Ok(err) => *err,
        Err(source) => Error::new(
            ErrorKind::BindingFailed,
            TransformError {
                description: format!("error transforming {payload_name}: {payload}"),
                source,
            },
        ),
    }
}
