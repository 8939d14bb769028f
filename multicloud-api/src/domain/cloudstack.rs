/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How an extracted template is made available.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExtractMode {
    /// The template is served over HTTP from the `url` of the extraction.
    HttpDownload,

    /// The template is pushed to the FTP location given by the `url` of the extraction.
    FtpUpload,

    /// A mode this library does not know about, kept verbatim.
    Unrecognized(String),
}

impl ExtractMode {
    /// The wire form of this mode.
    pub fn as_str(&self) -> &str {
        match self {
            ExtractMode::HttpDownload => "HTTP_DOWNLOAD",
            ExtractMode::FtpUpload => "FTP_UPLOAD",
            ExtractMode::Unrecognized(other) => other,
        }
    }
}

impl From<&str> for ExtractMode {
    fn from(value: &str) -> Self {
        match value {
            "HTTP_DOWNLOAD" => ExtractMode::HttpDownload,
            "FTP_UPLOAD" => ExtractMode::FtpUpload,
            other => ExtractMode::Unrecognized(other.to_owned()),
        }
    }
}

impl From<String> for ExtractMode {
    fn from(value: String) -> Self {
        ExtractMode::from(value.as_str())
    }
}

impl From<ExtractMode> for String {
    fn from(value: ExtractMode) -> Self {
        match value {
            ExtractMode::Unrecognized(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The state of a template extraction job in CloudStack.
///
/// Instances are built with [`TemplateExtraction::builder`] or deserialized from the JSON the
/// CloudStack API returns. Several fields travel under a different name on the wire (for
/// example `account_id` is `accountid`); the mapping is applied in both directions.
///
/// Equality and hashing consider every field. Ordering is by [`id`](Self::id) only and is
/// available through [`cmp_by_id`](Self::cmp_by_id) and [`ById`].
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateExtraction {
    id: i64,
    #[serde(rename = "accountid")]
    account_id: i64,
    #[serde(with = "cloudstack_date", skip_serializing_if = "Option::is_none")]
    created: Option<DateTime<Utc>>,
    #[serde(rename = "extractId")]
    extract_id: i64,
    #[serde(rename = "extractMode", skip_serializing_if = "Option::is_none")]
    extract_mode: Option<ExtractMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(rename = "storagetype", skip_serializing_if = "Option::is_none")]
    storage_type: Option<String>,
    #[serde(rename = "uploadpercentage")]
    upload_percentage: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(rename = "zoneid")]
    zone_id: i64,
    #[serde(rename = "zonename", skip_serializing_if = "Option::is_none")]
    zone_name: Option<String>,
}

impl TemplateExtraction {
    /// Creates a new builder-style object to manufacture [`TemplateExtraction`].
    pub fn builder() -> TemplateExtractionBuilder {
        TemplateExtractionBuilder::default()
    }

    /// Deserialize an extraction from the JSON object CloudStack returns for it.
    ///
    /// Fields missing from the document keep their zero value.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserialize an extraction from an already parsed field map.
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }

    /// The id of the extracted object.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The account id to which the extracted object belongs.
    pub fn account_id(&self) -> i64 {
        self.account_id
    }

    /// The time and date the object was created.
    pub fn created(&self) -> Option<&DateTime<Utc>> {
        self.created.as_ref()
    }

    /// The upload id of the extracted object.
    pub fn extract_id(&self) -> i64 {
        self.extract_id
    }

    /// The mode of extraction, upload or download.
    pub fn extract_mode(&self) -> Option<&ExtractMode> {
        self.extract_mode.as_ref()
    }

    /// The name of the extracted object.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The state of the extracted object.
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// The status of the extraction.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The type of the storage.
    pub fn storage_type(&self) -> Option<&str> {
        self.storage_type.as_deref()
    }

    /// The percentage of the entity uploaded to the specified location.
    pub fn upload_percentage(&self) -> i32 {
        self.upload_percentage
    }

    /// For uploads, the url of the uploaded entity. For downloads, the url from which the
    /// entity can be downloaded.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The zone id the object was extracted from.
    pub fn zone_id(&self) -> i64 {
        self.zone_id
    }

    /// The zone name the object was extracted from.
    pub fn zone_name(&self) -> Option<&str> {
        self.zone_name.as_deref()
    }

    /// Compare two extractions by [`id`](Self::id) alone.
    ///
    /// Extractions with the same id compare as equal here even when other fields differ.
    pub fn cmp_by_id(&self, other: &TemplateExtraction) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// Sorts extractions by id. The sort is stable, so extractions sharing an id keep their
/// relative order.
pub fn sort_by_id(extractions: &mut [TemplateExtraction]) {
    extractions.sort_by(TemplateExtraction::cmp_by_id);
}

/// Orders a borrowed [`TemplateExtraction`] by id, e.g. as a `BTreeSet` or `BinaryHeap` key.
#[derive(Debug, Clone, Copy)]
pub struct ById<'a>(pub &'a TemplateExtraction);

impl PartialEq for ById<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for ById<'_> {}

impl PartialOrd for ById<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ById<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_by_id(other.0)
    }
}

struct Quoted<'a>(Option<&'a str>);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "'{value}'"),
            None => f.write_str("null"),
        }
    }
}

impl fmt::Display for TemplateExtraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let created = self
            .created
            .map(|created| created.format(cloudstack_date::FORMAT).to_string());
        let extract_mode = self.extract_mode.as_ref().map(ExtractMode::as_str);
        write!(
            f,
            "TemplateExtraction{{id={}, accountId={}, created={}, extractId={}, extractMode={}, \
             name={}, state={}, status={}, storageType={}, uploadPercentage={}, url={}, \
             zoneId={}, zoneName={}}}",
            self.id,
            self.account_id,
            created.as_deref().unwrap_or("null"),
            self.extract_id,
            extract_mode.unwrap_or("null"),
            Quoted(self.name.as_deref()),
            Quoted(self.state.as_deref()),
            Quoted(self.status.as_deref()),
            Quoted(self.storage_type.as_deref()),
            self.upload_percentage,
            Quoted(self.url.as_deref()),
            self.zone_id,
            Quoted(self.zone_name.as_deref()),
        )
    }
}

/// A builder for [`TemplateExtraction`].
///
/// No field is required; anything left unset keeps its zero value.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct TemplateExtractionBuilder {
    pub(crate) id: i64,
    pub(crate) account_id: i64,
    pub(crate) created: Option<DateTime<Utc>>,
    pub(crate) extract_id: i64,
    pub(crate) extract_mode: Option<ExtractMode>,
    pub(crate) name: Option<String>,
    pub(crate) state: Option<String>,
    pub(crate) status: Option<String>,
    pub(crate) storage_type: Option<String>,
    pub(crate) upload_percentage: i32,
    pub(crate) url: Option<String>,
    pub(crate) zone_id: i64,
    pub(crate) zone_name: Option<String>,
}

impl TemplateExtractionBuilder {
    /// Set the id of the extracted object.
    pub fn id(mut self, input: i64) -> Self {
        self.id = input;
        self
    }

    /// The id of the extracted object.
    pub fn get_id(&self) -> i64 {
        self.id
    }

    /// Set the account id to which the extracted object belongs.
    pub fn account_id(mut self, input: i64) -> Self {
        self.account_id = input;
        self
    }

    /// The account id to which the extracted object belongs.
    pub fn get_account_id(&self) -> i64 {
        self.account_id
    }

    /// Set the time and date the object was created.
    pub fn created(mut self, input: DateTime<Utc>) -> Self {
        self.created = Some(input);
        self
    }

    /// Set the time and date the object was created.
    pub fn set_created(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.created = input;
        self
    }

    /// The time and date the object was created.
    pub fn get_created(&self) -> &Option<DateTime<Utc>> {
        &self.created
    }

    /// Set the upload id of the extracted object.
    pub fn extract_id(mut self, input: i64) -> Self {
        self.extract_id = input;
        self
    }

    /// The upload id of the extracted object.
    pub fn get_extract_id(&self) -> i64 {
        self.extract_id
    }

    /// Set the mode of extraction.
    pub fn extract_mode(mut self, input: ExtractMode) -> Self {
        self.extract_mode = Some(input);
        self
    }

    /// Set the mode of extraction.
    pub fn set_extract_mode(mut self, input: Option<ExtractMode>) -> Self {
        self.extract_mode = input;
        self
    }

    /// The mode of extraction.
    pub fn get_extract_mode(&self) -> &Option<ExtractMode> {
        &self.extract_mode
    }

    /// Set the name of the extracted object.
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// Set the name of the extracted object.
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.name = input;
        self
    }

    /// The name of the extracted object.
    pub fn get_name(&self) -> &Option<String> {
        &self.name
    }

    /// Set the state of the extracted object.
    pub fn state(mut self, input: impl Into<String>) -> Self {
        self.state = Some(input.into());
        self
    }

    /// Set the state of the extracted object.
    pub fn set_state(mut self, input: Option<String>) -> Self {
        self.state = input;
        self
    }

    /// The state of the extracted object.
    pub fn get_state(&self) -> &Option<String> {
        &self.state
    }

    /// Set the status of the extraction.
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Set the status of the extraction.
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
        self
    }

    /// The status of the extraction.
    pub fn get_status(&self) -> &Option<String> {
        &self.status
    }

    /// Set the type of the storage.
    pub fn storage_type(mut self, input: impl Into<String>) -> Self {
        self.storage_type = Some(input.into());
        self
    }

    /// Set the type of the storage.
    pub fn set_storage_type(mut self, input: Option<String>) -> Self {
        self.storage_type = input;
        self
    }

    /// The type of the storage.
    pub fn get_storage_type(&self) -> &Option<String> {
        &self.storage_type
    }

    /// Set the percentage of the entity uploaded to the specified location.
    pub fn upload_percentage(mut self, input: i32) -> Self {
        self.upload_percentage = input;
        self
    }

    /// The percentage of the entity uploaded to the specified location.
    pub fn get_upload_percentage(&self) -> i32 {
        self.upload_percentage
    }

    /// Set the url of the uploaded entity, or the url it can be downloaded from.
    pub fn url(mut self, input: impl Into<String>) -> Self {
        self.url = Some(input.into());
        self
    }

    /// Set the url of the uploaded entity, or the url it can be downloaded from.
    pub fn set_url(mut self, input: Option<String>) -> Self {
        self.url = input;
        self
    }

    /// The url of the uploaded entity, or the url it can be downloaded from.
    pub fn get_url(&self) -> &Option<String> {
        &self.url
    }

    /// Set the zone id the object was extracted from.
    pub fn zone_id(mut self, input: i64) -> Self {
        self.zone_id = input;
        self
    }

    /// The zone id the object was extracted from.
    pub fn get_zone_id(&self) -> i64 {
        self.zone_id
    }

    /// Set the zone name the object was extracted from.
    pub fn zone_name(mut self, input: impl Into<String>) -> Self {
        self.zone_name = Some(input.into());
        self
    }

    /// Set the zone name the object was extracted from.
    pub fn set_zone_name(mut self, input: Option<String>) -> Self {
        self.zone_name = input;
        self
    }

    /// The zone name the object was extracted from.
    pub fn get_zone_name(&self) -> &Option<String> {
        &self.zone_name
    }

    /// Constructs a [`TemplateExtraction`] from the current builder values.
    ///
    /// The builder is left untouched, so it can be built again.
    pub fn build(&self) -> TemplateExtraction {
        TemplateExtraction {
            id: self.id,
            account_id: self.account_id,
            created: self.created,
            extract_id: self.extract_id,
            extract_mode: self.extract_mode.clone(),
            name: self.name.clone(),
            state: self.state.clone(),
            status: self.status.clone(),
            storage_type: self.storage_type.clone(),
            upload_percentage: self.upload_percentage,
            url: self.url.clone(),
            zone_id: self.zone_id,
            zone_name: self.zone_name.clone(),
        }
    }
}

/// CloudStack renders timestamps as `2012-02-10T14:45:15+0000`.
mod cloudstack_date {
    use chrono::{DateTime, Utc};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub(super) const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

    pub(super) fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_str(raw, FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .map(|parsed| parsed.with_timezone(&Utc))
    }

    pub(super) fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(created) => serializer.serialize_str(&created.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse(&raw).map_err(D::Error::custom))
            .transpose()
    }
}
