/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// Group URI granting access to anyone, authenticated or not.
pub const ALL_USERS_URI: &str = "http://acs.amazonaws.com/groups/global/AllUsers";

/// Group URI granting access to any AWS account holder.
pub const AUTHENTICATED_USERS_URI: &str = "http://acs.amazonaws.com/groups/global/AuthenticatedUsers";

/// Group URI for the service principal that writes server access logs.
pub const LOG_DELIVERY_URI: &str = "http://acs.amazonaws.com/groups/s3/LogDelivery";

/// A permission granted on a bucket or object.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    /// `READ`, `WRITE`, `READ_ACP` and `WRITE_ACP` together
    FullControl,
    /// List a bucket or read an object
    Read,
    /// Create, overwrite and delete objects in a bucket
    Write,
    /// Read the access control list
    ReadAcp,
    /// Write the access control list
    WriteAcp,
}

impl Permission {
    /// The wire form of this permission.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::FullControl => "FULL_CONTROL",
            Permission::Read => "READ",
            Permission::Write => "WRITE",
            Permission::ReadAcp => "READ_ACP",
            Permission::WriteAcp => "WRITE_ACP",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identity a [`Grant`] applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Grantee {
    /// A predefined group, identified by its URI.
    Group {
        /// The group URI, e.g. [`ALL_USERS_URI`]
        uri: String,
    },

    /// An account identified by its canonical user id.
    CanonicalUser {
        /// The canonical user id
        id: String,
        /// The display name, when known
        display_name: Option<String>,
    },

    /// An account identified by the email address it was registered with.
    EmailAddress {
        /// The email address
        email: String,
    },
}

impl Grantee {
    /// A group grantee.
    pub fn group(uri: impl Into<String>) -> Self {
        Grantee::Group { uri: uri.into() }
    }

    /// The [`ALL_USERS_URI`] group.
    pub fn all_users() -> Self {
        Grantee::group(ALL_USERS_URI)
    }

    /// The [`AUTHENTICATED_USERS_URI`] group.
    pub fn authenticated_users() -> Self {
        Grantee::group(AUTHENTICATED_USERS_URI)
    }

    /// The [`LOG_DELIVERY_URI`] group.
    pub fn log_delivery() -> Self {
        Grantee::group(LOG_DELIVERY_URI)
    }

    /// A canonical user without a display name.
    pub fn canonical_user(id: impl Into<String>) -> Self {
        Grantee::CanonicalUser {
            id: id.into(),
            display_name: None,
        }
    }

    /// A canonical user with a display name.
    pub fn canonical_user_named(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Grantee::CanonicalUser {
            id: id.into(),
            display_name: Some(display_name.into()),
        }
    }

    /// An email address grantee.
    pub fn email_address(email: impl Into<String>) -> Self {
        Grantee::EmailAddress {
            email: email.into(),
        }
    }

    /// The value that identifies this grantee: group URI, canonical id or email address.
    pub fn identifier(&self) -> &str {
        match self {
            Grantee::Group { uri } => uri,
            Grantee::CanonicalUser { id, .. } => id,
            Grantee::EmailAddress { email } => email,
        }
    }
}

impl fmt::Display for Grantee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grantee::Group { uri } => write!(f, "GroupGrantee{{uri={uri}}}"),
            Grantee::CanonicalUser { id, display_name } => match display_name {
                Some(name) => write!(f, "CanonicalUserGrantee{{id={id}, displayName={name}}}"),
                None => write!(f, "CanonicalUserGrantee{{id={id}}}"),
            },
            Grantee::EmailAddress { email } => write!(f, "EmailAddressGrantee{{email={email}}}"),
        }
    }
}

/// A single permission given to a single grantee.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grant {
    grantee: Grantee,
    permission: Permission,
}

impl Grant {
    /// Create a new grant.
    pub fn new(grantee: Grantee, permission: Permission) -> Self {
        Self {
            grantee,
            permission,
        }
    }

    /// Who the permission is granted to.
    pub fn grantee(&self) -> &Grantee {
        &self.grantee
    }

    /// What is granted.
    pub fn permission(&self) -> Permission {
        self.permission
    }
}

impl fmt::Display for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grant{{grantee={}, permission={}}}", self.grantee, self.permission)
    }
}

fn write_grants(f: &mut fmt::Formatter<'_>, grants: &[Grant]) -> fmt::Result {
    f.write_str("[")?;
    for (idx, grant) in grants.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{grant}")?;
    }
    f.write_str("]")
}

/// Server access logging settings for a bucket.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BucketLogging {
    target_bucket: String,
    target_prefix: String,
    target_grants: Vec<Grant>,
}

impl BucketLogging {
    /// Creates a new builder-style object to manufacture [`BucketLogging`].
    pub fn builder() -> BucketLoggingBuilder {
        BucketLoggingBuilder::default()
    }

    /// The bucket access logs are delivered to.
    pub fn target_bucket(&self) -> &str {
        &self.target_bucket
    }

    /// The key prefix of every delivered log object.
    pub fn target_prefix(&self) -> &str {
        &self.target_prefix
    }

    /// Who may access the delivered logs, in the order they were added.
    pub fn target_grants(&self) -> &[Grant] {
        &self.target_grants
    }
}

impl fmt::Display for BucketLogging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BucketLogging{{targetBucket={}, targetPrefix={}, targetGrants=",
            self.target_bucket, self.target_prefix
        )?;
        write_grants(f, &self.target_grants)?;
        f.write_str("}")
    }
}

/// A builder for [`BucketLogging`].
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct BucketLoggingBuilder {
    pub(crate) target_bucket: String,
    pub(crate) target_prefix: String,
    pub(crate) target_grants: Vec<Grant>,
}

impl BucketLoggingBuilder {
    /// Set the bucket access logs are delivered to.
    pub fn target_bucket(mut self, input: impl Into<String>) -> Self {
        self.target_bucket = input.into();
        self
    }

    /// The bucket access logs are delivered to.
    pub fn get_target_bucket(&self) -> &str {
        &self.target_bucket
    }

    /// Set the key prefix of every delivered log object.
    pub fn target_prefix(mut self, input: impl Into<String>) -> Self {
        self.target_prefix = input.into();
        self
    }

    /// The key prefix of every delivered log object.
    pub fn get_target_prefix(&self) -> &str {
        &self.target_prefix
    }

    /// Append a grant on the delivered logs.
    pub fn grant(mut self, grantee: Grantee, permission: Permission) -> Self {
        self.target_grants.push(Grant::new(grantee, permission));
        self
    }

    /// Replace all grants on the delivered logs.
    pub fn set_target_grants(mut self, input: Vec<Grant>) -> Self {
        self.target_grants = input;
        self
    }

    /// Grants on the delivered logs.
    pub fn get_target_grants(&self) -> &[Grant] {
        &self.target_grants
    }

    /// Constructs a [`BucketLogging`] from the current builder values.
    pub fn build(&self) -> BucketLogging {
        BucketLogging {
            target_bucket: self.target_bucket.clone(),
            target_prefix: self.target_prefix.clone(),
            target_grants: self.target_grants.clone(),
        }
    }
}

/// The owner of a bucket or object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Owner {
    id: String,
    display_name: Option<String>,
}

impl Owner {
    /// An owner identified by canonical user id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
        }
    }

    /// Attach a display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// The canonical user id of the owner.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display name of the owner, when known.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

/// The access control list of a bucket or object.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AccessControlList {
    owner: Option<Owner>,
    grants: Vec<Grant>,
}

impl AccessControlList {
    /// Creates a new builder-style object to manufacture [`AccessControlList`].
    pub fn builder() -> AccessControlListBuilder {
        AccessControlListBuilder::default()
    }

    /// The owner of the resource.
    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    /// Grants in the order they were added.
    pub fn grants(&self) -> &[Grant] {
        &self.grants
    }

    /// Whether `grantee` holds `permission`, directly or through `FULL_CONTROL`.
    pub fn has_permission(&self, grantee: &Grantee, permission: Permission) -> bool {
        self.grants.iter().any(|grant| {
            grant.grantee() == grantee
                && (grant.permission() == permission
                    || grant.permission() == Permission::FullControl)
        })
    }
}

impl fmt::Display for AccessControlList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessControlList{owner=")?;
        match &self.owner {
            Some(owner) => f.write_str(owner.id())?,
            None => f.write_str("null")?,
        }
        f.write_str(", grants=")?;
        write_grants(f, &self.grants)?;
        f.write_str("}")
    }
}

/// A builder for [`AccessControlList`].
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct AccessControlListBuilder {
    pub(crate) owner: Option<Owner>,
    pub(crate) grants: Vec<Grant>,
}

impl AccessControlListBuilder {
    /// Set the owner of the resource.
    pub fn owner(mut self, input: Owner) -> Self {
        self.owner = Some(input);
        self
    }

    /// Set the owner of the resource.
    pub fn set_owner(mut self, input: Option<Owner>) -> Self {
        self.owner = input;
        self
    }

    /// The owner of the resource.
    pub fn get_owner(&self) -> &Option<Owner> {
        &self.owner
    }

    /// Append a grant.
    pub fn grant(mut self, grantee: Grantee, permission: Permission) -> Self {
        self.grants.push(Grant::new(grantee, permission));
        self
    }

    /// Grants added so far.
    pub fn get_grants(&self) -> &[Grant] {
        &self.grants
    }

    /// Constructs an [`AccessControlList`] from the current builder values.
    pub fn build(&self) -> AccessControlList {
        AccessControlList {
            owner: self.owner.clone(),
            grants: self.grants.clone(),
        }
    }
}
