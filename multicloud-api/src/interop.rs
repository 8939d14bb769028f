/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Conversions between the S3 records in [`domain::s3`](crate::domain::s3) and the
//! equivalent `aws-sdk-s3` types.

use aws_sdk_s3::types as sdk;

use crate::domain::s3::{AccessControlList, BucketLogging, Grant, Grantee, Permission};
use crate::error::{invalid_input, Error};

impl From<Permission> for sdk::Permission {
    fn from(value: Permission) -> Self {
        match value {
            Permission::FullControl => sdk::Permission::FullControl,
            Permission::Read => sdk::Permission::Read,
            Permission::Write => sdk::Permission::Write,
            Permission::ReadAcp => sdk::Permission::ReadAcp,
            Permission::WriteAcp => sdk::Permission::WriteAcp,
        }
    }
}

impl TryFrom<&sdk::Permission> for Permission {
    type Error = Error;

    fn try_from(value: &sdk::Permission) -> Result<Self, Self::Error> {
        match value {
            sdk::Permission::FullControl => Ok(Permission::FullControl),
            sdk::Permission::Read => Ok(Permission::Read),
            sdk::Permission::Write => Ok(Permission::Write),
            sdk::Permission::ReadAcp => Ok(Permission::ReadAcp),
            sdk::Permission::WriteAcp => Ok(Permission::WriteAcp),
            other => Err(invalid_input(format!("unknown permission `{}`", other.as_str()))),
        }
    }
}

/// Log targets only accept `FULL_CONTROL`, `READ` and `WRITE`.
impl TryFrom<Permission> for sdk::BucketLogsPermission {
    type Error = Error;

    fn try_from(value: Permission) -> Result<Self, Self::Error> {
        match value {
            Permission::FullControl => Ok(sdk::BucketLogsPermission::FullControl),
            Permission::Read => Ok(sdk::BucketLogsPermission::Read),
            Permission::Write => Ok(sdk::BucketLogsPermission::Write),
            other => Err(invalid_input(format!(
                "{other} cannot be granted on a log target"
            ))),
        }
    }
}

impl TryFrom<&sdk::BucketLogsPermission> for Permission {
    type Error = Error;

    fn try_from(value: &sdk::BucketLogsPermission) -> Result<Self, Self::Error> {
        match value {
            sdk::BucketLogsPermission::FullControl => Ok(Permission::FullControl),
            sdk::BucketLogsPermission::Read => Ok(Permission::Read),
            sdk::BucketLogsPermission::Write => Ok(Permission::Write),
            other => Err(invalid_input(format!(
                "unknown log target permission `{}`",
                other.as_str()
            ))),
        }
    }
}

impl TryFrom<&Grantee> for sdk::Grantee {
    type Error = Error;

    fn try_from(value: &Grantee) -> Result<Self, Self::Error> {
        let builder = match value {
            Grantee::Group { uri } => sdk::Grantee::builder().r#type(sdk::Type::Group).uri(uri),
            Grantee::CanonicalUser { id, display_name } => sdk::Grantee::builder()
                .r#type(sdk::Type::CanonicalUser)
                .id(id)
                .set_display_name(display_name.clone()),
            Grantee::EmailAddress { email } => sdk::Grantee::builder()
                .r#type(sdk::Type::AmazonCustomerByEmail)
                .email_address(email),
        };
        Ok(builder.build()?)
    }
}

impl TryFrom<&sdk::Grantee> for Grantee {
    type Error = Error;

    fn try_from(value: &sdk::Grantee) -> Result<Self, Self::Error> {
        let missing = |field: &str| {
            invalid_input(format!(
                "{} grantee has no {field}",
                value.r#type().as_str()
            ))
        };
        match value.r#type() {
            sdk::Type::Group => {
                let uri = value.uri().ok_or_else(|| missing("URI"))?;
                Ok(Grantee::group(uri))
            }
            sdk::Type::CanonicalUser => {
                let id = value.id().ok_or_else(|| missing("ID"))?;
                Ok(Grantee::CanonicalUser {
                    id: id.to_owned(),
                    display_name: value.display_name().map(str::to_owned),
                })
            }
            sdk::Type::AmazonCustomerByEmail => {
                let email = value.email_address().ok_or_else(|| missing("EmailAddress"))?;
                Ok(Grantee::email_address(email))
            }
            other => Err(invalid_input(format!(
                "unknown grantee type `{}`",
                other.as_str()
            ))),
        }
    }
}

impl TryFrom<&Grant> for sdk::TargetGrant {
    type Error = Error;

    fn try_from(value: &Grant) -> Result<Self, Self::Error> {
        Ok(sdk::TargetGrant::builder()
            .grantee(value.grantee().try_into()?)
            .permission(value.permission().try_into()?)
            .build())
    }
}

impl TryFrom<&Grant> for sdk::Grant {
    type Error = Error;

    fn try_from(value: &Grant) -> Result<Self, Self::Error> {
        Ok(sdk::Grant::builder()
            .grantee(value.grantee().try_into()?)
            .permission(value.permission().into())
            .build())
    }
}

impl TryFrom<&BucketLogging> for sdk::BucketLoggingStatus {
    type Error = Error;

    fn try_from(value: &BucketLogging) -> Result<Self, Self::Error> {
        let target_grants = value
            .target_grants()
            .iter()
            .map(sdk::TargetGrant::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let logging_enabled = sdk::LoggingEnabled::builder()
            .target_bucket(value.target_bucket())
            .target_prefix(value.target_prefix())
            .set_target_grants(Some(target_grants))
            .build()?;
        Ok(sdk::BucketLoggingStatus::builder()
            .logging_enabled(logging_enabled)
            .build())
    }
}

impl TryFrom<&sdk::LoggingEnabled> for BucketLogging {
    type Error = Error;

    fn try_from(value: &sdk::LoggingEnabled) -> Result<Self, Self::Error> {
        let mut grants = Vec::with_capacity(value.target_grants().len());
        for grant in value.target_grants() {
            let (Some(grantee), Some(permission)) = (grant.grantee(), grant.permission()) else {
                return Err(invalid_input("target grant without grantee or permission"));
            };
            grants.push(Grant::new(grantee.try_into()?, permission.try_into()?));
        }
        Ok(BucketLogging::builder()
            .target_bucket(value.target_bucket())
            .target_prefix(value.target_prefix())
            .set_target_grants(grants)
            .build())
    }
}

impl TryFrom<&AccessControlList> for sdk::AccessControlPolicy {
    type Error = Error;

    fn try_from(value: &AccessControlList) -> Result<Self, Self::Error> {
        let grants = value
            .grants()
            .iter()
            .map(sdk::Grant::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let owner = value.owner().map(|owner| {
            sdk::Owner::builder()
                .id(owner.id())
                .set_display_name(owner.display_name().map(str::to_owned))
                .build()
        });
        Ok(sdk::AccessControlPolicy::builder()
            .set_grants(Some(grants))
            .set_owner(owner)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::types as sdk;

    use crate::domain::s3::{AccessControlList, BucketLogging, Grantee, Owner, Permission};
    use crate::error::ErrorKind;

    #[test]
    fn test_log_target_permissions() {
        assert_eq!(
            sdk::BucketLogsPermission::Read,
            sdk::BucketLogsPermission::try_from(Permission::Read).unwrap()
        );
        let err = sdk::BucketLogsPermission::try_from(Permission::WriteAcp).unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }

    #[test]
    fn test_grantee_variants() {
        let group = sdk::Grantee::try_from(&Grantee::all_users()).unwrap();
        assert_eq!(&sdk::Type::Group, group.r#type());
        assert_eq!(Some(crate::domain::s3::ALL_USERS_URI), group.uri());

        let user = sdk::Grantee::try_from(&Grantee::canonical_user_named("abc123", "Alice")).unwrap();
        assert_eq!(&sdk::Type::CanonicalUser, user.r#type());
        assert_eq!(Some("abc123"), user.id());
        assert_eq!(Some("Alice"), user.display_name());

        let email = sdk::Grantee::try_from(&Grantee::email_address("a@example.com")).unwrap();
        assert_eq!(&sdk::Type::AmazonCustomerByEmail, email.r#type());
        assert_eq!(Some("a@example.com"), email.email_address());

        for grantee in [
            Grantee::all_users(),
            Grantee::canonical_user_named("abc123", "Alice"),
            Grantee::email_address("a@example.com"),
        ] {
            let sdk_grantee = sdk::Grantee::try_from(&grantee).unwrap();
            assert_eq!(grantee, Grantee::try_from(&sdk_grantee).unwrap());
        }
    }

    #[test]
    fn test_sdk_grantee_missing_field() {
        let grantee = sdk::Grantee::builder()
            .r#type(sdk::Type::Group)
            .build()
            .unwrap();
        let err = Grantee::try_from(&grantee).unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }

    #[test]
    fn test_bucket_logging_status() {
        let logging = BucketLogging::builder()
            .target_bucket("logs")
            .target_prefix("access-")
            .grant(Grantee::log_delivery(), Permission::Write)
            .build();
        let status = sdk::BucketLoggingStatus::try_from(&logging).unwrap();
        let enabled = status.logging_enabled().unwrap();

        assert_eq!("logs", enabled.target_bucket());
        assert_eq!("access-", enabled.target_prefix());
        assert_eq!(1, enabled.target_grants().len());
        assert_eq!(
            Some(&sdk::BucketLogsPermission::Write),
            enabled.target_grants()[0].permission()
        );
        assert_eq!(logging, BucketLogging::try_from(enabled).unwrap());
    }

    #[test]
    fn test_bucket_logging_rejects_acl_only_permissions() {
        let logging = BucketLogging::builder()
            .target_bucket("logs")
            .grant(Grantee::all_users(), Permission::ReadAcp)
            .build();
        let err = sdk::BucketLoggingStatus::try_from(&logging).unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }

    #[test]
    fn test_access_control_policy() {
        let acl = AccessControlList::builder()
            .owner(Owner::new("abc123").with_display_name("Alice"))
            .grant(Grantee::canonical_user("abc123"), Permission::FullControl)
            .grant(Grantee::all_users(), Permission::ReadAcp)
            .build();
        let policy = sdk::AccessControlPolicy::try_from(&acl).unwrap();

        assert_eq!(Some("abc123"), policy.owner().and_then(|owner| owner.id()));
        assert_eq!(2, policy.grants().len());
        assert_eq!(Some(&sdk::Permission::ReadAcp), policy.grants()[1].permission());
    }
}
