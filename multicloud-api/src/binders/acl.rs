/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use super::xml::XmlBuilder;
use super::{Binder, S3_REST_API_XML_NAMESPACE};
use crate::domain::s3::AccessControlList;
use crate::error::{binding_failed, BoxError, Error};
use crate::http::header::{self, TEXT_XML};
use crate::http::HttpRequest;

/// Binds an [`AccessControlList`] as an `AccessControlPolicy` document.
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct BindAclToXmlPayload;

impl BindAclToXmlPayload {
    /// Create a new binder.
    pub fn new() -> Self {
        Self
    }

    fn generate(&self, acl: &AccessControlList) -> Result<String, BoxError> {
        let mut xml = XmlBuilder::new();
        xml.start("AccessControlPolicy", &[("xmlns", S3_REST_API_XML_NAMESPACE)])?;
        if let Some(owner) = acl.owner() {
            xml.start("Owner", &[])?;
            xml.text_element("ID", owner.id())?;
            if let Some(display_name) = owner.display_name() {
                xml.text_element("DisplayName", display_name)?;
            }
            xml.end("Owner")?;
        }
        xml.grants("AccessControlList", acl.grants())?;
        xml.end("AccessControlPolicy")?;
        xml.finish()
    }
}

impl Binder<AccessControlList> for BindAclToXmlPayload {
    #[tracing::instrument(skip_all, level = "debug", name = "bind-acl", fields(
        grants = payload.grants().len(),
    ))]
    fn bind_to_request(
        &self,
        request: &mut HttpRequest,
        payload: &AccessControlList,
    ) -> Result<(), Error> {
        let body = self
            .generate(payload)
            .map_err(binding_failed("accessControlList", payload))?;
        header::set_payload(request, TEXT_XML, body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BindAclToXmlPayload;
    use crate::binders::Binder;
    use crate::domain::s3::{AccessControlList, Grantee, Owner, Permission};
    use crate::http::HttpRequest;

    #[test]
    fn test_owner_and_grants() {
        let acl = AccessControlList::builder()
            .owner(Owner::new("owner-id").with_display_name("Owner"))
            .grant(Grantee::canonical_user("owner-id"), Permission::FullControl)
            .grant(Grantee::log_delivery(), Permission::Write)
            .build();
        let mut request = HttpRequest::default();
        BindAclToXmlPayload::new()
            .bind_to_request(&mut request, &acl)
            .unwrap();

        assert_eq!(
            Some(
                "<AccessControlPolicy xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
                 <Owner><ID>owner-id</ID><DisplayName>Owner</DisplayName></Owner>\
                 <AccessControlList>\
                 <Grant><Grantee xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
                 xsi:type=\"CanonicalUser\"><ID>owner-id</ID></Grantee>\
                 <Permission>FULL_CONTROL</Permission></Grant>\
                 <Grant><Grantee xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
                 xsi:type=\"Group\"><URI>http://acs.amazonaws.com/groups/s3/LogDelivery</URI>\
                 </Grantee><Permission>WRITE</Permission></Grant>\
                 </AccessControlList></AccessControlPolicy>"
            ),
            request.payload_as_str()
        );
    }

    #[test]
    fn test_owner_is_optional() {
        let acl = AccessControlList::builder().build();
        let mut request = HttpRequest::default();
        BindAclToXmlPayload::new()
            .bind_to_request(&mut request, &acl)
            .unwrap();
        assert_eq!(
            Some(
                "<AccessControlPolicy xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
                 <AccessControlList/></AccessControlPolicy>"
            ),
            request.payload_as_str()
        );
    }
}
