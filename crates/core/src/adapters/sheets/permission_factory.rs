use google_drive3::api::Permission;

use crate::domain::report::PermissionGrant;

pub trait PermissionFactory {
    fn from_grant(grant: &PermissionGrant) -> Self;
}

impl PermissionFactory for Permission {
    fn from_grant(grant: &PermissionGrant) -> Self {
        Permission {
            type_: Some(grant.grantee_type.to_string()),
            role: Some(grant.role.to_string()),
            email_address: Some(grant.email_address.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{email::EmailAddress, report::build_permission_grant};

    #[test]
    fn test_from_grant() {
        let grant = build_permission_grant(EmailAddress::parse("me@example.com").unwrap());
        let permission = Permission::from_grant(&grant);

        assert_eq!(permission.type_.as_deref(), Some("user"));
        assert_eq!(permission.role.as_deref(), Some("writer"));
        assert_eq!(permission.email_address.as_deref(), Some("me@example.com"));
        assert_eq!(permission.id, None);
    }
}
