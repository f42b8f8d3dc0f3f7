use crate::model::role::{Capability, Role};
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, error::ErrorUnauthorized};
use futures::future::{Ready, ready};

/// The authenticated caller, placed in request extensions by `auth_middleware`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: u64,
    pub username: String,
    pub role: Role,

    /// Present only if this user is linked to an employee record
    pub employee_id: Option<u64>,
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthUser>()
                .cloned()
                .ok_or_else(|| ErrorUnauthorized("Missing token")),
        )
    }
}

impl AuthUser {
    pub fn require(&self, capability: Capability) -> actix_web::Result<()> {
        if self.role.can(capability) {
            Ok(())
        } else {
            tracing::debug!(user_id = self.user_id, role = %self.role, %capability, "Capability denied");
            Err(actix_web::error::ErrorForbidden(format!(
                "{} cannot {}",
                self.role, capability
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    fn user(role: Role) -> AuthUser {
        AuthUser {
            user_id: 1,
            username: "jane".to_string(),
            role,
            employee_id: None,
        }
    }

    #[actix_web::test]
    async fn extractor_reads_request_extensions() {
        let req = test::TestRequest::default().to_http_request();
        assert!(AuthUser::extract(&req).await.is_err());

        req.extensions_mut().insert(user(Role::Tl));
        let extracted = AuthUser::extract(&req).await.unwrap();
        assert_eq!(extracted.role, Role::Tl);
        assert_eq!(extracted.username, "jane");
    }

    #[::core::prelude::v1::test]
    fn require_follows_capability_table() {
        assert!(user(Role::Employee).require(Capability::ViewAttendance).is_ok());
        assert!(user(Role::Employee).require(Capability::ManagePayroll).is_err());
        assert!(user(Role::Admin).require(Capability::ManagePayroll).is_ok());
    }
}
