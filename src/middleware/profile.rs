use crate::models::UserProfile;
use actix_web::{
    dev::Payload, error::ErrorBadRequest, http::header::HeaderName, Error, FromRequest,
    HttpRequest,
};
use std::future::{ready, Ready};
use std::str::FromStr;

pub const PLAN_HEADER: &str = "x-user-plan";
pub const ROLE_HEADER: &str = "x-user-role";
pub const SUPER_ADMIN_HEADER: &str = "x-super-admin";

fn get_header<T>(req: &HttpRequest, header_name: &'static str) -> Result<Option<T>, String>
where
    T: FromStr,
{
    let header_value = match req.headers().get(HeaderName::from_static(header_name)) {
        Some(value) => value,
        None => return Ok(None),
    };

    header_value
        .to_str()
        .map_err(|_| format!("header {header_name} can't be converted to string"))?
        .parse::<T>()
        .map_err(|_| format!("header {header_name} has wrong type"))
        .map(Some)
}

/// Profile of the caller, as forwarded by the authenticating gateway.
///
/// The headers are trusted as they arrive: this service performs no
/// authentication of its own. It must only be reachable through a gateway
/// that strips client supplied `x-user-*` and `x-super-admin` headers and
/// sets them from the authenticated account.
///
/// The plan and role are taken verbatim; unknown values are resolved later by
/// [`UserProfile::context`]. A malformed super admin flag rejects the request.
impl FromRequest for UserProfile {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(profile_from_headers(req))
    }
}

fn profile_from_headers(req: &HttpRequest) -> Result<UserProfile, Error> {
    let plan = get_header::<String>(req, PLAN_HEADER).map_err(ErrorBadRequest)?;
    let role = get_header::<String>(req, ROLE_HEADER).map_err(ErrorBadRequest)?;
    let super_admin = get_header::<bool>(req, SUPER_ADMIN_HEADER)
        .map_err(ErrorBadRequest)?
        .unwrap_or(false);

    let profile = UserProfile {
        plan,
        role,
        super_admin,
    };
    tracing::debug!(profile = ?profile, "Resolved caller profile");

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn missing_headers_give_empty_profile() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(profile_from_headers(&req).unwrap(), UserProfile::default());
    }

    #[test]
    fn headers_are_copied_into_profile() {
        let req = TestRequest::default()
            .insert_header((PLAN_HEADER, "pro"))
            .insert_header((ROLE_HEADER, "admin"))
            .insert_header((SUPER_ADMIN_HEADER, "true"))
            .to_http_request();

        let profile = profile_from_headers(&req).unwrap();
        assert_eq!(profile.plan.as_deref(), Some("pro"));
        assert_eq!(profile.role.as_deref(), Some("admin"));
        assert!(profile.super_admin);
    }

    #[test]
    fn malformed_super_admin_flag_is_rejected() {
        let req = TestRequest::default()
            .insert_header((SUPER_ADMIN_HEADER, "maybe"))
            .to_http_request();
        assert!(profile_from_headers(&req).is_err());
    }
}
