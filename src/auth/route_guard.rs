// Route guard middleware
//
// Decides, for every page navigation, whether the request may proceed or
// must be redirected, based purely on the session cookies and the path.
// Evaluation is a total function over {role, company status, path}; the
// middleware wrapper only translates the decision into an HTTP redirect.

use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::models::Role;
use crate::auth::{AUTH_TOKEN_COOKIE, COMPANY_STATUS_COOKIE, USER_ROLE_COOKIE};
use crate::companies::CompanyStatus;

pub const ADMIN_HOME: &str = "/admin";
pub const ADMIN_LOGIN: &str = "/admin/login";
pub const AGENT_HOME: &str = "/guide";
pub const AGENT_PENDING: &str = "/guide/pending";
pub const LOGIN: &str = "/login";
pub const HOME: &str = "/home";

/// Pages reserved for unauthenticated visitors
const AUTH_PAGES: [&str; 4] = ["/login", "/register", "/register/user", "/register/agent"];

/// Per-request session attributes parsed from cookies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub company_status: Option<CompanyStatus>,
}

impl SessionState {
    /// Parse the session from request cookies; unknown values are treated as
    /// absent rather than rejected
    pub fn from_cookies(jar: &CookieJar) -> Self {
        Self {
            token: jar.get(AUTH_TOKEN_COOKIE).map(|c| c.value().to_string()),
            role: jar
                .get(USER_ROLE_COOKIE)
                .and_then(|c| Role::from_str(c.value()).ok()),
            company_status: jar
                .get(COMPANY_STATUS_COOKIE)
                .and_then(|c| CompanyStatus::from_str(c.value()).ok()),
        }
    }
}

/// Outcome of a guard evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectTo(&'static str),
}

/// Evaluate the guard rules for one navigation. Rules apply in order and the
/// first match wins:
/// 1. Admin area (except its login page) without an admin session -> admin login
/// 2. Admin login page with an admin session -> admin home
/// 3. Agent area without an agent session -> login
/// 4. Agent area with a non-active company status -> pending page
/// 5. Auth-only page with any session token -> home for that role
/// 6. Otherwise pass through
pub fn evaluate(session: &SessionState, path: &str) -> RouteDecision {
    // The pending page itself sits outside the guard, otherwise rule 4
    // would redirect to it forever
    if path.starts_with(AGENT_PENDING) {
        return RouteDecision::Allow;
    }

    let is_admin_route = path.starts_with(ADMIN_HOME);
    let is_agent_route = path.starts_with(AGENT_HOME);
    let is_auth_route = AUTH_PAGES.contains(&path);

    if is_admin_route && path != ADMIN_LOGIN && session.role != Some(Role::Admin) {
        return RouteDecision::RedirectTo(ADMIN_LOGIN);
    }
    if path == ADMIN_LOGIN && session.role == Some(Role::Admin) {
        return RouteDecision::RedirectTo(ADMIN_HOME);
    }

    if is_agent_route {
        if session.role != Some(Role::Agent) {
            return RouteDecision::RedirectTo(LOGIN);
        }
        if let Some(status) = session.company_status {
            if status != CompanyStatus::Active {
                return RouteDecision::RedirectTo(AGENT_PENDING);
            }
        }
    }

    if is_auth_route && session.token.is_some() {
        return match session.role {
            Some(Role::Admin) => RouteDecision::RedirectTo(ADMIN_HOME),
            Some(Role::Agent) => RouteDecision::RedirectTo(AGENT_HOME),
            _ => RouteDecision::RedirectTo(HOME),
        };
    }

    RouteDecision::Allow
}

/// Axum middleware applying the guard to page navigations. API routes and
/// static assets are outside its matcher, as in the original navigation rules.
pub async fn route_guard(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();

    if path.starts_with("/api") || path == "/favicon.ico" {
        return next.run(request).await;
    }

    let jar = CookieJar::from_headers(request.headers());
    let session = SessionState::from_cookies(&jar);

    match evaluate(&session, &path) {
        RouteDecision::Allow => next.run(request).await,
        RouteDecision::RedirectTo(target) => {
            tracing::debug!("Route guard redirecting {} -> {}", path, target);
            Redirect::temporary(target).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn session(
        token: Option<&str>,
        role: Option<Role>,
        company_status: Option<CompanyStatus>,
    ) -> SessionState {
        SessionState {
            token: token.map(|t| t.to_string()),
            role,
            company_status,
        }
    }

    #[test]
    fn test_anonymous_admin_request_redirects_to_admin_login() {
        let decision = evaluate(&session(None, None, None), "/admin");
        assert_eq!(decision, RouteDecision::RedirectTo(ADMIN_LOGIN));
    }

    #[test]
    fn test_admin_on_admin_login_redirects_home() {
        let s = session(Some("tok"), Some(Role::Admin), None);
        assert_eq!(evaluate(&s, "/admin/login"), RouteDecision::RedirectTo(ADMIN_HOME));
    }

    #[test]
    fn test_admin_area_allows_admin() {
        let s = session(Some("tok"), Some(Role::Admin), None);
        assert_eq!(evaluate(&s, "/admin/reservations"), RouteDecision::Allow);
    }

    #[test]
    fn test_non_admin_cannot_enter_admin_subpages() {
        let s = session(Some("tok"), Some(Role::User), None);
        assert_eq!(
            evaluate(&s, "/admin/companies"),
            RouteDecision::RedirectTo(ADMIN_LOGIN)
        );
    }

    #[test]
    fn test_agent_area_requires_agent_role() {
        let s = session(Some("tok"), Some(Role::User), None);
        assert_eq!(evaluate(&s, "/guide"), RouteDecision::RedirectTo(LOGIN));

        let anonymous = session(None, None, None);
        assert_eq!(evaluate(&anonymous, "/guide"), RouteDecision::RedirectTo(LOGIN));
    }

    #[test]
    fn test_pending_agent_redirects_to_pending_page() {
        let s = session(Some("tok"), Some(Role::Agent), Some(CompanyStatus::Pending));
        assert_eq!(evaluate(&s, "/guide"), RouteDecision::RedirectTo(AGENT_PENDING));

        let rejected = session(Some("tok"), Some(Role::Agent), Some(CompanyStatus::Rejected));
        assert_eq!(
            evaluate(&rejected, "/guide/tours"),
            RouteDecision::RedirectTo(AGENT_PENDING)
        );
    }

    #[test]
    fn test_active_agent_passes_through() {
        let s = session(Some("tok"), Some(Role::Agent), Some(CompanyStatus::Active));
        assert_eq!(evaluate(&s, "/guide"), RouteDecision::Allow);
    }

    #[test]
    fn test_pending_page_is_never_redirected() {
        let s = session(Some("tok"), Some(Role::Agent), Some(CompanyStatus::Pending));
        assert_eq!(evaluate(&s, "/guide/pending"), RouteDecision::Allow);
    }

    #[test]
    fn test_logged_in_users_leave_auth_pages() {
        let user = session(Some("tok"), Some(Role::User), None);
        assert_eq!(evaluate(&user, "/login"), RouteDecision::RedirectTo(HOME));

        let agent = session(Some("tok"), Some(Role::Agent), Some(CompanyStatus::Active));
        assert_eq!(evaluate(&agent, "/register"), RouteDecision::RedirectTo(AGENT_HOME));

        let admin = session(Some("tok"), Some(Role::Admin), None);
        assert_eq!(evaluate(&admin, "/register/user"), RouteDecision::RedirectTo(ADMIN_HOME));
    }

    #[test]
    fn test_anonymous_visitors_may_use_auth_pages() {
        let s = session(None, None, None);
        assert_eq!(evaluate(&s, "/login"), RouteDecision::Allow);
        assert_eq!(evaluate(&s, "/register/agent"), RouteDecision::Allow);
    }

    #[test]
    fn test_public_pages_pass_through() {
        let s = session(None, None, None);
        assert_eq!(evaluate(&s, "/"), RouteDecision::Allow);
        assert_eq!(evaluate(&s, "/home"), RouteDecision::Allow);
        assert_eq!(evaluate(&s, "/scoreboard"), RouteDecision::Allow);
    }

    prop_compose! {
        fn arb_session()(
            has_token in any::<bool>(),
            role in prop_oneof![
                Just(None),
                Just(Some(Role::User)),
                Just(Some(Role::Agent)),
                Just(Some(Role::Admin)),
            ],
            status in prop_oneof![
                Just(None),
                Just(Some(CompanyStatus::Pending)),
                Just(Some(CompanyStatus::Active)),
                Just(Some(CompanyStatus::Rejected)),
            ],
        ) -> SessionState {
            SessionState {
                token: has_token.then(|| "tok".to_string()),
                role,
                company_status: status,
            }
        }
    }

    proptest! {
        // Every session/path combination yields a decision, and redirects
        // never point back at the path that triggered them
        #[test]
        fn prop_guard_never_redirects_to_itself(
            session in arb_session(),
            path in "/(admin|guide|login|register|home)(/[a-z]{1,8})?",
        ) {
            if let RouteDecision::RedirectTo(target) = evaluate(&session, &path) {
                prop_assert_ne!(target, path.as_str());
            }
        }

        // Redirect chains always settle: for a fixed session, following the
        // guard's redirects reaches an allowed page within a few hops
        #[test]
        fn prop_redirect_chains_terminate(session in arb_session()) {
            for start in ["/admin", "/admin/login", "/guide", "/guide/tours", "/login", "/home"] {
                let mut path = start.to_string();
                let mut settled = false;
                for _ in 0..4 {
                    match evaluate(&session, &path) {
                        RouteDecision::Allow => {
                            settled = true;
                            break;
                        }
                        RouteDecision::RedirectTo(target) => path = target.to_string(),
                    }
                }
                prop_assert!(settled, "guard loops from {} for {:?}", start, session);
            }
        }
    }
}
