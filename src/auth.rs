//! Authentication Flows
//!
//! Login, signup and logout, plus the dashboard guard.

use crate::api::{ApiClient, Transport};
use crate::error::{ApiError, ApiResult};
use crate::nav::Page;
use crate::session::{KeyValueStore, Session, SessionStore};

/// Post credentials and persist the returned session
pub async fn login<T: Transport, K: KeyValueStore>(
    client: &ApiClient<T, K>,
    name: &str,
    password: &str,
) -> ApiResult<Session> {
    let name = name.trim();
    let response = client.login(name, password).await?;

    let Some(token) = response.access_token.filter(|t| !t.is_empty()) else {
        log::warn!("login response without access token");
        return Err(ApiError::Status { status: 200, detail: None });
    };
    let session = Session {
        token,
        username: Some(response.username.unwrap_or_else(|| name.to_string())),
        user_id: response.user_id,
    };
    client.session().persist(&session)?;
    log::info!("signed in as user {:?}", session.user_id);
    Ok(session)
}

/// Register an account; does not sign in
pub async fn sign_up<T: Transport, K: KeyValueStore>(
    client: &ApiClient<T, K>,
    name: &str,
    password: &str,
) -> ApiResult<()> {
    client.sign_up(name.trim(), password).await?;
    log::info!("account created");
    Ok(())
}

/// Forget the session; the caller returns to the entry page
pub fn logout<K: KeyValueStore>(session: &SessionStore<K>) -> Page {
    session.clear();
    log::info!("signed out");
    Page::Login
}

/// Session for the dashboard, or the page to go to instead
pub fn require_session<K: KeyValueStore>(session: &SessionStore<K>) -> Result<Session, Page> {
    session.load().ok_or_else(|| {
        log::info!("no token, redirecting to login");
        Page::Login
    })
}

pub fn landing_page<K: KeyValueStore>(session: &SessionStore<K>) -> Page {
    match require_session(session) {
        Ok(_) => Page::Dashboard,
        Err(page) => page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{path_of, MockTransport};
    use crate::api::{HttpResponse, Method};
    use crate::config::{ApiConfig, TOKEN_KEY, USERNAME_KEY, USER_ID_KEY};
    use crate::session::MemoryStore;

    fn client(transport: MockTransport) -> (ApiClient<MockTransport, MemoryStore>, MemoryStore) {
        let kv = MemoryStore::new();
        (ApiClient::new(ApiConfig::default(), transport, kv.clone()), kv)
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let transport = MockTransport::always(200, r#"{"access_token":"t1","user_id":7}"#);
        let (client, kv) = client(transport.clone());

        let session = login(&client, " alice ", "x").await.unwrap();

        assert_eq!(session.token, "t1");
        assert_eq!(kv.get(TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(kv.get(USERNAME_KEY).as_deref(), Some("alice"));
        assert_eq!(kv.get(USER_ID_KEY).as_deref(), Some("7"));
        assert_eq!(landing_page(client.session()), Page::Dashboard);
        assert_eq!(transport.calls(), vec![(Method::Post, "/login".to_string())]);
    }

    #[tokio::test]
    async fn test_login_prefers_server_username() {
        let transport = MockTransport::always(200, r#"{"access_token":"t1","user_id":7,"username":"Alice"}"#);
        let (client, kv) = client(transport);
        login(&client, "alice", "x").await.unwrap();
        assert_eq!(kv.get(USERNAME_KEY).as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_login_failure_surfaces_detail() {
        let transport = MockTransport::always(401, r#"{"detail":"Invalid username or password"}"#);
        let (client, kv) = client(transport);

        let err = login(&client, "alice", "wrong").await.unwrap_err();
        assert_eq!(err.user_message("Login failed"), "Invalid username or password");
        assert_eq!(kv.len(), 0);
    }

    #[tokio::test]
    async fn test_login_without_token_fails() {
        let (client, kv) = client(MockTransport::always(200, r#"{"user_id":7}"#));
        let err = login(&client, "alice", "x").await.unwrap_err();
        assert_eq!(err.user_message("Login failed"), "Login failed");
        assert_eq!(kv.len(), 0);
    }

    #[tokio::test]
    async fn test_sign_up_does_not_sign_in() {
        let transport = MockTransport::new(|req| {
            assert_eq!(path_of(&req.url), "/sign_up");
            Ok(HttpResponse::new(200, r#"{"id":1,"name":"alice"}"#))
        });
        let (client, kv) = client(transport);
        sign_up(&client, "alice", "password1").await.unwrap();
        assert_eq!(kv.len(), 0);
        assert_eq!(landing_page(client.session()), Page::Login);
    }

    #[tokio::test]
    async fn test_logout_then_guard_redirects() {
        let transport = MockTransport::always(200, r#"{"access_token":"t1","user_id":7}"#);
        let (client, kv) = client(transport);
        login(&client, "alice", "x").await.unwrap();

        assert_eq!(logout(client.session()), Page::Login);
        assert_eq!(kv.len(), 0);
        assert_eq!(require_session(client.session()), Err(Page::Login));
    }
}
