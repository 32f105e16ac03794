//! Memoir API Client
//!
//! JSON calls with bearer-token attachment, one wrapper per endpoint.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::http::{interpret, FetchTransport, HttpRequest, HttpResponse, Method, Transport};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Category, Credentials, FileRecord, LoginResponse, NewCategory, NewPerson, Person};
use crate::session::{BrowserStorage, KeyValueStore, SessionStore};

// ========================
// Endpoint Paths
// ========================

pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const SIGN_UP: &str = "/sign_up";
    pub const CATEGORY: &str = "/home/category";
    pub const CATEGORIES: &str = "/home/categories";
    pub const PERSON: &str = "/home/person";

    pub fn category(id: u32) -> String {
        format!("/home/category/{}", id)
    }

    pub fn category_people(id: u32) -> String {
        format!("/home/category/{}/people", id)
    }

    pub fn person(id: u32) -> String {
        format!("/home/person/{}", id)
    }

    pub fn person_files(id: u32) -> String {
        format!("/home/person/{}/files", id)
    }

    pub fn person_file(person_id: u32, file_id: u32) -> String {
        format!("/home/person/{}/files/{}", person_id, file_id)
    }

    pub fn person_upload(id: u32) -> String {
        format!("/home/person/{}/upload", id)
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient<T, K> {
    config: ApiConfig,
    transport: T,
    session: SessionStore<K>,
}

/// Client used by the running app
pub type BrowserClient = ApiClient<FetchTransport, BrowserStorage>;

impl BrowserClient {
    pub fn browser(config: ApiConfig) -> Self {
        ApiClient::new(config, FetchTransport, BrowserStorage)
    }
}

impl<T, K: KeyValueStore> ApiClient<T, K> {
    pub fn new(config: ApiConfig, transport: T, kv: K) -> Self {
        Self {
            config,
            transport,
            session: SessionStore::new(kv),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore<K> {
        &self.session
    }
}

impl<T: Transport, K: KeyValueStore> ApiClient<T, K> {
    fn build(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = Vec::new();
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
        }
    }

    async fn exchange(&self, method: Method, path: &str, body: Option<String>) -> ApiResult<HttpResponse> {
        log::debug!("{} {}", method.as_str(), path);
        let result = self.transport.send(self.build(method, path, body)).await;
        match &result {
            Ok(response) => log::debug!("{} {} -> {}", method.as_str(), path, response.status),
            Err(e) => log::warn!("{} {} failed: {}", method.as_str(), path, e),
        }
        result
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        interpret(self.exchange(Method::Get, path, None).await?)
    }

    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<R> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        interpret(self.exchange(Method::Post, path, Some(body)).await?)
    }

    /// Success is the status alone; the body is ignored
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self.exchange(Method::Delete, path, None).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(ApiError::from_status(response.status, &response.body))
        }
    }

    // ========================
    // Account
    // ========================

    pub async fn login(&self, name: &str, password: &str) -> ApiResult<LoginResponse> {
        self.post(paths::LOGIN, &Credentials { name, password }).await
    }

    pub async fn sign_up(&self, name: &str, password: &str) -> ApiResult<Value> {
        self.post(paths::SIGN_UP, &Credentials { name, password }).await
    }

    // ========================
    // Categories
    // ========================

    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.get(paths::CATEGORIES).await
    }

    pub async fn create_category(&self, cat_name: &str) -> ApiResult<Category> {
        self.post(paths::CATEGORY, &NewCategory { cat_name }).await
    }

    pub async fn delete_category(&self, id: u32) -> ApiResult<()> {
        self.delete(&paths::category(id)).await
    }

    // ========================
    // People
    // ========================

    pub async fn list_people(&self, category_id: u32) -> ApiResult<Vec<Person>> {
        self.get(&paths::category_people(category_id)).await
    }

    pub async fn create_person(&self, person_name: &str, category_id: u32) -> ApiResult<Person> {
        self.post(paths::PERSON, &NewPerson { person_name, category_id }).await
    }

    pub async fn delete_person(&self, id: u32) -> ApiResult<()> {
        self.delete(&paths::person(id)).await
    }

    // ========================
    // Files
    // ========================

    pub async fn list_files(&self, person_id: u32) -> ApiResult<Vec<FileRecord>> {
        self.get(&paths::person_files(person_id)).await
    }

    pub async fn delete_file(&self, person_id: u32, file_id: u32) -> ApiResult<()> {
        self.delete(&paths::person_file(person_id, file_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{path_of, MockTransport};
    use crate::session::{MemoryStore, Session};

    fn client(transport: MockTransport) -> (ApiClient<MockTransport, MemoryStore>, MemoryStore) {
        let kv = MemoryStore::new();
        (ApiClient::new(ApiConfig::default(), transport, kv.clone()), kv)
    }

    fn sign_in(client: &ApiClient<MockTransport, MemoryStore>) {
        client
            .session()
            .persist(&Session { token: "t1".into(), username: None, user_id: None })
            .unwrap();
    }

    #[tokio::test]
    async fn test_bearer_attached_when_token_present() {
        let transport = MockTransport::always(200, "[]");
        let (client, _) = client(transport.clone());
        sign_in(&client);

        client.list_categories().await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].header("Authorization"), Some("Bearer t1"));
        assert_eq!(path_of(&sent[0].url), "/home/categories");
    }

    #[tokio::test]
    async fn test_no_auth_header_without_token() {
        let transport = MockTransport::always(200, r#"{"access_token":"t1","user_id":7}"#);
        let (client, _) = client(transport.clone());

        client.login("alice", "x").await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].header("Authorization"), None);
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
        let body: Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "alice", "password": "x"}));
    }

    #[tokio::test]
    async fn test_create_person_posts_category_id() {
        let transport = MockTransport::always(200, r#"{"id":5,"person_name":"Ann","category_id":2}"#);
        let (client, _) = client(transport.clone());
        sign_in(&client);

        let person = client.create_person("Ann", 2).await.unwrap();
        assert_eq!(person.id, 5);

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(path_of(&sent[0].url), "/home/person");
        let body: Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["category_id"], 2);
    }

    #[tokio::test]
    async fn test_delete_paths() {
        let transport = MockTransport::always(200, "");
        let (client, _) = client(transport.clone());
        sign_in(&client);

        client.delete_category(1).await.unwrap();
        client.delete_person(2).await.unwrap();
        client.delete_file(2, 3).await.unwrap();

        assert_eq!(
            transport.calls(),
            vec![
                (Method::Delete, "/home/category/1".to_string()),
                (Method::Delete, "/home/person/2".to_string()),
                (Method::Delete, "/home/person/2/files/3".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_failure_surfaces_detail() {
        let transport = MockTransport::always(403, r#"{"detail":"Not your category"}"#);
        let (client, _) = client(transport);

        let err = client.delete_category(1).await.unwrap_err();
        assert_eq!(err.user_message("Delete failed"), "Not your category");
    }

    #[tokio::test]
    async fn test_network_failure_passes_through() {
        let transport = MockTransport::new(|_| Err(ApiError::Network("connection refused".into())));
        let (client, _) = client(transport);

        let err = client.list_people(4).await.unwrap_err();
        assert_eq!(err, ApiError::Network("connection refused".into()));
    }
}
