//! HTTP Transport
//!
//! Request/response plumbing behind a trait so the client runs against
//! `fetch` in the browser and an in-memory fake in tests.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One request, one response. No retries, no timeout.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

/// `window.fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn js_error(e: JsValue) -> ApiError {
    ApiError::Browser(format!("{:?}", e))
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let window = web_sys::window().ok_or_else(|| ApiError::Browser("no window".into()))?;

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }
        let req = Request::new_with_str_and_init(&request.url, &init).map_err(js_error)?;
        for (name, value) in &request.headers {
            req.headers().set(name, value).map_err(js_error)?;
        }

        let value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        let response: Response = value.dyn_into().map_err(js_error)?;

        // An unreadable body is treated like an empty one
        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        Ok(HttpResponse::new(response.status(), body))
    }
}

/// Map a response to the expected record or an `ApiError`
pub fn interpret<R: DeserializeOwned>(response: HttpResponse) -> ApiResult<R> {
    if !response.is_success() {
        return Err(ApiError::from_status(response.status, &response.body));
    }
    let body = if response.body.trim().is_empty() { "{}" } else { response.body.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_interpret_success() {
        let cats: Vec<Category> =
            interpret(HttpResponse::new(200, r#"[{"id":1,"cat_name":"Family"},{"id":2,"cat_name":"Friends"}]"#)).unwrap();
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[1].cat_name, "Friends");
    }

    #[test]
    fn test_interpret_status_error_carries_detail() {
        let err = interpret::<Vec<Category>>(HttpResponse::new(404, r#"{"detail":"Category not found"}"#)).unwrap_err();
        assert_eq!(err.detail(), Some("Category not found"));
    }

    #[test]
    fn test_interpret_wrong_shape_is_decode_error() {
        let err = interpret::<Vec<Category>>(HttpResponse::new(200, r#"{"oops":true}"#)).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let req = HttpRequest {
            method: Method::Get,
            url: "http://x/home/categories".into(),
            headers: vec![("Authorization".into(), "Bearer t1".into())],
            body: None,
        };
        assert_eq!(req.header("authorization"), Some("Bearer t1"));
        assert_eq!(req.header("Content-Type"), None);
    }
}
