//! In-memory transport for tests

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use super::{HttpRequest, HttpResponse, Method, Transport};
use crate::error::ApiResult;

type Handler = dyn Fn(&HttpRequest) -> ApiResult<HttpResponse>;

/// Answers every request with `handler` and records what was sent
#[derive(Clone)]
pub struct MockTransport {
    handler: Rc<Handler>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new(handler: impl Fn(&HttpRequest) -> ApiResult<HttpResponse> + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
            sent: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Same status and body for every request
    pub fn always(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::new(move |_| Ok(HttpResponse::new(status, body.clone())))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    /// `(method, path)` pairs with the base origin stripped
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.sent
            .borrow()
            .iter()
            .map(|r| (r.method, path_of(&r.url).to_string()))
            .collect()
    }
}

pub fn path_of(url: &str) -> &str {
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    rest.find('/').map(|i| &rest[i..]).unwrap_or("/")
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        self.sent.borrow_mut().push(request.clone());
        (self.handler)(&request)
    }
}
