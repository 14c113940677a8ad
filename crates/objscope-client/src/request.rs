use objscope_protocol::{Operation, ID_PARAM};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Request, Url};

use crate::error::ClientResult;

/// Everything that varies between document requests.
///
/// The target URL is always the client's request base; only the method, the
/// query and the body change.
#[derive(Debug)]
pub(crate) struct RequestSpec<'a> {
    pub op: Operation,
    pub query: Vec<(&'static str, &'a str)>,
    pub body: Option<Vec<u8>>,
}

impl<'a> RequestSpec<'a> {
    pub fn new(op: Operation) -> Self {
        Self {
            op,
            query: Vec::new(),
            body: None,
        }
    }

    /// Address a single document with `id=<id>`.
    pub fn with_id(mut self, id: &'a str) -> Self {
        self.query.push((ID_PARAM, id));
        self
    }

    /// Attach an already encoded JSON body.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

pub(crate) fn http_method(op: Operation) -> Method {
    match op {
        Operation::Insert => Method::POST,
        Operation::Get | Operation::List => Method::GET,
        Operation::Update => Method::PUT,
        Operation::Delete => Method::DELETE,
    }
}

/// Build a request against `base`.
///
/// Query parameters are URL-encoded; the body is attached unmodified. The
/// only header added is the content type a JSON body needs. Authentication
/// would be attached here; the service does not define any yet.
pub(crate) fn build_request(
    transport: &Client,
    base: &Url,
    spec: RequestSpec<'_>,
) -> ClientResult<Request> {
    debug_assert_eq!(
        spec.query.iter().any(|(key, _)| *key == ID_PARAM),
        spec.op.takes_id(),
        "{} request with wrong id query",
        spec.op
    );
    debug_assert_eq!(
        spec.body.is_some(),
        spec.op.has_body(),
        "{} request with wrong body shape",
        spec.op
    );
    let mut builder = transport.request(http_method(spec.op), base.clone());
    if !spec.query.is_empty() {
        builder = builder.query(&spec.query);
    }
    if let Some(body) = spec.body {
        builder = builder
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body);
    }
    Ok(builder.build()?)
}
