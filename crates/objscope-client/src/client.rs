use objscope_protocol::{endpoints, probe_url, request_base, Operation, PROBE_STATUS};
use objscope_types::{DeletionSentinel, Document, DocumentId, Envelope, ListingEntry, Namespace};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, ConnectivityFailure};
use crate::request::{build_request, RequestSpec};
use crate::response::Reply;

/// A client bound to one connectivity target and one namespace.
///
/// Construction probes the service once; after that the client holds no
/// mutable state. The request base is fixed for the client's lifetime and the
/// transport is shared by clones and sub-clients, so one client can be used
/// from many tasks at once.
#[derive(Clone, Debug)]
pub struct ObjectClient {
    target: String,
    namespace: Namespace,
    transport: Client,
    sentinel: DeletionSentinel,
    request_base: String,
    base_url: Url,
}

impl ObjectClient {
    /// Connect with a default transport.
    pub async fn connect(
        target: impl Into<String>,
        namespace: impl Into<Namespace>,
    ) -> ClientResult<Self> {
        Self::connect_with_transport(target, namespace, Client::new()).await
    }

    /// Connect using a caller-supplied transport.
    pub async fn connect_with_transport(
        target: impl Into<String>,
        namespace: impl Into<Namespace>,
        transport: Client,
    ) -> ClientResult<Self> {
        Self::bind(
            target.into(),
            namespace.into(),
            transport,
            DeletionSentinel::default(),
        )
        .await
    }

    /// Connect from a [`ClientConfig`]. Without a transport a default one is
    /// built for this client.
    pub async fn from_config(config: &ClientConfig, transport: Option<Client>) -> ClientResult<Self> {
        config.validate()?;
        Self::bind(
            config.target.clone(),
            config.namespace.clone(),
            transport.unwrap_or_else(Client::new),
            config.deletion_sentinel,
        )
        .await
    }

    /// A client for `scope` nested under this client's namespace.
    ///
    /// Shares the target and transport but probes the service again.
    ///
    /// A scope with no non-empty segment is a [`ClientError::Config`] error.
    pub async fn sub_client(&self, scope: impl AsRef<str>) -> ClientResult<Self> {
        let scope = scope.as_ref();
        let namespace = self.namespace.child(scope);
        if namespace.depth() == self.namespace.depth() {
            return Err(ClientError::Config(format!(
                "sub-client scope {scope:?} has no segments"
            )));
        }
        Self::bind(
            self.target.clone(),
            namespace,
            self.transport.clone(),
            self.sentinel,
        )
        .await
    }

    async fn bind(
        target: String,
        namespace: Namespace,
        transport: Client,
        sentinel: DeletionSentinel,
    ) -> ClientResult<Self> {
        if target.is_empty() {
            return Err(ClientError::Config(
                "connectivity target must not be empty".into(),
            ));
        }
        let probe = Url::parse(&probe_url(&target))
            .map_err(|e| ClientError::Config(format!("invalid target {target:?}: {e}")))?;
        let request_base = request_base(&target, &namespace);
        let base_url = Url::parse(&request_base)
            .map_err(|e| ClientError::Config(format!("invalid request base {request_base:?}: {e}")))?;

        ping(&transport, &target, probe).await?;
        tracing::debug!(%target, %namespace, "connected to object store");

        Ok(Self {
            target,
            namespace,
            transport,
            sentinel,
            request_base,
            base_url,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// `<target>/json/<namespace>`, or `<target>/json` for the root namespace.
    pub fn request_base(&self) -> &str {
        &self.request_base
    }

    pub fn transport(&self) -> &Client {
        &self.transport
    }

    pub fn deletion_sentinel(&self) -> DeletionSentinel {
        self.sentinel
    }

    // ---- Document operations ----

    /// Store `payload` as a new document and return the server-assigned ID.
    pub async fn insert_one<T: Serialize + ?Sized>(&self, payload: &T) -> ClientResult<DocumentId> {
        let body = serde_json::to_vec(payload)?;
        let envelope: Envelope = self
            .execute(RequestSpec::new(Operation::Insert).with_body(body))
            .await?
            .into_success()?;
        Ok(envelope.id)
    }

    /// Fetch a document into a type that carries the envelope itself.
    ///
    /// Returns `Ok(None)` when the document does not exist.
    pub async fn get_by_id<T: DeserializeOwned>(&self, id: impl AsRef<str>) -> ClientResult<Option<T>> {
        self.execute(RequestSpec::new(Operation::Get).with_id(id.as_ref()))
            .await?
            .into_found()
    }

    /// Fetch a document into `target`, returning whether it was found.
    ///
    /// `target` is left untouched when the document is absent or on error.
    pub async fn get_by_id_into<T: DeserializeOwned>(
        &self,
        id: impl AsRef<str>,
        target: &mut T,
    ) -> ClientResult<bool> {
        match self.get_by_id(id).await? {
            Some(found) => {
                *target = found;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Fetch a document together with its envelope.
    pub async fn get_document<T: DeserializeOwned>(
        &self,
        id: impl AsRef<str>,
    ) -> ClientResult<Option<Document<T>>> {
        self.get_by_id(id).await
    }

    /// Fetch only the payload of a document; the envelope is discarded.
    pub async fn get_by_id_without_envelope<T: DeserializeOwned>(
        &self,
        id: impl AsRef<str>,
    ) -> ClientResult<Option<T>> {
        Ok(self.get_document(id).await?.map(Document::into_data))
    }

    /// Replace the payload of a document.
    ///
    /// There is no not-found signal: a missing ID surfaces as
    /// [`ClientError::Remote`] with whatever status the server chose.
    pub async fn update_by_id_without_envelope<T: Serialize + ?Sized>(
        &self,
        id: impl AsRef<str>,
        payload: &T,
    ) -> ClientResult<()> {
        let body = serde_json::to_vec(payload)?;
        self.execute(
            RequestSpec::new(Operation::Update)
                .with_id(id.as_ref())
                .with_body(body),
        )
        .await?
        .into_unit()
    }

    /// Delete a document and return it as the server deleted it.
    ///
    /// Returns `Ok(None)` when the document does not exist.
    pub async fn delete_by_id(&self, id: impl AsRef<str>) -> ClientResult<Option<ListingEntry>> {
        self.execute(RequestSpec::new(Operation::Delete).with_id(id.as_ref()))
            .await?
            .into_found()
    }

    /// Every document in this namespace. Never `None`: an empty namespace
    /// yields an empty vector, even if the server answers `null`.
    pub async fn list_all(&self) -> ClientResult<Vec<ListingEntry>> {
        let entries: Option<Vec<ListingEntry>> = self
            .execute(RequestSpec::new(Operation::List))
            .await?
            .into_success()?;
        Ok(entries.unwrap_or_default())
    }

    /// [`list_all`](Self::list_all) without entries the configured
    /// [`DeletionSentinel`] marks as deleted.
    pub async fn list_live(&self) -> ClientResult<Vec<ListingEntry>> {
        let mut entries = self.list_all().await?;
        entries.retain(|entry| !entry.envelope.is_deleted(self.sentinel));
        Ok(entries)
    }

    async fn execute(&self, spec: RequestSpec<'_>) -> ClientResult<Reply> {
        let op = spec.op;
        let request = build_request(&self.transport, &self.base_url, spec)?;
        tracing::debug!(%op, method = %request.method(), url = %request.url(), "object store request");

        let response = self.transport.execute(request).await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        tracing::debug!(%op, status, bytes = body.len(), "object store response");

        Ok(Reply { op, status, body })
    }
}

/// Check that `target` is the object store by asking the diagnostic endpoint
/// for its distinguished status.
async fn ping(transport: &Client, target: &str, probe: Url) -> ClientResult<()> {
    let connectivity = |failure| ClientError::Connectivity {
        target: target.to_string(),
        failure,
    };

    let response = transport
        .get(probe)
        .send()
        .await
        .map_err(|e| connectivity(ConnectivityFailure::Transport(e)))?;
    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|e| connectivity(ConnectivityFailure::Transport(e)))?
        .to_vec();

    if status != PROBE_STATUS {
        return Err(connectivity(ConnectivityFailure::UnexpectedStatus {
            status,
            expected: PROBE_STATUS,
            body,
        }));
    }
    tracing::trace!(path = endpoints::PROBE, "probe ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum::routing::{any, get};
    use axum::Router;
    use objscope_mock::{MockConfig, MockServer, RunningMock};
    use serde::Deserialize;
    use serde_json::json;
    use tokio::net::TcpListener;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Named {
        name: String,
    }

    /// A caller type that embeds the envelope itself.
    #[derive(Debug, Default, Deserialize)]
    struct Item {
        #[serde(flatten)]
        envelope: Envelope,
        data: Named,
    }

    fn named(name: &str) -> Named {
        Named { name: name.into() }
    }

    async fn mock() -> RunningMock {
        MockServer::new(MockConfig::default())
            .spawn_local()
            .await
            .unwrap()
    }

    /// Serve an ad-hoc router that also answers the probe.
    async fn serve(router: Router) -> String {
        let router = router.route(
            endpoints::PROBE,
            get(|| async { StatusCode::from_u16(PROBE_STATUS).unwrap() }),
        );
        serve_raw(router).await
    }

    async fn serve_raw(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    // -----------------------------------------------------------------------
    // Construction and probing
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn connect_binds_request_base() {
        let server = mock().await;
        let client = ObjectClient::connect(server.url(), "test_scope").await.unwrap();
        assert_eq!(client.target(), server.url());
        assert_eq!(client.namespace().render(), "test_scope");
        assert_eq!(
            client.request_base(),
            format!("{}/json/test_scope", server.url())
        );
    }

    #[tokio::test]
    async fn root_namespace_base_has_no_trailing_slash() {
        let server = mock().await;
        let client = ObjectClient::connect(server.url(), "").await.unwrap();
        assert_eq!(client.request_base(), format!("{}/json", server.url()));
    }

    #[tokio::test]
    async fn empty_target_is_config_error() {
        let err = ObjectClient::connect("", "test_scope").await.unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));

        let config = ClientConfig::new("", "x");
        let err = ObjectClient::from_config(&config, None).await.unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[tokio::test]
    async fn unparseable_target_is_config_error() {
        let err = ObjectClient::connect("not a url", "x").await.unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[tokio::test]
    async fn unreachable_target_is_connectivity_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = ObjectClient::connect(format!("http://{addr}"), "x")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Connectivity {
                failure: ConnectivityFailure::Transport(_),
                ..
            }
        ));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn wrong_service_is_connectivity_error_with_status() {
        let url = serve_raw(Router::new().fallback(|| async { (StatusCode::OK, "hello") })).await;
        let err = ObjectClient::connect(url, "x").await.unwrap_err();
        match err {
            ClientError::Connectivity {
                failure: ConnectivityFailure::UnexpectedStatus { status, body, .. },
                ..
            } => {
                assert_eq!(status, 200);
                assert_eq!(body, b"hello");
            }
            other => panic!("expected wrong-service error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn sub_client_appends_scope_and_probes_again() {
        let probes = Arc::new(AtomicUsize::new(0));
        let counter = probes.clone();
        let url = serve_raw(Router::new().route(
            endpoints::PROBE,
            get(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { StatusCode::from_u16(PROBE_STATUS).unwrap() }
            }),
        ))
        .await;

        let parent = ObjectClient::connect(url.clone(), "test_scope").await.unwrap();
        assert_eq!(probes.load(Ordering::SeqCst), 1);

        let child = parent.sub_client("inventory").await.unwrap();
        assert_eq!(probes.load(Ordering::SeqCst), 2);
        assert_eq!(child.namespace().render(), "test_scope/inventory");
        assert_eq!(child.request_base(), format!("{url}/json/test_scope/inventory"));
        assert_eq!(child.target(), parent.target());
        // parent is unchanged
        assert_eq!(parent.namespace().render(), "test_scope");
    }

    #[tokio::test]
    async fn sub_client_rejects_empty_scope_without_probing() {
        let probes = Arc::new(AtomicUsize::new(0));
        let counter = probes.clone();
        let url = serve_raw(Router::new().route(
            endpoints::PROBE,
            get(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { StatusCode::from_u16(PROBE_STATUS).unwrap() }
            }),
        ))
        .await;

        let root = ObjectClient::connect(url.clone(), "").await.unwrap();
        for scope in ["", "/", "//"] {
            let err = root.sub_client(scope).await.unwrap_err();
            assert!(matches!(err, ClientError::Config(_)), "{scope:?}");
        }
        assert_eq!(probes.load(Ordering::SeqCst), 1);

        let nested = root.sub_client("a/b").await.unwrap();
        assert_eq!(nested.namespace().segments(), &["a".to_string(), "b".to_string()]);
        assert_eq!(nested.request_base(), format!("{url}/json/a/b"));
    }

    #[tokio::test]
    async fn from_config_carries_sentinel() {
        let server = mock().await;
        let config = ClientConfig::new(server.url(), "a/b")
            .with_deletion_sentinel(DeletionSentinel::NonPositive);
        let client = ObjectClient::from_config(&config, Some(Client::new()))
            .await
            .unwrap();
        assert_eq!(client.deletion_sentinel(), DeletionSentinel::NonPositive);
        assert_eq!(client.request_base(), format!("{}/json/a/b", server.url()));
        let child = client.sub_client("c").await.unwrap();
        assert_eq!(child.deletion_sentinel(), DeletionSentinel::NonPositive);
    }

    // -----------------------------------------------------------------------
    // CRUD against the mock store
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn insert_then_get_round_trip() {
        let server = mock().await;
        let client = ObjectClient::connect(server.url(), "test_scope").await.unwrap();

        let id = client.insert_one(&named("Test")).await.unwrap();
        assert!(!id.is_empty());

        let item: Item = client.get_by_id(&id).await.unwrap().expect("should exist");
        assert_eq!(item.envelope.id, id);
        assert_eq!(item.data, named("Test"));
        assert!(!item.envelope.is_deleted(client.deletion_sentinel()));
        assert!(item.envelope.created_at > 0);
    }

    #[tokio::test]
    async fn get_by_id_into_populates_target() {
        let server = mock().await;
        let client = ObjectClient::connect(server.url(), "test_scope").await.unwrap();
        let id = client.insert_one(&named("Test")).await.unwrap();

        let mut item = Item::default();
        assert!(client.get_by_id_into(&id, &mut item).await.unwrap());
        assert_eq!(item.envelope.id, id);
        assert_eq!(item.data.name, "Test");

        let mut untouched = Item::default();
        assert!(!client.get_by_id_into("missing", &mut untouched).await.unwrap());
        assert!(untouched.envelope.id.is_empty());
    }

    #[tokio::test]
    async fn get_without_envelope_returns_payload() {
        let server = mock().await;
        let client = ObjectClient::connect(server.url(), "test_scope").await.unwrap();
        let id = client.insert_one(&named("Plain")).await.unwrap();

        let payload: Named = client
            .get_by_id_without_envelope(&id)
            .await
            .unwrap()
            .expect("should exist");
        assert_eq!(payload, named("Plain"));

        let doc: Document<Named> = client.get_document(&id).await.unwrap().unwrap();
        assert_eq!(doc.id(), &id);
        assert_eq!(doc.data, named("Plain"));
    }

    #[tokio::test]
    async fn get_missing_is_not_found_not_error() {
        let server = mock().await;
        let client = ObjectClient::connect(server.url(), "test_scope").await.unwrap();
        let found: Option<Item> = client.get_by_id("no-such-id").await.unwrap();
        assert!(found.is_none());
        let payload: Option<Named> = client.get_by_id_without_envelope("no-such-id").await.unwrap();
        assert!(payload.is_none());
    }

    #[tokio::test]
    async fn update_replaces_payload() {
        let server = mock().await;
        let client = ObjectClient::connect(server.url(), "test_scope").await.unwrap();
        let id = client.insert_one(&named("Before")).await.unwrap();
        let before: Item = client.get_by_id(&id).await.unwrap().unwrap();

        client
            .update_by_id_without_envelope(&id, &named("After"))
            .await
            .unwrap();

        let after: Item = client.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(after.data, named("After"));
        assert_eq!(after.envelope.created_at, before.envelope.created_at);
        assert!(after.envelope.updated_at > before.envelope.updated_at);
    }

    #[tokio::test]
    async fn update_missing_is_remote_error() {
        let server = mock().await;
        let client = ObjectClient::connect(server.url(), "test_scope").await.unwrap();
        let err = client
            .update_by_id_without_envelope("no-such-id", &named("x"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn delete_returns_document_then_not_found() {
        let server = mock().await;
        let client = ObjectClient::connect(server.url(), "test_scope").await.unwrap();
        let id = client.insert_one(&json!({"name": "Doomed", "qty": 2})).await.unwrap();

        let deleted = client.delete_by_id(&id).await.unwrap().expect("was live");
        assert_eq!(deleted.id(), &id);
        assert_eq!(deleted.get("name"), Some(&json!("Doomed")));
        assert!(deleted.envelope.is_deleted(DeletionSentinel::Negative));

        assert!(client.delete_by_id(&id).await.unwrap().is_none());
        assert!(client.get_by_id::<Item>(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_all_empty_namespace_is_empty_vec() {
        let server = mock().await;
        let client = ObjectClient::connect(server.url(), "empty").await.unwrap();
        assert!(client.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_all_returns_namespace_documents_in_order() {
        let server = mock().await;
        let client = ObjectClient::connect(server.url(), "test_scope").await.unwrap();
        let a = client.insert_one(&named("a")).await.unwrap();
        let b = client.insert_one(&json!({"other": true})).await.unwrap();

        let listed = client.list_all().await.unwrap();
        let ids: Vec<_> = listed.iter().map(|e| e.id().clone()).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(listed[0].get("name"), Some(&json!("a")));
        assert_eq!(listed[1].get("other"), Some(&json!(true)));
    }

    #[tokio::test]
    async fn sub_clients_are_isolated() {
        let server = mock().await;
        let root = ObjectClient::connect(server.url(), "test_scope").await.unwrap();
        let inventory = root.sub_client("inventory").await.unwrap();
        let orders = root.sub_client("orders").await.unwrap();

        let id = inventory.insert_one(&named("Widget")).await.unwrap();
        assert!(orders.get_by_id::<Item>(&id).await.unwrap().is_none());
        assert!(root.list_all().await.unwrap().is_empty());
        assert_eq!(inventory.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_use_of_one_client() {
        let server = mock().await;
        let client = ObjectClient::connect(server.url(), "shared").await.unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let client = client.clone();
                tokio::spawn(async move { client.insert_one(&json!({"i": i})).await.unwrap() })
            })
            .collect();
        for h in handles {
            h.await.unwrap();
        }
        assert_eq!(client.list_all().await.unwrap().len(), 8);
        assert_eq!(server.store().len(), 8);
    }

    // -----------------------------------------------------------------------
    // Response translation against scripted servers
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn unexpected_status_is_remote_error_for_every_operation() {
        let url = serve(Router::new().route(
            "/json/broken",
            any(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
        ))
        .await;
        let client = ObjectClient::connect(url, "broken").await.unwrap();

        let errors = vec![
            client.insert_one(&named("x")).await.unwrap_err(),
            client.get_by_id::<Item>("x").await.unwrap_err(),
            client.update_by_id_without_envelope("x", &named("x")).await.unwrap_err(),
            client.delete_by_id("x").await.unwrap_err(),
            client.list_all().await.unwrap_err(),
        ];
        for err in errors {
            match err {
                ClientError::Remote { status, body } => {
                    assert_eq!(status, 503);
                    assert_eq!(body, b"down for maintenance");
                }
                other => panic!("expected remote error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn not_found_on_insert_and_list_is_remote_error() {
        let url = serve(Router::new().route(
            "/json/gone",
            any(|| async { StatusCode::NOT_FOUND }),
        ))
        .await;
        let client = ObjectClient::connect(url, "gone").await.unwrap();
        assert_eq!(client.insert_one(&named("x")).await.unwrap_err().status(), Some(404));
        assert_eq!(client.list_all().await.unwrap_err().status(), Some(404));
    }

    #[tokio::test]
    async fn insert_with_undecodable_body_is_serialization_error() {
        let url = serve(Router::new().route("/json/odd", any(|| async { "not json" }))).await;
        let client = ObjectClient::connect(url, "odd").await.unwrap();
        let err = client.insert_one(&named("x")).await.unwrap_err();
        assert!(matches!(err, ClientError::Serialization(_)));
    }

    #[tokio::test]
    async fn get_and_delete_with_undecodable_body_is_serialization_error() {
        let url = serve(Router::new().route("/json/odd", any(|| async { "not json" }))).await;
        let client = ObjectClient::connect(url, "odd").await.unwrap();

        let err = client.get_by_id::<Envelope>("x").await.unwrap_err();
        assert!(matches!(err, ClientError::Serialization(_)));
        let err = client.delete_by_id("x").await.unwrap_err();
        assert!(matches!(err, ClientError::Serialization(_)));
    }

    #[tokio::test]
    async fn remote_error_keeps_non_utf8_body_verbatim() {
        let url = serve(Router::new().route(
            "/json/binary",
            any(|| async { (StatusCode::INTERNAL_SERVER_ERROR, vec![0xff_u8, 0xfe, b'o', b'k']) }),
        ))
        .await;
        let client = ObjectClient::connect(url, "binary").await.unwrap();

        match client.list_all().await.unwrap_err() {
            ClientError::Remote { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, vec![0xff, 0xfe, b'o', b'k']);
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn wrong_service_keeps_non_utf8_body_verbatim() {
        let url = serve_raw(
            Router::new().fallback(|| async { (StatusCode::OK, vec![0xc3_u8, 0x28]) }),
        )
        .await;
        let err = ObjectClient::connect(url, "x").await.unwrap_err();
        assert_eq!(err.body(), Some(&[0xc3, 0x28][..]));
    }

    #[tokio::test]
    async fn list_null_body_is_empty_vec() {
        let url = serve(Router::new().route("/json/nil", get(|| async { "null" }))).await;
        let client = ObjectClient::connect(url, "nil").await.unwrap();
        assert!(client.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_live_uses_configured_sentinel() {
        let url = serve(Router::new().route(
            "/json/mixed",
            get(|| async {
                r#"[
                    {"id":"live-neg","create_at":1,"update_at":1,"delete_at":-1,"data":{}},
                    {"id":"live-zero","create_at":1,"update_at":1,"delete_at":0,"data":{}},
                    {"id":"dead","create_at":1,"update_at":2,"delete_at":2,"data":null}
                ]"#
            }),
        ))
        .await;

        let negative = ObjectClient::connect(url.clone(), "mixed").await.unwrap();
        let ids: Vec<_> = negative
            .list_live()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.envelope.id.into_string())
            .collect();
        assert_eq!(ids, vec!["live-neg"]);

        let config = ClientConfig::new(url, "mixed")
            .with_deletion_sentinel(DeletionSentinel::NonPositive);
        let non_positive = ObjectClient::from_config(&config, None).await.unwrap();
        let ids: Vec<_> = non_positive
            .list_live()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.envelope.id.into_string())
            .collect();
        assert_eq!(ids, vec!["live-neg", "live-zero"]);

        assert_eq!(negative.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn insert_and_delete_example_scenario() {
        let url = serve(
            Router::new()
                .route(
                    "/json/test_scope/inventory",
                    axum::routing::post(|| async {
                        r#"{"id":"abc-1","create_at":1700000000000000000,"update_at":1700000000000000000,"delete_at":-1,"data":{"name":"Test"}}"#
                    })
                    .delete(|| async { StatusCode::NOT_FOUND }),
                ),
        )
        .await;

        let root = ObjectClient::connect(url, "test_scope").await.unwrap();
        let inventory = root.sub_client("inventory").await.unwrap();

        let id = inventory.insert_one(&json!({"name": "Test"})).await.unwrap();
        assert_eq!(id, "abc-1");

        let deleted = inventory.delete_by_id(&id).await.unwrap();
        assert!(deleted.is_none());
    }
}
