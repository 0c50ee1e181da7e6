//! HTTP client for the directory API
//!
//! Every call goes through [`ApiClient::send`], which attaches the bearer
//! token, logs the request and response, unwraps the `{success, data,
//! message}` envelope, and turns a 401 into a cleared session plus
//! [`ConsoleError::Unauthorized`].

use std::time::Instant;

use futures::future::try_join_all;
use halqa_core::{ConsoleError, ConsoleResult, Resource, item_path};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::ConsoleConfig;
use crate::models::AdminProfile;
use crate::session::{AuthSession, Session};

/// Login endpoint
pub const LOGIN_PATH: &str = "/admin/login";

/// Profile endpoint of the signed-in admin
pub const PROFILE_PATH: &str = "/admin/profile";

// ============================================================================
// API Client
// ============================================================================

/// REST client bound to one base URL and one session
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: &ConsoleConfig, session: Session) -> ConsoleResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ConsoleError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            session,
        })
    }

    /// The session this client authenticates with
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Transport
    // ========================================================================

    /// Send one request and return the decoded body
    ///
    /// Authenticated requests carry the bearer token; a 401 on them clears
    /// the session. Unauthenticated requests (login) report a 401 as an
    /// ordinary API error so the server's message reaches the user.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        authenticated: bool,
    ) -> ConsoleResult<Value> {
        let request_id = Uuid::new_v4();
        let started = Instant::now();

        let mut request = self.http.request(method.clone(), self.url(path));
        if authenticated {
            if let Some(token) = self.session.token() {
                request = request.bearer_auth(token);
            }
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%request_id, %method, path, "API request");

        let response = request.send().await.map_err(|e| {
            warn!(%request_id, %method, path, error = %e, "API request failed");
            ConsoleError::Transport(e.to_string())
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            warn!(%request_id, path, error = %e, "Failed to read response body");
            ConsoleError::Transport(e.to_string())
        })?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        debug!(%request_id, %method, path, status = status.as_u16(), elapsed_ms, "API response");

        let payload: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(_) if !status.is_success() => Value::Null,
                Err(e) => return Err(ConsoleError::Decode(e.to_string())),
            }
        };

        if status == StatusCode::UNAUTHORIZED && authenticated {
            warn!(%request_id, path, "Session rejected by server");
            self.session.invalidate();
            return Err(ConsoleError::Unauthorized);
        }

        if !status.is_success() || payload.get("success") == Some(&Value::Bool(false)) {
            let message = server_message(&payload);
            warn!(%request_id, %method, path, status = status.as_u16(), server_message = %message, "API error");
            return Err(ConsoleError::api(status.as_u16(), message));
        }

        Ok(payload)
    }

    /// GET and unwrap `data`
    async fn get_data(&self, path: &str) -> ConsoleResult<Value> {
        self.send(Method::GET, path, None, true).await.map(unwrap_data)
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Exchange credentials for a token and start the session
    pub async fn login(&self, username: &str, password: &str) -> ConsoleResult<AuthSession> {
        let body = json!({ "username": username, "password": password });
        let payload = self.send(Method::POST, LOGIN_PATH, Some(&body), false).await?;

        let token = payload
            .get("token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ConsoleError::Decode("Login response carried no token".into()))?;

        let session = AuthSession::admin(token);
        if let Err(err) = self.session.begin(session.clone()) {
            warn!(error = %err, "Signed in but could not persist the session");
        }
        info!(username, "Signed in");
        Ok(session)
    }

    /// Forget the session locally
    pub fn logout(&self) {
        self.session.invalidate();
        info!("Signed out");
    }

    /// Profile of the signed-in admin
    pub async fn profile(&self) -> ConsoleResult<AdminProfile> {
        let data = self.get_data(PROFILE_PATH).await?;
        serde_json::from_value(data).map_err(|e| ConsoleError::Decode(e.to_string()))
    }

    // ========================================================================
    // Collections
    // ========================================================================

    /// Full collection at `path` as raw records
    pub async fn list_values(&self, path: &str) -> ConsoleResult<Vec<Value>> {
        match self.get_data(path).await? {
            Value::Array(items) => Ok(items),
            Value::Null => Ok(Vec::new()),
            other => Err(ConsoleError::Decode(format!(
                "Expected a list from {path}, got {}",
                kind_of(&other)
            ))),
        }
    }

    /// Full collection of a typed resource
    pub async fn list<T: Resource>(&self) -> ConsoleResult<Vec<T>> {
        self.list_values(T::PATH)
            .await?
            .into_iter()
            .map(|item| decode(item, T::NAME))
            .collect()
    }

    /// Several collections at once; any failure fails the batch
    pub async fn fetch_all(&self, paths: &[String]) -> ConsoleResult<Vec<Vec<Value>>> {
        try_join_all(paths.iter().map(|path| self.list_values(path))).await
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// POST a new record to a collection
    pub async fn create(&self, path: &str, body: &Value) -> ConsoleResult<Value> {
        self.send(Method::POST, path, Some(body), true)
            .await
            .map(unwrap_data)
    }

    /// PUT changes to `{path}/{id}`
    pub async fn update(&self, path: &str, id: &str, body: &Value) -> ConsoleResult<Value> {
        let item = item_path(path, id);
        self.send(Method::PUT, &item, Some(body), true)
            .await
            .map(unwrap_data)
    }

    /// DELETE `{path}/{id}`
    pub async fn delete(&self, path: &str, id: &str) -> ConsoleResult<()> {
        let item = item_path(path, id);
        self.send(Method::DELETE, &item, None, true).await.map(|_| ())
    }
}

// ============================================================================
// Envelope Helpers
// ============================================================================

/// `data` of an envelope, or the whole body when there is none
fn unwrap_data(payload: Value) -> Value {
    match payload {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// `message` of an error body; empty when absent
fn server_message(payload: &Value) -> String {
    payload
        .get("message")
        .or_else(|| payload.get("error"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn decode<T: DeserializeOwned>(item: Value, name: &str) -> ConsoleResult<T> {
    serde_json::from_value(item).map_err(|e| ConsoleError::Decode(format!("{name}: {e}")))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::District;
    use crate::session::{FileSessionStore, MemorySessionStore, SessionStore};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> ConsoleConfig {
        ConsoleConfig {
            api_base_url: server.uri(),
            ..Default::default()
        }
    }

    fn signed_in_client(server: &MockServer) -> (ApiClient, Arc<dyn SessionStore>) {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let session = Session::restore(store.clone());
        session.begin(AuthSession::admin("tok-123")).unwrap();
        let client = ApiClient::new(&config_for(server), session).unwrap();
        (client, store)
    }

    #[tokio::test]
    async fn test_list_sends_bearer_and_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/districts"))
            .and(header("authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{"_id": "d1", "title": "Lahore"}, {"_id": "d2", "title": "Multan"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = signed_in_client(&server);
        let districts: Vec<District> = client.list().await.unwrap();
        assert_eq!(districts.len(), 2);
        assert_eq!(districts[1].title, "Multan");
    }

    #[tokio::test]
    async fn test_create_area_posts_exact_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/areas"))
            .and(body_json(json!({"district": "d1", "title": "Zone A"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "success": true,
                "data": {"_id": "a1", "district": "d1", "title": "Zone A"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = signed_in_client(&server);
        let created = client
            .create("/areas", &json!({"district": "d1", "title": "Zone A"}))
            .await
            .unwrap();
        assert_eq!(created["_id"], "a1");
    }

    #[tokio::test]
    async fn test_create_area_then_refetch_page_collections() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/areas"))
            .and(body_json(json!({"district": "d1", "title": "Zone A"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "success": true,
                "data": {"_id": "a1", "district": "d1", "title": "Zone A"}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/areas"))
            .and(header("authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{"_id": "a1", "district": {"_id": "d1", "title": "Lahore"}, "title": "Zone A"}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/districts"))
            .and(header("authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{"_id": "d1", "title": "Lahore"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = signed_in_client(&server);
        client
            .create("/areas", &json!({"district": "d1", "title": "Zone A"}))
            .await
            .unwrap();

        // The areas page reloads its rows and its district lookup together
        let paths = vec!["/areas".to_string(), "/districts".to_string()];
        let batch = client.fetch_all(&paths).await.unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].len(), 1);
        assert_eq!(batch[0][0]["_id"], "a1");
        assert_eq!(batch[0][0]["title"], "Zone A");
        assert_eq!(batch[1][0]["_id"], "d1");

        // One POST and exactly one GET per collection
        server.verify().await;
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/halqas"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "jwt expired"
            })))
            .mount(&server)
            .await;

        let (client, store) = signed_in_client(&server);
        let err = client.list_values("/halqas").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(!client.session().is_authenticated());
        assert_eq!(store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_server_message_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/districts/d1"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "success": false,
                "message": "District title already exists"
            })))
            .mount(&server)
            .await;

        let (client, _) = signed_in_client(&server);
        let err = client
            .update("/districts", "d1", &json!({"title": "Lahore"}))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "District title already exists");
        assert!(client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_success_false_with_ok_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/apps"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "message": "Title is required"
            })))
            .mount(&server)
            .await;

        let (client, _) = signed_in_client(&server);
        let err = client.create("/apps", &json!({})).await.unwrap_err();
        assert!(matches!(err, ConsoleError::Api { status: 200, .. }));
        assert_eq!(err.user_message(), "Title is required");
    }

    #[tokio::test]
    async fn test_error_without_body_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/members/m1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (client, _) = signed_in_client(&server);
        let err = client.delete("/members", "m1").await.unwrap_err();
        assert_eq!(err.user_message(), halqa_core::GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/districts/d1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = signed_in_client(&server);
        client.delete("/districts", "d1").await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_all_fails_as_a_batch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/areas"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": []})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/districts"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let (client, _) = signed_in_client(&server);
        let ok = client.fetch_all(&["/areas".to_string()]).await.unwrap();
        assert_eq!(ok, vec![Vec::<Value>::new()]);

        let paths = vec!["/areas".to_string(), "/districts".to_string()];
        assert!(client.fetch_all(&paths).await.is_err());
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .and(body_json(json!({"username": "admin", "password": "secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "token": "fresh-token"
            })))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(dir.path().join("session.json")));
        let client = ApiClient::new(&config_for(&server), Session::restore(store.clone())).unwrap();

        let session = client.login("admin", "secret").await.unwrap();
        assert_eq!(session, AuthSession::admin("fresh-token"));
        assert_eq!(client.session().token().as_deref(), Some("fresh-token"));
        assert_eq!(store.load().unwrap(), Some(AuthSession::admin("fresh-token")));

        client.logout();
        assert_eq!(store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_login_failure_shows_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "Invalid credentials"
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(&config_for(&server), Session::in_memory()).unwrap();
        let err = client.login("admin", "wrong").await.unwrap_err();
        assert!(!err.is_unauthorized());
        assert_eq!(err.user_message(), "Invalid credentials");
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PROFILE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"_id": "root", "username": "admin", "name": "Site Admin"}
            })))
            .mount(&server)
            .await;

        let (client, _) = signed_in_client(&server);
        let profile = client.profile().await.unwrap();
        assert_eq!(profile.display_name(), "Site Admin");
    }

    #[test]
    fn test_unwrap_data() {
        assert_eq!(unwrap_data(json!({"success": true, "data": [1]})), json!([1]));
        assert_eq!(unwrap_data(json!({"token": "t"})), json!({"token": "t"}));
    }
}
