//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{
    AttachmentsApi, CalendarEventParent, CalendarEventsApi, CalendarsApi, EventsApi, PeopleApi,
    ProjectApi, ProjectsApi, ResourceApi,
};
use crate::error::{Error, Result};
use crate::types::{Account, Authorization};

/// Default root of the account API.
const DEFAULT_BASE_URL: &str = "https://basecamp.com/";

/// Default launchpad (account discovery) URL.
const DEFAULT_LAUNCHPAD_URL: &str = "https://launchpad.37signals.com/";

const API_VERSION: &str = "v1";

/// Number of items the API returns per page on paginated listings.
pub(crate) const PAGE_SIZE: usize = 50;

/// Basecamp API client.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use basecampx_client::BasecampClient;
///
/// # async fn example() -> basecampx_client::Result<()> {
/// let client = BasecampClient::new("access-token", "MyApp (me@example.com)", Some(1234))?;
///
/// let projects = client.projects().list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BasecampClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    launchpad_url: Url,
    account_id: Option<u64>,
    /// Per-request timeout; `None` leaves requests unbounded.
    timeout: Option<Duration>,
}

impl BasecampClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client against the production endpoints.
    ///
    /// `user_agent` identifies the application and a way to reach its
    /// author, e.g. `"BusyFlow (http://busyflow.com)"`. Basecamp rejects
    /// requests without one.
    pub fn new(
        access_token: impl Into<String>,
        user_agent: impl Into<String>,
        account_id: Option<u64>,
    ) -> Result<Self> {
        let mut builder = Self::builder()
            .access_token(access_token)
            .user_agent(user_agent);
        if let Some(id) = account_id {
            builder = builder.account_id(id);
        }
        builder.build()
    }

    /// Account this client makes resource requests against.
    pub fn account_id(&self) -> Option<u64> {
        self.inner.account_id
    }

    /// Root of the account API.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Launchpad
    // ─────────────────────────────────────────────────────────────────────────

    /// Everything launchpad knows about the token: identity and accounts.
    pub async fn authorization(&self) -> Result<Authorization> {
        let url = self.inner.launchpad_url.join("authorization.json")?;
        self.send(self.request(Method::GET, url)).await
    }

    /// All accounts the token can access, across every product.
    ///
    /// Not filtered; pick the account by `product` yourself.
    pub async fn accounts(&self) -> Result<Vec<Account>> {
        Ok(self.authorization().await?.accounts)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Account-wide project operations.
    pub fn projects(&self) -> ProjectsApi {
        ProjectsApi::new(self.clone())
    }

    /// Operations on a single project and its sections.
    pub fn project(&self, project_id: u64) -> ProjectApi {
        ProjectApi::new(self.clone(), project_id)
    }

    pub fn people(&self) -> PeopleApi {
        PeopleApi::new(self.clone())
    }

    pub fn events(&self) -> EventsApi {
        EventsApi::new(self.clone())
    }

    pub fn attachments(&self) -> AttachmentsApi {
        AttachmentsApi::new(self.clone())
    }

    pub fn calendars(&self) -> CalendarsApi {
        CalendarsApi::new(self.clone())
    }

    /// Events of a calendar or of a project's schedule.
    pub fn calendar_events(&self, parent: CalendarEventParent) -> CalendarEventsApi {
        CalendarEventsApi::new(self.clone(), parent)
    }

    /// Plain GET access to any account API path, e.g. `"projects"` or
    /// `"projects/5/todolists"`.
    pub fn resource(&self, path: impl Into<String>) -> ResourceApi {
        ResourceApi::new(self.clone(), path.into())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build the URL for an account API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let account_id = self.inner.account_id.ok_or(Error::MissingAccount)?;
        let path = path.trim_start_matches('/');
        self.inner
            .base_url
            .join(&format!("{}/api/{}/{}.json", account_id, API_VERSION, path))
            .map_err(Error::from)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.inner.http.request(method, url);
        match self.inner.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        self.send(self.request(Method::GET, url)).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.send(self.request(Method::GET, url).query(query)).await
    }

    /// Fetch every page of a paginated listing.
    ///
    /// Pages are requested in order starting at 1 until one comes back
    /// with fewer than [`PAGE_SIZE`] items. `params` are sent with every
    /// page.
    pub(crate) async fn get_all_pages(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<serde_json::Value>> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let batch = self.get_page(path, page, params).await?;
            let done = batch.len() < PAGE_SIZE;
            items.extend(batch);
            if done {
                break;
            }
            page += 1;
        }
        Ok(items)
    }

    /// Fetch one page of a paginated listing.
    pub(crate) async fn get_page(
        &self,
        path: &str,
        page: u32,
        params: &[(&str, String)],
    ) -> Result<Vec<serde_json::Value>> {
        let url = self.url(path)?;
        let request = self
            .request(Method::GET, url)
            .query(&[("page", page)])
            .query(params);
        self.send(request).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.send(self.request(Method::POST, url).json(body)).await
    }

    /// POST a JSON body and ignore whatever comes back.
    pub(crate) async fn post_no_content<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.send_raw(self.request(Method::POST, url).json(body))
            .await
            .map(|_| ())
    }

    /// POST raw bytes with an explicit content type.
    pub(crate) async fn post_bytes<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<T> {
        let url = self.url(path)?;
        let request = self
            .request(Method::POST, url)
            .header(CONTENT_TYPE, content_type)
            .body(body);
        self.send(request).await
    }

    /// Make a PUT request.
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.send(self.request(Method::PUT, url).json(body)).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path)?;
        self.send_raw(self.request(Method::DELETE, url))
            .await
            .map(|_| ())
    }

    /// Send a request and decode the JSON body. An empty body decodes as
    /// JSON `null`.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send_raw(request).await?;
        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send a request, turning any non-2xx status into an error.
    async fn send_raw(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!(%method, %url, "Sending request");
        let response = self.inner.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%method, %url, status = status.as_u16(), "Request failed");
            return Err(Error::from_status(status.as_u16(), &method, &url));
        }

        Ok(response)
    }
}

impl std::fmt::Debug for BasecampClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasecampClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("account_id", &self.inner.account_id)
            .finish_non_exhaustive()
    }
}

/// Builder for creating a [`BasecampClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    access_token: Option<String>,
    user_agent: Option<String>,
    account_id: Option<u64>,
    base_url: String,
    launchpad_url: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            access_token: None,
            user_agent: None,
            account_id: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            launchpad_url: DEFAULT_LAUNCHPAD_URL.to_string(),
            timeout: None,
        }
    }

    /// Set the OAuth access token sent as a bearer token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the application name sent as `User-Agent`.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the account resource requests are made against.
    pub fn account_id(mut self, account_id: u64) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Override the account API root.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the launchpad root.
    pub fn launchpad_url(mut self, url: impl Into<String>) -> Self {
        self.launchpad_url = url.into();
        self
    }

    /// Bound every request by `timeout`. Unset, requests wait as long as
    /// the server takes.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<BasecampClient> {
        let token = self
            .access_token
            .ok_or_else(|| Error::Config("access_token is required".to_string()))?;
        let user_agent = self
            .user_agent
            .filter(|ua| !ua.trim().is_empty())
            .ok_or_else(|| Error::Config("user_agent is required".to_string()))?;

        let base_url = parse_root(&self.base_url)?;
        let launchpad_url = parse_root(&self.launchpad_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::Config("Invalid access token".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(BasecampClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                launchpad_url,
                account_id: self.account_id,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a root URL and make sure relative joins land beneath it.
fn parse_root(url: &str) -> Result<Url> {
    let mut url = Url::parse(url)?;
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(account_id: Option<u64>) -> BasecampClient {
        BasecampClient::new("tok", "Tests (tests@example.com)", account_id).unwrap()
    }

    #[test]
    fn test_builder_requires_token() {
        let result = ClientBuilder::new().user_agent("Tests").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_requires_user_agent() {
        let result = ClientBuilder::new().access_token("tok").build();
        assert!(matches!(result, Err(Error::Config(_))));

        let result = ClientBuilder::new()
            .access_token("tok")
            .user_agent("  ")
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_rejects_bad_token() {
        let result = ClientBuilder::new()
            .access_token("tok\nen")
            .user_agent("Tests")
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = ClientBuilder::new()
            .access_token("tok")
            .user_agent("Tests")
            .base_url("http://localhost:8080/basecamp")
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:8080/basecamp/");
    }

    #[test]
    fn test_url_building() {
        let client = client(Some(999));

        let url = client.url("projects").unwrap();
        assert_eq!(url.as_str(), "https://basecamp.com/999/api/v1/projects.json");

        let url = client.url("/projects/5/topics").unwrap();
        assert_eq!(
            url.as_str(),
            "https://basecamp.com/999/api/v1/projects/5/topics.json"
        );
    }

    #[test]
    fn test_url_requires_account() {
        let client = client(None);
        assert!(matches!(client.url("projects"), Err(Error::MissingAccount)));
    }

    #[test]
    fn test_default_has_no_timeout() {
        assert!(client(Some(1)).inner.timeout.is_none());

        let client = ClientBuilder::new()
            .access_token("tok")
            .user_agent("Tests")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.inner.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_debug_hides_token() {
        let rendered = format!("{:?}", client(Some(1)));
        assert!(rendered.contains("account_id"));
        assert!(!rendered.contains("tok"));
    }
}
