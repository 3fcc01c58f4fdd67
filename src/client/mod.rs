//! # Gateway Client
//!
//! Typed async mirror of the gateway operations. Every call posts a JSON body
//! with the shared secret header and maps the response status to
//! [`ClientError`].
//!
//! ```ignore
//! use remote_sqlite::client::Client;
//!
//! let client = Client::new("127.0.0.1:15899", "1234")?;
//! client.create_db("team", "fick").await?;
//! let rows = client.query_command("team", "fick", "select * from COMPANY").await?;
//! ```

mod errors;

use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{
    paths, AffectedRowsResponse, CommandRequest, DatabaseRequest, NamespaceRequest, SizeResponse,
    API_PREFIX, SECRET_HEADER,
};
use crate::store::Row;

pub use errors::{ClientError, ClientResult};

const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Client for one gateway
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    secret: String,
}

impl Client {
    /// Create a client for `host`.
    ///
    /// `host` may be a bare `host:port`, in which case `http://` is assumed,
    /// or a full base URL. A path on the base URL is kept as a prefix of every
    /// operation path.
    pub fn new(host: &str, secret: impl Into<String>) -> ClientResult<Self> {
        let base = if host.contains("://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        };
        let mut base_url =
            Url::parse(&base).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            secret: secret.into(),
        })
    }

    /// Use a preconfigured HTTP client (timeouts, TLS, proxies)
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(&format!("{}{}", API_PREFIX.trim_start_matches('/'), path))
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<Vec<u8>> {
        let url = self.url(path)?;
        let payload = serde_json::to_vec(body)?;

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(SECRET_HEADER, self.secret.as_str())
            .body(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        if status == 200 {
            Ok(bytes.to_vec())
        } else {
            Err(ClientError::from_status(status, &bytes))
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = self.post(path, body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // ==================
    // Namespaces
    // ==================

    /// Create a namespace (idempotent)
    pub async fn new_namespace(&self, namespace: &str) -> ClientResult<()> {
        self.post(paths::NEW_NAMESPACE, &NamespaceRequest::new(namespace))
            .await?;
        Ok(())
    }

    /// Delete a namespace and all of its databases (idempotent)
    pub async fn delete_namespace(&self, namespace: &str) -> ClientResult<()> {
        self.post(paths::DELETE_NAMESPACE, &NamespaceRequest::new(namespace))
            .await?;
        Ok(())
    }

    /// List database names in a namespace
    pub async fn show_namespace(&self, namespace: &str) -> ClientResult<Vec<String>> {
        self.post_json(paths::SHOW_NAMESPACE, &NamespaceRequest::new(namespace))
            .await
    }

    // ==================
    // Databases
    // ==================

    /// Create an empty database; fails if it already exists
    pub async fn create_db(&self, namespace: &str, db_name: &str) -> ClientResult<()> {
        self.post(paths::CREATE_DB, &DatabaseRequest::new(namespace, db_name))
            .await?;
        Ok(())
    }

    /// Delete a database; fails if it does not exist
    pub async fn drop_db(&self, namespace: &str, db_name: &str) -> ClientResult<()> {
        self.post(paths::DROP_DB, &DatabaseRequest::new(namespace, db_name))
            .await?;
        Ok(())
    }

    /// Size of the database file in bytes
    pub async fn get_db_size(&self, namespace: &str, db_name: &str) -> ClientResult<u64> {
        let response: SizeResponse = self
            .post_json(paths::GET_DB_SIZE, &DatabaseRequest::new(namespace, db_name))
            .await?;
        Ok(response.size)
    }

    // ==================
    // Commands
    // ==================

    /// Run a mutating statement and return the affected row count
    pub async fn execute_command(
        &self,
        namespace: &str,
        db_name: &str,
        cmd: &str,
    ) -> ClientResult<u64> {
        let response: AffectedRowsResponse = self
            .post_json(
                paths::EXECUTE_COMMAND,
                &CommandRequest::new(namespace, db_name, cmd),
            )
            .await?;
        Ok(response.affected_rows)
    }

    /// Run a query and return its rows as column-name to text maps
    pub async fn query_command(
        &self,
        namespace: &str,
        db_name: &str,
        cmd: &str,
    ) -> ClientResult<Vec<Row>> {
        self.post_json(
            paths::QUERY_COMMAND,
            &CommandRequest::new(namespace, db_name, cmd),
        )
        .await
    }
}
