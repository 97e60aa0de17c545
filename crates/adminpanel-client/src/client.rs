use crate::error::ClientError;
use crate::types::*;
use adminpanel_types::{
    ContactInfo, Employee, EmployeeStatus, Feedback, MessageResponse, StatusUpdate, VendorDraft,
};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub struct AdminClient {
    client: Client,
    config: ClientConfig,
    tokens: Arc<dyn TokenSource>,
}

impl AdminClient {
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenSource>) -> Result<Self, ClientError> {
        Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;
        Ok(Self { client, config, tokens })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn list_feedback(&self) -> Result<Vec<Feedback>, ClientError> {
        self.call(Method::GET, &["api", "feedback", "admin", "all"], None::<&()>).await
    }

    pub async fn approve_feedback(&self, id: &str) -> Result<Feedback, ClientError> {
        self.call(Method::PUT, &["api", "feedback", id, "approve"], None::<&()>).await
    }

    pub async fn delete_feedback(&self, id: &str) -> Result<MessageResponse, ClientError> {
        self.call_or_default(Method::DELETE, &["api", "feedback", id], None::<&()>).await
    }

    pub async fn create_vendor(&self, draft: &VendorDraft) -> Result<MessageResponse, ClientError> {
        self.call_or_default(Method::POST, &["api", "admin", "createVendor"], Some(draft)).await
    }

    pub async fn list_pending_employees(&self) -> Result<Vec<Employee>, ClientError> {
        let list: EmployeeList = self
            .call_or_default(Method::GET, &["api", "admin", "admin-aproove-employee"], None::<&()>)
            .await?;
        Ok(list.employees)
    }

    pub async fn set_employee_status(
        &self,
        id: &str,
        status: EmployeeStatus,
    ) -> Result<MessageResponse, ClientError> {
        let body = StatusUpdate { status };
        self.call_or_default(Method::PUT, &["api", "admin", "employee-status", id], Some(&body))
            .await
    }

    pub async fn get_contact_info(&self) -> Result<Option<ContactInfo>, ClientError> {
        let bytes = self.execute(Method::GET, &["api", "contact-content"], None::<&()>).await?;
        if is_blank_body(&bytes) {
            return Ok(None);
        }
        let info: Option<ContactInfo> = decode(&bytes)?;
        Ok(info.filter(|i| !i.is_blank()))
    }

    pub async fn create_contact_info(&self, info: &ContactInfo) -> Result<ContactInfo, ClientError> {
        self.call(Method::POST, &["api", "contact-content"], Some(info)).await
    }

    pub async fn update_contact_info(&self, info: &ContactInfo) -> Result<ContactInfo, ClientError> {
        self.call(Method::PUT, &["api", "contact-content"], Some(info)).await
    }

    async fn call<B, R>(&self, method: Method, path: &[&str], body: Option<&B>) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let bytes = self.execute(method, path, body).await?;
        decode(&bytes)
    }

    /// Like `call`, but an empty 2xx body decodes to `R::default()`.
    async fn call_or_default<B, R>(
        &self,
        method: Method,
        path: &[&str],
        body: Option<&B>,
    ) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let bytes = self.execute(method, path, body).await?;
        if is_blank_body(&bytes) {
            return Ok(R::default());
        }
        decode(&bytes)
    }

    async fn execute<B>(&self, method: Method, path: &[&str], body: Option<&B>) -> Result<Vec<u8>, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = endpoint(&self.config.base_url, path)?;
        send_json(&self.client, method, url, self.tokens.bearer_token().as_deref(), body).await
    }
}

/// Issue one request and return the raw 2xx body.
///
/// `token` becomes `Authorization: Bearer <token>`; `body` is sent as JSON.
async fn send_json<B>(
    client: &Client,
    method: Method,
    url: Url,
    token: Option<&str>,
    body: Option<&B>,
) -> Result<Vec<u8>, ClientError>
where
    B: Serialize + ?Sized,
{
    tracing::debug!("{} {}", method, url.path());

    let mut request = client.request(method.clone(), url.clone());
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    if let Some(body) = body {
        request = request.json(body);
    }

    let resp = request.send().await.map_err(|e| ClientError::Network(e.to_string()))?;
    let status = resp.status();
    let bytes = resp.bytes().await.map_err(|e| ClientError::Network(e.to_string()))?;

    if !status.is_success() {
        let message = ErrorBody::parse(&bytes);
        tracing::debug!("{} {} rejected with {}", method, url.path(), status);
        return Err(ClientError::Rejected { status: status.as_u16(), message });
    }

    Ok(bytes.to_vec())
}

/// Join percent-encoded `path` segments onto `base_url`, keeping any prefix.
fn endpoint(base_url: &str, path: &[&str]) -> Result<Url, ClientError> {
    let mut url =
        Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
    url.path_segments_mut()
        .map_err(|()| ClientError::InvalidUrl(format!("{} cannot be a base", base_url)))?
        .pop_if_empty()
        .extend(path);
    Ok(url)
}

fn is_blank_body(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

fn decode<R: DeserializeOwned>(bytes: &[u8]) -> Result<R, ClientError> {
    serde_json::from_slice(bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
