//! HTTP client for the back office REST API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{Customer, CustomerCreate, JobOrder, JobOrderCreate, Material};

/// HTTP client for making network requests to the back office
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(t) => request.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", t)),
            None => request,
        }
    }

    /// Make a GET request with query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)).query(query));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = error_message(&text);
            tracing::debug!(status = %status, message = %message, "Back office returned an error");
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Err(ClientError::Validation(message))
                }
                _ => Err(ClientError::Internal(message)),
            };
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }

    // ========== Customers ==========

    /// Search customers by name, phone or customer number
    pub async fn search_customers(&self, query: &str) -> ClientResult<Vec<Customer>> {
        self.get("crm/customers/search/", &[("q", query)]).await
    }

    /// Create a customer
    pub async fn create_customer(&self, data: &CustomerCreate) -> ClientResult<Customer> {
        self.post("crm/customers/", data).await
    }

    // ========== Materials ==========

    /// Search the material catalog
    pub async fn search_materials(&self, query: &str) -> ClientResult<Vec<Material>> {
        self.get("materials/materials/search/", &[("q", query)]).await
    }

    // ========== Job orders ==========

    /// Create a job order
    pub async fn create_job_order(&self, payload: &JobOrderCreate) -> ClientResult<JobOrder> {
        self.post("job-orders/job-orders/", payload).await
    }
}

/// Pull a readable message out of an error body
///
/// The back office answers either `{"error": "..."}` or a field map such as
/// `{"phone": ["This field is required."]}`.
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().to_string();
    };
    if let Some(msg) = value.get("error").and_then(|v| v.as_str()) {
        return msg.to_string();
    }
    if let Some(msg) = value.get("detail").and_then(|v| v.as_str()) {
        return msg.to_string();
    }
    match value.as_object() {
        Some(fields) if !fields.is_empty() => fields
            .iter()
            .map(|(field, errors)| {
                let text = match errors {
                    serde_json::Value::Array(items) => items
                        .iter()
                        .filter_map(|i| i.as_str())
                        .collect::<Vec<_>>()
                        .join(" "),
                    other => other.to_string(),
                };
                format!("{}: {}", field, text)
            })
            .collect::<Vec<_>>()
            .join("; "),
        _ => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_error_key() {
        assert_eq!(error_message(r#"{"error":"Customer is blocked"}"#), "Customer is blocked");
    }

    #[test]
    fn test_error_message_from_detail_key() {
        assert_eq!(
            error_message(r#"{"detail":"Authentication credentials were not provided."}"#),
            "Authentication credentials were not provided."
        );
    }

    #[test]
    fn test_error_message_from_field_errors() {
        let msg = error_message(r#"{"phone":["This field is required."]}"#);
        assert_eq!(msg, "phone: This field is required.");
    }

    #[test]
    fn test_error_message_plain_text() {
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
    }

    #[test]
    fn test_url_joining() {
        let client = HttpClient::new(&ClientConfig::new("http://shop.local/api/")).unwrap();
        assert_eq!(
            client.url("/crm/customers/"),
            "http://shop.local/api/crm/customers/"
        );
    }
}
