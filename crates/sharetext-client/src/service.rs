//! The two calls a client makes against the message store, and their HTTP
//! implementation.

use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use sharetext_shared::protocol::ResponseBody;
use sharetext_shared::types::SubmitRequest;

use crate::error::ClientError;

pub trait MessageService: Send + Sync {
    /// `POST /`; resolves to the text the server stored.
    fn submit(
        &self,
        req: &SubmitRequest,
    ) -> impl Future<Output = Result<String, ClientError>> + Send;

    /// `GET /view` or `GET /view/<id>`.
    fn fetch(
        &self,
        id: Option<&str>,
    ) -> impl Future<Output = Result<ResponseBody, ClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpMessageService {
    http: reqwest::Client,
    base_url: String,
}

impl HttpMessageService {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn view_url(&self, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/view/{}", self.base_url, urlencoding::encode(id)),
            None => format!("{}/view", self.base_url),
        }
    }
}

impl MessageService for HttpMessageService {
    async fn submit(&self, req: &SubmitRequest) -> Result<String, ClientError> {
        let url = format!("{}/", self.base_url);
        let resp = self.http.post(&url).json(req).send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(url = %url, len = body.len(), "POST accepted");
        Ok(body)
    }

    async fn fetch(&self, id: Option<&str>) -> Result<ResponseBody, ClientError> {
        let url = self.view_url(id);
        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(url = %url, len = body.len(), "GET ok");
        Ok(ResponseBody::from_raw(content_type.as_deref(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_urls() {
        let service = HttpMessageService::new("http://localhost:9090/");
        assert_eq!(service.base_url(), "http://localhost:9090");
        assert_eq!(service.view_url(None), "http://localhost:9090/view");
        assert_eq!(
            service.view_url(Some("calm-sky-3")),
            "http://localhost:9090/view/calm-sky-3"
        );
        assert_eq!(
            service.view_url(Some("a b/c")),
            "http://localhost:9090/view/a%20b%2Fc"
        );
    }
}
