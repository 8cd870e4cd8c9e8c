use sharetext_shared::types::MessageStats;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::retrieval::RetrievalFlow;
use crate::service::HttpMessageService;

pub async fn view_message(config: &ClientConfig, id: Option<&str>) -> Result<String, ClientError> {
    let history = config.open_history()?;
    let flow = RetrievalFlow::new(HttpMessageService::new(&config.server_url), history);

    let message = flow.retrieve(id).await?;
    Ok(render_message(&message))
}

pub(crate) fn render_message(message: &str) -> String {
    format!("{message}\n\n({})", MessageStats::of(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_message() {
        assert_eq!(
            render_message("hello world"),
            "hello world\n\n(2 words, 11 characters)"
        );
    }
}
