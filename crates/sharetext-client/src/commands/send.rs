use sharetext_shared::share::ShareId;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::service::HttpMessageService;
use crate::submission::{ShareLink, SubmissionFlow};

pub async fn send_message(config: &ClientConfig, message: String) -> Result<String, ClientError> {
    let service = HttpMessageService::new(&config.server_url);
    let mut flow = SubmissionFlow::new(service, config.share_base.clone());
    flow.set_input(message);

    match flow.send().await? {
        Some(link) => Ok(render_link("Message sent", &link)),
        None => Ok("Nothing to send: message is empty".to_string()),
    }
}

/// Print the link and QR URL for an identifier without sending anything.
pub fn show_link(config: &ClientConfig, id: &str) -> Result<String, ClientError> {
    let id = ShareId::parse(id)?;
    Ok(render_link("Share link", &ShareLink::new(&config.share_base, id)))
}

fn render_link(title: &str, link: &ShareLink) -> String {
    format!(
        "{title}\n  Shareable link: {}\n  QR code:        {}",
        link.link, link.qr_url
    )
}
