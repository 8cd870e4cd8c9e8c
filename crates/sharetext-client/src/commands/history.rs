use chrono::{Local, TimeZone};

use sharetext_shared::constants::HISTORY_CAPACITY;
use sharetext_store::HistoryItem;

use crate::commands::view::render_message;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::retrieval::RetrievalFlow;
use crate::service::HttpMessageService;

pub fn list_history(config: &ClientConfig) -> Result<String, ClientError> {
    let history = config.open_history()?;
    Ok(render_history(history.items()))
}

/// Display the `number`-th (1-based) history entry.
pub async fn show_history_entry(
    config: &ClientConfig,
    number: usize,
) -> Result<Option<String>, ClientError> {
    let history = config.open_history()?;
    let flow = RetrievalFlow::new(HttpMessageService::new(&config.server_url), history);

    let Some(index) = number.checked_sub(1) else {
        return Ok(None);
    };
    Ok(flow.show_history(index).await.map(|m| render_message(&m)))
}

pub fn clear_history(config: &ClientConfig) -> Result<String, ClientError> {
    let mut history = config.open_history()?;
    let removed = history.len();
    history.clear()?;
    Ok(format!("Cleared {removed} history entries"))
}

pub(crate) fn render_history(items: &[HistoryItem]) -> String {
    let mut out = format!("Recent history ({}/{HISTORY_CAPACITY})", items.len());
    if items.is_empty() {
        out.push_str("\n  No history yet. Messages you view will appear here.");
        return out;
    }
    for (i, item) in items.iter().enumerate() {
        let time = Local
            .timestamp_millis_opt(item.timestamp)
            .single()
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string());
        out.push_str(&format!("\n  #{:<2} {time}  {}", i + 1, item.preview));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        let out = render_history(&[]);
        assert!(out.starts_with("Recent history (0/10)"));
        assert!(out.contains("No history yet"));
    }

    #[test]
    fn test_render_entries_in_order() {
        let items = [
            HistoryItem::new("newest", 1_700_000_000_000),
            HistoryItem::new("older", 1_600_000_000_000),
        ];
        let out = render_history(&items);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Recent history (2/10)");
        assert!(lines[1].starts_with("  #1 "));
        assert!(lines[1].ends_with("newest"));
        assert!(lines[2].ends_with("older"));
    }

    #[tokio::test]
    async fn test_show_entry_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig {
            history_db: Some(dir.path().join("h.db")),
            ..ClientConfig::default()
        };
        assert_eq!(show_history_entry(&config, 0).await.unwrap(), None);
        assert_eq!(show_history_entry(&config, 3).await.unwrap(), None);
    }

    #[test]
    fn test_clear_reports_count() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig {
            history_db: Some(dir.path().join("h.db")),
            ..ClientConfig::default()
        };
        config.open_history().unwrap().record("one", 1).unwrap();

        assert_eq!(clear_history(&config).unwrap(), "Cleared 1 history entries");
        assert!(config.open_history().unwrap().is_empty());
    }
}
