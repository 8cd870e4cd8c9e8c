/// Application name
pub const APP_NAME: &str = "ShareText";

/// Default HTTP API port (server)
pub const DEFAULT_HTTP_PORT: u16 = 9090;

/// Default server URL used by clients
pub const DEFAULT_SERVER_URL: &str = "http://localhost:9090";

/// Host prefix shown in shareable links
pub const DEFAULT_SHARE_BASE: &str = "textshare.app";

/// Value held by the store before the first submission
pub const NO_MESSAGE_SENTINEL: &str = "No message yet";

/// Body returned for a missing or blank submission
pub const MESSAGE_REQUIRED: &str = "Message required";

/// Body returned by the root liveness route
pub const HOME_BODY: &str = "home";

/// Maximum JSON body accepted on submit (100 KiB)
pub const MAX_SUBMIT_BODY: usize = 100 * 1024;

/// Client display strings
pub const FAILED_TO_LOAD: &str = "Failed to load message";
pub const FAILED_TO_SEND: &str = "Failed to send message";
pub const NO_MESSAGE_FOUND: &str = "No message found";

/// Local history cache
pub const HISTORY_KEY: &str = "messageHistory";
pub const HISTORY_CAPACITY: usize = 10;
pub const PREVIEW_CHARS: usize = 60;

/// Third-party QR rendering endpoint
pub const QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";
