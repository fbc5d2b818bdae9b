#[derive(Debug, thiserror::Error)]
pub enum WebViewError {
    #[error("webview engine error: {0}")]
    Engine(#[from] wry::Error),

    #[error("navigation to {0} blocked by scheme allowlist")]
    Blocked(String),
}

impl From<WebViewError> for webwrap_common::WebWrapError {
    fn from(err: WebViewError) -> Self {
        Self::WebView(err.to_string())
    }
}
