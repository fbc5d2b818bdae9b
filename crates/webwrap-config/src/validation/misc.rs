//! Home URL and webview validation.

use crate::schema::WebWrapConfig;

/// The home URL is optional, but when present it must parse as an absolute URL.
pub(crate) fn validate_home(errors: &mut Vec<String>, config: &WebWrapConfig) {
    if let Some(raw) = config.home.url() {
        if let Err(e) = url::Url::parse(raw) {
            errors.push(format!("home.url = {raw:?} is not a valid URL: {e}"));
        }
    }
}

pub(crate) fn validate_webview(errors: &mut Vec<String>, config: &WebWrapConfig) {
    let schemes = &config.webview.allowed_schemes;
    if schemes.is_empty() {
        errors.push("webview.allowed_schemes must not be empty".into());
    }
    for scheme in schemes {
        if !is_valid_scheme(scheme) {
            errors.push(format!("webview.allowed_schemes contains invalid scheme {scheme:?}"));
        }
    }

    if let Some(home) = config.home.url().and_then(|u| url::Url::parse(u).ok()) {
        if !schemes.iter().any(|s| s.eq_ignore_ascii_case(home.scheme())) {
            errors.push(format!(
                "home.url scheme {:?} is not in webview.allowed_schemes",
                home.scheme()
            ));
        }
    }
}

/// RFC 3986 scheme: a letter followed by letters, digits, `+`, `-` or `.`.
pub(crate) fn is_valid_scheme(scheme: &str) -> bool {
    scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Whether the configured home URL parses and uses an allowed scheme.
pub(crate) fn home_is_loadable(config: &WebWrapConfig) -> bool {
    let Some(raw) = config.home.url() else {
        return true;
    };
    match url::Url::parse(raw) {
        Ok(home) => config
            .webview
            .allowed_schemes
            .iter()
            .any(|s| s.eq_ignore_ascii_case(home.scheme())),
        Err(_) => false,
    }
}
