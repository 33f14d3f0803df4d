use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MINIMIZE_FAILED: &str = "error.minimizeFailed";
pub const MAXIMIZE_FAILED: &str = "error.maximizeFailed";
pub const CLOSE_FAILED: &str = "error.closeFailed";
pub const DRAG_FAILED: &str = "error.dragFailed";
pub const ALWAYS_ON_TOP_FAILED: &str = "error.alwaysOnTopFailed";
pub const LAUNCH_FAILED: &str = "error.launchFailed";
pub const SAVE_FAILED: &str = "error.saveFailed";

/// Turns a message key and named parameters into user-facing text.
pub trait Translate {
    fn t(&self, key: &str, params: &[(&str, &str)]) -> String;
}

static ENGLISH: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (MINIMIZE_FAILED, "Failed to minimize window: {error}"),
        (MAXIMIZE_FAILED, "Failed to maximize window: {error}"),
        (CLOSE_FAILED, "Failed to close window: {error}"),
        (DRAG_FAILED, "Failed to drag window: {error}"),
        (ALWAYS_ON_TOP_FAILED, "Failed to change always-on-top: {error}"),
        (LAUNCH_FAILED, "Failed to launch {name}: {error}"),
        (SAVE_FAILED, "Failed to save launcher state: {error}"),
    ])
});

/// Built-in English strings. Unknown keys are returned as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishCatalog;

impl Translate for EnglishCatalog {
    fn t(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = ENGLISH.get(key).copied().unwrap_or(key);
        interpolate(template, params)
    }
}

/// Replaces each `{name}` with its parameter value.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_fills_error_param() {
        let text = EnglishCatalog.t(CLOSE_FAILED, &[("error", "denied")]);
        assert_eq!(text, "Failed to close window: denied");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(EnglishCatalog.t("error.unknown", &[]), "error.unknown");
    }

    #[test]
    fn unmatched_placeholders_are_kept() {
        assert_eq!(interpolate("{a} {b}", &[("a", "1")]), "1 {b}");
    }
}
