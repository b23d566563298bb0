//! Compile-time configuration for the shell.
//!
//! There is no runtime configuration source. Log verbosity can be chosen at
//! build time with `APP_LOG_LEVEL`, using the level names `log` understands
//! (`off`, `error`, `warn`, `info`, `debug`, `trace`).

use std::str::FromStr;

use log::LevelFilter;

/// Heading shown above the navigation bar
pub const APP_TITLE: &str = "My App";

/// Accept filter for the avatar file picker
pub const AVATAR_ACCEPT: &str = "image/*";

const BUILD_LOG_LEVEL: Option<&str> = option_env!("APP_LOG_LEVEL");

/// Most verbose level the logger forwards to the console
pub fn log_level() -> LevelFilter {
    resolve_log_level(BUILD_LOG_LEVEL)
}

fn resolve_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|raw| LevelFilter::from_str(raw.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_unset_level_defaults_to_info() {
        assert_eq!(resolve_log_level(None), LevelFilter::Info);
    }

    #[wasm_bindgen_test]
    fn test_level_names() {
        assert_eq!(resolve_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(resolve_log_level(Some("WARN")), LevelFilter::Warn);
        assert_eq!(resolve_log_level(Some(" off ")), LevelFilter::Off);
        assert_eq!(resolve_log_level(Some("verbose")), LevelFilter::Info);
    }
}
