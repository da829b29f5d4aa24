//! Env parsing and defaults.

use url::Url;

const DEFAULT_CDN: &str = "https://raw.githubusercontent.com/github/explore/main/topics";

/// CDN base the catalog resolves icon images against.
/// `ICON_CDN_URL` overrides the default; invalid values fall back.
pub fn icon_cdn_base() -> Url {
    if let Ok(raw) = std::env::var("ICON_CDN_URL") {
        match raw.parse::<Url>() {
            Ok(url) => return url,
            Err(err) => eprintln!("nimbus: invalid URL in ICON_CDN_URL {raw:?}: {err}"),
        }
    }
    DEFAULT_CDN
        .parse()
        .unwrap_or_else(|err| panic!("nimbus: default CDN base does not parse: {err}"))
}

/// Whether to synthesize textures locally instead of fetching over HTTP.
/// Set `NIMBUS_OFFLINE=1` (or `true`) to enable.
pub fn offline_mode() -> bool {
    matches!(
        std::env::var("NIMBUS_OFFLINE").as_deref(),
        Ok("1") | Ok("true")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
    }

    struct EnvGuard {
        snapshot: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn capture(keys: &[&'static str]) -> Self {
            let snapshot = keys
                .iter()
                .map(|&key| (key, std::env::var(key).ok()))
                .collect();
            Self { snapshot }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.snapshot {
                match value {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    const ENV_KEYS: [&str; 2] = ["ICON_CDN_URL", "NIMBUS_OFFLINE"];

    #[test]
    fn cdn_env_override_is_used() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var("ICON_CDN_URL", "https://mirror.example.net/icons");

        assert_eq!(
            icon_cdn_base().as_str(),
            "https://mirror.example.net/icons"
        );
    }

    #[test]
    fn invalid_cdn_env_falls_back_to_default() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var("ICON_CDN_URL", "not a url");

        assert_eq!(icon_cdn_base().as_str(), DEFAULT_CDN);
    }

    #[test]
    fn offline_mode_recognizes_truthy_values() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::remove_var("NIMBUS_OFFLINE");
        assert!(!offline_mode());

        std::env::set_var("NIMBUS_OFFLINE", "1");
        assert!(offline_mode());

        std::env::set_var("NIMBUS_OFFLINE", "true");
        assert!(offline_mode());

        std::env::set_var("NIMBUS_OFFLINE", "0");
        assert!(!offline_mode());
    }
}
