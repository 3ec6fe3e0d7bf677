//! Build-time deployment settings.
//!
//! Server address, site root and the rest of the runtime options come from
//! `[package.metadata.leptos]` through `get_configuration`. The values here
//! are baked in at compile time because the exported pages must agree with
//! the directory they are served from.

/// Path prefix the site is deployed under, e.g. `/nikhil`. Empty for the root.
pub const BASE_PATH: &str = match option_env!("PORTFOLIO_BASE_PATH") {
    Some(path) => path,
    None => "",
};

/// Public origin used for absolute links in the feed.
pub const SITE_URL: &str = match option_env!("PORTFOLIO_SITE_URL") {
    Some(url) => url,
    None => "https://nikhilrana1.github.io",
};

pub fn base_path() -> &'static str {
    normalize_base(BASE_PATH)
}

fn normalize_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", normalize_base(base), path.trim_start_matches('/'))
}

/// Public URL of a file under `public/`, served as-is from the prefix.
pub fn asset(path: &str) -> String {
    join(BASE_PATH, path)
}

/// Absolute URL of a site path, for links leaving the site (feeds).
pub fn absolute(path: &str) -> String {
    format!("{}{}", normalize_base(SITE_URL), join(BASE_PATH, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_double_slashes() {
        assert_eq!(join("", "/images/a.png"), "/images/a.png");
        assert_eq!(join("/nikhil", "/images/a.png"), "/nikhil/images/a.png");
        assert_eq!(join("/nikhil/", "images/a.png"), "/nikhil/images/a.png");
        assert_eq!(join("/nikhil", "/"), "/nikhil/");
    }

    #[test]
    fn base_never_ends_in_slash() {
        assert_eq!(normalize_base("/nikhil/"), "/nikhil");
        assert_eq!(normalize_base("/"), "");
        assert!(!base_path().ends_with('/'));
    }
}
