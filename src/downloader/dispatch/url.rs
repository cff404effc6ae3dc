extern crate reqwest;

use reqwest::Url;

/// A raw URL split into its generic components.
///
/// Anything `Url` cannot parse, even with an `https:` prefix for
/// scheme-relative input, is kept whole as `path`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    /// Host as written in the raw URL, without userinfo and port.
    pub host: String,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}
impl ParsedUrl {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (url, scheme) = match Url::parse(raw) {
            Ok(v) => {
                let scheme = v.scheme().to_owned();
                (v, scheme)
            }
            Err(_) if raw.starts_with("//") => match Url::parse(&format!("https:{}", raw)) {
                Ok(v) => (v, String::new()),
                Err(_) => return Self::relative(raw),
            },
            Err(_) => return Self::relative(raw),
        };
        ParsedUrl {
            scheme,
            host: url
                .host_str()
                .map(|h| original_host(raw, h))
                .unwrap_or_default(),
            path: url.path().to_owned(),
            query: url.query().map(str::to_owned),
            fragment: url.fragment().map(str::to_owned),
        }
    }
    fn relative(raw: &str) -> Self {
        ParsedUrl {
            path: raw.to_owned(),
            ..Self::default()
        }
    }

    /// `true` for `http`, `https` and scheme-less URLs.
    pub fn is_web(&self) -> bool {
        matches!(self.scheme.as_str(), "" | "http" | "https")
    }
    pub fn host_ends_with(&self, suffix: &str) -> bool {
        self.host.to_ascii_lowercase().ends_with(suffix)
    }
}

// `Url` lowercases the host; find the same bytes in the raw authority.
fn original_host(raw: &str, host: &str) -> String {
    let start = raw.find("//").map_or(0, |p| p + 2);
    match raw[start..].to_ascii_lowercase().find(host) {
        Some(p) => raw[start + p..start + p + host.len()].to_owned(),
        None => host.to_owned(),
    }
}
