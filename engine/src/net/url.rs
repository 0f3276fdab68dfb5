// Relative URL resolution against a page URL.
//
// Icon hrefs come out of markup in every shape: absolute,
// protocol-relative, host-relative, or relative to the page's directory.
// This resolver covers those shapes; it is not a general-purpose URL
// library (no percent-encoding, no IDNA).

use std::fmt;

/// A parsed absolute URL. Fragments are dropped at parse time; they are
/// never sent for subresource fetches.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedUrl {
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
}

impl ParsedUrl {
    /// Parse an absolute URL into its components. Returns None when the
    /// input has no `scheme://` prefix.
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();

        let (scheme, rest) = url.find("://").map(|pos| {
            (url[..pos].to_lowercase(), &url[pos + 3..])
        })?;

        let rest = match rest.find('#') {
            Some(pos) => &rest[..pos],
            None => rest,
        };

        let (rest, query) = match rest.find('?') {
            Some(pos) => (&rest[..pos], Some(rest[pos + 1..].to_string())),
            None => (rest, None),
        };

        let (host_port, path) = match rest.find('/') {
            Some(pos) => (&rest[..pos], rest[pos..].to_string()),
            None => (rest, "/".to_string()),
        };

        let (host, port) = match host_port.rfind(':') {
            Some(pos) if host_port[pos + 1..].chars().all(|c| c.is_ascii_digit()) => (
                host_port[..pos].to_lowercase(),
                host_port[pos + 1..].parse().ok(),
            ),
            _ => (host_port.to_lowercase(), None),
        };

        Some(ParsedUrl {
            scheme,
            host,
            port,
            path,
            query,
        })
    }

    /// `scheme://host[:port]` with no path.
    pub fn origin(&self) -> String {
        let mut origin = format!("{}://{}", self.scheme, self.host);
        if let Some(port) = self.port {
            origin.push(':');
            origin.push_str(&port.to_string());
        }
        origin
    }

    /// The path up to and including the last '/' (the page's directory).
    pub fn directory(&self) -> &str {
        match self.path.rfind('/') {
            Some(pos) => &self.path[..=pos],
            None => "/",
        }
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin(), self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        Ok(())
    }
}

/// Resolve a possibly-relative href against the page URL it came from.
///
/// - absolute hrefs pass through untouched
/// - `//host/path` inherits the page scheme
/// - `/path` is resolved against the page origin
/// - anything else is resolved against the page's directory, folding
///   `.` and `..` segments
///
/// An unparseable base returns the href unchanged and lets the transport
/// report the failure.
pub fn resolve_url(base_url: &str, href: &str) -> String {
    let href = href.trim();
    let href = match href.find('#') {
        Some(pos) => &href[..pos],
        None => href,
    };

    if href.contains("://") || href.starts_with("data:") {
        return href.to_string();
    }

    let base = match ParsedUrl::parse(base_url) {
        Some(base) => base,
        None => return href.to_string(),
    };

    if let Some(rest) = href.strip_prefix("//") {
        return format!("{}://{}", base.scheme, rest);
    }

    if href.starts_with('/') {
        return format!("{}{}", base.origin(), normalize_path(href));
    }

    let mut path = base.directory().to_string();
    path.push_str(href);
    format!("{}{}", base.origin(), normalize_path(&path))
}

// Fold "." and ".." path segments; ".." above the root is ignored.
// Query strings survive because '?' sorts into the final segment.
fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    format!("/{}", segments.join("/"))
}
