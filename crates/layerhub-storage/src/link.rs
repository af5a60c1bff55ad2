//! Retrieval-link classification helpers.
//!
//! A layer's `file_link` either points at the configured object store
//! (presigned retrieval URL) or at an arbitrary external server. The
//! distinction is made on the URL authority alone; everything after it
//! (path, query, signature) is irrelevant for classification.

use url::Url;

/// Whether `link`'s authority matches the store endpoint (`host:port`).
pub fn same_authority(endpoint: &str, link: &str) -> bool {
    let Ok(url) = Url::parse(link) else {
        return false;
    };
    let Some(host) = url.host_str() else {
        return false;
    };

    let (endpoint_host, endpoint_port) = match endpoint.rsplit_once(':') {
        Some((h, p)) => match p.parse::<u16>() {
            Ok(port) => (h, Some(port)),
            Err(_) => (endpoint, None),
        },
        None => (endpoint, None),
    };

    if !host.eq_ignore_ascii_case(endpoint_host) {
        return false;
    }

    match endpoint_port {
        Some(port) => url.port_or_known_default() == Some(port),
        None => true,
    }
}

/// Extract the object key from a path-style retrieval URL.
///
/// Presigned URLs for a path-style S3 endpoint have the shape
/// `http://host:port/<bucket>/<key>?<signature>`; the key is everything
/// after the bucket segment.
pub fn object_key(bucket: &str, link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    let mut segments = url.path_segments()?;
    if segments.next()? != bucket {
        return None;
    }
    let key = segments.collect::<Vec<_>>().join("/");
    if key.is_empty() { None } else { Some(key) }
}
