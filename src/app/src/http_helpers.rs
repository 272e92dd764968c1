//! HTTP helper functions for Crux Core
//!
//! URL construction and form body encoding used by the request dispatcher.

use crux_http::http::Url;

/// Base URL for device endpoints.
///
/// NOTE: `crux_http` requires absolute URLs and rejects relative paths
/// (`RelativeUrlWithoutBase`). The shell strips this prefix before calling
/// `fetch()`, so requests stay relative to the page's origin.
pub const BASE_URL: &str = "https://relative";

const BOUNDARY_PREFIX: &str = "----GateUiFormBoundary";

/// Constructs the full address from an endpoint or form action.
///
/// Absolute `http(s)` targets are kept as they are.
///
/// # Example
/// ```
/// use gate_ui_core::http_helpers::build_url;
/// assert_eq!(build_url("/reboot"), "https://relative/reboot");
/// assert_eq!(build_url("http://gate.local/wifi"), "http://gate.local/wifi");
/// ```
pub fn build_url(endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }

    if endpoint.starts_with('/') {
        format!("{BASE_URL}{endpoint}")
    } else {
        format!("{BASE_URL}/{endpoint}")
    }
}

/// Append form values to the query of `url`, as a browser does for GET forms.
pub fn url_with_query(url: &str, fields: &[(String, String)]) -> Result<String, String> {
    let mut url = Url::parse(url).map_err(|e| format!("Invalid form action {url}: {e}"))?;
    if !fields.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in fields {
            pairs.append_pair(name, value);
        }
    }
    Ok(url.to_string())
}

/// Multipart body ready to be attached to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartBody {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Encode name/value pairs as `multipart/form-data`.
///
/// The core owns the whole request and the shell only replays it through
/// `fetch()`, so there is no DOM `FormData` to build the body from. The bytes
/// are produced here in the layout browsers use: line breaks in values become
/// CRLF and the boundary is extended until it occurs in none of the parts.
pub fn encode_multipart(fields: &[(String, String)]) -> MultipartBody {
    let fields: Vec<(&str, String)> = fields
        .iter()
        .map(|(name, value)| (name.as_str(), normalize_newlines(value)))
        .collect();

    let mut boundary = BOUNDARY_PREFIX.to_string();
    while fields
        .iter()
        .any(|(name, value)| name.contains(&boundary) || value.contains(&boundary))
    {
        boundary.push('x');
    }

    let mut body = String::new();
    for (name, value) in &fields {
        body.push_str("--");
        body.push_str(&boundary);
        body.push_str("\r\nContent-Disposition: form-data; name=\"");
        body.push_str(&escape_part_name(name));
        body.push_str("\"\r\n\r\n");
        body.push_str(value);
        body.push_str("\r\n");
    }
    body.push_str("--");
    body.push_str(&boundary);
    body.push_str("--\r\n");

    MultipartBody {
        content_type: format!("multipart/form-data; boundary={boundary}"),
        bytes: body.into_bytes(),
    }
}

// CR, LF and CRLF all become CRLF
fn normalize_newlines(value: &str) -> String {
    value
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "\r\n")
}

// same escaping browsers apply to field names
fn escape_part_name(name: &str) -> String {
    name.replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn build_url_prefixes_relative_paths() {
        assert_eq!(build_url("/wifi"), "https://relative/wifi");
        assert_eq!(build_url("wifi"), "https://relative/wifi");
        assert_eq!(build_url("/"), "https://relative/");
    }

    #[test]
    fn build_url_keeps_absolute_targets() {
        assert_eq!(
            build_url("https://gate.local/device"),
            "https://gate.local/device"
        );
    }

    #[test]
    fn multipart_body_contains_every_field() {
        let body = encode_multipart(&pairs(&[("ap_ssid", "gate"), ("ap_pass", "")]));
        let text = String::from_utf8(body.bytes).unwrap();

        assert_eq!(
            body.content_type,
            format!("multipart/form-data; boundary={BOUNDARY_PREFIX}")
        );
        assert_eq!(
            text,
            format!(
                "--{b}\r\nContent-Disposition: form-data; name=\"ap_ssid\"\r\n\r\ngate\r\n\
                 --{b}\r\nContent-Disposition: form-data; name=\"ap_pass\"\r\n\r\n\r\n\
                 --{b}--\r\n",
                b = BOUNDARY_PREFIX
            )
        );
    }

    #[test]
    fn multipart_boundary_avoids_collisions() {
        let body = encode_multipart(&pairs(&[("note", BOUNDARY_PREFIX)]));
        assert!(body.content_type.ends_with(&format!("{BOUNDARY_PREFIX}x")));
    }

    #[test]
    fn multipart_escapes_quotes_in_names() {
        let body = encode_multipart(&pairs(&[("a\"b", "v")]));
        let text = String::from_utf8(body.bytes).unwrap();
        assert!(text.contains("name=\"a%22b\""));
    }

    #[test]
    fn multipart_normalises_line_breaks() {
        let body = encode_multipart(&pairs(&[("note", "a\nb\rc\r\nd")]));
        let text = String::from_utf8(body.bytes).unwrap();
        assert!(text.contains("\r\n\r\na\r\nb\r\nc\r\nd\r\n--"));
    }

    #[test]
    fn empty_form_is_just_the_closing_boundary() {
        let body = encode_multipart(&[]);
        assert_eq!(body.bytes, format!("--{BOUNDARY_PREFIX}--\r\n").into_bytes());
    }

    #[test]
    fn query_values_are_url_encoded() {
        let url = url_with_query(
            "https://relative/status",
            &pairs(&[("wifi_ssid", "my net"), ("x", "a&b")]),
        )
        .unwrap();
        assert_eq!(url, "https://relative/status?wifi_ssid=my+net&x=a%26b");
    }

    #[test]
    fn query_without_fields_leaves_url_untouched() {
        assert_eq!(
            url_with_query("https://relative/status", &[]).unwrap(),
            "https://relative/status"
        );
    }
}
