use std::fmt::Write;

use chrono::{DateTime, Utc};
use http::HeaderMap;

use super::ResourceState;
use crate::clock::Version;

/// Usage text served at `/`.
pub const HELP_TEXT: &str = "
USAGE: You can go to any URL and get some basic content.

If the following components are present in the path URL, then you will
get some additional behaviour:
  /lastmod/ -> Sets a Last-Modified header and performs date resource validation.
  /etag/ -> Sets an ETag header and performs entity tag resource validation.
  /headers/ -> Includes the request headers in the content response.
  /static/ -> Uses a fixed timestamp rather than an updating one.
  /clock/ -> Accepts PUT to advance the document to a new version.
  /periodic/ -> Marks a document that only changes when its time window rolls over.

You can combine the path components too:
  /resource/headers/static/blahblah/etag/anythingyoulike/

Paths without any of these components are gone (410).
";

/// Render the plain-text body of a full response.
///
/// The first line carries the content date and is what clients compare to
/// tell versions apart. The second line changes on every request.
pub fn render_body(state: &ResourceState, now: DateTime<Utc>, echo: Option<&HeaderMap>) -> String {
    let mut body = String::new();
    let generated = Version::from_datetime(now);
    // Writing into a String cannot fail.
    let _ = writeln!(body, "Content date: {}", state.version.http_date());
    let _ = writeln!(body, "Generated:    {}", generated.http_date());

    if let Some(headers) = echo {
        let _ = writeln!(body, "\nREQUEST HEADERS:");
        let mut names: Vec<&str> = headers.keys().map(|name| name.as_str()).collect();
        names.sort_unstable();
        for name in names {
            if let Some(value) = headers.get(name) {
                let _ = writeln!(
                    body,
                    "  {}: {}",
                    canonical_name(name),
                    String::from_utf8_lossy(value.as_bytes())
                );
            }
        }
    }
    body
}

/// `x-forwarded-for` becomes `X-Forwarded-For`.
fn canonical_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
