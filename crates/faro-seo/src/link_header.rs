//! HTTP `Link` header parsing
//!
//! Just enough of RFC 8288 to pull `rel` and `hreflang` parameters out of
//! response headers. Malformed segments are skipped, not errors.

/// One parsed `Link` header entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub uri: String,
    pub params: Vec<(String, String)>,
}

impl LinkEntry {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(param, _)| param.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn has_rel(&self, rel: &str) -> bool {
        self.param("rel")
            .is_some_and(|value| value.split_ascii_whitespace().any(|r| r.eq_ignore_ascii_case(rel)))
    }
}

/// Parses a `Link` header value into entries.
pub fn parse(value: &str) -> Vec<LinkEntry> {
    value.split(',').filter_map(parse_entry).collect()
}

/// Entries carrying the given `rel`.
pub fn links_with_rel(value: &str, rel: &str) -> Vec<LinkEntry> {
    parse(value)
        .into_iter()
        .filter(|link| link.has_rel(rel))
        .collect()
}

fn parse_entry(segment: &str) -> Option<LinkEntry> {
    let mut parts = segment.split(';');
    let target = parts.next()?.trim();
    let uri = target.strip_prefix('<')?.strip_suffix('>')?.to_string();
    let params = parts
        .filter_map(|param| {
            let (name, value) = param.split_once('=')?;
            Some((
                name.trim().to_ascii_lowercase(),
                value.trim().trim_matches('"').to_string(),
            ))
        })
        .collect();
    Some(LinkEntry { uri, params })
}
