//! Plugins audit
//!
//! Flash, Java and Silverlight content does not play on mobile devices.
//! Flags `<applet>` outright and `<embed>`/`<object>` whose MIME type,
//! source URL, or source params indicate plugin content.

use faro_audit::{Artifacts, Audit, AuditCategory, AuditDetails, AuditError, AuditResult, EmbeddedContent};
use url::Url;

pub const ID: &str = "plugins";
pub const TITLE: &str = "Document avoids plugins";

const JAVA_APPLET_TYPE: &str = "application/x-java-applet";
const JAVA_BEAN_TYPE: &str = "application/x-java-bean";

const TYPE_BLOCKLIST: [&str; 5] = [
    "application/x-shockwave-flash",
    JAVA_APPLET_TYPE,
    JAVA_BEAN_TYPE,
    "application/x-silverlight",
    "application/x-silverlight-2",
];

const FILE_EXTENSION_BLOCKLIST: [&str; 4] = ["swf", "flv", "class", "xap"];

const SOURCE_PARAMS: [&str; 4] = ["code", "movie", "source", "src"];

/// True when the MIME type matches a known plugin type, including parameterized
/// forms like `application/x-java-applet;jpi-version=1.4`.
fn is_plugin_type(mime_type: &str) -> bool {
    let mime_type = mime_type.trim().to_ascii_lowercase();
    TYPE_BLOCKLIST.contains(&mime_type.as_str())
        || mime_type.starts_with(JAVA_APPLET_TYPE)
        || mime_type.starts_with(JAVA_BEAN_TYPE)
}

/// True when the URL points to a file with a known plugin extension.
fn is_plugin_url(raw: &str) -> bool {
    let Ok(base) = Url::parse("http://example.com") else {
        return false;
    };
    let Ok(url) = base.join(raw) else {
        return false;
    };
    match url.path().rsplit_once('.') {
        Some((_, extension)) => {
            FILE_EXTENSION_BLOCKLIST.contains(&extension.trim().to_ascii_lowercase().as_str())
        }
        None => false,
    }
}

fn is_plugin(item: &EmbeddedContent) -> bool {
    let tag = item.tag_name.to_ascii_uppercase();

    if tag == "APPLET" {
        return true;
    }

    if (tag == "EMBED" || tag == "OBJECT")
        && item.type_attr.as_deref().is_some_and(is_plugin_type)
    {
        return true;
    }

    if tag == "EMBED" {
        let source = item.src.as_deref().or(item.code.as_deref());
        if source.is_some_and(is_plugin_url) {
            return true;
        }
    }

    if tag == "OBJECT" && item.data.as_deref().is_some_and(is_plugin_url) {
        return true;
    }

    item.params.iter().any(|param| {
        SOURCE_PARAMS.contains(&param.name.trim().to_ascii_lowercase().as_str())
            && is_plugin_url(&param.value)
    })
}

fn snippet(item: &EmbeddedContent) -> String {
    let mut attrs = String::new();
    for (name, value) in [
        ("src", &item.src),
        ("data", &item.data),
        ("code", &item.code),
        ("type", &item.type_attr),
    ] {
        if let Some(value) = value {
            attrs.push_str(&format!(" {name}=\"{value}\""));
        }
    }
    format!("<{}{attrs}>", item.tag_name.to_ascii_lowercase())
}

pub struct PluginsAudit;

impl Audit for PluginsAudit {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        TITLE
    }

    fn category(&self) -> AuditCategory {
        AuditCategory::ContentBestPractices
    }

    fn run(&self, artifacts: &Artifacts) -> Result<AuditResult, AuditError> {
        let failing: Vec<&EmbeddedContent> = artifacts
            .embedded_content
            .iter()
            .filter(|item| is_plugin(item))
            .collect();

        let rows = failing.iter().map(|item| vec![snippet(item)]).collect();
        let details = AuditDetails::table(&["Element"], rows);

        let result = if failing.is_empty() {
            AuditResult::pass(ID, TITLE, self.category())
        } else {
            AuditResult::fail(ID, TITLE, self.category())
                .with_display_value(format!("{} plugin elements found", failing.len()))
        };
        Ok(result.with_details(details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faro_audit::EmbeddedParam;

    fn embed(type_attr: Option<&str>, src: Option<&str>) -> EmbeddedContent {
        EmbeddedContent {
            tag_name: "EMBED".to_string(),
            type_attr: type_attr.map(str::to_string),
            src: src.map(str::to_string),
            ..Default::default()
        }
    }

    fn run_with(items: Vec<EmbeddedContent>) -> AuditResult {
        let artifacts = Artifacts {
            embedded_content: items,
            ..Artifacts::new("https://example.com/")
        };
        PluginsAudit.run(&artifacts).unwrap()
    }

    #[test]
    fn test_plugin_types() {
        assert!(is_plugin_type("application/x-shockwave-flash"));
        assert!(is_plugin_type(" Application/X-Silverlight-2 "));
        assert!(is_plugin_type("application/x-java-applet;jpi-version=1.4"));
        assert!(!is_plugin_type("video/mp4"));
        assert!(!is_plugin_type("application/pdf"));
    }

    #[test]
    fn test_plugin_urls() {
        assert!(is_plugin_url("https://example.com/movie.swf"));
        assert!(is_plugin_url("/game.SWF"));
        assert!(is_plugin_url("widget.xap?version=2"));
        assert!(!is_plugin_url("https://example.com/video.mp4"));
        assert!(!is_plugin_url("https://example.com/page"));
    }

    #[test]
    fn test_applet_always_fails() {
        let applet = EmbeddedContent {
            tag_name: "APPLET".to_string(),
            ..Default::default()
        };
        let result = run_with(vec![applet]);
        assert!(!result.passed);
    }

    #[test]
    fn test_flash_embed_fails_with_snippet() {
        let result = run_with(vec![embed(
            Some("application/x-shockwave-flash"),
            Some("intro.swf"),
        )]);
        assert!(!result.passed);
        let details = result.details.unwrap();
        assert!(details.rows()[0][0].contains("<embed"));
        assert!(details.rows()[0][0].contains("intro.swf"));
    }

    #[test]
    fn test_object_with_plugin_param_fails() {
        let object = EmbeddedContent {
            tag_name: "OBJECT".to_string(),
            params: vec![EmbeddedParam {
                name: "movie".to_string(),
                value: "banner.swf".to_string(),
            }],
            ..Default::default()
        };
        assert!(!run_with(vec![object]).passed);
    }

    #[test]
    fn test_harmless_embeds_pass() {
        let result = run_with(vec![
            embed(Some("video/mp4"), Some("clip.mp4")),
            embed(None, Some("image.png")),
        ]);
        assert!(result.passed);
        assert_eq!(result.details.unwrap().row_count(), 0);
    }
}
