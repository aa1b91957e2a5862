use anyhow::{bail, Result};
use serde_json::{Map, Value};

/// View name for the landing page
pub const INDEX_VIEW: &str = "index";
/// View name for the shorten result page
pub const SUCCESS_VIEW: &str = "success";

/// Context mapping handed to the renderer; keys and values come from the
/// enriched shortening result.
pub type ViewContext = Map<String, Value>;

/// Rendering collaborator: turns a named view plus a context mapping into
/// a response body. The orchestration path only consumes this capability;
/// template machinery stays behind the seam.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &str, context: &ViewContext) -> Result<String>;
}

/// Built-in renderer: a static landing page and a plain key/value
/// presentation of the success context. Not a template engine.
pub struct StaticRenderer;

impl ViewRenderer for StaticRenderer {
    fn render(&self, view: &str, context: &ViewContext) -> Result<String> {
        match view {
            INDEX_VIEW => Ok(INDEX_PAGE.to_string()),
            SUCCESS_VIEW => Ok(success_page(context)),
            other => bail!("Unknown view: {}", other),
        }
    }
}

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>URL shortener</title></head>
  <body>
    <h1>Shorten a URL</h1>
    <form action="/shorten" method="post">
      <input type="text" name="url" placeholder="https://example.com/some/long/path">
      <button type="submit">Shorten</button>
    </form>
  </body>
</html>
"#;

fn success_page(context: &ViewContext) -> String {
    let mut rows = String::new();
    for (key, value) in context {
        // Strings render bare; everything else keeps its JSON form
        let rendered = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        rows.push_str(&format!(
            "      <li><strong>{}</strong>: {}</li>\n",
            escape(key),
            escape(&rendered)
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n  <head><title>URL shortened</title></head>\n  <body>\n    <h1>Your short URL is ready</h1>\n    <ul>\n{}    </ul>\n    <p><a href=\"/\">Shorten another</a></p>\n  </body>\n</html>\n",
        rows
    )
}

// Context values originate from an external service; escape before
// interpolating into markup.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
