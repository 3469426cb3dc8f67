use std::path::Path;

use handlebars::Handlebars;
use serde_json::json;

use crate::errors::DrawResult;

/// Renders the HTML shell that loads the client and the data file.
///
/// The shell is fixed apart from the page title and the data file path:
/// the client assets all live under `client/` next to the output.
pub fn render(title: &str, data_path: &Path) -> DrawResult<String> {
    let handlebars = Handlebars::new();
    let html = handlebars.render_template(
        &get_template(),
        &json!({
            "title": title,
            "data_path": data_path.to_string_lossy(),
        }),
    )?;
    Ok(html)
}

pub fn get_template() -> String {
    // data_path must land in the src attribute unescaped
    let template = r#"<html>
    <head>
        <title>webloom {{title}}</title>
        <script src="client/js/d3.v5.min.js"></script>
        <link type="text/css" rel="stylesheet" href="client/css/style.css"/>
        <script type="text/javascript" src="{{{data_path}}}"></script>
    </head>
    <body>
        <script type="text/javascript" src="client/js/colors.js"></script>
        <script type="text/javascript" src="client/js/Blob.js"></script>
        <script type="text/javascript" src="client/js/FileSaver.min.js"></script>
        <script type="text/javascript" src="client/js/webloom.v5.js"></script>
    </body>
</html>
"#;

    template.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_renders_title_and_data_path() {
        let html = render("worms", Path::new("/tmp/worms.json")).expect("render");

        assert!(html.contains("<title>webloom worms</title>"));
        assert!(html.contains(r#"src="/tmp/worms.json""#));
    }

    #[test]
    fn template_references_client_assets() {
        let html = render("worms", Path::new("/tmp/worms.json")).expect("render");

        for asset in [
            "client/js/d3.v5.min.js",
            "client/css/style.css",
            "client/js/colors.js",
            "client/js/Blob.js",
            "client/js/FileSaver.min.js",
            "client/js/webloom.v5.js",
        ] {
            assert!(html.contains(asset), "missing {}", asset);
        }
    }

    #[test]
    fn template_leaves_path_bytes_alone() {
        let html = render("t", Path::new("/a b&c/t.json")).expect("render");
        assert!(html.contains(r#"src="/a b&c/t.json""#));
    }
}
