//! Type cell formatting: API reference links and table-safe escaping.

use regex::{Captures, Regex};
use std::sync::LazyLock;

// `Cesium.<Name>` up to a type delimiter or end of text
static RE_CESIUM_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Cesium\.(.+?)( |<|>|,|\[|\)|$)").unwrap());

/// Link every `Cesium.<Name>` reference to `<docs_url><Name>.html`.
pub fn link_library_types(ty: &str, docs_url: &str) -> String {
    RE_CESIUM_TYPE
        .replace_all(ty, |caps: &Captures| {
            format!("[Cesium.{0}]({1}{0}.html){2}", &caps[1], docs_url, &caps[2])
        })
        .into_owned()
}

/// Link to a component's own API reference page.
pub fn element_link(name: &str, docs_url: &str) -> String {
    format!("[{0}]({1}{0}.html)", name, docs_url)
}

/// Render a property type for a markdown table cell.
///
/// Links library types, escapes `|`, `<` and `>`, and collapses multi-line
/// types onto one line.
pub fn type_cell(ty: &str, docs_url: &str) -> String {
    link_library_types(ty, docs_url)
        .replace('|', "&#124;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://cesium.com/docs/";

    #[test]
    fn links_bare_type() {
        assert_eq!(
            link_library_types("Cesium.Color", URL),
            "[Cesium.Color](https://cesium.com/docs/Color.html)"
        );
    }

    #[test]
    fn links_inside_generics_and_params() {
        assert_eq!(
            link_library_types("(e: Cesium.Entity) => void", URL),
            "(e: [Cesium.Entity](https://cesium.com/docs/Entity.html)) => void"
        );
        assert_eq!(
            link_library_types("Cesium.Property<Cesium.Color>", URL),
            "[Cesium.Property](https://cesium.com/docs/Property.html)<[Cesium.Color](https://cesium.com/docs/Color.html)>"
        );
    }

    #[test]
    fn leaves_other_types() {
        assert_eq!(link_library_types("string | number", URL), "string | number");
    }

    #[test]
    fn cell_escapes_table_characters() {
        assert_eq!(
            type_cell("Cesium.Color | Array<number>", URL),
            "[Cesium.Color](https://cesium.com/docs/Color.html) &#124; Array&lt;number&gt;"
        );
    }

    #[test]
    fn cell_collapses_lines() {
        assert_eq!(type_cell("{\n    a: number;\n    b: string;\n  }", URL), "{ a: number; b: string; }");
    }

    #[test]
    fn element() {
        assert_eq!(element_link("Entity", URL), "[Entity](https://cesium.com/docs/Entity.html)");
    }
}
