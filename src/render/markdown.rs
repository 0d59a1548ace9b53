//! docz MDX page renderer.
//!
//! One page per component: frontmatter, optional live playground, summary,
//! scope, then the four property tables.

use crate::model::*;
use crate::render::links::{element_link, type_cell};
use crate::render::{RenderOptions, Renderer};

pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

/// Table headings, in page order.
const SECTIONS: &[(&str, Bucket)] = &[
    ("Cesium properties", Bucket::CesiumProp),
    ("Cesium read only properties", Bucket::CesiumReadonlyProp),
    ("Cesium events", Bucket::CesiumEvent),
    ("Other properties", Bucket::Prop),
];

impl Renderer for MarkdownRenderer {
    fn render(&self, record: &DeclarationRecord) -> String {
        let name = &record.name;
        let docs_url = &self.options.docs_url;
        let mut out = String::new();

        out.push_str(&format!(
            "---\nname: {name}\nroute: /components/{name}\nmenu: Components\n---\n"
        ));

        if let Some(ref example) = record.example {
            let host = host_component(example);
            out.push_str("\nimport { Playground } from \"docz\";\n");
            out.push_str(&format!("import {host} from \"../components/{host}\";\n"));
            if let Some(ref imports) = record.example_imports {
                out.push_str(imports);
                out.push('\n');
            }
        }

        out.push_str(&format!("\n# {name}\n"));
        if let Some(ref summary) = record.summary {
            out.push_str(&format!("\n{summary}\n"));
        }
        out.push_str(&format!(
            "\n**Cesium element**: {}\n",
            element_link(name, docs_url)
        ));

        if let Some(ref example) = record.example {
            out.push_str("\n<Playground>\n");
            out.push_str(&indent(example, "  "));
            out.push_str("\n</Playground>\n");
        }

        if let Some(ref scope) = record.scope {
            out.push_str(&format!("\n## Available scope\n\n{scope}\n"));
        }

        out.push_str("\n## Properties\n");
        for (title, bucket) in SECTIONS {
            out.push_str(&format!("\n### {title}\n\n"));
            out.push_str(&render_prop_table(record.bucket(*bucket), docs_url));
            out.push('\n');
        }

        let mut page = out.trim().to_string();
        page.push('\n');
        page
    }

    fn file_extension(&self) -> &str {
        "mdx"
    }
}

/// Playground host: `CesiumWidget` when the example uses one, else `Viewer`.
fn host_component(example: &str) -> &'static str {
    if example.contains("<CesiumWidget") {
        "CesiumWidget"
    } else {
        "Viewer"
    }
}

/// Render one bucket as a markdown table, or `N/A` when it is empty.
///
/// Hidden properties are left out; an all-hidden bucket keeps its header.
fn render_prop_table(props: &[PropertyRecord], docs_url: &str) -> String {
    if props.is_empty() {
        return "N/A".to_string();
    }

    let mut lines = vec![
        "| Property | Type | Description |".to_string(),
        "|--|--|--|".to_string(),
    ];
    for prop in props.iter().filter(|p| !p.hidden) {
        let required = if prop.required { "Required. " } else { "" };
        lines.push(format!(
            "| {} | {} | {}{} |",
            prop.name,
            type_cell(&prop.ty, docs_url),
            required,
            prop.description
        ));
    }
    lines.join("\n")
}

fn indent(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
