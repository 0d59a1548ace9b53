//! JSON renderer: the extracted record as-is, for previews and tooling.

use crate::model::DeclarationRecord;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, record: &DeclarationRecord) -> String {
        let mut out = serde_json::to_string_pretty(record)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e));
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
