//! Parser module: TypeScript component source to [`DeclarationRecord`].
//!
//! Pipeline per file: tree-sitter parse, top-level aggregation
//! ([`declaration`]), then event description backfill ([`events`]).

pub mod comment;
pub mod declaration;
pub mod events;
pub mod property;
pub mod tag;

use crate::model::DeclarationRecord;
use std::path::Path;
use thiserror::Error;
use tree_sitter::{Language, Node, Parser, Tree};

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to load {dialect} grammar: {message}")]
    Language {
        dialect: &'static str,
        message: String,
    },

    #[error("parser produced no tree for {name}")]
    NoTree { name: String },

    #[error("syntax error in {name} at line {line}, column {column}")]
    Parse {
        name: String,
        line: usize,
        column: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Grammar used for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    TypeScript,
    Tsx,
}

impl Dialect {
    /// `.tsx` files get the TSX grammar, everything else plain TypeScript.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("tsx") => Self::Tsx,
            _ => Self::TypeScript,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
        }
    }

    fn language(self) -> Language {
        match self {
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// Parse one component file and extract its documentation record.
///
/// `name` is the component name (the file's base name). Any syntax error
/// fails the whole file; no partial record is produced.
pub fn parse_component(
    name: &str,
    source: &str,
    dialect: Dialect,
    docs_url: &str,
) -> Result<DeclarationRecord> {
    let tree = parse_tree(name, source, dialect)?;
    let (mut record, event_map) = declaration::aggregate(name, tree.root_node(), source);
    events::reconcile(&mut record, &event_map, docs_url);

    tracing::debug!(
        component = name,
        properties = record.property_count(),
        events = event_map.len(),
        "extracted declaration"
    );

    Ok(record)
}

/// Parse source text, rejecting trees that contain syntax errors.
pub fn parse_tree(name: &str, source: &str, dialect: Dialect) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&dialect.language())
        .map_err(|e| Error::Language {
            dialect: dialect.name(),
            message: format!("{:?}", e),
        })?;

    let tree = parser.parse(source, None).ok_or_else(|| Error::NoTree {
        name: name.to_string(),
    })?;

    if let Some(bad) = first_error(tree.root_node()) {
        let position = bad.start_position();
        return Err(Error::Parse {
            name: name.to_string(),
            line: position.row + 1,
            column: position.column + 1,
        });
    }

    Ok(tree)
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Parse TypeScript for unit tests, panicking on syntax errors.
    pub(crate) fn parse_ts(source: &str) -> Tree {
        parse_tree("test", source, Dialect::TypeScript).expect("test source should parse")
    }

    const URL: &str = "https://cesiumjs.org/Cesium/Build/Documentation/";

    #[test]
    fn dialect_from_extension() {
        assert_eq!(Dialect::from_path(Path::new("src/Entity.tsx")), Dialect::Tsx);
        assert_eq!(Dialect::from_path(Path::new("src/Entity.ts")), Dialect::TypeScript);
    }

    #[test]
    fn syntax_error_is_reported_with_position() {
        let err = parse_component("Broken", "interface AProps {\n  a: ;\n", Dialect::TypeScript, URL)
            .unwrap_err();
        match err {
            Error::Parse { name, line, .. } => {
                assert_eq!(name, "Broken");
                assert!(line >= 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn event_mapping_backfills_description() {
        let source = "const cesiumEventProps = { onShow: \"show\" };\n\nexport interface WidgetCesiumEvents {\n  show: () => void;\n}\n";
        let record = parse_component("Widget", source, Dialect::TypeScript, URL).unwrap();
        let show = &record.cesium_events[0];
        assert_eq!(show.name, "show");
        assert!(show.required);
        assert!(!show.description.is_empty());
        assert!(show.description.contains("Widget"));
        assert!(show.description.contains("show"));
    }

    #[test]
    fn tsx_component_parses() {
        let source = "export interface WidgetProps {\n  // Children.\n  children?: React.ReactNode;\n}\n\nconst Widget = () => <div />;\nexport default Widget;\n";
        let record = parse_component("Widget", source, Dialect::Tsx, URL).unwrap();
        assert_eq!(record.props.len(), 1);
        assert_eq!(record.props[0].description, "Children.");
    }
}
