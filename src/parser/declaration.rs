//! Top-level walk of one component file.
//!
//! Interfaces named by the suffix convention feed the property buckets,
//! the `cesiumEventProps` initializer feeds the event mapping, and every
//! statement's leading comments (plus the comments closing the file) may
//! set component-level fields.

use crate::model::{Bucket, DeclarationRecord, EventNameMapping};
use crate::parser::comment::{dangling_comments, leading_comments, normalize};
use crate::parser::property::{extract_property, property_key, string_value};
use crate::parser::tag::{doc_tags, DocTag};
use tracing::debug;
use tree_sitter::Node;

/// Interface name suffix → default bucket, checked in order.
pub const BUCKET_SUFFIXES: &[(&str, Bucket)] = &[
    ("CesiumProps", Bucket::CesiumProp),
    ("CesiumReadonlyProps", Bucket::CesiumReadonlyProp),
    ("CesiumEvents", Bucket::CesiumEvent),
    ("Props", Bucket::Prop),
];

/// Variable whose object literal maps prop names to native event names.
pub const EVENT_MAP_NAME: &str = "cesiumEventProps";

/// Default bucket for an interface name, if it follows the convention.
///
/// The suffix must be preceded by at least one character, so a bare
/// `CesiumProps` falls through to the `Props` rule.
pub fn default_bucket(interface: &str) -> Option<Bucket> {
    BUCKET_SUFFIXES
        .iter()
        .find(|(suffix, _)| interface.len() > suffix.len() && interface.ends_with(suffix))
        .map(|(_, bucket)| *bucket)
}

/// Walk the top-level statements of `root` into a record and event mapping.
pub fn aggregate(name: &str, root: Node, source: &str) -> (DeclarationRecord, EventNameMapping) {
    let mut record = DeclarationRecord::new(name);
    let mut events = EventNameMapping::new();

    let mut cursor = root.walk();
    for statement in root.named_children(&mut cursor) {
        if statement.kind() == "comment" {
            continue;
        }

        let decl = unwrap_export(statement);
        match decl.kind() {
            "interface_declaration" => collect_interface(decl, source, &mut record),
            "lexical_declaration" | "variable_declaration" => {
                collect_event_map(decl, source, &mut events)
            }
            _ => {}
        }

        apply_doc_tags(leading_comments(statement, source), &mut record);
    }
    apply_doc_tags(dangling_comments(root, source), &mut record);

    (record, events)
}

fn unwrap_export(statement: Node) -> Node {
    if statement.kind() == "export_statement" {
        statement
            .child_by_field_name("declaration")
            .unwrap_or(statement)
    } else {
        statement
    }
}

fn collect_interface(decl: Node, source: &str, record: &mut DeclarationRecord) {
    let Some(name_node) = decl.child_by_field_name("name") else {
        return;
    };
    let interface = &source[name_node.byte_range()];
    let Some(default) = default_bucket(interface) else {
        debug!(interface, "interface does not follow the naming convention, skipping");
        return;
    };
    let Some(body) = decl.child_by_field_name("body") else {
        return;
    };

    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        if member.kind() != "property_signature" {
            continue;
        }
        match extract_property(member, source, default) {
            Some((bucket, property)) => record.bucket_mut(bucket).push(property),
            None => debug!(
                interface,
                member = &source[member.byte_range()],
                "unsupported property name, skipping"
            ),
        }
    }
}

fn collect_event_map(decl: Node, source: &str, events: &mut EventNameMapping) {
    let mut cursor = decl.walk();
    for declarator in decl.named_children(&mut cursor) {
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        let is_event_map = declarator
            .child_by_field_name("name")
            .is_some_and(|n| &source[n.byte_range()] == EVENT_MAP_NAME);
        if !is_event_map {
            continue;
        }
        let Some(object) = declarator
            .child_by_field_name("value")
            .map(unwrap_expression)
            .filter(|n| n.kind() == "object")
        else {
            debug!("{EVENT_MAP_NAME} is not an object literal");
            continue;
        };

        let mut entries = object.walk();
        for pair in object.named_children(&mut entries) {
            if pair.kind() != "pair" {
                continue;
            }
            let key = pair
                .child_by_field_name("key")
                .and_then(|k| property_key(k, source));
            let value = pair
                .child_by_field_name("value")
                .and_then(|v| string_value(v, source));
            match (key, value) {
                (Some(prop), Some(native)) if !native.is_empty() => events.push((native, prop)),
                _ => debug!(entry = &source[pair.byte_range()], "skipping event map entry"),
            }
        }
    }
}

/// Look through `as const`, `satisfies` and parentheses.
fn unwrap_expression(mut node: Node) -> Node {
    while matches!(
        node.kind(),
        "as_expression" | "satisfies_expression" | "parenthesized_expression"
    ) {
        match node.named_child(0) {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

fn apply_doc_tags(blocks: Vec<&str>, record: &mut DeclarationRecord) {
    for block in blocks {
        for (tag, value) in doc_tags(&normalize(block)) {
            let slot = match tag {
                DocTag::Summary => &mut record.summary,
                DocTag::Scope => &mut record.scope,
                DocTag::Example => &mut record.example,
                DocTag::ExampleImports => &mut record.example_imports,
            };
            *slot = Some(value);
        }
    }
}
