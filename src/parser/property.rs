//! Property signature extraction.

use crate::model::{Bucket, PropertyRecord};
use crate::parser::comment::{leading_comments, normalize};
use crate::parser::tag::annotate;
use regex::Regex;
use std::sync::LazyLock;
use tree_sitter::Node;

// `<type> /* Display */` terminated by `,`, `)` or end of text
static RE_DISPLAY_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":?[^,():/]*?/\*\s*(.+?)\s*\*/([,)]|$)").unwrap());

/// Build a [`PropertyRecord`] from a `property_signature` node.
///
/// Returns the bucket the property resolved to (its own tag, else
/// `default`) with the record. `None` when the property name is not a
/// plain identifier or string key.
pub fn extract_property(
    node: Node,
    source: &str,
    default: Bucket,
) -> Option<(Bucket, PropertyRecord)> {
    let name = property_key(node.child_by_field_name("name")?, source)?;

    let annotation = annotate(
        leading_comments(node, source)
            .into_iter()
            .flat_map(normalize),
    );

    let mut cursor = node.walk();
    let optional = node.children(&mut cursor).any(|c| c.kind() == "?");

    let ty = match annotation.explicit_type {
        Some(ty) => ty,
        None => unwind_display_type(&declared_type(node, source)),
    };
    let bucket = annotation.bucket.unwrap_or(default);

    tracing::trace!(property = %name, ?bucket, optional, hidden = annotation.hidden, "extracted property");

    Some((
        bucket,
        PropertyRecord {
            name,
            required: !optional,
            ty,
            hidden: annotation.hidden,
            description: annotation.description,
        },
    ))
}

/// Text of an identifier or string-literal key.
pub(crate) fn property_key(key: Node, source: &str) -> Option<String> {
    match key.kind() {
        "property_identifier" | "identifier" => Some(source[key.byte_range()].to_string()),
        "string" => string_value(key, source),
        _ => None,
    }
}

/// Value of a string literal or a substitution-free template literal.
pub(crate) fn string_value(node: Node, source: &str) -> Option<String> {
    match node.kind() {
        "string" => {}
        "template_string" => {
            let mut cursor = node.walk();
            if node
                .named_children(&mut cursor)
                .any(|c| c.kind() == "template_substitution")
            {
                return None;
            }
        }
        _ => return None,
    }
    let text = &source[node.byte_range()];
    text.get(1..text.len().saturating_sub(1)).map(unescape)
}

/// Resolve backslash escapes in literal text. Unknown escapes keep the
/// escaped character.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Declared type text, plus a `/* Display */` block trailing it on the same
/// line. Line comments and any further blocks are not part of the type.
fn declared_type(node: Node, source: &str) -> String {
    let Some(ty) = node
        .child_by_field_name("type")
        .and_then(|annotation| annotation.named_child(0))
    else {
        return String::new();
    };

    let mut end = node.end_byte().max(ty.end_byte());
    let display = node.next_sibling().filter(|sibling| {
        sibling.kind() == "comment"
            && sibling.start_position().row == node.end_position().row
            && source[sibling.byte_range()].starts_with("/*")
    });
    if let Some(comment) = display {
        end = comment.end_byte();
    }

    source[ty.start_byte()..end].to_string()
}

/// Replace `<type> /* Display */` runs with `: Display`.
///
/// Lets authors show a readable alias for a complex structural type, e.g.
/// `(e: Cesium.Event /* Ev */, x: number) => void` becomes
/// `(e: Ev, x: number) => void`.
pub fn unwind_display_type(ty: &str) -> String {
    RE_DISPLAY_TYPE.replace_all(ty, ": ${1}${2}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tests::parse_ts;

    fn props(source: &str, default: Bucket) -> Vec<Option<(Bucket, PropertyRecord)>> {
        let tree = parse_ts(source);
        let iface = tree.root_node().named_child(0).unwrap();
        let body = iface.child_by_field_name("body").unwrap();
        let mut cursor = body.walk();
        body.named_children(&mut cursor)
            .filter(|n| n.kind() == "property_signature")
            .map(|n| extract_property(n, source, default))
            .collect()
    }

    fn single(source: &str) -> (Bucket, PropertyRecord) {
        props(source, Bucket::CesiumProp)
            .into_iter()
            .next()
            .flatten()
            .unwrap()
    }

    #[test]
    fn optional_marker_means_not_required() {
        let (_, p) = single("interface AProps {\n  show?: boolean;\n}\n");
        assert_eq!(p.name, "show");
        assert!(!p.required);
        assert_eq!(p.ty, "boolean");
    }

    #[test]
    fn no_marker_means_required() {
        let (_, p) = single("interface AProps {\n  position: Cesium.Cartesian3;\n}\n");
        assert!(p.required);
        assert_eq!(p.ty, "Cesium.Cartesian3");
    }

    #[test]
    fn default_bucket_without_tag() {
        let (bucket, p) = single("interface AProps {\n  // Plain text.\n  a: string;\n}\n");
        assert_eq!(bucket, Bucket::CesiumProp);
        assert_eq!(p.description, "Plain text.");
    }

    #[test]
    fn tag_overrides_default_bucket() {
        let (bucket, _) = single("interface AProps {\n  // @CesiumEvent\n  a: () => void;\n}\n");
        assert_eq!(bucket, Bucket::CesiumEvent);
    }

    #[test]
    fn explicit_type_wins_over_structure() {
        let (_, p) = single(
            "interface AProps {\n  // @type MyAlias\n  a?: Cartesian3 /* Vector3-like */;\n}\n",
        );
        assert_eq!(p.ty, "MyAlias");
    }

    #[test]
    fn display_comment_is_unwound() {
        let (_, p) = single("interface AProps {\n  a?: Cartesian3 /* Vector3-like */;\n}\n");
        assert_eq!(p.ty, ": Vector3-like");
    }

    #[test]
    fn line_comment_is_not_part_of_type() {
        let all = props(
            "interface AProps {\n  a?: number // a note\n  b: string\n}\n",
            Bucket::Prop,
        );
        assert_eq!(all[0].as_ref().unwrap().1.ty, "number");
        assert_eq!(all[1].as_ref().unwrap().1.ty, "string");
    }

    #[test]
    fn line_comment_on_last_member() {
        let (_, p) = single("interface AProps {\n  a?: number // a note\n}\n");
        assert_eq!(p.ty, "number");
    }

    #[test]
    fn only_first_display_block_counts() {
        let all = props(
            "interface AProps {\n  a?: number /* x */ /* y */\n  b: string\n}\n",
            Bucket::Prop,
        );
        let (_, a) = all[0].as_ref().unwrap();
        let (_, b) = all[1].as_ref().unwrap();
        assert_eq!(a.ty, ": x");
        assert_eq!(b.ty, "string");
        assert_eq!(b.description, "");
    }

    #[test]
    fn missing_annotation_is_empty_type() {
        let (_, p) = single("interface AProps {\n  a;\n}\n");
        assert_eq!(p.ty, "");
    }

    #[test]
    fn readonly_modifier_is_ignored() {
        let (_, p) = single("interface AProps {\n  readonly a?: number;\n}\n");
        assert_eq!(p.name, "a");
        assert!(!p.required);
        assert_eq!(p.ty, "number");
    }

    #[test]
    fn string_key_is_unquoted() {
        let (_, p) = single("interface AProps {\n  \"data-id\": string;\n}\n");
        assert_eq!(p.name, "data-id");
    }

    #[test]
    fn computed_name_is_none() {
        let all = props(
            "interface AProps {\n  [key]: string;\n  b: number;\n}\n",
            Bucket::Prop,
        );
        assert_eq!(all.len(), 2);
        assert!(all[0].is_none());
        assert_eq!(all[1].as_ref().unwrap().1.name, "b");
    }

    #[test]
    fn escaped_string_key() {
        let (_, p) = single("interface AProps {\n  \"a\\\"b\": string;\n}\n");
        assert_eq!(p.name, "a\"b");
    }

    #[test]
    fn unescape_sequences() {
        assert_eq!(unescape(r"a\'b\\c"), "a'b\\c");
        assert_eq!(unescape(r"line\nnext"), "line\nnext");
        assert_eq!(unescape("plain"), "plain");
    }

    #[test]
    fn unwind_whole_type() {
        assert_eq!(unwind_display_type("Cartesian3 /* Vector3-like */"), ": Vector3-like");
    }

    #[test]
    fn unwind_function_parameters() {
        assert_eq!(
            unwind_display_type("(movement: Cesium.MoveEvent /* MoveEvent */, target: any) => void"),
            "(movement: MoveEvent, target: any) => void"
        );
    }

    #[test]
    fn unwind_leaves_plain_types() {
        assert_eq!(unwind_display_type("string | number"), "string | number");
        assert_eq!(unwind_display_type("Array<Foo /* Bar */>"), "Array<Foo /* Bar */>");
    }
}
