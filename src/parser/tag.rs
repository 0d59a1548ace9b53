//! Tag vocabulary and line classification.
//!
//! Every normalized comment line is one of a handful of variants. Property
//! annotations and component-level fields are both folds over that variant
//! sequence, applied strictly in source order.

use crate::model::Bucket;

/// Property bucket tags, checked in order.
pub const BUCKET_TAGS: &[(&str, Bucket)] = &[
    ("@CesiumProp", Bucket::CesiumProp),
    ("@CesiumReadonlyProp", Bucket::CesiumReadonlyProp),
    ("@CesiumEvent", Bucket::CesiumEvent),
    ("@prop", Bucket::Prop),
];

pub const HIDDEN_TAG: &str = "@hidden";

pub const TYPE_TAG: &str = "@type ";

/// Component-level tags. `@example-imports` must precede `@example`.
pub const DOC_TAGS: &[(&str, DocTag)] = &[
    ("@summary", DocTag::Summary),
    ("@scope", DocTag::Scope),
    ("@example-imports", DocTag::ExampleImports),
    ("@example", DocTag::Example),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTag {
    Summary,
    Scope,
    Example,
    ExampleImports,
}

/// One classified comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Bucket(Bucket),
    Hidden,
    TypeOverride(&'a str),
    DocTag(DocTag, &'a str),
    Description(&'a str),
}

impl Line<'_> {
    fn is_tag(&self) -> bool {
        !matches!(self, Line::Description(_))
    }
}

/// Classify a single normalized line. Leading whitespace is ignored.
pub fn classify(line: &str) -> Line<'_> {
    let text = line.trim();

    if let Some((_, bucket)) = BUCKET_TAGS.iter().find(|(tag, _)| text.starts_with(tag)) {
        return Line::Bucket(*bucket);
    }
    if text.starts_with(HIDDEN_TAG) {
        return Line::Hidden;
    }
    if let Some(rest) = text.strip_prefix(TYPE_TAG) {
        let rest = rest.trim();
        if !rest.is_empty() {
            return Line::TypeOverride(rest);
        }
    }
    for (tag, kind) in DOC_TAGS {
        if let Some(rest) = text.strip_prefix(tag) {
            return Line::DocTag(*kind, rest.trim());
        }
    }

    Line::Description(text)
}

/// Facts a property's leading comments contribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// `None` means the enclosing interface's default bucket applies.
    pub bucket: Option<Bucket>,
    pub hidden: bool,
    pub explicit_type: Option<String>,
    pub description: String,
}

/// Fold normalized lines (all blocks, in order) into an [`Annotation`].
///
/// Bucket and type tags are last-write-wins; `@hidden` is sticky. Tag lines
/// are consumed, everything else joins the description.
pub fn annotate<I, S>(lines: I) -> Annotation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut annotation = Annotation::default();
    let mut description: Vec<String> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        match classify(line) {
            Line::Bucket(bucket) => annotation.bucket = Some(bucket),
            Line::Hidden => annotation.hidden = true,
            Line::TypeOverride(ty) => annotation.explicit_type = Some(ty.to_string()),
            Line::DocTag(..) | Line::Description(_) => {
                let text = line.trim();
                if !text.is_empty() {
                    description.push(text.to_string());
                }
            }
        }
    }

    annotation.description = description.join(" ");
    annotation
}

/// Component-level fields declared in one normalized comment block.
///
/// A doc tag's value is the rest of its line plus continuation lines up to
/// the next tag line or the end of the block, trimmed. Empty values are
/// dropped. Entries come back in source order.
pub fn doc_tags(lines: &[String]) -> Vec<(DocTag, String)> {
    let mut found = Vec::new();
    let mut open: Option<(DocTag, Vec<&str>)> = None;

    for line in lines {
        let classified = classify(line);
        if let Line::DocTag(kind, rest) = classified {
            close(open.take(), &mut found);
            open = Some((kind, vec![rest]));
        } else if classified.is_tag() {
            close(open.take(), &mut found);
        } else if let Some((_, body)) = open.as_mut() {
            body.push(line.as_str());
        }
    }
    close(open, &mut found);

    found
}

fn close(open: Option<(DocTag, Vec<&str>)>, found: &mut Vec<(DocTag, String)>) {
    if let Some((kind, body)) = open {
        let value = body.join("\n").trim().to_string();
        if !value.is_empty() {
            found.push((kind, value));
        }
    }
}
