/*
 * attr.rs
 * Copyright (c) 2025 Posit, PBC
 */

/// Attributes: `(identifier, classes, key-value pairs)`.
///
/// Key-value pairs keep their source order and are not deduplicated;
/// pandoc itself allows repeated keys and so do we.
pub type Attr = (String, Vec<String>, Vec<(String, String)>);

pub fn empty_attr() -> Attr {
    (String::new(), vec![], vec![])
}

pub fn is_empty_attr(attr: &Attr) -> bool {
    attr.0.is_empty() && attr.1.is_empty() && attr.2.is_empty()
}

/// An attribute with no identifier and no key-value pairs, carrying only
/// the given classes.
pub fn attr_with_classes<I, S>(classes: I) -> Attr
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    (
        String::new(),
        classes.into_iter().map(Into::into).collect(),
        vec![],
    )
}

/// The first class of an attribute, which pandoc's markdown reader fills
/// with the language of a fenced code block.
pub fn first_class(attr: &Attr) -> Option<&str> {
    attr.1.first().map(String::as_str)
}
