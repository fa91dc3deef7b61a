//! Parsing of path expressions.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

// -----------------------------------------------------------------------------
// ParseError

/// Failure to construct a [`ReflectionPath`](crate::access::ReflectionPath).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("path expression cannot be empty")]
    Empty,
}

// -----------------------------------------------------------------------------
// PathKind

/// The notation of a path expression, decided once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// `"a.b.c"`: each segment names a field or a method.
    NameBased,
    /// `"[A].[B]"`: each segment names the type of a field or of a
    /// zero-parameter method's return value.
    TypeBased,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameBased => f.pad("NameBased"),
            Self::TypeBased => f.pad("TypeBased"),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeComponent

/// One bracketed segment of a type-based path.
///
/// ```
/// use rp_reflect::access::TypeComponent;
///
/// let component = TypeComponent::parse(" String [] ");
/// assert_eq!(component.type_name(), "String");
/// assert!(component.is_array());
/// assert_eq!(component.to_string(), "String[]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeComponent {
    type_name: Box<str>,
    is_array: bool,
}

impl TypeComponent {
    /// Parses the text between the outer brackets.
    ///
    /// Surrounding whitespace is ignored; a trailing `[]` marks an array.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.strip_suffix("[]") {
            Some(element) => Self {
                type_name: element.trim().into(),
                is_array: true,
            },
            None => Self {
                type_name: raw.into(),
                is_array: false,
            },
        }
    }

    /// The type name token, without the array marker.
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns `true` if the segment was written as `[T[]]`.
    #[inline]
    pub const fn is_array(&self) -> bool {
        self.is_array
    }
}

impl fmt::Display for TypeComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name)?;
        if self.is_array {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Segments

/// The parsed segments of an expression.
#[derive(Debug, Clone)]
pub(crate) enum Segments {
    Names(Box<[Box<str>]>),
    Types(Box<[TypeComponent]>),
}

impl Segments {
    /// Classifies and splits `expr`.
    ///
    /// Any bracketed segment makes the whole expression type-based; the text
    /// between bracketed segments is then ignored.
    pub(crate) fn parse(expr: &str) -> Result<Self, ParseError> {
        if expr.is_empty() {
            return Err(ParseError::Empty);
        }

        let brackets = bracketed(expr);
        if brackets.is_empty() {
            return Ok(Self::Names(split_names(expr)));
        }
        Ok(Self::Types(
            brackets.into_iter().map(TypeComponent::parse).collect(),
        ))
    }

    pub(crate) const fn kind(&self) -> PathKind {
        match self {
            Self::Names(_) => PathKind::NameBased,
            Self::Types(_) => PathKind::TypeBased,
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Names(names) => names.len(),
            Self::Types(components) => components.len(),
        }
    }
}

/// Splits on `.`, dropping trailing empty tokens only.
fn split_names(expr: &str) -> Box<[Box<str>]> {
    let mut names: Vec<Box<str>> = expr.split('.').map(Box::from).collect();
    while names.last().is_some_and(|name| name.is_empty()) {
        names.pop();
    }
    names.into_boxed_slice()
}

/// Returns the inner text of every `[...]` segment, left to right.
///
/// A segment closes at the first `]`, but at each position the sequence
/// `[]]` is preferred, so `[String[]]` keeps its array marker. Segments never
/// span a line break; an unclosed `[` is skipped.
fn bracketed(expr: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut start = 0;

    while let Some(offset) = expr[start..].find('[') {
        let open = start + offset;
        match close_of(expr, open + 1) {
            Some((inner_end, next)) => {
                found.push(&expr[open + 1..inner_end]);
                start = next;
            }
            None => start = open + 1,
        }
    }
    found
}

/// Scans from `from` for the end of a segment body.
///
/// Returns the end of the inner text and the position after the segment.
fn close_of(expr: &str, from: usize) -> Option<(usize, usize)> {
    let rest = &expr[from..];
    for (index, ch) in rest.char_indices() {
        if rest[index..].starts_with("[]]") {
            return Some((from + index + 2, from + index + 3));
        }
        match ch {
            ']' => return Some((from + index, from + index + 1)),
            '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}' => return None,
            _ => {}
        }
    }
    None
}

// -----------------------------------------------------------------------------
// Tests
