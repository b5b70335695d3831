//! Atomic set elements and their normalization rules.
//!
//! An [`Element`] is a single character, an integer, or a text value. Every constructor in this
//! module normalizes its input, so two elements compare equal exactly when their normalized forms
//! are equal:
//!
//! - an integer in `0..=9` becomes the matching digit character (`7` becomes `'7'`),
//! - a one-character text becomes that character,
//! - a numeric text becomes an integer, and then follows the digit rule above,
//! - anything else is kept as-is.

use std::{
    borrow::Cow,
    cmp::Ordering,
    collections::BTreeSet,
    fmt,
    hash::{Hash, Hasher},
    iter::Peekable,
};

/// A finite set of elements. Iteration order groups integers, then characters, then text; use
/// [`format_set`] for the display order.
pub type ElementSet = BTreeSet<Element>;

/// A single member of a set.
///
/// Equality, ordering and hashing all look at the normalized form, so `Element::Int(3)` built
/// directly from the variant is the same element as `Element::Char('3')`.
#[derive(Debug, Clone)]
pub enum Element {
    /// A single character, such as `'a'` or `'7'`.
    Char(char),

    /// An integer outside of the single-digit range.
    Int(i64),

    /// A text value with more than one character that is not numeric.
    Text(String),
}

impl Element {
    /// Creates an element from a character.
    pub fn from_char(c: char) -> Self {
        Self::Char(c)
    }

    /// Creates an element from an integer, turning single digits into characters.
    pub fn from_int(n: i64) -> Self {
        match u32::try_from(n) {
            Ok(digit @ 0..=9) => char::from_digit(digit, 10).map_or(Self::Int(n), Self::Char),
            _ => Self::Int(n),
        }
    }

    /// Creates an element from text.
    pub fn from_text(text: &str) -> Self {
        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::Char(c);
        }

        match text.parse::<i64>() {
            Ok(n) => Self::from_int(n),
            Err(_) => Self::Text(text.to_string()),
        }
    }

    /// Returns the normalized form of this element.
    ///
    /// Elements built through the constructors are already normal, so this is only needed for
    /// values built from the variants directly.
    pub fn normalized(self) -> Self {
        match self {
            Self::Char(c) => Self::Char(c),
            Self::Int(n) => Self::from_int(n),
            Self::Text(text) => Self::from_text(&text),
        }
    }

    /// Returns the ordinal code of this element, used as a bound of a range.
    ///
    /// Characters use their code point and integers are taken as codes directly. Text values have
    /// no code.
    pub fn ordinal(&self) -> Option<i64> {
        match self {
            Self::Char(c) => Some(*c as i64),
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Returns the normalized form, borrowing `self` when it is already normal.
    fn normal_form(&self) -> Cow<'_, Self> {
        match self {
            Self::Int(0..=9) | Self::Text(_) => Cow::Owned(self.clone().normalized()),
            Self::Int(_) | Self::Char(_) => Cow::Borrowed(self),
        }
    }

    /// Returns the element as written without quotes, used to order elements of different kinds.
    fn unquoted(&self) -> String {
        match self {
            Self::Char(c) => c.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    /// Rank of the variant in the storage order: integers, then characters, then text.
    fn rank(&self) -> u8 {
        match self {
            Self::Int(_) => 0,
            Self::Char(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

impl From<char> for Element {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl From<i64> for Element {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normal = self.normal_form();
        normal.rank().hash(state);
        match &*normal {
            Self::Char(c) => c.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Text(text) => text.hash(state),
        }
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = (self.normal_form(), other.normal_form());
        match (&*lhs, &*rhs) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Char(a), Self::Char(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (lhs, rhs) => lhs.rank().cmp(&rhs.rank()),
        }
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "'{}'", c),
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Merges integers, sorted numerically, with the other elements, sorted by their unquoted text.
/// Elements of different kinds are compared by their unquoted text.
fn display_order<'a>(
    mut ints: Peekable<impl Iterator<Item = &'a Element>>,
    mut others: Peekable<impl Iterator<Item = &'a Element>>,
) -> Vec<&'a Element> {
    let mut merged = Vec::new();
    loop {
        let next = match (ints.peek(), others.peek()) {
            (Some(int), Some(other)) if other.unquoted() < int.unquoted() => others.next(),
            (Some(_), _) => ints.next(),
            (None, _) => others.next(),
        };
        match next {
            Some(element) => merged.push(element),
            None => return merged,
        }
    }
}

/// Formats a set for display: `∅` when empty, otherwise `{e1, e2, ...}` in sorted order.
///
/// Integers are sorted numerically and characters lexically. Elements of different kinds are
/// sorted by their text as written without quotes, so `{100, '#'}` is shown as `{'#', 100}`.
pub fn format_set(set: &ElementSet) -> String {
    if set.is_empty() {
        return "∅".to_string();
    }

    // the set iterates integers in numeric order already
    let (ints, mut others): (Vec<_>, Vec<_>) = set.iter()
        .partition(|element| matches!(element, Element::Int(_)));
    others.sort_by_cached_key(|element| element.unquoted());

    let elements = display_order(ints.into_iter().peekable(), others.into_iter().peekable())
        .into_iter()
        .map(|element| element.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", elements)
}
