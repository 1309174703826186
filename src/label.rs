//! Splitting strings into labels.
//!
//! This is a private module. Its public items are re-exported by the parent.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

//------------ split_on_dots -------------------------------------------------

/// Splits the given strings into a flat sequence of labels.
///
/// Every string is split on dots and the resulting segments are appended
/// in order. Empty segments, such as those produced by leading, trailing,
/// or doubled dots, are dropped. This is the case both for a single string
/// and for a sequence of strings.
///
/// ```
/// use url_hostname::split_on_dots;
///
/// assert_eq!(split_on_dots("www.prixroberval"), ["www", "prixroberval"]);
/// assert_eq!(split_on_dots(["a.b", "", "c."]), ["a", "b", "c"]);
/// assert!(split_on_dots("").is_empty());
/// ```
pub fn split_on_dots<L: IntoLabels>(labels: L) -> Vec<String> {
    labels.into_labels()
}

/// Appends the non-empty dot-separated segments of `s` to `target`.
fn push_segments(s: &str, target: &mut Vec<String>) {
    target.extend(
        s.split('.')
            .filter(|segment| !segment.is_empty())
            .map(ToOwned::to_owned),
    )
}

//------------ IntoLabels ----------------------------------------------------

/// A type that can be turned into a sequence of labels.
///
/// The trait is implemented for a single string, which may contain dots,
/// as well as for sequences of such strings. The unit type stands in for
/// ‘no labels at all.’
pub trait IntoLabels {
    /// Converts the value into labels, most specific label first.
    fn into_labels(self) -> Vec<String>;
}

impl IntoLabels for () {
    fn into_labels(self) -> Vec<String> {
        Vec::new()
    }
}

impl<'a> IntoLabels for &'a str {
    fn into_labels(self) -> Vec<String> {
        let mut res = Vec::new();
        push_segments(self, &mut res);
        res
    }
}

impl IntoLabels for String {
    fn into_labels(self) -> Vec<String> {
        self.as_str().into_labels()
    }
}

impl<'a> IntoLabels for &'a String {
    fn into_labels(self) -> Vec<String> {
        self.as_str().into_labels()
    }
}

impl<'a, S: AsRef<str>> IntoLabels for &'a [S] {
    fn into_labels(self) -> Vec<String> {
        let mut res = Vec::with_capacity(self.len());
        for item in self {
            push_segments(item.as_ref(), &mut res);
        }
        res
    }
}

impl<S: AsRef<str>, const N: usize> IntoLabels for [S; N] {
    fn into_labels(self) -> Vec<String> {
        self.as_slice().into_labels()
    }
}

impl<'a, S: AsRef<str>, const N: usize> IntoLabels for &'a [S; N] {
    fn into_labels(self) -> Vec<String> {
        self.as_slice().into_labels()
    }
}

impl<S: AsRef<str>> IntoLabels for Vec<S> {
    fn into_labels(self) -> Vec<String> {
        self.as_slice().into_labels()
    }
}

impl<'a, S: AsRef<str>> IntoLabels for &'a Vec<S> {
    fn into_labels(self) -> Vec<String> {
        self.as_slice().into_labels()
    }
}

//============ Testing =======================================================
