//! Host names.
//!
//! This is a private module. Its public types are re-exported by the parent.

use crate::label::IntoLabels;
use alloc::string::String;
use alloc::vec::Vec;
use core::{array, fmt, slice, str};

//------------ Host ----------------------------------------------------------

/// An immutable host name.
///
/// A host is kept as three parts: the subdomains, the second level domain,
/// and the top level domain. The subdomains are ordered the way they
/// appear in the host’s string representation, i.e., the most specific
/// label comes first. For `www.prixroberval.utc.fr`, the subdomains are
/// `www` and `prixroberval`, the second level domain is `utc`, and the top
/// level domain is `fr`.
///
/// None of the methods change a host. Instead, they return a new value,
/// so a host can be shared freely.
///
/// Two hosts are equal if all their labels are equal. Labels are compared
/// as they are, there is no case folding.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Host {
    /// The subdomains, most specific first. Never contains empty labels.
    subdomains: Vec<String>,

    /// The label right before the top level domain.
    second_level_domain: String,

    /// The rightmost label.
    top_level_domain: String,
}

/// # Creating Values
///
impl Host {
    /// Creates a host from its parts without splitting anything.
    ///
    /// The caller has to make sure that `subdomains` doesn’t contain any
    /// empty labels.
    pub(crate) fn from_parts(
        subdomains: Vec<String>,
        second_level_domain: String,
        top_level_domain: String,
    ) -> Self {
        debug_assert!(subdomains.iter().all(|label| !label.is_empty()));
        Host {
            subdomains,
            second_level_domain,
            top_level_domain,
        }
    }

    /// Creates a host without subdomains.
    ///
    /// ```
    /// use url_hostname::Host;
    ///
    /// let host = Host::new("wikipedia", "org");
    /// assert_eq!(host.to_string(), "wikipedia.org");
    /// ```
    pub fn new(
        second_level_domain: impl Into<String>,
        top_level_domain: impl Into<String>,
    ) -> Self {
        Self::from_parts(
            Vec::new(),
            second_level_domain.into(),
            top_level_domain.into(),
        )
    }

    /// Creates a host from its second level domain, top level domain, and
    /// subdomains.
    ///
    /// The subdomains can be given as a single string, possibly containing
    /// dots, or as a sequence of such strings. They are split into labels
    /// via [`split_on_dots`]. Empty labels are dropped.
    ///
    /// ```
    /// use url_hostname::Host;
    ///
    /// let host = Host::build("utc", "fr", ["www", "prixroberval"]);
    /// assert_eq!(host.to_string(), "www.prixroberval.utc.fr");
    ///
    /// let host = Host::build("utc", "fr", "www.prixroberval");
    /// assert_eq!(host.to_string(), "www.prixroberval.utc.fr");
    /// ```
    ///
    /// [`split_on_dots`]: crate::split_on_dots
    pub fn build(
        second_level_domain: impl Into<String>,
        top_level_domain: impl Into<String>,
        subdomains: impl IntoLabels,
    ) -> Self {
        Self::from_parts(
            subdomains.into_labels(),
            second_level_domain.into(),
            top_level_domain.into(),
        )
    }

    /// Creates a host from all its labels, most specific first.
    ///
    /// The last label becomes the top level domain, the one before it the
    /// second level domain.
    fn from_labels(labels: impl IntoLabels) -> Result<Self, FromStrError> {
        let mut labels = labels.into_labels();
        let top_level_domain =
            labels.pop().ok_or(FromStrError::MissingTopLevel)?;
        let second_level_domain =
            labels.pop().ok_or(FromStrError::MissingSecondLevel)?;
        Ok(Self::from_parts(labels, second_level_domain, top_level_domain))
    }
}

/// # Properties
///
impl Host {
    /// Returns the subdomains, most specific first.
    pub fn subdomains(&self) -> &[String] {
        &self.subdomains
    }

    /// Returns the second level domain.
    pub fn second_level_domain(&self) -> &str {
        &self.second_level_domain
    }

    /// Returns the top level domain.
    pub fn top_level_domain(&self) -> &str {
        &self.top_level_domain
    }

    /// Returns an iterator over all labels of the host.
    ///
    /// The iterator starts with the most specific label and ends with the
    /// top level domain.
    pub fn labels(&self) -> LabelsIter<'_> {
        LabelsIter {
            subdomains: self.subdomains.iter(),
            domains: [
                self.second_level_domain.as_str(),
                self.top_level_domain.as_str(),
            ]
            .into_iter(),
        }
    }

    /// Returns the registrable part of the host.
    ///
    /// This is a host with the same second and top level domain but
    /// without any subdomains.
    ///
    /// ```
    /// use url_hostname::Host;
    ///
    /// let host = Host::build("utc", "fr", ["www", "prixroberval"]);
    /// assert_eq!(host.domain_name().to_string(), "utc.fr");
    /// ```
    pub fn domain_name(&self) -> Host {
        Self::from_parts(
            Vec::new(),
            self.second_level_domain.clone(),
            self.top_level_domain.clone(),
        )
    }

    /// Returns the leaf, the leftmost label of the host.
    ///
    /// This is the first subdomain or, if there are none, the second level
    /// domain.
    pub fn leaf(&self) -> &str {
        match self.subdomains.first() {
            Some(label) => label.as_str(),
            None => self.second_level_domain.as_str(),
        }
    }
}

/// # Deriving New Values
///
impl Host {
    /// Returns a new host with the leaf replaced.
    ///
    /// If the host has subdomains, the first of them is replaced by `leaf`.
    /// In this case, `leaf` is split on dots like any other subdomain: an
    /// empty `leaf` removes the first subdomain and a leaf with dots
    /// becomes several labels. Otherwise the second level domain is
    /// replaced by `leaf` as it is.
    ///
    /// ```
    /// use url_hostname::Host;
    ///
    /// let host = Host::build("wikipedia", "org", "en");
    /// assert_eq!(host.with_leaf("fr").to_string(), "fr.wikipedia.org");
    /// ```
    pub fn with_leaf(&self, leaf: &str) -> Host {
        match self.subdomains.split_first() {
            Some((_, tail)) => {
                let mut subdomains = leaf.into_labels();
                subdomains.extend_from_slice(tail);
                Self::from_parts(
                    subdomains,
                    self.second_level_domain.clone(),
                    self.top_level_domain.clone(),
                )
            }
            None => Self::from_parts(
                Vec::new(),
                leaf.into(),
                self.top_level_domain.clone(),
            ),
        }
    }

    /// Returns a new host with all subdomains replaced.
    ///
    /// The subdomains are split into labels via [`split_on_dots`].
    ///
    /// ```
    /// use url_hostname::Host;
    ///
    /// let host = Host::new("utc", "fr");
    /// assert_eq!(
    ///     host.with_subdomains(["www", "prixroberval"]).to_string(),
    ///     "www.prixroberval.utc.fr"
    /// );
    /// ```
    ///
    /// [`split_on_dots`]: crate::split_on_dots
    pub fn with_subdomains(&self, subdomains: impl IntoLabels) -> Host {
        Self::from_parts(
            subdomains.into_labels(),
            self.second_level_domain.clone(),
            self.top_level_domain.clone(),
        )
    }
}

//--- FromStr

impl str::FromStr for Host {
    type Err = FromStrError;

    /// Parses a host from its string representation.
    ///
    /// Empty labels are skipped, so a trailing dot is accepted. The string
    /// needs at least two labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_labels(s)
    }
}

//--- Display and Debug

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut labels = self.labels();
        if let Some(label) = labels.next() {
            f.write_str(label)?;
        }
        for label in labels {
            f.write_str(".")?;
            f.write_str(label)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Host('{}')", self)
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for Host {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        struct Labels<'a>(&'a Host);

        impl<'a> serde::Serialize for Labels<'a> {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.collect_seq(self.0.labels())
            }
        }

        if serializer.is_human_readable() {
            serializer
                .serialize_newtype_struct("Host", &format_args!("{}", self))
        } else {
            serializer.serialize_newtype_struct("Host", &Labels(self))
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Host {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde::de::Error;

        struct InnerVisitor;

        impl<'de> serde::de::Visitor<'de> for InnerVisitor {
            type Value = Host;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a host name")
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                Host::from_labels(v).map_err(E::custom)
            }
        }

        struct NewtypeVisitor;

        impl<'de> serde::de::Visitor<'de> for NewtypeVisitor {
            type Value = Host;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a host name")
            }

            fn visit_newtype_struct<D: serde::Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error> {
                if deserializer.is_human_readable() {
                    deserializer.deserialize_str(InnerVisitor)
                } else {
                    let labels =
                        <Vec<String> as serde::Deserialize>::deserialize(
                            deserializer,
                        )?;
                    Host::from_labels(labels).map_err(D::Error::custom)
                }
            }
        }

        deserializer.deserialize_newtype_struct("Host", NewtypeVisitor)
    }
}

//------------ LabelsIter ----------------------------------------------------

/// An iterator over the labels of a host.
///
/// The iterator is returned by [`Host::labels`].
#[derive(Clone, Debug)]
pub struct LabelsIter<'a> {
    subdomains: slice::Iter<'a, String>,
    domains: array::IntoIter<&'a str, 2>,
}

impl<'a> Iterator for LabelsIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self.subdomains.next() {
            Some(label) => Some(label.as_str()),
            None => self.domains.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.subdomains.len() + self.domains.len();
        (len, Some(len))
    }
}

impl<'a> DoubleEndedIterator for LabelsIter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.domains.next_back() {
            Some(label) => Some(label),
            None => self.subdomains.next_back().map(String::as_str),
        }
    }
}

impl<'a> ExactSizeIterator for LabelsIter<'a> {}

//============ Error Types ===================================================

//------------ FromStrError --------------------------------------------------

/// A host could not be created from a string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FromStrError {
    /// The string did not contain any labels.
    MissingTopLevel,

    /// The string contained only a single label.
    MissingSecondLevel,
}

//--- Display and Error

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FromStrError::MissingTopLevel => {
                f.write_str("missing top level domain")
            }
            FromStrError::MissingSecondLevel => {
                f.write_str("missing second level domain")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FromStrError {}

//============ Testing =======================================================
