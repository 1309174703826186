//! Resolving hosts relative to each other.
//!
//! This is a private module. Its public types are re-exported by the parent.

use crate::host::Host;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// # Relative Hosts
///
impl Host {
    /// Returns whether this host is relative to all the `others`.
    ///
    /// A host is relative to another host if both share the same second
    /// and top level domain. The subdomains are not considered at all.
    /// Returns `false` if `others` is empty.
    ///
    /// ```
    /// use url_hostname::Host;
    ///
    /// let docs = Host::build("amazon", "com", ["docs", "aws"]);
    /// let macie = docs.with_subdomains(
    ///     ["us-west-2", "redirection", "macie", "aws"]
    /// );
    /// assert!(macie.is_relative_to([&docs]));
    /// assert!(!macie.is_relative_to([&Host::new("amazon", "fr")]));
    /// ```
    pub fn is_relative_to<'a, I>(&self, others: I) -> bool
    where
        I: IntoIterator<Item = &'a Host>,
    {
        let others: Vec<&Host> = others.into_iter().collect();
        !others.is_empty() && self.find_mismatch(&others).is_none()
    }

    /// Returns the part of this host that all the `others` have in common.
    ///
    /// The result has the second and top level domain of this host and
    /// the longest run of subdomains, counted from the second level domain
    /// towards the leaf, that this host and every one of `others` share.
    /// If they don’t have any subdomains in common, the result is the
    /// [domain name][Self::domain_name].
    ///
    /// This fails if `others` is empty or if any of them has a different
    /// top level or second level domain. A mismatch of the top level
    /// domain is reported before any mismatch of the second level domain.
    ///
    /// ```
    /// use url_hostname::Host;
    ///
    /// let docs = Host::build("amazon", "com", ["docs", "aws"]);
    /// let macie = docs.with_subdomains(
    ///     ["us-west-2", "redirection", "macie", "aws"]
    /// );
    /// assert_eq!(
    ///     macie.relative_to([&docs]).unwrap().to_string(),
    ///     "aws.amazon.com"
    /// );
    /// ```
    pub fn relative_to<'a, I>(
        &self,
        others: I,
    ) -> Result<Host, RelativeToError>
    where
        I: IntoIterator<Item = &'a Host>,
    {
        let others: Vec<&Host> = others.into_iter().collect();
        if others.is_empty() {
            return Err(self.log_failure(RelativeToError::NoOthers));
        }
        if let Some((level, index)) = self.find_mismatch(&others) {
            let err = DomainMismatch::new(level, self, &others, index);
            return Err(self.log_failure(match level {
                DomainLevel::Top => RelativeToError::TopLevelMismatch(err),
                DomainLevel::Second => {
                    RelativeToError::SecondLevelMismatch(err)
                }
            }));
        }

        // Walk all subdomains from the right. Running out of labels on any
        // side ends the common part just like a differing label does.
        let mut suffixes: Vec<_> = others
            .iter()
            .map(|other| other.subdomains().iter().rev())
            .collect();
        let mut common = Vec::new();
        'labels: for label in self.subdomains().iter().rev() {
            for suffix in &mut suffixes {
                if suffix.next() != Some(label) {
                    break 'labels;
                }
            }
            common.push(label.clone());
        }
        common.reverse();

        let res = Host::from_parts(
            common,
            self.second_level_domain().into(),
            self.top_level_domain().into(),
        );
        #[cfg(feature = "tracing")]
        tracing::trace!(
            host = %self,
            others = others.len(),
            relative = %res,
            "resolved relative host"
        );
        Ok(res)
    }

    /// Returns the first domain level and operand that differ from `self`.
    ///
    /// All top level domains are checked before any second level domain.
    fn find_mismatch(
        &self,
        others: &[&Host],
    ) -> Option<(DomainLevel, usize)> {
        if let Some(index) = others.iter().position(|other| {
            other.top_level_domain() != self.top_level_domain()
        }) {
            return Some((DomainLevel::Top, index));
        }
        others
            .iter()
            .position(|other| {
                other.second_level_domain() != self.second_level_domain()
            })
            .map(|index| (DomainLevel::Second, index))
    }

    /// Emits a debug event for a failed resolution.
    fn log_failure(&self, err: RelativeToError) -> RelativeToError {
        #[cfg(feature = "tracing")]
        tracing::debug!(host = %self, "hosts are not relative: {}", err);
        err
    }
}

//------------ DomainLevel ---------------------------------------------------

/// The level of a domain that is compared when resolving relative hosts.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DomainLevel {
    /// The top level domain, i.e., the rightmost label.
    Top,

    /// The second level domain.
    Second,
}

//--- Display

impl fmt::Display for DomainLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DomainLevel::Top => f.write_str("top level domain"),
            DomainLevel::Second => f.write_str("second level domain"),
        }
    }
}

//============ Error Types ===================================================

//------------ RelativeToError -----------------------------------------------

/// A host could not be resolved relative to other hosts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RelativeToError {
    /// There were no other hosts to compare with.
    NoOthers,

    /// One of the other hosts has a different top level domain.
    TopLevelMismatch(DomainMismatch),

    /// One of the other hosts has a different second level domain.
    ///
    /// This is only reported if all top level domains are equal.
    SecondLevelMismatch(DomainMismatch),
}

impl RelativeToError {
    /// Returns the details of a domain mismatch if there was one.
    pub fn mismatch(&self) -> Option<&DomainMismatch> {
        match *self {
            RelativeToError::NoOthers => None,
            RelativeToError::TopLevelMismatch(ref err)
            | RelativeToError::SecondLevelMismatch(ref err) => Some(err),
        }
    }
}

//--- Display and Error

impl fmt::Display for RelativeToError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RelativeToError::NoOthers => f.write_str("no hosts to compare"),
            RelativeToError::TopLevelMismatch(ref err)
            | RelativeToError::SecondLevelMismatch(ref err) => err.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RelativeToError {}

//------------ DomainMismatch ------------------------------------------------

/// Details on a host that differs from the one being resolved.
///
/// When there was exactly one other host, the mismatch keeps both hosts
/// and names them in its message. With more hosts, the message only
/// states that one of them differs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DomainMismatch {
    /// The domain level that differs.
    level: DomainLevel,

    /// The domain of the host being resolved.
    expected: String,

    /// The domain of the offending host.
    found: String,

    /// The position of the offending host among the others.
    index: usize,

    /// The number of other hosts.
    count: usize,

    /// The host being resolved and the other host if it was the only one.
    hosts: Option<(Host, Host)>,
}

impl DomainMismatch {
    fn new(
        level: DomainLevel,
        host: &Host,
        others: &[&Host],
        index: usize,
    ) -> Self {
        let other = others[index];
        let (expected, found) = match level {
            DomainLevel::Top => {
                (host.top_level_domain(), other.top_level_domain())
            }
            DomainLevel::Second => {
                (host.second_level_domain(), other.second_level_domain())
            }
        };
        DomainMismatch {
            level,
            expected: expected.into(),
            found: found.into(),
            index,
            count: others.len(),
            hosts: if others.len() == 1 {
                Some((host.clone(), other.clone()))
            } else {
                None
            },
        }
    }

    /// Returns the domain level that differs.
    pub fn level(&self) -> DomainLevel {
        self.level
    }

    /// Returns the domain of the host being resolved.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Returns the differing domain of the offending host.
    pub fn found(&self) -> &str {
        &self.found
    }

    /// Returns the position of the offending host among the others.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns both hosts if there was only a single other host.
    pub fn hosts(&self) -> Option<(&Host, &Host)> {
        self.hosts.as_ref().map(|(host, other)| (host, other))
    }
}

//--- Display and Error

impl fmt::Display for DomainMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.hosts {
            Some((ref host, ref other)) => write!(
                f,
                "{} is not relative to {}: {} '{}' differs from '{}'",
                host, other, self.level, self.found, self.expected
            ),
            None => write!(
                f,
                "one of {} hosts is not relative: {} differs from '{}'",
                self.count, self.level, self.expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DomainMismatch {}

//============ Testing =======================================================
