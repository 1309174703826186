//! Host names as immutable values.
//!
//! This crate provides the [`Host`] type which keeps the host part of a URL
//! split into its logical parts: the *subdomains*, the *second level
//! domain*, and the *top level domain*.
//!
//! ```text
//!  leaf          domain name
//!  _|_              __|__
//! /   \            /     \
//!  www.prixroberval.utc.fr
//! \________________/\__/\_/
//!         |          |   |
//!    subdomains  second  top
//!                level   level
//!                domain  domain
//! ```
//!
//! A [`Host`] is never changed in place. All the `with_*` methods return a
//! new value, so they can be chained freely:
//!
//! ```
//! use url_hostname::Host;
//!
//! let host = Host::build("wikipedia", "org", "en");
//! assert_eq!(host.with_leaf("fr").to_string(), "fr.wikipedia.org");
//! assert_eq!(host.to_string(), "en.wikipedia.org");
//! ```
//!
//! Hosts that share the same registrable domain can be reduced to the
//! longest run of subdomains they have in common via
//! [`Host::relative_to`]:
//!
//! ```
//! use url_hostname::Host;
//!
//! let docs = Host::build("amazon", "com", ["docs", "aws"]);
//! let macie = docs.with_subdomains(
//!     ["us-west-2", "redirection", "macie", "aws"]
//! );
//! let aws = macie.relative_to([&docs]).unwrap();
//! assert_eq!(aws.to_string(), "aws.amazon.com");
//! ```
//!
//! Labels are taken as they are given. There is no validation of
//! characters or lengths, no case folding, and no IDNA processing.
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Enables serializing and deserializing hosts via
//!   [serde](https://serde.rs/).
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default. It adds `std::error::Error` impls to the error types.
//! * `tracing`: Emits events through the
//!   [tracing](https://github.com/tokio-rs/tracing) crate when resolving
//!   relative hosts. This enables the `std` feature.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

extern crate alloc;

pub use self::host::{FromStrError, Host, LabelsIter};
pub use self::label::{split_on_dots, IntoLabels};
pub use self::relative::{DomainLevel, DomainMismatch, RelativeToError};

mod host;
mod label;
mod relative;
