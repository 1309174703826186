mod common;

use std::str::FromStr;

use common::init_logging;
use rstest::{fixture, rstest};
use url_hostname::{DomainLevel, Host, RelativeToError};

#[fixture]
fn www_prixroberval_utc_fr() -> Host {
    Host::build("utc", "fr", ["www", "prixroberval"])
}

#[fixture]
fn macie() -> Host {
    Host::build(
        "amazon",
        "com",
        ["us-west-2", "redirection", "macie", "aws"],
    )
}

#[fixture]
fn docs() -> Host {
    Host::build("amazon", "com", ["docs", "aws"])
}

#[test]
fn display() {
    let host = Host::new("wikipedia", "org");
    assert_eq!(host.to_string(), "wikipedia.org");
}

#[test]
fn debug() {
    let host = Host::new("wikipedia", "org");
    assert_eq!(format!("{:?}", host), "Host('wikipedia.org')");
}

#[rstest]
fn subdomains_str(www_prixroberval_utc_fr: Host) {
    assert_eq!(
        www_prixroberval_utc_fr.to_string(),
        "www.prixroberval.utc.fr"
    );
}

#[rstest]
fn domain_name(www_prixroberval_utc_fr: Host) {
    let utc_fr = www_prixroberval_utc_fr.domain_name();
    assert_eq!(utc_fr.to_string(), "utc.fr");
}

#[rstest]
#[case(Host::new("wikipedia", "org"), "wikipedia")]
#[case(Host::build("utc", "fr", ["www", "prixroberval"]), "www")]
#[case(Host::build("amazon", "com", ["docs", "aws"]), "docs")]
fn leaf(#[case] host: Host, #[case] expected_leaf: &str) {
    assert_eq!(host.leaf(), expected_leaf);
}

#[rstest]
#[case(Host::build("wikipedia", "org", "en"), "fr", "fr.wikipedia.org")]
#[case(Host::new("wikipedia", "org"), "utc", "utc.org")]
#[case(
    Host::build("utc", "fr", ["www", "prixroberval"]),
    "ftp",
    "ftp.prixroberval.utc.fr"
)]
fn with_leaf(
    #[case] host: Host,
    #[case] leaf: &str,
    #[case] expected: &str,
) {
    let before = host.to_string();
    assert_eq!(host.with_leaf(leaf).to_string(), expected);
    assert_eq!(host.to_string(), before);
}

#[test]
fn with_subdomains() {
    let host = Host::build("wikipedia", "org", "en");
    assert_eq!(host.with_subdomains("fr").to_string(), "fr.wikipedia.org");
}

#[rstest]
fn with_subdomains_2(www_prixroberval_utc_fr: Host) {
    assert_eq!(
        www_prixroberval_utc_fr
            .with_subdomains("prixroberval")
            .to_string(),
        "prixroberval.utc.fr"
    );
}

#[test]
fn with_subdomains_tuple() {
    let host = Host::new("utc", "fr");
    assert_eq!(
        host.with_subdomains(["www", "prixroberval"]).to_string(),
        "www.prixroberval.utc.fr"
    );
}

#[rstest]
#[case("wikipedia", 1, true)]
#[case("utc", 1, false)]
#[case("wikipedia", 3, true)]
#[case("utc", 3, false)]
fn is_relative_to(
    #[case] leaf: &str,
    #[case] count: usize,
    #[case] expected: bool,
) {
    let host = Host::new("wikipedia", "org");
    let others = vec![host.with_leaf(leaf); count];
    assert_eq!(host.is_relative_to(&others), expected);
}

#[rstest]
fn is_relative_to_is_symmetric(macie: Host, docs: Host) {
    assert!(macie.is_relative_to([&docs]));
    assert!(docs.is_relative_to([&macie]));
}

#[test]
fn relative_to_1_host() {
    init_logging();
    let host0 = Host::new("wikipedia", "org");
    let host1 = host0.with_leaf("wikipedia");
    let host_rel = host0.relative_to([&host1]).unwrap();
    assert_eq!(host_rel.to_string(), "wikipedia.org");
}

#[rstest]
fn relative_to_sub_domains(macie: Host) {
    init_logging();
    let host1 = macie.domain_name().with_subdomains(["docs", "aws"]);
    assert_eq!(
        macie.to_string(),
        "us-west-2.redirection.macie.aws.amazon.com"
    );
    assert_eq!(host1.to_string(), "docs.aws.amazon.com");
    let host_rel = macie.relative_to([&host1]).unwrap();
    assert_eq!(host_rel.to_string(), "aws.amazon.com");
}

#[rstest]
fn relative_to_sub_domains_big(docs: Host) {
    init_logging();
    let macie = docs.with_subdomains(String::from(
        "us-west-2.redirection.macie.aws",
    ));
    assert_eq!(
        macie.to_string(),
        "us-west-2.redirection.macie.aws.amazon.com"
    );
    assert_eq!(docs.to_string(), "docs.aws.amazon.com");
    let host_rel = macie.relative_to([&docs]).unwrap();
    assert_eq!(host_rel, Host::build("amazon", "com", ["aws"]));
}

#[rstest]
#[case(Host::new("amazon", "com"), Host::new("amazon", "com"))]
#[case(
    Host::new("amazon", "com"),
    Host::build("amazon", "com", "docs.aws")
)]
#[case(
    Host::build("amazon", "com", "docs.aws"),
    Host::new("amazon", "com")
)]
fn relative_to_empty_subdomains(#[case] host: Host, #[case] other: Host) {
    init_logging();
    let res = host.relative_to([&other]).unwrap();
    assert!(res.subdomains().is_empty());
    assert_eq!(res, host.domain_name());
}

#[rstest]
fn relative_to_top_level_mismatch(docs: Host) {
    init_logging();
    let other = Host::build("amazon", "fr", ["docs", "aws"]);
    let err = docs.relative_to([&other]).unwrap_err();
    assert!(matches!(err, RelativeToError::TopLevelMismatch(_)));
    let mismatch = err.mismatch().unwrap();
    assert_eq!(mismatch.level(), DomainLevel::Top);
    assert_eq!(mismatch.expected(), "com");
    assert_eq!(mismatch.found(), "fr");
    let message = err.to_string();
    assert!(message.contains("docs.aws.amazon.com"));
    assert!(message.contains("docs.aws.amazon.fr"));
}

#[rstest]
fn relative_to_mismatch_many_hosts(docs: Host, macie: Host) {
    init_logging();
    let other = Host::new("amazon", "fr");
    let err = docs.relative_to([&macie, &other]).unwrap_err();
    assert!(matches!(err, RelativeToError::TopLevelMismatch(_)));
    assert_eq!(err.mismatch().unwrap().index(), 1);
    assert!(!err.to_string().contains("amazon.fr"));
}

#[rstest]
#[case("www.prixroberval.utc.fr")]
#[case("wikipedia.org")]
#[case("us-west-2.redirection.macie.aws.amazon.com")]
fn parse_and_display(#[case] name: &str) {
    let host = Host::from_str(name).unwrap();
    assert_eq!(host.to_string(), name);
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}

    let err = Host::new("a", "b")
        .relative_to(Vec::<&Host>::new())
        .unwrap_err();
    assert_error(&err);
    assert_error(&Host::from_str("localhost").unwrap_err());
}
