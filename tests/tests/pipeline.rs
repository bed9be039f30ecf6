use std::io::Write;
use std::net::Ipv4Addr;

use hosthunter_common::error::InputError;
use hosthunter_common::input;
use hosthunter_common::network::record::Status;
use hosthunter_integration_tests::{ScriptedResolver, run_pipeline};

fn google() -> ScriptedResolver {
    ScriptedResolver::new([(Ipv4Addr::new(8, 8, 8, 8), "dns.google")])
}

#[test]
fn one_record_per_address_in_order() {
    let addresses = ["10.0.0.3", "8.8.8.8", "10.0.0.1", "10.0.0.2"];
    let resolver = google();

    let records = run_pipeline(&addresses, &resolver).unwrap();

    let order: Vec<&str> = records.iter().map(|r| r.address()).collect();
    assert_eq!(order, addresses);
    assert_eq!(
        resolver.calls(),
        vec![
            Ipv4Addr::new(10, 0, 0, 3),
            Ipv4Addr::new(8, 8, 8, 8),
            Ipv4Addr::new(10, 0, 0, 1),
            Ipv4Addr::new(10, 0, 0, 2),
        ]
    );
}

#[test]
fn unresolvable_address_is_failed() {
    let records = run_pipeline(&["192.168.1.1"], &google()).unwrap();
    assert_eq!(records[0].status(), Status::Failed);
    assert_eq!(records[0].hostname(), "No hostname found");
}

#[test]
fn resolver_error_is_failed_and_the_walk_continues() {
    let resolver = google().failing(Ipv4Addr::new(10, 0, 0, 66));
    let records = run_pipeline(&["10.0.0.66", "8.8.8.8"], &resolver).unwrap();

    assert_eq!(records[0].status(), Status::Failed);
    assert_eq!(records[0].hostname(), "No hostname found");
    assert_eq!(records[1].status(), Status::Success);
    assert_eq!(records[1].hostname(), "dns.google");
    assert_eq!(
        resolver.calls(),
        vec![Ipv4Addr::new(10, 0, 0, 66), Ipv4Addr::new(8, 8, 8, 8)]
    );
}

#[test]
fn malformed_address_is_invalid_without_lookup() {
    let resolver = google();
    let records = run_pipeline(&["999.1.1.1", "8.8.8.8"], &resolver).unwrap();

    assert_eq!(records[0].status(), Status::Invalid);
    assert_eq!(records[0].hostname(), "N/A");
    assert_eq!(records[1].hostname(), "dns.google");
    assert_eq!(resolver.calls(), vec![Ipv4Addr::new(8, 8, 8, 8)]);
}

#[test]
fn cidr_input_is_rejected_before_any_lookup() {
    let resolver = google();

    let mixed = run_pipeline(&["8.8.8.8", "8.8.8.0/24"], &resolver).unwrap_err();
    assert!(matches!(
        mixed.downcast_ref::<InputError>(),
        Some(InputError::MixedAddressKinds)
    ));

    let only = run_pipeline(&["8.8.8.0/24"], &resolver).unwrap_err();
    assert!(matches!(
        only.downcast_ref::<InputError>(),
        Some(InputError::UnsupportedCidr)
    ));

    assert!(resolver.calls().is_empty());
}

#[test]
fn file_input_flows_through_the_pipeline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "8.8.8.8\n\n  192.168.1.1  \nnot-an-ip").unwrap();

    let run = input::resolve(None, Some(file.path()), None).unwrap();
    let records = run_pipeline(&run.addresses, &google()).unwrap();

    let statuses: Vec<Status> = records.iter().map(|r| r.status()).collect();
    assert_eq!(statuses, vec![Status::Success, Status::Failed, Status::Invalid]);
}

#[test]
fn empty_inline_token_becomes_an_invalid_row() {
    let run = input::resolve(Some("999.1.1.1,,8.8.8.8"), None, None).unwrap();
    let resolver = google();
    let records = run_pipeline(&run.addresses, &resolver).unwrap();

    let rows: Vec<(&str, Status)> = records.iter().map(|r| (r.address(), r.status())).collect();
    assert_eq!(
        rows,
        vec![
            ("999.1.1.1", Status::Invalid),
            ("", Status::Invalid),
            ("8.8.8.8", Status::Success),
        ]
    );
    assert_eq!(records[1].hostname(), "N/A");
    assert_eq!(resolver.calls(), vec![Ipv4Addr::new(8, 8, 8, 8)]);
}
