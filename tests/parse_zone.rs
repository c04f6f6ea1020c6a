use std::path::PathBuf;

use zonefile::{parse_zone, parse_zone_with, ParseOptions, ParserError, Record, SyntaxErrorKind};

fn zone_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/zones")
        .join(name)
}

fn find<'a>(records: &'a [Record], name: &str, rtype: &str) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| r.name == name && r.rtype == rtype)
        .collect()
}

#[test]
fn test_parse_example_zone() {
    let zone = parse_zone(zone_file("example.com.zone")).expect("Failed to parse zone");

    assert_eq!(zone.origin, "example.com.");
    assert_eq!(zone.default_ttl, 3600);
    assert_eq!(zone.records.len(), 13);

    let soa = &zone.records[0];
    assert_eq!(soa.name, "example.com.");
    assert_eq!(soa.rtype, "SOA");
    assert_eq!(soa.ttl, 3600);
    assert_eq!(
        soa.rdata,
        "ns1.example.com. admin.example.com. 2023120101 3600 1800 1209600 3600"
    );

    let ns: Vec<_> = find(&zone.records, "example.com.", "NS")
        .into_iter()
        .map(|r| r.rdata.as_str())
        .collect();
    assert_eq!(ns, vec!["ns1.example.com.", "ns2.example.com."]);

    let aaaa = find(&zone.records, "www.example.com.", "AAAA");
    assert_eq!(aaaa.len(), 1);
    assert_eq!(aaaa[0].rdata, "2001:db8::20");

    let www = find(&zone.records, "www.example.com.", "A");
    assert_eq!(www[0].rdata, "192.168.1.20");
}

#[test]
fn test_ttl_and_class_inheritance() {
    let zone = parse_zone(zone_file("example.com.zone")).unwrap();

    let mail = find(&zone.records, "mail.example.com.", "A");
    assert_eq!(mail[0].ttl, 300);
    assert_eq!(mail[0].class, "IN");

    // no TTL of its own, so the one set on the mail record carries over
    let ftp = find(&zone.records, "ftp.example.com.", "CNAME");
    assert_eq!(ftp[0].ttl, 300);
    assert_eq!(ftp[0].class, "IN");
    assert_eq!(ftp[0].rdata, "www");

    let srv = find(&zone.records, "_sip._tcp.example.com.", "SRV");
    assert_eq!(srv[0].ttl, 3600);
    assert_eq!(srv[0].rdata, "10 60 5060 sip.example.com.");
}

#[test]
fn test_quoted_txt_and_absolute_names() {
    let zone = parse_zone(zone_file("example.com.zone")).unwrap();

    let txt = find(&zone.records, "example.com.", "TXT");
    assert_eq!(txt[0].rdata, "v=spf1 mx -all");

    let external = find(&zone.records, "external.example.org.", "CNAME");
    assert_eq!(external.len(), 1);
    assert_eq!(external[0].origin, "example.com.");
}

#[test]
fn test_records_keep_file_order() {
    let zone = parse_zone(zone_file("example.com.zone")).unwrap();

    let types: Vec<_> = zone.records.iter().map(|r| r.rtype.as_str()).collect();
    assert_eq!(
        types,
        vec!["SOA", "NS", "NS", "MX", "A", "A", "A", "AAAA", "A", "CNAME", "TXT", "SRV", "CNAME"]
    );
}

#[test]
fn test_unterminated_record() {
    let err = parse_zone(zone_file("unterminated.zone")).unwrap_err();

    assert!(matches!(
        err,
        ParserError::Syntax {
            line: 3,
            kind: SyntaxErrorKind::UnterminatedRecord
        }
    ));
}

#[test]
fn test_syntax_error_line_number() {
    let err = parse_zone(zone_file("broken.zone")).unwrap_err();

    assert_eq!(err.line(), Some(4));
    assert!(err.to_string().contains("line 4"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = parse_zone(zone_file("does-not-exist.zone")).unwrap_err();

    assert!(matches!(err, ParserError::Io(_)));
    assert_eq!(err.line(), None);
}

#[test]
fn test_strict_options_accept_clean_file() {
    let options = ParseOptions {
        strict_directives: true,
        ..Default::default()
    };

    let zone = parse_zone_with(zone_file("example.com.zone"), &options).unwrap();
    assert_eq!(zone.records.len(), 13);
}
