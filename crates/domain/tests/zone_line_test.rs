use zonefix_domain::{RecordTypeMarker, ZoneLine};

#[test]
fn test_new_strips_line_terminators() {
    assert_eq!(ZoneLine::new("www IN CNAME host\n").as_str(), "www IN CNAME host");
    assert_eq!(ZoneLine::new("www IN CNAME host\r\n").as_str(), "www IN CNAME host");
    assert_eq!(ZoneLine::new("www IN CNAME host\r\r\n").as_str(), "www IN CNAME host");
    assert_eq!(ZoneLine::new("").as_str(), "");
}

#[test]
fn test_new_keeps_other_trailing_whitespace() {
    assert_eq!(ZoneLine::new("host  \t\n").as_str(), "host  \t");
}

#[test]
fn test_split_comment_without_comment() {
    let line = ZoneLine::new("mail IN A 192.0.2.1");
    assert_eq!(line.split_comment(), ("mail IN A 192.0.2.1", ""));
    assert!(line.comment_start().is_none());
}

#[test]
fn test_split_comment_keeps_whitespace_with_data() {
    let line = ZoneLine::new("@ IN MX 10 mail ; primary");
    assert_eq!(line.split_comment(), ("@ IN MX 10 mail ", "; primary"));
}

#[test]
fn test_split_comment_uses_first_delimiter() {
    let line = ZoneLine::new("a IN CNAME b ; one ; two");
    assert_eq!(line.split_comment().1, "; one ; two");
}

#[test]
fn test_escaped_and_quoted_semicolons_are_data() {
    let escaped = ZoneLine::new(r"a IN TXT v=1\;x ; note");
    assert_eq!(escaped.split_comment().1, "; note");

    let quoted = ZoneLine::new(r#"a IN TXT "k=v; more" ; note"#);
    assert_eq!(quoted.split_comment().1, "; note");
}

#[test]
fn test_origin_relative_bare_at() {
    assert!(ZoneLine::new("host IN CNAME @").is_origin_relative());
    assert!(ZoneLine::new("host IN CNAME @   ; apex").is_origin_relative());
}

#[test]
fn test_origin_relative_glued_at() {
    assert!(ZoneLine::new("_sip._tcp IN SRV 10 10 5060 target.@").is_origin_relative());
}

#[test]
fn test_leading_at_owner_is_not_origin_relative() {
    assert!(!ZoneLine::new("@ IN MX 10 mail").is_origin_relative());
    assert!(!ZoneLine::new("  @ IN CNAME www.example.com").is_origin_relative());
}

#[test]
fn test_at_inside_comment_is_ignored() {
    assert!(!ZoneLine::new("host IN CNAME target ; see @").is_origin_relative());
}

#[test]
fn test_record_type_detection() {
    assert_eq!(
        ZoneLine::new("www IN CNAME host").record_type(),
        Some(RecordTypeMarker::Cname)
    );
    assert_eq!(
        ZoneLine::new("@ 3600 IN MX 10 mail").record_type(),
        Some(RecordTypeMarker::Mx)
    );
    assert_eq!(ZoneLine::new("www IN A 192.0.2.1").record_type(), None);
}

#[test]
fn test_marker_inside_comment_is_ignored() {
    let line = ZoneLine::new("web IN A 192.0.2.10 ; was IN CNAME old");

    assert_eq!(line.record_type(), None);
    assert!(!line.has_marker(RecordTypeMarker::Cname));
}

#[test]
fn test_marker_before_comment_is_detected() {
    let line = ZoneLine::new("_sip._tcp IN SRV 10 10 5060 sip ; IN CNAME");

    assert_eq!(line.record_type(), Some(RecordTypeMarker::Srv));
    assert!(!line.has_marker(RecordTypeMarker::Cname));
}
