use v6ready_domain::{DomainError, ReadinessRecord, ScanMode};

fn v4only() -> ReadinessRecord {
    ReadinessRecord {
        domain: "v4only.example".to_string(),
        apex_v4: vec!["192.0.2.1".to_string()],
        ns_v4: vec!["192.0.2.53".to_string()],
        ..Default::default()
    }
}

fn v6only() -> ReadinessRecord {
    ReadinessRecord {
        domain: "v6only.example".to_string(),
        www_v6: vec!["2001:db8::1".to_string()],
        ns_v6: vec!["2001:db8::53".to_string()],
        ..Default::default()
    }
}

fn dual() -> ReadinessRecord {
    ReadinessRecord {
        domain: "dual.example".to_string(),
        apex_v4: vec!["192.0.2.1".to_string()],
        www_v4: vec!["192.0.2.1".to_string()],
        apex_v6: vec!["2001:db8::1".to_string()],
        www_v6: vec!["2001:db8::1".to_string()],
        ns_v4: vec!["192.0.2.53".to_string()],
        ..Default::default()
    }
}

#[test]
fn test_from_flag_mapping() {
    assert_eq!(ScanMode::from_flag(4), ScanMode::V4Only);
    assert_eq!(ScanMode::from_flag(6), ScanMode::V6Only);
    assert_eq!(ScanMode::from_flag(1), ScanMode::Errors);
    assert_eq!(ScanMode::from_flag(0), ScanMode::Counts);
    assert_eq!(ScanMode::from_flag(2), ScanMode::Counts);
    assert_eq!(ScanMode::from_flag(-1), ScanMode::Counts);
}

#[test]
fn test_v4only_filter_emits_only_v4only_domains() {
    let mode = ScanMode::V4Only;
    assert_eq!(
        mode.report("v4only.example", &Ok(v4only())),
        Some("v4only.example".to_string())
    );
    assert_eq!(mode.report("v6only.example", &Ok(v6only())), None);
    assert_eq!(mode.report("dual.example", &Ok(dual())), None);
}

#[test]
fn test_v6only_filter_emits_only_v6only_domains() {
    let mode = ScanMode::V6Only;
    assert_eq!(
        mode.report("v6only.example", &Ok(v6only())),
        Some("v6only.example".to_string())
    );
    assert_eq!(mode.report("v4only.example", &Ok(v4only())), None);
    assert_eq!(mode.report("dual.example", &Ok(dual())), None);
}

#[test]
fn test_counts_line_format() {
    let line = ScanMode::Counts.report("dual.example", &Ok(dual())).unwrap();
    assert_eq!(line, "dual.example, 1, 1, 1, 1");
}

#[test]
fn test_errors_mode_silent_on_success() {
    assert_eq!(ScanMode::Errors.report("dual.example", &Ok(dual())), None);
}

#[test]
fn test_every_mode_reports_failures() {
    let err: Result<ReadinessRecord, DomainError> = Err(DomainError::NoNameServers {
        domain: "broken.example".to_string(),
    });
    for mode in [
        ScanMode::V4Only,
        ScanMode::V6Only,
        ScanMode::Errors,
        ScanMode::Counts,
    ] {
        let line = mode.report("broken.example", &err).unwrap();
        assert!(line.starts_with("broken.example, ("));
        assert!(line.contains("no name servers"));
    }
}
