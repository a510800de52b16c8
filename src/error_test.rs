use super::*;

#[test]
fn site_error_messages_name_the_problem() {
    let err = SiteError::MissingElement(".nav".to_owned());
    assert_eq!(err.to_string(), "required element not found: .nav");

    let err = SiteError::Storage("quota".to_owned());
    assert_eq!(err.to_string(), "storage unavailable: quota");
}

#[test]
fn json_errors_convert_into_config_errors() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = SiteError::from(parse_err);
    assert!(matches!(err, SiteError::Config(_)));
    assert!(err.to_string().starts_with("invalid configuration:"));
}

#[test]
fn error_report_includes_location_when_known() {
    let report = ErrorReport {
        message: "x is not defined".to_owned(),
        source: Some("https://example.com/app.js".to_owned()),
        line: 12,
        column: 4,
    };
    assert_eq!(report.to_string(), "x is not defined (https://example.com/app.js:12:4)");
}

#[test]
fn error_report_without_source_is_just_the_message() {
    let report = ErrorReport { message: "boom".to_owned(), ..ErrorReport::default() };
    assert_eq!(report.to_string(), "boom");

    let blank_source = ErrorReport { message: "boom".to_owned(), source: Some(String::new()), line: 1, column: 1 };
    assert_eq!(blank_source.to_string(), "boom");
}

#[test]
fn error_report_with_empty_message_has_placeholder() {
    assert_eq!(ErrorReport::default().to_string(), "unknown error");
}

#[test]
fn log_init_outcome_accepts_every_variant() {
    log_init_outcome("nav", Ok(()));
    log_init_outcome("nav", Err(SiteError::MissingElement(".nav".to_owned())));
    log_init_outcome("form", Err(SiteError::Dom("detached".to_owned())));
}
