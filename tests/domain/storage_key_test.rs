use docforge::domain::StorageKey;

#[test]
fn given_file_name_when_building_upload_key_then_prefixes_timestamp() {
    let key = StorageKey::for_upload("report.pdf", 1_700_000_000_000);

    assert_eq!(key.as_str(), "uploads/1700000000000-report.pdf");
    assert!(key.is_upload());
    assert!(!key.is_result());
}

#[test]
fn given_file_name_when_building_result_key_then_lands_under_results() {
    let key = StorageKey::for_result("summary.docx");

    assert_eq!(key.to_string(), "results/summary.docx");
    assert!(key.is_result());
}

#[test]
fn given_key_when_serialized_then_is_plain_string() {
    let key = StorageKey::from_raw("uploads/1-a.pdf");

    assert_eq!(serde_json::to_string(&key).unwrap(), r#""uploads/1-a.pdf""#);
}
