use docforge::domain::{DocumentKind, StorageKey, UploadedFile};

#[test]
fn given_file_names_when_classifying_then_suffix_match_ignores_case() {
    assert_eq!(DocumentKind::from_file_name("Scan.PDF"), DocumentKind::Pdf);
    assert_eq!(DocumentKind::from_file_name("notes.docx"), DocumentKind::Word);
    assert_eq!(DocumentKind::from_file_name("legacy.DOC"), DocumentKind::Word);
    assert_eq!(
        DocumentKind::from_file_name("data.csv"),
        DocumentKind::Unsupported
    );
}

#[test]
fn given_request_json_when_deserializing_then_reads_key_and_name() {
    let file: UploadedFile =
        serde_json::from_str(r#"{"key":"uploads/1-a.pdf","name":"a.pdf"}"#).unwrap();

    assert_eq!(file.key, StorageKey::from_raw("uploads/1-a.pdf"));
    assert_eq!(file.kind(), DocumentKind::Pdf);
}
