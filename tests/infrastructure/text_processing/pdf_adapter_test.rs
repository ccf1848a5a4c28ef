use docforge::application::ports::{FileLoader, FileLoaderError};
use docforge::domain::{PdfContent, PdfSection, StorageKey, UploadedFile};
use docforge::infrastructure::rendering::PdfRenderer;
use docforge::infrastructure::text_processing::{CompositeFileLoader, PdfAdapter};

fn file(name: &str) -> UploadedFile {
    UploadedFile::new(StorageKey::from_raw(format!("uploads/1-{name}")), name)
}

fn render(content: PdfContent) -> Vec<u8> {
    PdfRenderer::new().render(&content).unwrap()
}

#[tokio::test]
async fn given_valid_pdf_bytes_when_extracting_then_returns_single_spaced_text() {
    let pdf_bytes = render(PdfContent {
        title: Some("Quarterly Summary".to_string()),
        sections: vec![PdfSection {
            heading: None,
            content: "Hello world 100% done".to_string(),
        }],
    });

    let text = PdfAdapter::new()
        .extract_text(&pdf_bytes, &file("summary.pdf"))
        .await
        .unwrap();

    assert!(text.contains("Quarterly Summary"));
    assert!(text.contains("Hello world 100% done"));
    assert!(!text.contains("  "));
}

#[tokio::test]
async fn given_pdf_upload_when_extracting_through_composite_loader_then_uses_pdf_adapter() {
    let pdf_bytes = render(PdfContent {
        title: None,
        sections: vec![PdfSection {
            heading: Some("Scope".to_string()),
            content: "Routing by extension".to_string(),
        }],
    });

    let text = CompositeFileLoader::with_default_adapters()
        .extract_text(&pdf_bytes, &file("Scope.PDF"))
        .await
        .unwrap();

    assert!(text.contains("Routing by extension"));
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let result = PdfAdapter::new()
        .extract_text(b"not a pdf at all", &file("corrupt.pdf"))
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_blank_pdf_when_extracting_then_returns_empty_text() {
    let pdf_bytes = render(PdfContent {
        title: None,
        sections: vec![],
    });

    let text = PdfAdapter::new()
        .extract_text(&pdf_bytes, &file("blank.pdf"))
        .await
        .unwrap();

    assert!(text.trim().is_empty());
}
