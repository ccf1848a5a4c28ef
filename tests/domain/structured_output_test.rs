use docforge::domain::{
    DocxBlock, DocxBody, OutputIntent, StructuredOutput,
};
use serde_json::json;

#[test]
fn given_docx_reply_when_parsing_then_keeps_known_blocks_in_order() {
    let raw = r#"{"type":"docx","title":"Plan","content":[
        {"type":"paragraph","text":"Intro"},
        {"type":"image","src":"x.png"},
        {"type":"list","items":["one","two"]}
    ]}"#;

    let StructuredOutput::Docx(content) = StructuredOutput::parse(OutputIntent::Doc, raw) else {
        panic!("expected docx output");
    };

    assert_eq!(content.title.as_deref(), Some("Plan"));
    assert_eq!(
        content.body,
        DocxBody::Blocks(vec![
            DocxBlock::Paragraph("Intro".to_string()),
            DocxBlock::BulletList(vec!["one".to_string(), "two".to_string()]),
        ])
    );
    assert_eq!(content.file_name(42), "Plan.docx");
}

#[test]
fn given_docx_reply_without_content_array_when_parsing_then_prints_json_verbatim() {
    let StructuredOutput::Docx(content) =
        StructuredOutput::parse(OutputIntent::Doc, r#"{"content":"just a string"}"#)
    else {
        panic!("expected docx output");
    };

    let DocxBody::Verbatim(text) = &content.body else {
        panic!("expected verbatim body");
    };
    assert!(text.contains("just a string"));
    assert_eq!(content.file_name(42), "42.docx");
}

#[test]
fn given_non_json_reply_when_falling_back_then_builds_default_document_per_intent() {
    let docx = StructuredOutput::parse(OutputIntent::Doc, "not json");
    assert!(docx.is_unparseable());
    let StructuredOutput::Docx(content) = docx.or_fallback() else {
        panic!("expected docx fallback");
    };
    assert_eq!(content.title.as_deref(), Some("Document"));
    assert_eq!(
        content.body,
        DocxBody::Blocks(vec![DocxBlock::Paragraph("not json".to_string())])
    );

    let StructuredOutput::Spreadsheet(sheet) =
        StructuredOutput::parse(OutputIntent::Excel, "not json").or_fallback()
    else {
        panic!("expected spreadsheet fallback");
    };
    assert_eq!(sheet.sheets.len(), 1);
    assert_eq!(sheet.sheets[0].name, "Sheet1");
    assert_eq!(sheet.sheets[0].columns(), vec!["Content"]);
    assert_eq!(sheet.sheets[0].rows[0]["Content"], json!("not json"));

    let StructuredOutput::Pdf(pdf) =
        StructuredOutput::parse(OutputIntent::Pdf, "not json").or_fallback()
    else {
        panic!("expected pdf fallback");
    };
    assert_eq!(pdf.title.as_deref(), Some("Generated Report"));
    assert_eq!(pdf.sections[0].heading.as_deref(), Some("Content"));
    assert_eq!(pdf.sections[0].content, "not json");
}

#[test]
fn given_spreadsheet_reply_when_parsing_then_columns_follow_first_row_order() {
    let raw = r#"{"sheets":[{"data":[{"Zeta":1,"Alpha":2},{"Alpha":3,"Extra":4}]}]}"#;

    let StructuredOutput::Spreadsheet(content) = StructuredOutput::parse(OutputIntent::Excel, raw)
    else {
        panic!("expected spreadsheet output");
    };

    assert_eq!(content.sheets[0].name, "Sheet1");
    assert_eq!(content.sheets[0].columns(), vec!["Zeta", "Alpha"]);
    assert_eq!(content.file_name(7), "7.xlsx");
}

#[test]
fn given_pdf_reply_when_parsing_then_reads_sections() {
    let raw = r#"{"title":"Q3","sections":[{"heading":"Revenue","content":"Up 4%"},{"content":"Closing"}]}"#;

    let StructuredOutput::Pdf(content) = StructuredOutput::parse(OutputIntent::Pdf, raw) else {
        panic!("expected pdf output");
    };

    assert_eq!(content.sections.len(), 2);
    assert_eq!(content.sections[1].heading, None);
    assert_eq!(content.file_name(1), "Q3.pdf");
}

#[test]
fn given_text_reply_when_parsing_then_uses_content_or_raw_reply() {
    assert_eq!(
        StructuredOutput::parse(OutputIntent::Text, r#"{"type":"text","content":"hi"}"#),
        StructuredOutput::Text(json!("hi"))
    );
    assert_eq!(
        StructuredOutput::parse(OutputIntent::Text, r#"{"answer":"hi"}"#),
        StructuredOutput::Text(json!(r#"{"answer":"hi"}"#))
    );
    assert_eq!(
        StructuredOutput::parse(OutputIntent::Text, "plain words").or_fallback(),
        StructuredOutput::Text(json!("plain words"))
    );
}
