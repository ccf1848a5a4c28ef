use serde_json::{Map, Value};

use super::file_format::FileFormat;
use super::intent::OutputIntent;

const FALLBACK_DOCX_TITLE: &str = "Document";
const FALLBACK_PDF_TITLE: &str = "Generated Report";
const FALLBACK_PDF_HEADING: &str = "Content";
const DEFAULT_SHEET_NAME: &str = "Sheet1";
const FALLBACK_COLUMN: &str = "Content";

/// The model's reply, parsed for the materializer selected by the classified intent.
///
/// Each file variant is read leniently: missing or mistyped fields degrade to
/// defaults instead of failing. A reply that is not JSON at all is kept as
/// [`StructuredOutput::Unparseable`] until [`StructuredOutput::or_fallback`]
/// swaps in the documented default document for that intent.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredOutput {
    Docx(DocxContent),
    Spreadsheet(SpreadsheetContent),
    Pdf(PdfContent),
    Text(Value),
    Unparseable { intent: OutputIntent, raw: String },
}

impl StructuredOutput {
    pub fn parse(intent: OutputIntent, raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(_) => {
                return Self::Unparseable {
                    intent,
                    raw: raw.to_string(),
                };
            }
        };

        match intent {
            OutputIntent::Doc => Self::Docx(DocxContent::from_value(&value)),
            OutputIntent::Excel => Self::Spreadsheet(SpreadsheetContent::from_value(&value)),
            OutputIntent::Pdf => Self::Pdf(PdfContent::from_value(&value)),
            OutputIntent::Text => Self::Text(
                value
                    .get("content")
                    .filter(|content| !content.is_null())
                    .cloned()
                    .unwrap_or_else(|| Value::String(raw.to_string())),
            ),
        }
    }

    pub fn or_fallback(self) -> Self {
        match self {
            Self::Unparseable { intent, raw } => match intent {
                OutputIntent::Doc => Self::Docx(DocxContent::fallback(&raw)),
                OutputIntent::Excel => Self::Spreadsheet(SpreadsheetContent::fallback(&raw)),
                OutputIntent::Pdf => Self::Pdf(PdfContent::fallback(&raw)),
                OutputIntent::Text => Self::Text(Value::String(raw)),
            },
            parsed => parsed,
        }
    }

    pub fn is_unparseable(&self) -> bool {
        matches!(self, Self::Unparseable { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocxContent {
    pub title: Option<String>,
    pub body: DocxBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocxBody {
    Blocks(Vec<DocxBlock>),
    /// `content` was missing or not an array; the whole reply is printed as-is.
    Verbatim(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocxBlock {
    Paragraph(String),
    BulletList(Vec<String>),
}

impl DocxContent {
    pub fn from_value(value: &Value) -> Self {
        let body = match value.get("content").and_then(Value::as_array) {
            Some(blocks) => {
                DocxBody::Blocks(blocks.iter().filter_map(DocxBlock::from_value).collect())
            }
            None => DocxBody::Verbatim(
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
            ),
        };

        Self {
            title: label(value.get("title")),
            body,
        }
    }

    pub fn fallback(raw: &str) -> Self {
        Self {
            title: Some(FALLBACK_DOCX_TITLE.to_string()),
            body: DocxBody::Blocks(vec![DocxBlock::Paragraph(raw.to_string())]),
        }
    }

    pub fn file_name(&self, epoch_millis: i64) -> String {
        let stem = self
            .title
            .as_deref()
            .map(flatten_path)
            .unwrap_or_else(|| epoch_millis.to_string());
        format!("{stem}.{}", FileFormat::Docx.extension())
    }
}

impl DocxBlock {
    /// Unknown block types, and lists without an `items` array, yield `None`.
    fn from_value(block: &Value) -> Option<Self> {
        match block.get("type").and_then(Value::as_str) {
            Some("paragraph") => Some(Self::Paragraph(text(block.get("text")))),
            Some("list") => block
                .get("items")
                .and_then(Value::as_array)
                .map(|items| Self::BulletList(items.iter().map(|i| text(Some(i))).collect())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpreadsheetContent {
    pub filename: Option<String>,
    pub sheets: Vec<SheetContent>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetContent {
    pub name: String,
    pub rows: Vec<Map<String, Value>>,
}

impl SpreadsheetContent {
    pub fn from_value(value: &Value) -> Self {
        let sheets = value
            .get("sheets")
            .and_then(Value::as_array)
            .map(|sheets| sheets.iter().map(SheetContent::from_value).collect())
            .unwrap_or_default();

        Self {
            filename: label(value.get("filename")),
            sheets,
        }
    }

    pub fn fallback(raw: &str) -> Self {
        let mut row = Map::new();
        row.insert(FALLBACK_COLUMN.to_string(), Value::String(raw.to_string()));

        Self {
            filename: None,
            sheets: vec![SheetContent {
                name: DEFAULT_SHEET_NAME.to_string(),
                rows: vec![row],
            }],
        }
    }

    pub fn file_name(&self, epoch_millis: i64) -> String {
        self.filename
            .as_deref()
            .map(flatten_path)
            .unwrap_or_else(|| format!("{epoch_millis}.{}", FileFormat::Xlsx.extension()))
    }
}

impl SheetContent {
    fn from_value(sheet: &Value) -> Self {
        let rows = sheet
            .get("data")
            .and_then(Value::as_array)
            .map(|rows| rows.iter().filter_map(Value::as_object).cloned().collect())
            .unwrap_or_default();

        Self {
            name: label(sheet.get("name")).unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
            rows,
        }
    }

    /// Column headers, taken from the first row in document order.
    pub fn columns(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfContent {
    pub title: Option<String>,
    pub sections: Vec<PdfSection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfSection {
    pub heading: Option<String>,
    pub content: String,
}

impl PdfContent {
    pub fn from_value(value: &Value) -> Self {
        let sections = value
            .get("sections")
            .and_then(Value::as_array)
            .map(|sections| {
                sections
                    .iter()
                    .map(|section| PdfSection {
                        heading: label(section.get("heading")),
                        content: text(section.get("content")),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title: label(value.get("title")),
            sections,
        }
    }

    pub fn fallback(raw: &str) -> Self {
        Self {
            title: Some(FALLBACK_PDF_TITLE.to_string()),
            sections: vec![PdfSection {
                heading: Some(FALLBACK_PDF_HEADING.to_string()),
                content: raw.to_string(),
            }],
        }
    }

    pub fn file_name(&self, epoch_millis: i64) -> String {
        let stem = self
            .title
            .as_deref()
            .map(flatten_path)
            .unwrap_or_else(|| epoch_millis.to_string());
        format!("{stem}.{}", FileFormat::Pdf.extension())
    }
}

/// Keeps a model-chosen name inside `results/` by replacing path separators.
fn flatten_path(name: &str) -> String {
    name.replace(['/', '\\'], "-")
}

/// Non-empty strings and numbers; anything else counts as absent.
fn label(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}
