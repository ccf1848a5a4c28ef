use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Pt, Rgb,
};

use crate::application::ports::RenderError;
use crate::domain::PdfContent;

const PAGE_WIDTH_PT: f32 = 612.0;
const PAGE_HEIGHT_PT: f32 = 792.0;
const TOP_MARGIN_PT: f32 = 50.0;
const BOTTOM_EDGE_PT: f32 = 50.0;
const SECTION_BREAK_PT: f32 = 100.0;

const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 11.0;

const TITLE_X_PT: f32 = 50.0;
const BODY_X_PT: f32 = 60.0;

const WRAP_WIDTH_CHARS: usize = 90;
const LAYER_NAME: &str = "Layer 1";

#[derive(Default)]
pub struct PdfRenderer;

/// Drawing position on the page currently being filled.
struct PageCursor {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    y: f32,
    pages: usize,
}

impl PageCursor {
    fn start(title: &str) -> Result<Self, RenderError> {
        let (doc, page, layer) = PdfDocument::new(title, page_width(), page_height(), LAYER_NAME);
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            font,
            y: PAGE_HEIGHT_PT - TOP_MARGIN_PT,
            pages: 1,
        })
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(page_width(), page_height(), LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT_PT - TOP_MARGIN_PT;
        self.pages += 1;
    }

    fn draw(&self, text: &str, size: f32, x: f32, color: (f32, f32, f32)) {
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(color.0, color.1, color.2, None)));
        self.layer
            .use_text(text, size, Mm::from(Pt(x)), Mm::from(Pt(self.y)), &self.font);
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| RenderError::Pdf(e.to_string()))
    }
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, content: &PdfContent) -> Result<Vec<u8>, RenderError> {
        let cursor = Self::lay_out(content)?;
        tracing::debug!(pages = cursor.pages, "PDF laid out");
        cursor.finish()
    }

    fn lay_out(content: &PdfContent) -> Result<PageCursor, RenderError> {
        let mut cursor = PageCursor::start(content.title.as_deref().unwrap_or("Report"))?;

        if let Some(title) = content.title.as_deref() {
            cursor.draw(title, TITLE_SIZE, TITLE_X_PT, (0.0, 0.0, 0.8));
            cursor.y -= 40.0;
        }

        for section in &content.sections {
            if cursor.y < SECTION_BREAK_PT {
                cursor.new_page();
            }

            if let Some(heading) = section.heading.as_deref() {
                cursor.draw(heading, HEADING_SIZE, TITLE_X_PT, (0.2, 0.2, 0.2));
                cursor.y -= 20.0;
            }

            for line in wrap_text(&section.content, WRAP_WIDTH_CHARS) {
                if cursor.y < BOTTOM_EDGE_PT {
                    cursor.new_page();
                }
                cursor.draw(&line, BODY_SIZE, BODY_X_PT, (0.0, 0.0, 0.0));
                cursor.y -= 15.0;
            }

            cursor.y -= 20.0;
        }

        Ok(cursor)
    }
}

fn page_width() -> Mm {
    Mm::from(Pt(PAGE_WIDTH_PT))
}

fn page_height() -> Mm {
    Mm::from(Pt(PAGE_HEIGHT_PT))
}

/// Greedy word wrap. Words longer than `width` occupy a line of their own.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
