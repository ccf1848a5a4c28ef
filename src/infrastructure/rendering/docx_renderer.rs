use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, Paragraph, Run, Start, Style, StyleType,
};

use crate::application::ports::RenderError;
use crate::domain::{DocxBlock, DocxBody, DocxContent};

const HEADING_STYLE: &str = "Heading1";
const BULLET_NUMBERING_ID: usize = 1;

#[derive(Default)]
pub struct DocxRenderer;

impl DocxRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, content: &DocxContent) -> Result<Vec<u8>, RenderError> {
        let mut docx = Docx::new()
            .add_style(
                Style::new(HEADING_STYLE, StyleType::Paragraph)
                    .name("Heading 1")
                    .size(32)
                    .bold(),
            )
            .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
                Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new("•"),
                    LevelJc::new("left"),
                ),
            ))
            .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

        if let Some(title) = content.title.as_deref().filter(|t| !t.is_empty()) {
            docx = docx.add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(title))
                    .style(HEADING_STYLE),
            );
        }

        match &content.body {
            DocxBody::Blocks(blocks) => {
                for block in blocks {
                    docx = match block {
                        DocxBlock::Paragraph(text) => {
                            docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
                        }
                        DocxBlock::BulletList(items) => {
                            items.iter().fold(docx, |docx, item| {
                                docx.add_paragraph(
                                    Paragraph::new()
                                        .add_run(Run::new().add_text(item))
                                        .numbering(
                                            NumberingId::new(BULLET_NUMBERING_ID),
                                            IndentLevel::new(0),
                                        ),
                                )
                            })
                        }
                    };
                }
            }
            DocxBody::Verbatim(text) => {
                docx = docx.add_paragraph(Paragraph::new().add_run(multiline_run(text)));
            }
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| RenderError::Docx(e.to_string()))?;

        Ok(buffer.into_inner())
    }
}

/// Word ignores raw newlines inside a run; each line after the first gets a line break.
fn multiline_run(text: &str) -> Run {
    text.lines().enumerate().fold(Run::new(), |run, (i, line)| {
        let run = if i > 0 {
            run.add_break(BreakType::TextWrapping)
        } else {
            run
        };
        run.add_text(line)
    })
}
