use std::io::BufWriter;

use async_trait::async_trait;
use chrono::Utc;
use printpdf::{
    image_crate, BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference,
};

use crate::application::ports::{RenderError, RenderedReport, ReportInput, ReportRenderer};

use super::chart::{render_bar_chart, CHART_WIDTH_PX};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const TOP_Y_MM: f32 = PAGE_HEIGHT_MM - MARGIN_MM;
const BOTTOM_MM: f32 = 20.0;
const BODY_LINE_MM: f32 = 5.0;
const WRAP_COLUMNS: usize = 90;
const EXCERPT_CHARS: usize = 2000;
const CHART_DISPLAY_DPI: f32 = 96.0;

/// Assembles the report PDF: title, prompt, content excerpt, response, and
/// the bar chart when the table carries numeric columns. CPU-bound, so the
/// whole render runs on the blocking pool.
pub struct PdfReportRenderer;

#[async_trait]
impl ReportRenderer for PdfReportRenderer {
    #[tracing::instrument(skip(self, input), fields(prompt_chars = input.prompt.len()))]
    async fn render(&self, input: ReportInput) -> Result<RenderedReport, RenderError> {
        tokio::task::spawn_blocking(move || render_blocking(input))
            .await
            .map_err(|e| RenderError::TaskFailed(e.to_string()))?
    }
}

fn render_blocking(input: ReportInput) -> Result<RenderedReport, RenderError> {
    let chart = match &input.table {
        Some(table) => render_bar_chart(table)?,
        None => None,
    };
    let document = build_document(&input, chart.as_deref())?;
    Ok(RenderedReport { document, chart })
}

/// First 2000 characters of the text, with an ellipsis appended only when
/// something was actually cut off.
pub fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl Cursor<'_> {
    fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < BOTTOM_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_Y_MM;
        }
    }

    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef, advance: f32) {
        self.ensure_space(advance);
        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(self.y), font);
        self.y -= advance;
    }

    fn gap(&mut self, dy: f32) {
        self.y -= dy;
    }
}

fn build_document(input: &ReportInput, chart_png: Option<&[u8]>) -> Result<Vec<u8>, RenderError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "AI Generated Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "content",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(to_document_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(to_document_error)?;

    {
        let mut cursor = Cursor {
            doc: &doc,
            layer: doc.get_page(first_page).get_layer(first_layer),
            y: TOP_Y_MM,
        };

        cursor.line("AI Generated Report", 24.0, &bold, 12.0);
        cursor.line(
            &format!("Generated: {}", Utc::now().format("%B %d, %Y")),
            10.0,
            &font,
            8.0,
        );
        cursor.gap(4.0);

        cursor.line("Prompt", 14.0, &bold, 7.0);
        write_paragraph(&mut cursor, &input.prompt, &font);
        cursor.gap(4.0);

        cursor.line("File Content", 14.0, &bold, 7.0);
        write_paragraph(&mut cursor, &excerpt(&input.extracted_text), &font);
        cursor.gap(4.0);

        if let Some(note) = &input.extraction_note {
            cursor.line("Extraction Note", 14.0, &bold, 7.0);
            write_paragraph(&mut cursor, note, &font);
            cursor.gap(4.0);
        }

        cursor.line("Response", 14.0, &bold, 7.0);
        write_paragraph(&mut cursor, &input.response, &font);

        if let Some(png) = chart_png {
            embed_chart(&mut cursor, png)?;
        }
    }

    let mut bytes = Vec::new();
    doc.save(&mut BufWriter::new(&mut bytes))
        .map_err(to_document_error)?;
    Ok(bytes)
}

fn write_paragraph(cursor: &mut Cursor<'_>, text: &str, font: &IndirectFontRef) {
    for line in wrap_text(text, WRAP_COLUMNS) {
        cursor.line(&line, 11.0, font, BODY_LINE_MM);
    }
}

fn embed_chart(cursor: &mut Cursor<'_>, png: &[u8]) -> Result<(), RenderError> {
    let decoded =
        image_crate::load_from_memory(png).map_err(|e| RenderError::Chart(e.to_string()))?;

    // Square chart shown at a fixed size, roughly 106 mm at 96 dpi.
    let display_mm = CHART_WIDTH_PX as f32 * 25.4 / CHART_DISPLAY_DPI;
    cursor.gap(4.0);
    cursor.ensure_space(display_mm + 4.0);

    let image = Image::from_dynamic_image(&decoded);
    image.add_to_layer(
        cursor.layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(MARGIN_MM)),
            translate_y: Some(Mm(cursor.y - display_mm)),
            dpi: Some(CHART_DISPLAY_DPI),
            ..Default::default()
        },
    );
    cursor.y -= display_mm + 4.0;
    Ok(())
}

/// Word-wraps text to a column budget, preserving existing line breaks.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.chars().count() <= max_chars {
            lines.push(paragraph.to_string());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.chars().count() + word.chars().count() + 1 > max_chars
            {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

fn to_document_error<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Document(e.to_string())
}
