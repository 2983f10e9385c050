//! PDF rendering of a [`ReportLayout`].

use std::io::{BufWriter, Write};

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point, Rgb,
};

use super::layout::{ClosingBlock, ReportLayout, Section, TitleBlock, PRINTABLE_WIDTH_MM};
use crate::error::ExportError;
use crate::utils::text::truncate_chars;

const PT_TO_MM: f32 = 0.3528;
/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.52;
const CELL_PADDING_MM: f32 = 1.5;
const ROW_HEIGHT_MM: f32 = 6.0;
const SECTION_BAR_HEIGHT_MM: f32 = 7.0;

/// Page geometry for the exported document
pub struct PdfExportOptions {
    /// Title stored in the PDF metadata
    pub title: String,
    /// Page size (width, height) in mm
    pub page_size: (f32, f32),
    /// Left/right margin in mm
    pub margin_x: f32,
    /// Top/bottom margin in mm
    pub margin_y: f32,
}

impl Default for PdfExportOptions {
    fn default() -> Self {
        Self {
            title: "Escala RLM".to_string(),
            page_size: (210.0, 297.0), // A4 Portrait
            margin_x: 5.0,
            margin_y: 10.0,
        }
    }
}

/// Service for rendering the schedule report to PDF
pub struct PdfExportService;

impl PdfExportService {
    pub fn render(layout: &ReportLayout, options: &PdfExportOptions) -> Result<Vec<u8>, ExportError> {
        let (doc, page1, layer1) = PdfDocument::new(
            &options.title,
            Mm(options.page_size.0),
            Mm(options.page_size.1),
            "Layer 1",
        );

        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Pdf(format!("failed to add font: {e}")))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Pdf(format!("failed to add bold font: {e}")))?;

        let layer = doc.get_page(page1).get_layer(layer1);
        let mut page = PageCursor {
            doc: &doc,
            layer,
            y: options.page_size.1 - options.margin_y,
            options,
            font,
            font_bold,
            pages: 1,
        };

        page.title_block(&layout.title);
        for section in &layout.sections {
            page.section(section);
        }
        if let Some(closing) = &layout.closing {
            page.closing_block(closing);
        }

        let pages = page.pages;
        let mut bytes = Vec::new();
        {
            let mut writer = BufWriter::new(&mut bytes);
            doc.save(&mut writer)
                .map_err(|e| ExportError::Pdf(format!("failed to save PDF: {e}")))?;
            writer.flush()?;
        }

        log::debug!(
            "Rendered PDF with {} sections on {} pages ({} bytes)",
            layout.sections.len(),
            pages,
            bytes.len()
        );
        Ok(bytes)
    }
}

/// Write position on the current page; opens new pages as content flows.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    options: &'a PdfExportOptions,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    pages: usize,
}

impl PageCursor<'_> {
    fn left(&self) -> f32 {
        self.options.margin_x
    }

    fn center_x(&self) -> f32 {
        self.options.page_size.0 / 2.0
    }

    fn ensure_space(&mut self, height: f32) {
        if self.y - height >= self.options.margin_y {
            return;
        }
        let (page, layer) = self.doc.add_page(
            Mm(self.options.page_size.0),
            Mm(self.options.page_size.1),
            "Layer 1",
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = self.options.page_size.1 - self.options.margin_y;
        self.pages += 1;
    }

    fn title_block(&mut self, title: &TitleBlock) {
        self.y -= 6.0;
        draw_text(&self.layer, &self.font_bold, 16.0, self.center_x(), self.y, &title.organization, true, BLACK);
        self.y -= 6.0;
        draw_text(&self.layer, &self.font, 10.0, self.center_x(), self.y, &title.report_name, true, BLACK);
        self.y -= 5.0;
        draw_text(&self.layer, &self.font, 10.0, self.center_x(), self.y, &title.issue_line, true, BLACK);
        self.y -= 8.0;
    }

    fn section(&mut self, section: &Section) {
        // Keep the bar together with the header row and the first entry
        self.ensure_space(SECTION_BAR_HEIGHT_MM + 2.0 * ROW_HEIGHT_MM);

        let bar_bottom = self.y - SECTION_BAR_HEIGHT_MM;
        draw_rect(&self.layer, self.left(), bar_bottom, PRINTABLE_WIDTH_MM, SECTION_BAR_HEIGHT_MM, GRAY, true);
        draw_text(&self.layer, &self.font_bold, 12.0, self.center_x(), bar_bottom + 2.2, section.title, true, WHITE);
        self.y = bar_bottom;

        let header: Vec<&str> = section.table.headers.clone();
        self.table_row(&header, section.column_width_mm, true);
        for row in &section.table.rows {
            self.ensure_space(ROW_HEIGHT_MM);
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            self.table_row(&cells, section.column_width_mm, false);
        }

        self.y -= 3.0;
    }

    fn table_row(&mut self, cells: &[&str], column_width: f32, bold: bool) {
        let bottom = self.y - ROW_HEIGHT_MM;
        let font = if bold { &self.font_bold } else { &self.font };
        let max_chars = max_chars_for(column_width - 2.0 * CELL_PADDING_MM, 9.0);

        for (i, cell) in cells.iter().enumerate() {
            let x = self.left() + i as f32 * column_width;
            draw_rect(&self.layer, x, bottom, column_width, ROW_HEIGHT_MM, BLACK, false);
            let text = truncate_chars(cell, max_chars);
            draw_text(&self.layer, font, 9.0, x + CELL_PADDING_MM, bottom + 2.0, &text, false, BLACK);
        }
        self.y = bottom;
    }

    fn closing_block(&mut self, closing: &ClosingBlock) {
        self.ensure_space(14.0 + closing.lines.len() as f32 * 5.0);
        self.y -= 11.0;
        draw_text(&self.layer, &self.font_bold, 16.0, self.center_x(), self.y, &closing.heading, true, BLACK);
        self.y -= 3.0;
        for line in &closing.lines {
            self.y -= 5.0;
            draw_text(&self.layer, &self.font, 10.0, self.left(), self.y, line, false, BLACK);
        }
    }
}

const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);
const WHITE: (f32, f32, f32) = (1.0, 1.0, 1.0);
const GRAY: (f32, f32, f32) = (0.5, 0.5, 0.5);

fn text_width_mm(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_EM * PT_TO_MM
}

fn max_chars_for(width_mm: f32, size: f32) -> usize {
    (width_mm / (size * AVG_GLYPH_EM * PT_TO_MM)).floor().max(1.0) as usize
}

#[allow(clippy::too_many_arguments)]
fn draw_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    size: f32,
    x: f32,
    y: f32,
    text: &str,
    centered: bool,
    color: (f32, f32, f32),
) {
    layer.begin_text_section();
    layer.set_font(font, size);
    layer.set_fill_color(printpdf::Color::Rgb(Rgb::new(color.0, color.1, color.2, None)));

    let x = if centered {
        x - text_width_mm(text, size) / 2.0
    } else {
        x
    };

    layer.set_text_cursor(Mm(x), Mm(y));
    layer.write_text(text, font);
    layer.end_text_section();
}

fn draw_rect(
    layer: &PdfLayerReference,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: (f32, f32, f32),
    filled: bool,
) {
    let points = vec![
        (Point::new(Mm(x), Mm(y)), false),
        (Point::new(Mm(x + width), Mm(y)), false),
        (Point::new(Mm(x + width), Mm(y + height)), false),
        (Point::new(Mm(x), Mm(y + height)), false),
    ];
    let rgb = printpdf::Color::Rgb(Rgb::new(color.0, color.1, color.2, None));
    let mode = if filled {
        layer.set_fill_color(rgb);
        printpdf::path::PaintMode::Fill
    } else {
        layer.set_outline_color(rgb);
        layer.set_outline_thickness(1.0);
        printpdf::path::PaintMode::Stroke
    };
    layer.add_polygon(printpdf::Polygon {
        rings: vec![points],
        mode,
        winding_order: printpdf::path::WindingOrder::NonZero,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;
    use crate::models::entry::Entry;
    use crate::models::schedule::ScheduleStore;
    use crate::models::settings::ReportSettings;
    use chrono::NaiveDate;

    fn layout_with(rows: usize) -> ReportLayout {
        let mut store = ScheduleStore::new();
        for i in 0..rows {
            let time = format!("{:02}/05 19:30", i % 28 + 1);
            store.push(
                Entry::new(Category::Rehearsals, [time.as_str(), "Juscimeira", "(Libras)", "Robson"])
                    .unwrap(),
            );
        }
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        ReportLayout::build(&store, &ReportSettings::default(), date)
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = PdfExportService::render(&layout_with(1), &PdfExportOptions::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_empty_layout() {
        let bytes = PdfExportService::render(&layout_with(0), &PdfExportOptions::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_schedule_spills_onto_more_pages() {
        let short = PdfExportService::render(&layout_with(2), &PdfExportOptions::default()).unwrap();
        let long = PdfExportService::render(&layout_with(120), &PdfExportOptions::default()).unwrap();
        assert!(long.len() > short.len());
    }

    #[test]
    fn test_max_chars_for_quarter_width_column() {
        // 47.5 mm column, 9 pt text
        assert_eq!(max_chars_for(47.5 - 2.0 * CELL_PADDING_MM, 9.0), 26);
        assert_eq!(max_chars_for(0.1, 9.0), 1);
    }
}
