// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Table writer: lay out a titled, bordered three-column table and render it
// with `printpdf` 0.8.
//
// Layout is computed first as plain data (`PageLayout`: positioned text and
// grid rules, in millimetres from the top-left corner) and only then turned
// into printpdf `Op` lists. printpdf's own origin is bottom-left, so the
// conversion flips the y axis.

use printpdf::{
    BuiltinFont, Color, FontId, Line, LinePoint, Mm, Op, ParsedFont, PdfDocument, PdfPage,
    PdfSaveOptions, PdfWarnMsg, Point, Pt, Rgb, TextItem,
};
use tracing::{debug, info, instrument, warn};

use tally_core::error::TallyError;
use tally_core::{PaperSize, TextDirection};

/// Number of table columns (barcode, name, quantity).
pub const COLUMNS: usize = 3;

/// Millimetres per PostScript point.
const MM_PER_PT: f32 = 0.352_778;

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Average glyph width as a fraction of the font size. Same approximation for
/// Helvetica and embedded fonts; there are no real metrics at layout time.
const AVG_GLYPH_WIDTH: f32 = 0.5;

/// Visual parameters of the table.
#[derive(Debug, Clone, PartialEq)]
struct TableStyle {
    title_size_pt: f32,
    /// Title baseline, measured from the top edge.
    title_baseline_mm: f32,
    /// Top of the header row on the first page and on continuation pages.
    table_top_mm: f32,
    /// Left, right and bottom page margin.
    margin_mm: f32,
    font_size_pt: f32,
    cell_padding_mm: f32,
    line_width_mm: f32,
    /// Relative column widths in logical order.
    column_weights: [f32; COLUMNS],
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            title_size_pt: 20.0,
            title_baseline_mm: 22.0,
            table_top_mm: 30.0,
            margin_mm: 14.0,
            font_size_pt: 12.0,
            cell_padding_mm: 3.0,
            line_width_mm: 0.1,
            column_weights: [0.35, 0.45, 0.20],
        }
    }
}

/// One run of text placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    /// Text in visual order (already reversed for RTL).
    pub text: String,
    pub x_mm: f32,
    /// Baseline, measured from the top edge.
    pub baseline_mm: f32,
    pub size_pt: f32,
    pub bold: bool,
}

/// A straight grid line, endpoints measured from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

/// Everything drawn on one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub texts: Vec<PlacedText>,
    pub rules: Vec<Rule>,
    /// Indices of the body rows placed on this page.
    pub body_rows: Vec<usize>,
}

/// Horizontal geometry of the table, resolved for one page width.
struct Columns {
    /// Left edge per logical column.
    left: [f32; COLUMNS],
    width: [f32; COLUMNS],
    table_left: f32,
    table_right: f32,
}

/// Renders a title plus a paginated three-column table to PDF bytes.
pub struct ProductTableWriter {
    paper_size: PaperSize,
    direction: TextDirection,
    style: TableStyle,
    /// TrueType bytes embedded for text outside the built-in fonts' range.
    font_bytes: Option<Vec<u8>>,
}

impl ProductTableWriter {
    /// Create a new writer targeting the given paper size.
    pub fn new(paper_size: PaperSize) -> Self {
        Self {
            paper_size,
            direction: TextDirection::Ltr,
            style: TableStyle::default(),
            font_bytes: None,
        }
    }

    /// Create a new writer defaulting to A4.
    pub fn a4() -> Self {
        Self::new(PaperSize::A4)
    }

    pub fn set_direction(&mut self, direction: TextDirection) {
        self.direction = direction;
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    /// Embed this TrueType font for all text.
    ///
    /// The one face is used for every cell, so the header row is not set in
    /// bold once a font is embedded. Only the built-in Helvetica path has a
    /// bold face.
    pub fn set_font_bytes(&mut self, bytes: Vec<u8>) {
        self.font_bytes = Some(bytes);
    }

    fn page_dimensions_mm(&self) -> (f32, f32) {
        let (w, h) = self.paper_size.dimensions_mm();
        (w as f32, h as f32)
    }

    // -- Layout ---------------------------------------------------------------

    /// Compute page layouts for a title, a header row and body rows.
    ///
    /// Rows that do not fit below the previous one start a new page, where the
    /// header row is repeated. A page always receives at least one body row so
    /// an oversized row cannot loop forever. With no rows the single page holds
    /// only the title and the header.
    pub fn layout(
        &self,
        title: &str,
        header: &[String; COLUMNS],
        rows: &[[String; COLUMNS]],
    ) -> Vec<PageLayout> {
        let (page_w, page_h) = self.page_dimensions_mm();
        let columns = self.columns(page_w);
        let bottom = page_h - self.style.margin_mm;

        let mut pages = Vec::new();
        let mut page = PageLayout::default();
        page.texts.push(self.place_title(title, page_w));
        let mut cursor = self.style.table_top_mm;
        cursor += self.place_row(&mut page, &columns, header, cursor, true);

        for (index, row) in rows.iter().enumerate() {
            let height = self.row_height(&columns, row);
            if cursor + height > bottom && !page.body_rows.is_empty() {
                pages.push(std::mem::take(&mut page));
                cursor = self.style.table_top_mm;
                cursor += self.place_row(&mut page, &columns, header, cursor, true);
            }
            cursor += self.place_row(&mut page, &columns, row, cursor, false);
            page.body_rows.push(index);
        }

        pages.push(page);
        pages
    }

    fn columns(&self, page_w: f32) -> Columns {
        let margin = self.style.margin_mm;
        let usable = page_w - 2.0 * margin;
        let total: f32 = self.style.column_weights.iter().sum();
        let mut width = [0.0; COLUMNS];
        for (w, weight) in width.iter_mut().zip(self.style.column_weights) {
            *w = usable * weight / total;
        }

        // RTL mirrors the column order so the first logical column is rightmost.
        let order: [usize; COLUMNS] = if self.direction.is_rtl() {
            [2, 1, 0]
        } else {
            [0, 1, 2]
        };
        let mut left = [0.0; COLUMNS];
        let mut x = margin;
        for col in order {
            left[col] = x;
            x += width[col];
        }

        Columns {
            left,
            width,
            table_left: margin,
            table_right: margin + usable,
        }
    }

    fn place_title(&self, title: &str, page_w: f32) -> PlacedText {
        let size = self.style.title_size_pt;
        let text = visual_order(title, self.direction);
        let x_mm = if self.direction.is_rtl() {
            page_w - self.style.margin_mm - estimate_width_mm(&text, size)
        } else {
            self.style.margin_mm
        };
        PlacedText {
            text,
            x_mm,
            baseline_mm: self.style.title_baseline_mm,
            size_pt: size,
            bold: false,
        }
    }

    fn line_height_mm(&self) -> f32 {
        self.style.font_size_pt * LINE_HEIGHT_FACTOR * MM_PER_PT
    }

    fn wrapped_cells(&self, columns: &Columns, cells: &[String; COLUMNS]) -> [Vec<String>; COLUMNS] {
        let pad = self.style.cell_padding_mm;
        let glyph_mm = AVG_GLYPH_WIDTH * self.style.font_size_pt * MM_PER_PT;
        std::array::from_fn(|col| {
            let max_chars = ((columns.width[col] - 2.0 * pad) / glyph_mm).floor().max(1.0) as usize;
            wrap_text(&cells[col], max_chars)
        })
    }

    fn row_height(&self, columns: &Columns, cells: &[String; COLUMNS]) -> f32 {
        let lines = self
            .wrapped_cells(columns, cells)
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(1);
        lines as f32 * self.line_height_mm() + 2.0 * self.style.cell_padding_mm
    }

    /// Place one row at `top` and return its height.
    fn place_row(
        &self,
        page: &mut PageLayout,
        columns: &Columns,
        cells: &[String; COLUMNS],
        top: f32,
        bold: bool,
    ) -> f32 {
        let pad = self.style.cell_padding_mm;
        let size = self.style.font_size_pt;
        let line_h = self.line_height_mm();
        let ascent = size * MM_PER_PT * 0.8;
        let wrapped = self.wrapped_cells(columns, cells);
        let lines = wrapped.iter().map(Vec::len).max().unwrap_or(1);
        let height = lines as f32 * line_h + 2.0 * pad;

        for (col, cell_lines) in wrapped.iter().enumerate() {
            for (i, line) in cell_lines.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                let text = visual_order(line, self.direction);
                let x_mm = if self.direction.is_rtl() {
                    columns.left[col] + columns.width[col] - pad - estimate_width_mm(&text, size)
                } else {
                    columns.left[col] + pad
                };
                page.texts.push(PlacedText {
                    text,
                    x_mm,
                    baseline_mm: top + pad + ascent + i as f32 * line_h,
                    size_pt: size,
                    bold,
                });
            }
        }

        let bottom = top + height;
        page.rules.push(Rule {
            from: (columns.table_left, top),
            to: (columns.table_right, top),
        });
        page.rules.push(Rule {
            from: (columns.table_left, bottom),
            to: (columns.table_right, bottom),
        });
        let mut edges: Vec<f32> = columns.left.to_vec();
        edges.push(columns.table_right);
        for x in edges {
            page.rules.push(Rule {
                from: (x, top),
                to: (x, bottom),
            });
        }

        height
    }

    // -- Rendering ------------------------------------------------------------

    /// Lay out and render the table, returning the PDF bytes.
    ///
    /// Fails with `FontError` when the text needs glyphs the built-in fonts do
    /// not have (Hebrew, for instance) and no usable TrueType font was set.
    #[instrument(skip(self, header, rows), fields(rows = rows.len()))]
    pub fn render(
        &self,
        title: &str,
        header: &[String; COLUMNS],
        rows: &[[String; COLUMNS]],
    ) -> Result<Vec<u8>, TallyError> {
        let layouts = self.layout(title, header, rows);
        let (page_w, page_h) = self.page_dimensions_mm();

        info!(paper = ?self.paper_size, title, pages = layouts.len(), "rendering product table");

        let mut doc = PdfDocument::new(title);
        let mut warnings: Vec<PdfWarnMsg> = Vec::new();

        let embedded = match &self.font_bytes {
            Some(bytes) => {
                let parsed = ParsedFont::from_bytes(bytes, 0, &mut warnings).ok_or_else(|| {
                    TallyError::FontError("font file is not a readable TrueType font".into())
                })?;
                Some(doc.add_font(&parsed))
            }
            None => {
                let needs_font = layouts
                    .iter()
                    .flat_map(|p| p.texts.iter())
                    .any(|t| !is_builtin_encodable(&t.text));
                if needs_font {
                    return Err(TallyError::FontError(
                        "text needs glyphs outside the built-in fonts; configure a TrueType font"
                            .into(),
                    ));
                }
                None
            }
        };

        let pages: Vec<PdfPage> = layouts
            .iter()
            .map(|layout| {
                let ops = page_ops(layout, page_h, self.style.line_width_mm, embedded.as_ref());
                PdfPage::new(Mm(page_w), Mm(page_h), ops)
            })
            .collect();
        doc.with_pages(pages);

        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            warn!(count = warnings.len(), "printpdf reported warnings");
        }
        debug!(bytes = output.len(), "product table rendered");

        if output.is_empty() {
            return Err(TallyError::PdfError("renderer produced no output".into()));
        }
        Ok(output)
    }
}

/// Convert one page layout into printpdf operations.
fn page_ops(layout: &PageLayout, page_h_mm: f32, line_width_mm: f32, font: Option<&FontId>) -> Vec<Op> {
    let to_point = |(x, y): (f32, f32)| Point {
        x: Mm(x).into_pt(),
        y: Mm(page_h_mm - y).into_pt(),
    };
    let black = Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None));

    let mut ops = vec![
        Op::SetOutlineColor { col: black.clone() },
        Op::SetFillColor { col: black },
        Op::SetOutlineThickness {
            pt: Mm(line_width_mm).into_pt(),
        },
    ];

    for rule in &layout.rules {
        ops.push(Op::DrawLine {
            line: Line {
                points: vec![
                    LinePoint {
                        p: to_point(rule.from),
                        bezier: false,
                    },
                    LinePoint {
                        p: to_point(rule.to),
                        bezier: false,
                    },
                ],
                is_closed: false,
            },
        });
    }

    for text in &layout.texts {
        ops.push(Op::StartTextSection);
        ops.push(Op::SetTextCursor {
            pos: to_point((text.x_mm, text.baseline_mm)),
        });
        let items = vec![TextItem::Text(text.text.clone())];
        match font {
            Some(id) => {
                ops.push(Op::SetFontSize {
                    size: Pt(text.size_pt),
                    font: id.clone(),
                });
                ops.push(Op::WriteText {
                    items,
                    font: id.clone(),
                });
            }
            None => {
                let builtin = if text.bold {
                    BuiltinFont::HelveticaBold
                } else {
                    BuiltinFont::Helvetica
                };
                ops.push(Op::SetFontSizeBuiltinFont {
                    size: Pt(text.size_pt),
                    font: builtin,
                });
                ops.push(Op::WriteTextBuiltinFont {
                    items,
                    font: builtin,
                });
            }
        }
        ops.push(Op::EndTextSection);
    }

    ops
}

/// Text as it must be handed to the renderer: reversed character by
/// character for RTL, unchanged for LTR. Not a bidi algorithm.
pub fn visual_order(text: &str, direction: TextDirection) -> String {
    match direction {
        TextDirection::Ltr => text.to_owned(),
        TextDirection::Rtl => text.chars().rev().collect(),
    }
}

/// Characters WinAnsi places in 0x80..=0x9F, where Latin-1 has C1 controls.
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

/// Whether the built-in (WinAnsi-encoded) fonts can show this text.
fn is_builtin_encodable(text: &str) -> bool {
    text.chars().all(|c| match c {
        ' '..='~' | '\u{A0}'..='\u{FF}' => true,
        _ => WIN_ANSI_EXTRAS.contains(c),
    })
}

fn estimate_width_mm(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * AVG_GLYPH_WIDTH * size_pt * MM_PER_PT
}

// -- Text wrapping helper -----------------------------------------------------

/// Wrap text so that no line exceeds `max_width` characters.
///
/// Splits on existing newlines first, then word-wraps each paragraph. Words
/// longer than `max_width` are force-broken on character boundaries. Always
/// returns at least one line.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut result = Vec::new();

    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            result.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0usize;

        for word in words {
            let word_len = word.chars().count();
            if word_len > max_width {
                if !current.is_empty() {
                    result.push(std::mem::take(&mut current));
                }
                let chars: Vec<char> = word.chars().collect();
                let mut chunks = chars.chunks(max_width).peekable();
                current_len = 0;
                while let Some(chunk) = chunks.next() {
                    if chunks.peek().is_some() {
                        result.push(chunk.iter().collect());
                    } else {
                        current = chunk.iter().collect();
                        current_len = chunk.len();
                    }
                }
            } else if current.is_empty() {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= max_width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                result.push(std::mem::replace(&mut current, word.to_owned()));
                current_len = word_len;
            }
        }

        if !current.is_empty() {
            result.push(current);
        }
    }

    if result.is_empty() {
        result.push(String::new());
    }
    result
}
