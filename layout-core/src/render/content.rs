use crate::blocks::{Cell, CellStyle, Color, FlowBlock, Row, TableBlock, TextAlign, TextStyle};
use crate::fonts::FontMetrics;
use crate::geometry::Frame;

use super::writer::{escape_pdf_string, format_coord};

/// Flows one column's block sequence into its frame, one page at a
/// time. Blocks that do not fit the remaining height carry over to
/// the same frame on the next page.
pub(crate) struct ColumnFlow<'a> {
    frame: &'a Frame,
    blocks: &'a [FlowBlock],
    next: usize,
}

impl<'a> ColumnFlow<'a> {
    pub fn new(frame: &'a Frame, blocks: &'a [FlowBlock]) -> Self {
        ColumnFlow {
            frame,
            blocks,
            next: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.blocks.len()
    }

    /// Emit as many remaining blocks as fit into the frame on a fresh
    /// page, appending content stream ops to `output`.
    pub fn emit_page(&mut self, output: &mut Vec<u8>) {
        let mut cursor_y = self.frame.top();
        let mut placed_any = false;

        while self.next < self.blocks.len() {
            let block = &self.blocks[self.next];
            let height = measure_block(block, self.frame.width);
            if placed_any && cursor_y - height < self.frame.y {
                // Column full; the block carries over to the next page.
                break;
            }
            // A block taller than the whole frame is placed at the top
            // and allowed to overflow rather than looping forever.
            emit_block(block, self.frame, cursor_y, output);
            cursor_y -= height;
            placed_any = true;
            self.next += 1;
        }
    }
}

/// Height a block occupies when flowed at the given width.
pub(crate) fn measure_block(block: &FlowBlock, width: f64) -> f64 {
    match block {
        FlowBlock::Spacer { height } => *height,
        FlowBlock::Paragraph { text, style } => {
            let lines = wrap_text(text, width, style);
            lines.len() as f64 * FontMetrics::line_height(style.font_size)
        }
        FlowBlock::Table(table) => table.rows.iter().map(|row| row_height(table, row)).sum(),
    }
}

fn emit_block(block: &FlowBlock, frame: &Frame, top: f64, output: &mut Vec<u8>) {
    match block {
        // Spacers only advance the cursor.
        FlowBlock::Spacer { .. } => {}
        FlowBlock::Paragraph { text, style } => emit_paragraph(text, style, frame, top, output),
        FlowBlock::Table(table) => emit_table(table, frame, top, output),
    }
}

// -------------------------------------------------------
// Text wrapping
// -------------------------------------------------------

/// Word-wrap `text` into lines that fit within `avail_width`.
/// Embedded newlines force line breaks.
pub(crate) fn wrap_text(text: &str, avail_width: f64, style: &TextStyle) -> Vec<String> {
    let mut lines = Vec::new();
    for para in text.split('\n') {
        wrap_paragraph(para.trim(), avail_width, style, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_paragraph(text: &str, avail_width: f64, style: &TextStyle, out: &mut Vec<String>) {
    if text.is_empty() {
        out.push(String::new());
        return;
    }
    let mut current = String::new();
    let mut width = 0.0_f64;

    for word in text.split_whitespace() {
        let word_w = FontMetrics::measure_text(word, style.font, style.font_size);
        let space_w = if current.is_empty() {
            0.0
        } else {
            FontMetrics::measure_text(" ", style.font, style.font_size)
        };

        if width + space_w + word_w > avail_width && !current.is_empty() {
            out.push(std::mem::take(&mut current));
            // A single word wider than the line is placed anyway and
            // overflows horizontally.
            current.push_str(word);
            width = word_w;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            width += space_w + word_w;
        }
    }
    out.push(current);
}

// -------------------------------------------------------
// Paragraphs
// -------------------------------------------------------

fn emit_paragraph(text: &str, style: &TextStyle, frame: &Frame, top: f64, output: &mut Vec<u8>) {
    let lines = wrap_text(text, frame.width, style);
    let lh = FontMetrics::line_height(style.font_size);

    output.extend_from_slice(b"BT\n");
    output.extend_from_slice(
        format!("/{} {} Tf\n", style.font.pdf_name(), format_coord(style.font_size)).as_bytes(),
    );
    // First baseline: block top minus the font size (approximates
    // the ascent, since line height is 1.2x the size).
    output.extend_from_slice(
        format!(
            "{} {} Td\n",
            format_coord(frame.x),
            format_coord(top - style.font_size),
        )
        .as_bytes(),
    );

    let mut is_first = true;
    for line in &lines {
        if !is_first {
            output.extend_from_slice(format!("0 {} Td\n", format_coord(-lh)).as_bytes());
        }
        if !line.is_empty() {
            output.extend_from_slice(format!("({}) Tj\n", escape_pdf_string(line)).as_bytes());
        }
        is_first = false;
    }
    output.extend_from_slice(b"ET\n");
}

// -------------------------------------------------------
// Tables
// -------------------------------------------------------

/// Height of a row: the tallest wrapped cell across all columns.
fn row_height(table: &TableBlock, row: &Row) -> f64 {
    let tallest = table
        .columns
        .iter()
        .enumerate()
        .map(|(col_idx, &col_width)| {
            row.cells
                .get(col_idx)
                .map_or(0.0, |cell| cell_height(cell, col_width))
        })
        .fold(0.0_f64, f64::max);
    if tallest > 0.0 {
        tallest
    } else {
        // Row with no cells still occupies one default line.
        let style = CellStyle::default();
        FontMetrics::line_height(style.font_size) + 2.0 * style.padding
    }
}

fn cell_height(cell: &Cell, col_width: f64) -> f64 {
    let avail = (col_width - 2.0 * cell.style.padding).max(0.0);
    let ts = TextStyle {
        font: cell.style.font,
        font_size: cell.style.font_size,
    };
    let lines = wrap_text(&cell.text, avail, &ts);
    lines.len() as f64 * FontMetrics::line_height(ts.font_size) + 2.0 * cell.style.padding
}

fn emit_table(table: &TableBlock, frame: &Frame, top: f64, output: &mut Vec<u8>) {
    let mut row_top = top;
    for row in &table.rows {
        let height = row_height(table, row);
        emit_row_backgrounds(table, row, frame.x, row_top, height, output);
        if table.border_width > 0.0 {
            emit_row_borders(table, frame.x, row_top, height, output);
        }

        let mut col_x = frame.x;
        for (col_idx, &col_width) in table.columns.iter().enumerate() {
            if let Some(cell) = row.cells.get(col_idx) {
                emit_cell(cell, col_x, row_top, col_width, output);
            }
            col_x += col_width;
        }
        row_top -= height;
    }
}

fn fill_rect(color: Color, x: f64, y: f64, w: f64, h: f64, output: &mut Vec<u8>) {
    output.extend_from_slice(
        format!(
            "{} {} {} rg\n{} {} {} {} re\nf\n",
            format_coord(color.r),
            format_coord(color.g),
            format_coord(color.b),
            format_coord(x),
            format_coord(y),
            format_coord(w),
            format_coord(h),
        )
        .as_bytes(),
    );
}

/// Row background first, per-cell backgrounds on top. Wrapped in q/Q
/// so the fill color does not leak into later text.
fn emit_row_backgrounds(
    table: &TableBlock,
    row: &Row,
    row_x: f64,
    row_top: f64,
    height: f64,
    output: &mut Vec<u8>,
) {
    let has_any =
        row.background_color.is_some() || row.cells.iter().any(|c| c.style.background_color.is_some());
    if !has_any {
        return;
    }

    let row_bottom = row_top - height;
    output.extend_from_slice(b"q\n");
    if let Some(bg) = row.background_color {
        fill_rect(bg, row_x, row_bottom, table.total_width(), height, output);
    }
    let mut col_x = row_x;
    for (col_idx, &col_width) in table.columns.iter().enumerate() {
        if let Some(cell) = row.cells.get(col_idx) {
            if let Some(bg) = cell.style.background_color {
                fill_rect(bg, col_x, row_bottom, col_width, height, output);
            }
        }
        col_x += col_width;
    }
    output.extend_from_slice(b"Q\n");
}

/// Outer rectangle of the row plus vertical column dividers.
fn emit_row_borders(table: &TableBlock, row_x: f64, row_top: f64, height: f64, output: &mut Vec<u8>) {
    let row_bottom = row_top - height;
    let color = table.border_color;

    output.extend_from_slice(b"q\n");
    output.extend_from_slice(
        format!(
            "{} {} {} RG\n{} w\n",
            format_coord(color.r),
            format_coord(color.g),
            format_coord(color.b),
            format_coord(table.border_width),
        )
        .as_bytes(),
    );
    output.extend_from_slice(
        format!(
            "{} {} {} {} re\nS\n",
            format_coord(row_x),
            format_coord(row_bottom),
            format_coord(table.total_width()),
            format_coord(height),
        )
        .as_bytes(),
    );

    // Dividers between columns (none after the last).
    let mut col_x = row_x;
    for &col_width in &table.columns[..table.columns.len().saturating_sub(1)] {
        col_x += col_width;
        output.extend_from_slice(
            format!(
                "{} {} m\n{} {} l\nS\n",
                format_coord(col_x),
                format_coord(row_top),
                format_coord(col_x),
                format_coord(row_bottom),
            )
            .as_bytes(),
        );
    }
    output.extend_from_slice(b"Q\n");
}

/// Render one cell's wrapped text lines, honoring padding and
/// horizontal alignment. Each line gets its own BT block so alignment
/// can position it absolutely.
fn emit_cell(cell: &Cell, cell_x: f64, row_top: f64, col_width: f64, output: &mut Vec<u8>) {
    let style = &cell.style;
    let ts = TextStyle {
        font: style.font,
        font_size: style.font_size,
    };
    let avail = (col_width - 2.0 * style.padding).max(0.0);
    let lines = wrap_text(&cell.text, avail, &ts);
    let lh = FontMetrics::line_height(style.font_size);

    output.extend_from_slice(b"q\n");
    // Always set an explicit fill color: backgrounds may have left a
    // non-black fill in the surrounding state.
    let text_color = style.text_color.unwrap_or(Color::rgb(0.0, 0.0, 0.0));
    output.extend_from_slice(
        format!(
            "{} {} {} rg\n",
            format_coord(text_color.r),
            format_coord(text_color.g),
            format_coord(text_color.b),
        )
        .as_bytes(),
    );

    for (line_idx, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let line_w = FontMetrics::measure_text(line, style.font, style.font_size);
        let x = match style.align {
            TextAlign::Left => cell_x + style.padding,
            TextAlign::Center => cell_x + (col_width - line_w) / 2.0,
            TextAlign::Right => cell_x + col_width - style.padding - line_w,
        };
        let y = row_top - style.padding - style.font_size - line_idx as f64 * lh;
        output.extend_from_slice(b"BT\n");
        output.extend_from_slice(
            format!("/{} {} Tf\n", style.font.pdf_name(), format_coord(style.font_size)).as_bytes(),
        );
        output.extend_from_slice(
            format!("{} {} Td\n({}) Tj\n", format_coord(x), format_coord(y), escape_pdf_string(line))
                .as_bytes(),
        );
        output.extend_from_slice(b"ET\n");
    }
    output.extend_from_slice(b"Q\n");
}
