//! Pay slip demo: a two-column weekly pay slip from sample data.
//!
//! Left column: employee header, earnings and gross tables, and a
//! per-site hours pivot. Right column: company block, pay period,
//! deductions, net pay, and signature lines.
//!
//! Run with:
//!   cargo run --example generate_payslip -p layout-demos
//!
//! Writes output to: demos/output/pay_slip.pdf

use std::fs::File;
use std::io::BufWriter;

use layout_core::{
    BuiltinFont, Cell, CellStyle, Color, ColumnSpec, FlowBlock, LayoutBuilder, PageGeometry,
    PdfBackend, RenderBackend, Row, TableBlock, TextAlign, TextStyle,
};

// ── styles ────────────────────────────────────────────────────────────────────

fn title_style() -> TextStyle {
    TextStyle { font: BuiltinFont::Helvetica, font_size: 10.0 }
}

fn normal_style() -> TextStyle {
    TextStyle { font: BuiltinFont::Helvetica, font_size: 8.0 }
}

fn header_gray() -> Color {
    Color::hex(0xd8d8d8)
}

/// Bold header cell on a gray band, as in the earnings table head.
fn head_cell(text: &str, align: TextAlign) -> Cell {
    Cell::styled(
        text,
        CellStyle {
            background_color: Some(header_gray()),
            font: BuiltinFont::HelveticaBold,
            font_size: 8.0,
            padding: 1.0,
            align,
            ..CellStyle::default()
        },
    )
}

/// Plain 8pt body cell.
fn body_cell(text: &str, align: TextAlign) -> Cell {
    Cell::styled(
        text,
        CellStyle {
            font: BuiltinFont::Helvetica,
            font_size: 8.0,
            padding: 1.0,
            align,
            ..CellStyle::default()
        },
    )
}

/// Zero-padding label cell for the period and signature tables.
fn label_cell(text: &str) -> Cell {
    Cell::styled(
        text,
        CellStyle {
            font: BuiltinFont::Helvetica,
            font_size: 8.0,
            padding: 0.0,
            ..CellStyle::default()
        },
    )
}

/// Table whose first column is left-aligned and the rest centered.
fn data_table(columns: Vec<f64>, rows: &[&[&str]], with_header: bool) -> TableBlock {
    let mut table = TableBlock::new(columns);
    for (row_idx, cells) in rows.iter().enumerate() {
        let row = cells
            .iter()
            .enumerate()
            .map(|(col_idx, text)| {
                let align = if col_idx == 0 { TextAlign::Left } else { TextAlign::Center };
                if with_header && row_idx == 0 {
                    head_cell(text, align)
                } else {
                    body_cell(text, align)
                }
            })
            .collect();
        table.push_row(Row::new(row));
    }
    table
}

fn label_table(columns: Vec<f64>, rows: &[(&str, &str)]) -> TableBlock {
    let mut table = TableBlock::new(columns);
    for &(label, value) in rows {
        table.push_row(Row::new(vec![label_cell(label), label_cell(value)]));
    }
    table
}

// ── left column ───────────────────────────────────────────────────────────────

fn append_left_column(builder: &mut LayoutBuilder) {
    builder.append_block(FlowBlock::paragraph("Employee Name", title_style()));
    builder.append_block(FlowBlock::spacer(117.0));

    let earnings: &[&[&str]] = &[
        &["Earnings", "Rate", "Current\nHours", "Current\nPeriod", "YTD\nHours", "YTD\nAmount"],
        &["Regular Pay", "19.00", "45.0", "855.00", "419.0", "7961.00"],
        &["Roofing", "20.00", "", "0.00", "0.0", "0.00"],
        &["Other", "", "", "", "", "10.00"],
        &["", "", "", "", "", ""],
        &["Adjustment*", "", "", "", "", "0.00"],
    ];
    builder.append_block(FlowBlock::Table(data_table(
        vec![70.0, 30.0, 35.0, 35.0, 30.0, 60.0],
        earnings,
        true,
    )));

    let gross: &[&[&str]] = &[&["Gross Earnings/Hours", "45.0", "855.00", "419.0", "7971.00"]];
    builder.append_block(FlowBlock::Table(data_table(
        vec![100.0, 35.0, 35.0, 30.0, 60.0],
        gross,
        false,
    )));

    builder.append_block(FlowBlock::spacer(60.0));

    let site_hours: &[&[&str]] = &[
        &["", "24-Feb", "25-Feb", "26-Feb", "27-Feb", "28-Feb"],
        &["Address 1", "5.0", "7.5", "7.5", "7.5", ""],
        &["Address 2", "0.5", "0.5", "0.5", "0.5", "1.5"],
        &["Address 3", "3.5", "", "", "", ""],
        &["Address 4", "", "1.0", "", "", ""],
        &["Address 5", "", "", "", "1.0", ""],
        &["Address 6", "", "", "1.0", "", ""],
        &["Address 7", "", "", "", "", "1.0"],
        &["Address 8", "", "", "", "", "1.0"],
        &["Address 9", "", "", "", "", "0.5"],
        &["Address 10", "", "", "", "", "1.0"],
        &["Address 11", "", "", "", "", "2.0"],
        &["Address 12", "", "", "", "", "2.0"],
        &["Grand Total", "9.0", "9.0", "9.0", "9.0", "9.0"],
    ];
    builder.append_block(FlowBlock::Table(data_table(
        vec![106.0, 30.0, 30.0, 30.0, 30.0, 30.0],
        site_hours,
        true,
    )));
}

// ── right column ──────────────────────────────────────────────────────────────

fn append_right_column(builder: &mut LayoutBuilder) {
    for line in ["Company Name", "Company Address", "City, Province", "Postal Code"] {
        builder.append_block(FlowBlock::paragraph(line, normal_style()));
    }
    builder.append_block(FlowBlock::spacer(10.0));

    builder.append_block(FlowBlock::Table(label_table(
        vec![100.0, 60.0],
        &[
            ("Pay Period No.", "9 of 52"),
            ("Period Beginning", "2025-02-24"),
            ("Period Ending", "2025-03-02"),
            ("Pay Date", "2025-03-07"),
            ("Pay Period Type", "Weekly"),
        ],
    )));
    builder.append_block(FlowBlock::spacer(10.0));

    let deductions: &[&[&str]] = &[
        &["Statutory Deductions", "Current Period", "YTD Amount"],
        &["Vehicle", "42.00", "294.00"],
        &["Rent", "", "0.00"],
        &["Other", "", "0.00"],
    ];
    builder.append_block(FlowBlock::Table(data_table(
        vec![110.0, 60.0, 70.0],
        deductions,
        true,
    )));

    builder.append_block(FlowBlock::Table(data_table(
        vec![110.0, 60.0, 70.0],
        &[&["Total Deductions", "42.00", "294.00"]],
        false,
    )));
    builder.append_block(FlowBlock::Table(data_table(
        vec![110.0, 60.0, 70.0],
        &[&["Net Pay", "813.00", "7677.00"]],
        false,
    )));
    builder.append_block(FlowBlock::Table(data_table(
        vec![110.0, 60.0],
        &[&["Last Rounding", "0.00"]],
        false,
    )));

    builder.append_block(FlowBlock::spacer(15.0));
    builder.append_block(FlowBlock::Table(data_table(
        vec![110.0, 130.0],
        &[&["Paid Via E-Transfer", "813.00"]],
        false,
    )));

    builder.append_block(FlowBlock::spacer(70.0));
    builder.append_block(FlowBlock::Table(label_table(
        vec![100.0, 60.0],
        &[
            ("Created By:", "Accountant Name"),
            ("Approved By:", "Manager Name"),
            ("Acknowledged By:", "Employee Name"),
        ],
    )));
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() {
    // Letter page, 20pt margins, 10pt gutter, left column 40pt wider.
    let geometry = PageGeometry::letter(20.0, 10.0);
    let mut builder =
        LayoutBuilder::new(geometry, ColumnSpec::WidthDelta(40.0)).expect("frame geometry");

    append_left_column(&mut builder);
    builder.break_to_next_frame().expect("frame break");
    append_right_column(&mut builder);

    let doc = builder.build().expect("layout document");

    let mut backend = PdfBackend::new();
    backend.set_compression(true);
    backend.set_info("Title", "Pay Slip");
    backend.set_info("Creator", "layout-demos generate_payslip example");

    std::fs::create_dir_all("demos/output").expect("create output dir");
    let path = "demos/output/pay_slip.pdf";
    let file = File::create(path).expect("create PDF");
    backend
        .render(&doc, BufWriter::new(file))
        .expect("render PDF");
    println!("Written to {}", path);
}
