use crate::fonts::BuiltinFont;

/// RGB color for fills and text.
///
/// Each component is in the range 0.0 (none) to 1.0 (full intensity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Create a color from RGB components (each 0.0-1.0).
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }

    /// Create a grayscale color (r = g = b = level).
    pub fn gray(level: f64) -> Self {
        Color {
            r: level,
            g: level,
            b: level,
        }
    }

    /// Create a color from a packed 0xRRGGBB value.
    pub fn hex(rgb: u32) -> Self {
        Color {
            r: ((rgb >> 16) & 0xff) as f64 / 255.0,
            g: ((rgb >> 8) & 0xff) as f64 / 255.0,
            b: (rgb & 0xff) as f64 / 255.0,
        }
    }
}

/// Text styling for paragraphs.
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub font: BuiltinFont,
    pub font_size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font: BuiltinFont::Helvetica,
            font_size: 12.0,
        }
    }
}

/// Horizontal text alignment within a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Style options for a table cell.
#[derive(Debug, Clone)]
pub struct CellStyle {
    /// Optional cell background color (overrides row background).
    pub background_color: Option<Color>,
    /// Optional text color. Defaults to black.
    pub text_color: Option<Color>,
    pub font: BuiltinFont,
    /// Font size in points.
    pub font_size: f64,
    /// Padding applied to all four sides, in points.
    pub padding: f64,
    pub align: TextAlign,
}

impl Default for CellStyle {
    fn default() -> Self {
        CellStyle {
            background_color: None,
            text_color: None,
            font: BuiltinFont::Helvetica,
            font_size: 10.0,
            padding: 2.0,
            align: TextAlign::Left,
        }
    }
}

/// A single table cell containing text and style.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub style: CellStyle,
}

impl Cell {
    /// Create a cell with the default style.
    pub fn new(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            style: CellStyle::default(),
        }
    }

    /// Create a cell with an explicit style.
    pub fn styled(text: impl Into<String>, style: CellStyle) -> Self {
        Cell {
            text: text.into(),
            style,
        }
    }
}

/// A row of cells in a table.
#[derive(Debug, Clone)]
pub struct Row {
    pub cells: Vec<Cell>,
    /// Optional background color applied to the entire row.
    /// Per-cell background_color takes priority.
    pub background_color: Option<Color>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row {
            cells,
            background_color: None,
        }
    }
}

/// A table with fixed column widths and pre-assembled rows.
#[derive(Debug, Clone)]
pub struct TableBlock {
    /// Column widths in points.
    pub columns: Vec<f64>,
    pub rows: Vec<Row>,
    /// Border stroke color. Only drawn when `border_width > 0`.
    pub border_color: Color,
    /// Border line width in points. Zero (the default) disables borders.
    pub border_width: f64,
}

impl TableBlock {
    /// Create a borderless table with the given column widths.
    pub fn new(columns: Vec<f64>) -> Self {
        TableBlock {
            columns,
            rows: Vec::new(),
            border_color: Color::rgb(0.0, 0.0, 0.0),
            border_width: 0.0,
        }
    }

    pub fn push_row(&mut self, row: Row) -> &mut Self {
        self.rows.push(row);
        self
    }

    /// Total width spanned by all columns.
    pub fn total_width(&self) -> f64 {
        self.columns.iter().sum()
    }
}

/// An ordered, opaque unit of typeset content.
///
/// The layout engine only tracks ordering and frame assignment; the
/// render backend measures and draws each variant.
#[derive(Debug, Clone)]
pub enum FlowBlock {
    /// Word-wrapped text.
    Paragraph { text: String, style: TextStyle },
    /// Fixed vertical gap.
    Spacer { height: f64 },
    Table(TableBlock),
}

impl FlowBlock {
    pub fn paragraph(text: impl Into<String>, style: TextStyle) -> Self {
        FlowBlock::Paragraph {
            text: text.into(),
            style,
        }
    }

    pub fn spacer(height: f64) -> Self {
        FlowBlock::Spacer { height }
    }
}
