use log::debug;

use crate::error::LayoutError;

/// Page size and uniform margin/gutter configuration, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width: f64,
    pub page_height: f64,
    /// Uniform margin applied to all four page edges.
    pub margin: f64,
    /// Horizontal space between the two columns.
    pub gutter: f64,
}

impl PageGeometry {
    /// US Letter (612 x 792 pt) with the given margin and gutter.
    pub fn letter(margin: f64, gutter: f64) -> Self {
        PageGeometry {
            page_width: 612.0,
            page_height: 792.0,
            margin,
            gutter,
        }
    }

    /// Width left for content after both margins.
    pub fn available_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    /// Height left for content after both margins.
    pub fn content_height(&self) -> f64 {
        self.page_height - 2.0 * self.margin
    }
}

/// Rule for splitting the available width into two column widths
/// around the gutter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnSpec {
    /// Both columns get `(available_width - gutter) / 2`.
    Even,
    /// Signed delta applied to an even split:
    /// `left = base + delta`, `right = base - delta`.
    WidthDelta(f64),
    /// Fraction of `available_width - gutter` given to the left column.
    Ratio(f64),
}

/// Identifies one of the two column frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameId {
    Left,
    Right,
}

/// A rectangular content region on the page. `(x, y)` is the lower-left
/// corner in page coordinates; each frame spans the full content height
/// of the page. Frames are immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub id: FrameId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Top edge of the frame (where content starts flowing).
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Right edge of the frame.
    pub fn right_edge(&self) -> f64 {
        self.x + self.width
    }
}

/// Compute the left and right frames for a two-column page.
///
/// The left frame starts at `x = margin`; the right frame at
/// `x = margin + left_width + gutter`. Both share `y = margin` and
/// `height = page_height - 2 * margin`, so the results never overlap
/// and always fit within the page margins.
///
/// Pure function: identical inputs yield identical frames.
pub fn compute_frames(
    geometry: &PageGeometry,
    spec: &ColumnSpec,
) -> Result<(Frame, Frame), LayoutError> {
    if geometry.page_width <= 0.0 || geometry.page_height <= 0.0 {
        return Err(LayoutError::InvalidGeometry(format!(
            "page size must be positive, got {} x {}",
            geometry.page_width, geometry.page_height,
        )));
    }
    if geometry.margin < 0.0 {
        return Err(LayoutError::InvalidGeometry(format!(
            "margin must be non-negative, got {}",
            geometry.margin,
        )));
    }
    if geometry.gutter < 0.0 {
        return Err(LayoutError::InvalidGeometry(format!(
            "gutter must be non-negative, got {}",
            geometry.gutter,
        )));
    }

    let available = geometry.available_width();
    if available <= geometry.gutter {
        return Err(LayoutError::InvalidGeometry(format!(
            "available width {} does not exceed gutter {}",
            available, geometry.gutter,
        )));
    }

    let inner = available - geometry.gutter;
    let base = inner / 2.0;
    let (left_width, right_width) = match *spec {
        ColumnSpec::Even => (base, base),
        ColumnSpec::WidthDelta(delta) => (base + delta, base - delta),
        ColumnSpec::Ratio(ratio) => (inner * ratio, inner * (1.0 - ratio)),
    };

    if left_width <= 0.0 || right_width <= 0.0 {
        return Err(LayoutError::InvalidGeometry(format!(
            "column widths must be positive, got left {} right {}",
            left_width, right_width,
        )));
    }

    let height = geometry.content_height();
    let left = Frame {
        id: FrameId::Left,
        x: geometry.margin,
        y: geometry.margin,
        width: left_width,
        height,
    };
    let right = Frame {
        id: FrameId::Right,
        x: geometry.margin + left_width + geometry.gutter,
        y: geometry.margin,
        width: right_width,
        height,
    };

    debug!(
        "computed frames: left {}pt @ x={}, right {}pt @ x={}",
        left.width, left.x, right.width, right.x,
    );

    Ok((left, right))
}
