pub mod blocks;
pub mod document;
pub mod error;
pub mod fonts;
pub mod geometry;
pub mod render;

pub use blocks::{Cell, CellStyle, Color, FlowBlock, Row, TableBlock, TextAlign, TextStyle};
pub use document::{LayoutBuilder, LayoutDocument};
pub use error::LayoutError;
pub use fonts::{BuiltinFont, FontMetrics};
pub use geometry::{compute_frames, ColumnSpec, Frame, FrameId, PageGeometry};
pub use render::pdf::PdfBackend;
pub use render::RenderBackend;
