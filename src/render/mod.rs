//! Drawing primitives on top of Cairo and Pango.

pub use self::canvas::{
    Canvas, DashPattern, Group, LineWidth, Operator, Property,
};
pub use self::pattern::{Color, InvalidHexColor};
pub use self::surface::Surface;
pub use self::text::{
    Font, FontBuilder, FontFamily, FontWeight, Label, TextAlign,
};

pub(crate) mod canvas;
mod pattern;
mod surface;
mod text;
