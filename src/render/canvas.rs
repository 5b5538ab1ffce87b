//! Drawing onto a surface.
//!
//! This module provides the means to actually draw the map. The main type
//! is [`Canvas`] which wraps a Cairo context bound to a
//! [`Surface`][super::Surface]. All drawing happens in groups which save
//! the graphics state on creation and restore it when dropped, so style
//! changes never leak from one item to the next.

use kurbo::{Point, Rect};
use super::text::{Font, Label, TextAlign};


//------------ Canvas --------------------------------------------------------

/// A virtual surface to draw on.
///
/// All coordinates are logical units. The canvas is created with the
/// device pixel ratio already applied to its transformation.
#[derive(Debug)]
pub struct Canvas {
    /// The Cairo context we use for actual rendering.
    cairo: cairo::Context,

    /// The Pango context we use for text rendering.
    pango: pango::Context,
}

impl Canvas {
    /// Creates a new canvas drawing onto the given raster.
    ///
    /// A freshly created Cairo context starts out with the identity
    /// matrix. The scale for the pixel ratio is set explicitly rather than
    /// multiplied onto whatever was there before, so creating a canvas for
    /// the same raster again yields the same transformation.
    pub(super) fn new(raster: &cairo::ImageSurface, ratio: f64) -> Self {
        let cairo = cairo::Context::new(raster).expect("cairo_create failed");
        let mut matrix = cairo::Matrix::identity();
        matrix.scale(ratio, ratio);
        cairo.set_matrix(matrix);
        let pango = pangocairo::create_context(&cairo);

        Canvas { cairo, pango }
    }

    pub fn start(&mut self) -> Group {
        Group::new(self)
    }

    pub fn prepare_label(
        &self, text: &str, font: &Font
    ) -> Label {
        Label::prepare(&self.pango, text, font)
    }
}


//------------ Group ---------------------------------------------------------

#[derive(Debug)]
pub struct Group<'a> {
    canvas: &'a Canvas,
}

impl<'a> Group<'a> {
    fn new(canvas: &'a Canvas) -> Self {
        canvas.cairo.save().expect("cairo_save failed");
        Self { canvas }
    }

    pub fn prepare_label(&self, text: &str, font: &Font) -> Label {
        self.canvas.prepare_label(text, font)
    }

    pub(super) fn cairo(&self) -> &cairo::Context {
        &self.canvas.cairo
    }
}

/// # Change Style Parameters
///
impl<'a> Group<'a> {
    pub fn apply(&mut self, property: impl Property) {
        property.apply_to_group(self);
    }
}

/// # Building Outlines
///
impl<'a> Group<'a> {
    pub fn new_path(&mut self) {
        self.cairo().new_path()
    }

    pub fn move_to(&mut self, p: Point) {
        self.cairo().move_to(p.x, p.y)
    }

    pub fn line_to(&mut self, p: Point) {
        self.cairo().line_to(p.x, p.y)
    }

    /// Starts a new path consisting of a full circle.
    pub fn circle(&mut self, center: Point, radius: f64) {
        self.cairo().new_path();
        self.cairo().arc(
            center.x, center.y, radius, 0., 2. * std::f64::consts::PI
        );
        self.cairo().close_path();
    }

    /// Starts a new path consisting of a rectangle.
    pub fn rect(&mut self, rect: Rect) {
        self.cairo().new_path();
        self.cairo().rectangle(rect.x0, rect.y0, rect.width(), rect.height());
    }
}

/// # Drawing with Outlines
///
impl<'a> Group<'a> {
    /// Fills the currently applied path.
    ///
    /// Note that this does not clear the currently applied path.
    pub fn fill(&mut self) {
        self.cairo().fill_preserve().expect("cairo_fill_preserve failed");
    }

    /// Strokes the currently applied path.
    ///
    /// Note that this does not clear the currently applied path.
    pub fn stroke(&mut self) {
        self.cairo().stroke_preserve().expect("cairo_stroke_preserve failed");
    }

    /// Paints the current source everywhere.
    pub fn paint(&mut self) {
        self.cairo().paint().expect("cairo_paint failed");
    }
}

/// # Drawing Text
///
impl<'a> Group<'a> {
    /// Fills the given label with its baseline at the given position.
    ///
    /// Note that this does clear the currently applied path.
    pub fn fill_label(&mut self, label: &Label, at: Point, align: TextAlign) {
        label.fill(self.cairo(), at, align)
    }
}

impl<'a> Drop for Group<'a> {
    fn drop(&mut self) {
        self.canvas.cairo.restore().expect("cairo_restore failed");
        self.canvas.cairo.new_path();
    }
}


//------------ Property ------------------------------------------------------

pub trait Property {
    fn apply_to_group(self, group: &mut Group);
}


//------------ DashPattern ---------------------------------------------------

/// A pattern for drawing dashed strokes.
#[derive(Clone, Copy, Debug)]
pub struct DashPattern<const N: usize> {
    dashes: [f64; N],
    offset: f64
}

impl<const N: usize> DashPattern<N> {
    pub const fn new(dashes: [f64; N], offset: f64) -> Self {
        Self { dashes, offset }
    }
}

impl<const N: usize> Property for DashPattern<N> {
    fn apply_to_group(self, group: &mut Group) {
        group.cairo().set_dash(&self.dashes, self.offset)
    }
}


//------------ LineWidth -----------------------------------------------------

/// The width of stroked lines in logical units.
#[derive(Clone, Copy, Debug)]
pub struct LineWidth(pub f64);

impl Property for LineWidth {
    fn apply_to_group(self, group: &mut Group) {
        group.cairo().set_line_width(self.0)
    }
}


//------------ Operator ------------------------------------------------------

/// The compositing operator to be used when drawing new content.
#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub enum Operator {
    /// Draws the source over the existing content.
    #[default]
    SourceOver,

    /// Erases everything underneath, leaving transparent pixels.
    Clear,
}

impl Property for Operator {
    fn apply_to_group(self, group: &mut Group) {
        group.cairo().set_operator(
            match self {
                Operator::SourceOver => cairo::Operator::Over,
                Operator::Clear => cairo::Operator::Clear,
            }
        );
    }
}
