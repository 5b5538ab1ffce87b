//! Rendering the facility map.
//!
//! Rendering happens in two stages. First, [`MapRenderer::compose`] turns
//! the user position and the ranked facilities into a [`Scene`]: the
//! ordered list of [`Shape`]s to draw, already positioned on the surface.
//! This step is pure and decides the render mode. Second, the scene is
//! painted onto a [`Surface`], each shape on top of those before it.
//!
//! Nothing is kept between renders. Every call starts over from a cleared
//! surface so that rendering the same input twice yields the same pixels.

use kurbo::{Point, Rect};
use crate::facility::{Category, RankedFacility};
use crate::projection::{compute_bounds, Projection};
use crate::render::{
    Canvas, DashPattern, FontWeight, LineWidth, Operator, Surface, TextAlign,
};
use crate::style::MapStyle;
use crate::world::{Coordinate, GeoBounds};


//------------ MapRenderer ---------------------------------------------------

/// Draws the user and nearby facilities onto a surface.
#[derive(Clone, Debug, Default)]
pub struct MapRenderer {
    style: MapStyle,
}

impl MapRenderer {
    pub fn new(style: MapStyle) -> Self {
        MapRenderer { style }
    }

    /// Renders the map onto the surface.
    ///
    /// The whole surface is redrawn. Without a user position only the
    /// background, the grid, and a placeholder message are drawn, even if
    /// there are facilities.
    pub fn render(
        &self,
        surface: &mut Surface,
        user: Option<Coordinate>,
        facilities: &[RankedFacility],
    ) {
        let scene = self.compose(
            surface.width(), surface.height(), user, facilities
        );
        let mut canvas = surface.canvas();
        scene.paint(&mut canvas, &self.style);
    }

    /// Arranges the shapes for a surface of the given logical size.
    pub fn compose(
        &self,
        width: f64,
        height: f64,
        user: Option<Coordinate>,
        facilities: &[RankedFacility],
    ) -> Scene {
        let mut shapes = vec![Shape::Background, Shape::Grid];

        let located = user.and_then(|user| {
            compute_bounds(
                Some(user), facilities.iter().map(RankedFacility::coordinate)
            ).map(|bounds| (user, bounds))
        });
        let (user, bounds) = match located {
            Some(located) => located,
            None => {
                tracing::debug!(
                    facilities = facilities.len(),
                    "no user location, skipping facilities"
                );
                shapes.push(Shape::Placeholder {
                    at: Point::new(width / 2., height / 2.)
                });
                return Scene {
                    mode: Mode::NoLocation,
                    width, height,
                    bounds: None,
                    shapes,
                }
            }
        };

        let projection = Projection::new(bounds, width, height);
        let user_at = projection.project(user);
        shapes.push(Shape::UserMarker { at: user_at });
        for item in facilities {
            let at = projection.project(item.coordinate());
            shapes.push(Shape::Connector {
                from: user_at, to: at, category: item.category()
            });
            shapes.push(Shape::FacilityMarker {
                at, category: item.category(), distance: item.distance()
            });
        }
        shapes.push(Shape::Legend { origin: self.style.legend_origin() });

        tracing::debug!(
            facilities = facilities.len(), ?bounds, "composed located map"
        );
        Scene {
            mode: Mode::Located,
            width, height,
            bounds: Some(bounds),
            shapes,
        }
    }
}


//------------ Mode ----------------------------------------------------------

/// What a render pass shows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// There is no user position. Only a placeholder is shown.
    NoLocation,

    /// The user and all facilities are shown.
    Located,
}


//------------ Scene ---------------------------------------------------------

/// The shapes of one render pass in drawing order.
#[derive(Clone, Debug)]
pub struct Scene {
    mode: Mode,
    width: f64,
    height: f64,
    bounds: Option<GeoBounds>,
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the geographic region shown if there is one.
    pub fn bounds(&self) -> Option<GeoBounds> {
        self.bounds
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Paints all shapes onto the canvas.
    pub fn paint(&self, canvas: &mut Canvas, style: &MapStyle) {
        for shape in &self.shapes {
            tracing::trace!(?shape, "painting");
            shape.paint(canvas, style, self.width, self.height);
        }
    }
}


//------------ Shape ---------------------------------------------------------

/// A single item drawn onto the map.
///
/// Positions are in logical surface units.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Clears the surface and fills it with the background color.
    Background,

    /// The orientation grid covering the whole surface.
    Grid,

    /// The message shown when there is no user position.
    Placeholder { at: Point },

    /// The user’s position with its pulse ring and label.
    UserMarker { at: Point },

    /// The dashed line from the user to a facility.
    Connector { from: Point, to: Point, category: Category },

    /// A facility with its glyph and distance label.
    FacilityMarker { at: Point, category: Category, distance: f64 },

    /// The list of category colors.
    Legend { origin: Point },
}

impl Shape {
    fn paint(
        &self, canvas: &mut Canvas, style: &MapStyle, width: f64, height: f64
    ) {
        match *self {
            Shape::Background => paint_background(canvas, style, width, height),
            Shape::Grid => paint_grid(canvas, style, width, height),
            Shape::Placeholder { at } => {
                let mut group = canvas.start();
                let label = group.prepare_label(
                    &style.placeholder_text,
                    &style.font(style.placeholder_size, FontWeight::Normal)
                );
                group.apply(style.placeholder);
                group.fill_label(&label, at, TextAlign::Center);
            }
            Shape::UserMarker { at } => paint_user(canvas, style, at),
            Shape::Connector { from, to, category } => {
                let mut group = canvas.start();
                group.apply(
                    style.category_color(category)
                        .with_alpha(style.connector_alpha)
                );
                group.apply(LineWidth(style.connector_width));
                group.apply(DashPattern::new(style.connector_dash, 0.));
                group.new_path();
                group.move_to(from);
                group.line_to(to);
                group.stroke();
            }
            Shape::FacilityMarker { at, category, distance } => {
                paint_facility(canvas, style, at, category, distance)
            }
            Shape::Legend { origin } => paint_legend(canvas, style, origin),
        }
    }
}

fn paint_background(
    canvas: &mut Canvas, style: &MapStyle, width: f64, height: f64
) {
    {
        let mut group = canvas.start();
        group.apply(Operator::Clear);
        group.paint();
    }
    let mut group = canvas.start();
    group.apply(style.background);
    group.rect(Rect::new(0., 0., width, height));
    group.fill();
}

fn paint_grid(
    canvas: &mut Canvas, style: &MapStyle, width: f64, height: f64
) {
    if !(style.grid_spacing > 0.) {
        return
    }
    let mut group = canvas.start();
    group.apply(style.grid);
    group.apply(LineWidth(style.grid_width));
    group.new_path();
    let mut x = 0.;
    while x < width {
        group.move_to(Point::new(x, 0.));
        group.line_to(Point::new(x, height));
        x += style.grid_spacing;
    }
    let mut y = 0.;
    while y < height {
        group.move_to(Point::new(0., y));
        group.line_to(Point::new(width, y));
        y += style.grid_spacing;
    }
    group.stroke();
}

fn paint_user(canvas: &mut Canvas, style: &MapStyle, at: Point) {
    let mut group = canvas.start();
    group.apply(style.user);
    group.circle(at, style.user_radius);
    group.fill();

    group.apply(LineWidth(style.pulse_width));
    group.circle(at, style.pulse_radius);
    group.stroke();

    let label = group.prepare_label(
        &style.user_label, &style.font(style.user_label_size, FontWeight::Bold)
    );
    group.apply(style.text);
    group.fill_label(
        &label,
        Point::new(at.x, at.y - style.user_label_offset),
        TextAlign::Center
    );
}

fn paint_facility(
    canvas: &mut Canvas,
    style: &MapStyle,
    at: Point,
    category: Category,
    distance: f64,
) {
    let mut group = canvas.start();
    group.apply(style.category_color(category));
    group.circle(at, style.facility_radius);
    group.fill();

    let glyph = group.prepare_label(
        category.glyph().encode_utf8(&mut [0; 4]),
        &style.font(style.glyph_size, FontWeight::Bold)
    );
    group.apply(style.glyph);
    group.fill_label(
        &glyph, Point::new(at.x, at.y + style.glyph_offset), TextAlign::Center
    );

    let label = group.prepare_label(
        &format_distance(distance),
        &style.font(style.distance_size, FontWeight::Normal)
    );
    group.apply(style.text);
    group.fill_label(
        &label,
        Point::new(at.x, at.y + style.distance_offset),
        TextAlign::Center
    );
}

fn paint_legend(canvas: &mut Canvas, style: &MapStyle, origin: Point) {
    let mut group = canvas.start();
    let font = style.font(style.legend_size, FontWeight::Normal);
    let title = group.prepare_label(&style.legend_title, &font);
    group.apply(style.text);
    group.fill_label(&title, origin, TextAlign::Left);

    for (row, category) in (1u32..).zip(Category::ALL) {
        let y = origin.y + style.legend_row * f64::from(row);
        group.apply(style.category_color(category));
        group.circle(Point::new(origin.x + 10., y), style.legend_swatch_radius);
        group.fill();

        let label = group.prepare_label(category.label(), &font);
        group.apply(style.text);
        group.fill_label(
            &label, Point::new(origin.x + 20., y + 4.), TextAlign::Left
        );
    }
}

/// Formats a distance in miles with one decimal.
pub fn format_distance(distance: f64) -> String {
    format!("{:.1}mi", distance)
}


//============ Testing =======================================================

#[cfg(test)]
mod test {
    use crate::facility::{rank, sample_facilities};
    use super::*;

    #[test]
    fn no_location_has_no_facilities() {
        let ranked = rank(Coordinate::new(40.75, -73.98), &sample_facilities());
        let scene = MapRenderer::default().compose(400., 300., None, &ranked);
        assert_eq!(scene.mode(), Mode::NoLocation);
        assert_eq!(scene.bounds(), None);
        assert_eq!(
            scene.shapes(),
            [
                Shape::Background,
                Shape::Grid,
                Shape::Placeholder { at: Point::new(200., 150.) },
            ]
        );
    }

    #[test]
    fn located_layer_order() {
        let user = Coordinate::new(40.7589, -73.9851);
        let ranked = rank(user, &sample_facilities());
        let scene = MapRenderer::default().compose(400., 300., Some(user), &ranked);
        assert_eq!(scene.mode(), Mode::Located);

        let shapes = scene.shapes();
        assert_eq!(shapes.len(), 3 + 2 * ranked.len() + 1);
        assert_eq!(shapes[0], Shape::Background);
        assert_eq!(shapes[1], Shape::Grid);
        let user_at = match shapes[2] {
            Shape::UserMarker { at } => at,
            ref other => panic!("expected user marker, got {:?}", other),
        };
        for (pair, item) in shapes[3..shapes.len() - 1].chunks(2).zip(&ranked) {
            match pair {
                [
                    Shape::Connector { from, to, category },
                    Shape::FacilityMarker { at, category: marker, distance },
                ] => {
                    assert_eq!(*from, user_at);
                    assert_eq!(to, at);
                    assert_eq!(*category, item.category());
                    assert_eq!(*marker, item.category());
                    assert_eq!(*distance, item.distance());
                }
                other => panic!("unexpected shapes {:?}", other),
            }
        }
        assert_eq!(
            shapes.last(), Some(&Shape::Legend { origin: Point::new(10., 20.) })
        );
    }

    #[test]
    fn user_alone_is_centered() {
        let user = Coordinate::new(10., 10.);
        let scene = MapRenderer::default().compose(100., 80., Some(user), &[]);
        assert_eq!(scene.mode(), Mode::Located);
        match scene.shapes()[2] {
            Shape::UserMarker { at } => {
                assert!((at.x - 50.).abs() < 1e-9);
                assert!((at.y - 40.).abs() < 1e-9);
            }
            ref other => panic!("expected user marker, got {:?}", other),
        }
        assert_eq!(scene.shapes().len(), 4);
    }

    #[test]
    fn distance_format() {
        assert_eq!(format_distance(0.4288), "0.4mi");
        assert_eq!(format_distance(12.), "12.0mi");
    }
}
