//! Rendering maps onto real surfaces.

use emergency_map::facility::{rank, Category, Facility, RankedFacility};
use emergency_map::map::{MapRenderer, Mode, Shape};
use emergency_map::render::Surface;
use emergency_map::world::Coordinate;

const USER: Coordinate = Coordinate::new(40.7589, -73.9851);

fn facilities() -> Vec<Facility> {
    vec![
        Facility::new(
            "a", "A", Category::Hospital, Coordinate::new(40.7614, -73.9776),
            "+1-555-0101", "1 First St",
        ),
        Facility::new(
            "b", "B", Category::Ambulance, Coordinate::new(40.7505, -73.9934),
            "+1-555-0102", "2 Second St",
        ),
    ]
}

fn render(
    surface: &mut Surface, user: Option<Coordinate>, ranked: &[RankedFacility]
) -> Vec<u8> {
    MapRenderer::default().render(surface, user, ranked);
    surface.pixels().unwrap()
}

#[test]
fn end_to_end() {
    let ranked = rank(USER, &facilities());
    let ids: Vec<_> = ranked.iter().map(|r| r.facility().id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert!((ranked[0].distance() - 0.4289).abs() < 0.05);
    assert!((ranked[1].distance() - 0.7250).abs() < 0.05);

    let renderer = MapRenderer::default();
    let scene = renderer.compose(640., 320., Some(USER), &ranked);
    assert_eq!(scene.mode(), Mode::Located);
    let count = |pred: fn(&Shape) -> bool| {
        scene.shapes().iter().filter(|shape| pred(shape)).count()
    };
    assert_eq!(count(|s| matches!(s, Shape::UserMarker { .. })), 1);
    assert_eq!(count(|s| matches!(s, Shape::Connector { .. })), 2);
    assert_eq!(count(|s| matches!(s, Shape::FacilityMarker { .. })), 2);
    assert_eq!(count(|s| matches!(s, Shape::Legend { .. })), 1);

    let mut surface = Surface::new(640., 320., 1.).unwrap();
    let pixels = render(&mut surface, Some(USER), &ranked);
    assert_eq!(pixels.len(), surface.stride() as usize * 320);
    // Everything is covered by the opaque background.
    assert!(pixels.chunks(4).all(|px| {
        u32::from_ne_bytes([px[0], px[1], px[2], px[3]]) >> 24 == 0xff
    }));
}

#[test]
fn identical_input_identical_pixels() {
    let ranked = rank(USER, &facilities());
    let mut first = Surface::new(300., 200., 1.).unwrap();
    let mut second = Surface::new(300., 200., 1.).unwrap();
    let once = render(&mut first, Some(USER), &ranked);
    assert_eq!(render(&mut second, Some(USER), &ranked), once);
    assert_eq!(render(&mut first, Some(USER), &ranked), once);
}

#[test]
fn pixel_ratio_does_not_accumulate() {
    let ranked = rank(USER, &facilities());
    let mut reused = Surface::new(200., 100., 2.).unwrap();
    assert_eq!(reused.raster_size(), (400, 200));
    let once = render(&mut reused, Some(USER), &ranked);
    let twice = render(&mut reused, Some(USER), &ranked);
    assert_eq!(once, twice);

    let mut fresh = Surface::new(200., 100., 2.).unwrap();
    assert_eq!(render(&mut fresh, Some(USER), &ranked), once);
}

#[test]
fn resized_surface_matches_fresh_one() {
    let ranked = rank(USER, &facilities());
    let mut surface = Surface::new(100., 100., 1.).unwrap();
    render(&mut surface, Some(USER), &ranked);
    surface.resize(250., 150., 1.5).unwrap();
    let resized = render(&mut surface, Some(USER), &ranked);

    let mut fresh = Surface::new(250., 150., 1.5).unwrap();
    assert_eq!(render(&mut fresh, Some(USER), &ranked), resized);
}

#[test]
fn no_location_ignores_facilities() {
    let ranked = rank(USER, &facilities());
    let mut with = Surface::new(320., 240., 1.).unwrap();
    let mut without = Surface::new(320., 240., 1.).unwrap();
    assert_eq!(
        render(&mut with, None, &ranked),
        render(&mut without, None, &[]),
    );

    let scene = MapRenderer::default().compose(320., 240., None, &ranked);
    assert_eq!(scene.mode(), Mode::NoLocation);
    assert!(!scene.shapes().iter().any(|shape| {
        matches!(
            shape,
            Shape::FacilityMarker { .. } | Shape::Connector { .. }
                | Shape::UserMarker { .. } | Shape::Legend { .. }
        )
    }));
}

#[test]
fn previous_render_is_cleared() {
    let ranked = rank(USER, &facilities());
    let mut surface = Surface::new(320., 240., 1.).unwrap();
    render(&mut surface, Some(USER), &ranked);
    let after = render(&mut surface, None, &[]);

    let mut fresh = Surface::new(320., 240., 1.).unwrap();
    assert_eq!(render(&mut fresh, None, &[]), after);
}

#[test]
fn user_without_facilities() {
    let mut surface = Surface::new(320., 240., 1.).unwrap();
    let pixels = render(&mut surface, Some(USER), &[]);

    let mut placeholder = Surface::new(320., 240., 1.).unwrap();
    assert_ne!(render(&mut placeholder, None, &[]), pixels);
}

#[test]
fn write_png() {
    let ranked = rank(USER, &facilities());
    let mut surface = Surface::new(64., 48., 1.).unwrap();
    render(&mut surface, Some(USER), &ranked);
    let mut png = Vec::new();
    surface.write_png(&mut png).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}
