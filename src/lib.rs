//! Finding and drawing nearby emergency facilities.
//!
//! Given the user’s position and a list of facilities, [`facility::rank`]
//! orders the facilities by great-circle distance and
//! [`map::MapRenderer`] draws the user, the facilities, and a legend onto
//! a small map [`Surface`][render::Surface].
//!
//! ```no_run
//! use emergency_map::facility::{rank, sample_facilities};
//! use emergency_map::map::MapRenderer;
//! use emergency_map::render::Surface;
//! use emergency_map::world::Coordinate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let user = Coordinate::checked(40.7589, -73.9851)?;
//! let ranked = rank(user, &sample_facilities());
//! let mut surface = Surface::new(640., 320., 2.)?;
//! MapRenderer::default().render(&mut surface, Some(user), &ranked);
//! surface.write_png(&mut std::fs::File::create("map.png")?)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod facility;
pub mod geomath;
pub mod location;
pub mod map;
pub mod projection;
pub mod render;
pub mod style;
pub mod world;
