//! The visual parameters of the map.

use kurbo::Point;
use crate::facility::Category;
use crate::render::{Color, Font, FontBuilder, FontFamily, FontWeight};


//------------ MapStyle ------------------------------------------------------

/// Everything that determines how the map looks.
///
/// All lengths are in logical units. The default reproduces the standard
/// look of the map. With the `serde` feature enabled, a style can be
/// loaded from a file where every missing field takes its default value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct MapStyle {
    /// The font family used for all text.
    pub font_family: String,

    pub background: Color,
    pub grid: Color,

    /// The distance between grid lines.
    ///
    /// A value that isn’t positive disables the grid.
    pub grid_spacing: f64,
    pub grid_width: f64,

    /// The color of regular text.
    pub text: Color,

    pub placeholder: Color,
    pub placeholder_text: String,
    pub placeholder_size: f64,

    pub user: Color,
    pub user_radius: f64,
    pub pulse_radius: f64,
    pub pulse_width: f64,
    pub user_label: String,
    pub user_label_size: f64,

    /// How far above the user position the label’s baseline sits.
    pub user_label_offset: f64,

    pub hospital: Color,
    pub ambulance: Color,
    pub blood_bank: Color,

    /// The opacity of connector lines between user and facilities.
    pub connector_alpha: f64,
    pub connector_width: f64,

    /// Dash and gap length of connector lines.
    pub connector_dash: [f64; 2],

    pub facility_radius: f64,
    pub glyph: Color,
    pub glyph_size: f64,
    pub glyph_offset: f64,
    pub distance_size: f64,
    pub distance_offset: f64,

    /// The position of the legend title’s baseline.
    pub legend_origin: [f64; 2],
    pub legend_title: String,
    pub legend_size: f64,
    pub legend_row: f64,
    pub legend_swatch_radius: f64,
}

impl MapStyle {
    /// Returns the marker color for a facility category.
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Hospital => self.hospital,
            Category::Ambulance => self.ambulance,
            Category::BloodBank => self.blood_bank,
        }
    }

    pub fn legend_origin(&self) -> Point {
        Point::new(self.legend_origin[0], self.legend_origin[1])
    }

    /// Returns the font of the given size in the style’s family.
    pub fn font(&self, size: f64, weight: FontWeight) -> Font {
        FontBuilder::new()
            .family(FontFamily::from_string(self.font_family.clone()))
            .size(size)
            .weight(weight)
            .finalize()
    }
}

impl Default for MapStyle {
    fn default() -> Self {
        MapStyle {
            font_family: "sans-serif".into(),
            background: Color::rgb8(0xf8, 0xfa, 0xfc),
            grid: Color::rgb8(0xe2, 0xe8, 0xf0),
            grid_spacing: 20.,
            grid_width: 1.,
            text: Color::rgb8(0x1e, 0x29, 0x3b),
            placeholder: Color::rgb8(0x64, 0x74, 0x8b),
            placeholder_text: "Enable location to see map".into(),
            placeholder_size: 16.,
            user: Color::rgb8(0x3b, 0x82, 0xf6),
            user_radius: 8.,
            pulse_radius: 15.,
            pulse_width: 2.,
            user_label: "You".into(),
            user_label_size: 12.,
            user_label_offset: 20.,
            hospital: Color::rgb8(0xef, 0x44, 0x44),
            ambulance: Color::rgb8(0xf5, 0x9e, 0x0b),
            blood_bank: Color::rgb8(0xdc, 0x26, 0x26),
            connector_alpha: f64::from(0x40u8) / 255.,
            connector_width: 2.,
            connector_dash: [5., 5.],
            facility_radius: 6.,
            glyph: Color::WHITE,
            glyph_size: 8.,
            glyph_offset: 3.,
            distance_size: 10.,
            distance_offset: 20.,
            legend_origin: [10., 20.],
            legend_title: "Legend:".into(),
            legend_size: 12.,
            legend_row: 20.,
            legend_swatch_radius: 4.,
        }
    }
}


//============ Testing =======================================================
