use std::borrow::Cow;
use kurbo::Point;


//------------ Label ---------------------------------------------------------

/// A line of text prepared for rendering onto a canvas.
#[derive(Debug)]
pub struct Label {
    layout: pango::Layout,
}

impl Label {
    pub(super) fn prepare(
        pango: &pango::Context, text: &str, font: &Font
    ) -> Self {
        let layout = pango::Layout::new(pango);
        layout.set_font_description(Some(&font.description));
        layout.set_text(text);
        Label { layout }
    }

    /// Returns the logical width of the text.
    pub fn width(&self) -> f64 {
        from_pango(self.layout.size().0)
    }

    /// Returns the distance from the top of the text to its baseline.
    pub fn baseline(&self) -> f64 {
        from_pango(self.layout.baseline())
    }

    /// Fills the text with its baseline at `at`.
    pub(super) fn fill(
        &self, cairo: &cairo::Context, at: Point, align: TextAlign
    ) {
        let x = match align {
            TextAlign::Left => at.x,
            TextAlign::Center => at.x - self.width() / 2.,
        };
        cairo.new_path();
        cairo.move_to(x, at.y - self.baseline());
        pangocairo::show_layout(cairo, &self.layout);
    }
}

fn from_pango(value: i32) -> f64 {
    f64::from(value) / f64::from(pango::SCALE)
}


//------------ TextAlign -----------------------------------------------------

/// Where the anchor point of a label lies horizontally.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextAlign {
    /// The text starts at the anchor.
    #[default]
    Left,

    /// The text is centered on the anchor.
    Center,
}


//------------ Font ----------------------------------------------------------

/// Description of a font.
#[derive(Clone, Debug)]
pub struct Font {
    description: pango::FontDescription,
}


//------------ FontBuilder ---------------------------------------------------

/// Building a font description.
#[derive(Clone, Debug, Default)]
pub struct FontBuilder {
    family: Option<FontFamily>,
    size: Option<f64>,
    weight: Option<FontWeight>,
}

impl FontBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn family(mut self, family: FontFamily) -> Self {
        self.family = Some(family);
        self
    }

    /// Sets the size of the font in logical units.
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn finalize(self) -> Font {
        let mut description = pango::FontDescription::new();
        if let Some(family) = self.family.as_ref() {
            description.set_family(family.family.as_ref());
        }
        description.set_absolute_size(
            self.size.unwrap_or(12.) * f64::from(pango::SCALE)
        );
        description.set_weight(self.weight.unwrap_or_default().into_pango());
        Font { description }
    }
}


//------------ FontFamily ----------------------------------------------------

/// The font family of a font face.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FontFamily {
    family: Cow<'static, str>,
}

impl FontFamily {
    pub fn from_string(name: String) -> Self {
        FontFamily {
            family: Cow::Owned(name)
        }
    }
}


//------------ FontWeight ----------------------------------------------------

/// The weight of the font face.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    fn into_pango(self) -> pango::Weight {
        match self {
            Self::Normal => pango::Weight::Normal,
            Self::Bold => pango::Weight::Bold,
        }
    }
}
