use lyon_extra::parser::{ParseError, ParserOptions, Source};
use lyon_path::builder::BorderRadii;
use lyon_path::geom::{Box2D, Point};
use lyon_path::{Path, Winding};
use serde::{Deserialize, Serialize};

pub fn parse_svg_path(path: &str) -> Result<Path, ParseError> {
    let mut source = Source::new(path.chars());
    let mut parser = lyon_extra::parser::PathParser::new();
    let opts = ParserOptions::DEFAULT;
    let mut builder = lyon_path::Path::builder();
    parser.parse(&opts, &mut source, &mut builder)?;
    Ok(builder.build())
}

/// Axis aligned drawing bounds, origin at the top left corner
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn to_box2d(&self) -> Box2D<f32> {
        let x0 = f32::min(self.x, self.x + self.width);
        let x1 = f32::max(self.x, self.x + self.width);
        let y0 = f32::min(self.y, self.y + self.height);
        let y1 = f32::max(self.y, self.y + self.height);
        Box2D::new(Point::new(x0, y0), Point::new(x1, y1))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerRadii {
    pub upper_left: f32,
    pub upper_right: f32,
    pub lower_right: f32,
    pub lower_left: f32,
}

impl CornerRadii {
    pub fn uniform(radius: f32) -> Self {
        Self {
            upper_left: radius,
            upper_right: radius,
            lower_right: radius,
            lower_left: radius,
        }
    }

    fn is_zero(&self) -> bool {
        self.upper_left <= 0.0
            && self.upper_right <= 0.0
            && self.lower_right <= 0.0
            && self.lower_left <= 0.0
    }
}

/// Closed outline of a rectangle with an individual radius per corner
pub fn rounded_rect_path(bounds: &Bounds, radii: &CornerRadii) -> Path {
    let mut path_builder = Path::builder();
    let rect = bounds.to_box2d();
    if radii.is_zero() {
        path_builder.add_rectangle(&rect, Winding::Positive);
    } else {
        path_builder.add_rounded_rectangle(
            &rect,
            &BorderRadii {
                top_left: radii.upper_left.max(0.0),
                top_right: radii.upper_right.max(0.0),
                bottom_left: radii.lower_left.max(0.0),
                bottom_right: radii.lower_right.max(0.0),
            },
            Winding::Positive,
        );
    }
    path_builder.build()
}
