//! Shapes used by chart renderers (markers, item outlines, hot-spot regions)
use crate::{Error, Line, Point, Rect, RectAnchor, Scalar, Transform};

/// Ellipse defined by its center, radii and rotation angle (radians)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "EllipseFields")
)]
pub struct Ellipse {
    center: Point,
    radii: Point,
    angle: Scalar,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct EllipseFields {
    center: Point,
    radii: Point,
    angle: Scalar,
}

#[cfg(feature = "serde")]
impl From<EllipseFields> for Ellipse {
    fn from(fields: EllipseFields) -> Self {
        let Point([rx, ry]) = fields.radii;
        Self {
            angle: fields.angle,
            ..Ellipse::new(fields.center, rx, ry)
        }
    }
}

impl Ellipse {
    pub fn new(center: impl Into<Point>, rx: Scalar, ry: Scalar) -> Self {
        Self {
            center: center.into(),
            radii: Point::new(rx.abs(), ry.abs()),
            angle: 0.0,
        }
    }

    /// Ellipse inscribed into the rectangle
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.center(), rect.width() / 2.0, rect.height() / 2.0)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// `x` and `y` radii before rotation
    pub fn radii(&self) -> Point {
        self.radii
    }

    pub fn angle(&self) -> Scalar {
        self.angle
    }

    /// Axis aligned bounding rectangle
    pub fn bounds(&self) -> Rect {
        let Point([rx, ry]) = self.radii;
        let (sin, cos) = self.angle.sin_cos();
        let hw = ((rx * cos).powi(2) + (ry * sin).powi(2)).sqrt();
        let hh = ((rx * sin).powi(2) + (ry * cos).powi(2)).sqrt();
        Rect::new(self.center.x() - hw, self.center.y() - hh, 2.0 * hw, 2.0 * hh)
    }

    fn translate(&self, dx: Scalar, dy: Scalar) -> Self {
        Self {
            center: self.center + Point::new(dx, dy),
            ..*self
        }
    }

    fn rotate(&self, tr: Transform, angle: Scalar) -> Self {
        Self {
            center: tr.apply(self.center),
            angle: self.angle + angle,
            ..*self
        }
    }
}

/// Closed polygon with at least three vertices
///
/// Serialized as a list of vertices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Polygon {
    points: Vec<Point>,
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = Error;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Polygon::new(points)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Result<Self, Error> {
        if points.len() < 3 {
            return Err(Error::InvalidArgument {
                name: "points",
                reason: format!("polygon must have at least three points, got {}", points.len()),
            });
        }
        if !points.iter().all(|p| p.is_finite()) {
            return Err(Error::InvalidArgument {
                name: "points",
                reason: "polygon coordinates must be finite".to_string(),
            });
        }
        Ok(Self { points })
    }

    /// Vertices of the polygon
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Vertices as a flat `[x0, y0, x1, y1, ...]` list
    pub fn coords(&self) -> &[Scalar] {
        bytemuck::cast_slice(&self.points)
    }

    pub fn bounds(&self) -> Rect {
        let first = self.points[0];
        let (min, max) = self
            .points
            .iter()
            .fold((first, first), |(min, max), p| {
                (
                    Point::new(min.x().min(p.x()), min.y().min(p.y())),
                    Point::new(max.x().max(p.x()), max.y().max(p.y())),
                )
            });
        Rect::from_points(min, max)
    }

    pub fn transform(&self, tr: Transform) -> Self {
        Self {
            points: self.points.iter().map(|p| tr.apply(*p)).collect(),
        }
    }
}

/// Shape drawn or hit-tested by chart renderers
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Line(Line),
    Rect(Rect),
    Ellipse(Ellipse),
    Polygon(Polygon),
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Shape::Ellipse(ellipse)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl Shape {
    /// Polygon from separate lists of `x` and `y` coordinates
    pub fn polygon(xs: &[Scalar], ys: &[Scalar]) -> Result<Self, Error> {
        if xs.len() != ys.len() {
            return Err(Error::InvalidArgument {
                name: "ys",
                reason: format!(
                    "coordinate lists differ in length: {} != {}",
                    xs.len(),
                    ys.len()
                ),
            });
        }
        let points = xs
            .iter()
            .zip(ys)
            .map(|(x, y)| Point::new(*x, *y))
            .collect();
        Ok(Shape::Polygon(Polygon::new(points)?))
    }

    /// Diamond with half height (and half width) `s`, centered at the origin
    pub fn diamond(s: Scalar) -> Self {
        Self::from_points(&[(0.0, -s), (s, 0.0), (0.0, s), (-s, 0.0)])
    }

    /// Triangle pointing upwards with half height `s`, centered at the origin
    pub fn up_triangle(s: Scalar) -> Self {
        Self::from_points(&[(0.0, -s), (s, s), (-s, s)])
    }

    /// Triangle pointing downwards with half height `s`, centered at the origin
    pub fn down_triangle(s: Scalar) -> Self {
        Self::from_points(&[(0.0, s), (s, -s), (-s, -s)])
    }

    /// Diagonal cross with arm length `l` and thickness `t`
    pub fn diagonal_cross(l: Scalar, t: Scalar) -> Self {
        let st = t * std::f64::consts::SQRT_2;
        Self::from_points(&[
            (-l - t, -l + t),
            (-l + t, -l - t),
            (0.0, -st),
            (l - t, -l - t),
            (l + t, -l + t),
            (st, 0.0),
            (l + t, l - t),
            (l - t, l + t),
            (0.0, st),
            (-l + t, l + t),
            (-l - t, l - t),
            (-st, 0.0),
        ])
    }

    /// Upright cross with arm length `l` and thickness `t`
    pub fn regular_cross(l: Scalar, t: Scalar) -> Self {
        Self::from_points(&[
            (-l, t),
            (-t, t),
            (-t, l),
            (t, l),
            (t, t),
            (l, t),
            (l, -t),
            (t, -t),
            (t, -l),
            (-t, -l),
            (-t, -t),
            (-l, -t),
        ])
    }

    /// Region of total thickness `width` surrounding the line
    ///
    /// Typically used as a clickable area of a thin line. The empty line
    /// produces an empty line shape.
    pub fn line_region(line: Line, width: Scalar) -> Self {
        if line.is_empty() {
            return Shape::Line(line);
        }
        let half = width / 2.0;
        let offset = match line.direction().normal().normalize() {
            Some(normal) => half * normal,
            None => Point::new(half, 0.0),
        };
        let [p0, p1] = line.points();
        Shape::Polygon(Polygon {
            points: vec![p0 - offset, p0 + offset, p1 + offset, p1 - offset],
        })
    }

    fn from_points(points: &[(Scalar, Scalar)]) -> Self {
        Shape::Polygon(Polygon {
            points: points.iter().copied().map(Point::from).collect(),
        })
    }

    /// Bounding rectangle, `None` only for the empty line
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Shape::Line(line) => line.bounds(),
            Shape::Rect(rect) => Some(*rect),
            Shape::Ellipse(ellipse) => Some(ellipse.bounds()),
            Shape::Polygon(polygon) => Some(polygon.bounds()),
        }
    }

    /// Same shape moved by `(dx, dy)`
    pub fn translate(&self, dx: Scalar, dy: Scalar) -> Self {
        match self {
            Shape::Line(line) => Shape::Line(line.transform(Transform::new_translate(dx, dy))),
            Shape::Rect(rect) => Shape::Rect(Rect::new(
                rect.x() + dx,
                rect.y() + dy,
                rect.width(),
                rect.height(),
            )),
            Shape::Ellipse(ellipse) => Shape::Ellipse(ellipse.translate(dx, dy)),
            Shape::Polygon(polygon) => {
                Shape::Polygon(polygon.transform(Transform::new_translate(dx, dy)))
            }
        }
    }

    /// Move the shape so that the `anchor` point of its bounds lands on `(x, y)`
    pub fn translate_to_anchor(&self, anchor: RectAnchor, x: Scalar, y: Scalar) -> Self {
        match self.bounds() {
            None => self.clone(),
            Some(bounds) => {
                let point = bounds.anchor_point(anchor);
                self.translate(x - point.x(), y - point.y())
            }
        }
    }

    /// Rotate the shape by `angle` (radians) around point `(x, y)`
    ///
    /// Rotated rectangle is no longer axis aligned and becomes a polygon.
    pub fn rotate(&self, angle: Scalar, x: Scalar, y: Scalar) -> Self {
        let tr = Transform::new_rotate_around(angle, (x, y));
        match self {
            Shape::Line(line) => Shape::Line(line.transform(tr)),
            Shape::Rect(rect) => {
                let corners = [
                    rect.anchor_point(RectAnchor::TopLeft),
                    rect.anchor_point(RectAnchor::TopRight),
                    rect.anchor_point(RectAnchor::BottomRight),
                    rect.anchor_point(RectAnchor::BottomLeft),
                ];
                Shape::Polygon(Polygon {
                    points: corners.iter().map(|p| tr.apply(*p)).collect(),
                })
            }
            Shape::Ellipse(ellipse) => Shape::Ellipse(ellipse.rotate(tr, angle)),
            Shape::Polygon(polygon) => Shape::Polygon(polygon.transform(tr)),
        }
    }
}
