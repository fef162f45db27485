use crate::{Error, clamp, utils::check_finite, utils::parse_scalars};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Add, Div, Mul, Sub},
    str::FromStr,
};

pub type Scalar = f64;
pub const EPSILON: f64 = f64::EPSILON;
pub const PI: f64 = std::f64::consts::PI;

/// Largest magnitude below which every integer is exactly representable
const EXACT_INT_LIMIT: Scalar = 9_007_199_254_740_992.0;

/// Format floats in a compact way suitable for human consumption
///
/// Integral values are printed without fraction, everything else in the
/// shortest form which parses back to the same value.
pub fn scalar_fmt(f: &mut fmt::Formatter<'_>, value: Scalar) -> fmt::Result {
    if value.abs() < EXACT_INT_LIMIT && value == value.trunc() {
        write!(f, "{}", value as i64)
    } else {
        let mut buffer = [0u8; lexical_core::BUFFER_SIZE];
        let bytes = lexical_core::write(value, &mut buffer);
        f.write_str(std::str::from_utf8(bytes).map_err(|_| fmt::Error)?)
    }
}

/// Value representing a 2D point or vector.
#[derive(Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Point(pub [Scalar; 2]);

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Point([x, y]) = self;
        scalar_fmt(f, *x)?;
        write!(f, ",")?;
        scalar_fmt(f, *y)?;
        Ok(())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Point {
    #[inline]
    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self([x, y])
    }

    /// Get `x` component of the point
    #[inline]
    pub fn x(self) -> Scalar {
        self.0[0]
    }

    /// Get `y` compenent of the point
    #[inline]
    pub fn y(self) -> Scalar {
        self.0[1]
    }

    /// Get length of the vector (distance from the origin)
    pub fn length(self) -> Scalar {
        let Self([x, y]) = self;
        x.hypot(y)
    }

    /// Distance between two points
    pub fn dist(self, other: Self) -> Scalar {
        (self - other).length()
    }

    /// Dot product between two vectors
    pub fn dot(self, other: Self) -> Scalar {
        let Self([x0, y0]) = self;
        let Self([x1, y1]) = other;
        x0 * x1 + y0 * y1
    }

    /// Get vector normal (not a unit sized)
    pub fn normal(self) -> Point {
        let Self([x, y]) = self;
        Self([y, -x])
    }

    /// Convert vector to a unit size vector, if length is not zero
    pub fn normalize(self) -> Option<Point> {
        let Self([x, y]) = self;
        let length = self.length();
        if length < EPSILON {
            None
        } else {
            Some(Self([x / length, y / length]))
        }
    }

    /// Both coordinates are neither infinite nor NaN
    pub fn is_finite(self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

impl From<(Scalar, Scalar)> for Point {
    #[inline]
    fn from(xy: (Scalar, Scalar)) -> Self {
        Self([xy.0, xy.1])
    }
}

impl From<[Scalar; 2]> for Point {
    #[inline]
    fn from(xy: [Scalar; 2]) -> Self {
        Self(xy)
    }
}

impl FromStr for Point {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_scalars::<2>(text).map(Point)
    }
}

impl Mul<Point> for Scalar {
    type Output = Point;

    #[inline]
    fn mul(self, other: Point) -> Self::Output {
        let Point([x, y]) = other;
        Point([self * x, self * y])
    }
}

impl Div<Scalar> for Point {
    type Output = Point;

    #[inline]
    fn div(self, rhs: Scalar) -> Self::Output {
        let Point([x, y]) = self;
        Point([x / rhs, y / rhs])
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Self::Output {
        let Point([x0, y0]) = self;
        let Point([x1, y1]) = other;
        Point([x0 + x1, y0 + y1])
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Self::Output {
        let Point([x0, y0]) = self;
        let Point([x1, y1]) = other;
        Point([x0 - x1, y0 - y1])
    }
}

/// 2D affine transformation
///
/// Stored as an array [m00, m01, m02, m10, m11, m12] but semantically corresponds to
/// a matrix:
/// ┌             ┐
/// │ m00 m01 m02 │
/// │ m10 m11 m12 │
/// │   0   0   1 │
/// └             ┘
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform([Scalar; 6]);

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
    }

    pub const fn new_translate(tx: Scalar, ty: Scalar) -> Self {
        Self([1.0, 0.0, tx, 0.0, 1.0, ty])
    }

    /// Rotation by angle `a` (radians) around point `p`
    pub fn new_rotate_around(a: Scalar, p: impl Into<Point>) -> Self {
        Self::identity().rotate_around(a, p)
    }

    /// Apply this transformation to a point
    pub fn apply(&self, point: Point) -> Point {
        let Self([m00, m01, m02, m10, m11, m12]) = self;
        let Point([x, y]) = point;
        Point([x * m00 + y * m01 + m02, x * m10 + y * m11 + m12])
    }

    /// Find the inverse transformation
    pub fn invert(&self) -> Option<Self> {
        // inv([[M, v], [0, 1]]) = [[inv(M), - inv(M) * v], [0, 1]]
        let Self([m00, m01, m02, m10, m11, m12]) = self;
        let det = m00 * m11 - m10 * m01;
        if det.abs() <= EPSILON {
            return None;
        }
        let o00 = m11 / det;
        let o01 = -m01 / det;
        let o10 = -m10 / det;
        let o11 = m00 / det;
        let o02 = -o00 * m02 - o01 * m12;
        let o12 = -o10 * m02 - o11 * m12;
        Some(Self([o00, o01, o02, o10, o11, o12]))
    }

    /// Apply translation by `[tx, ty]` before self
    pub fn translate(&self, tx: Scalar, ty: Scalar) -> Self {
        self.matmul(Self::new_translate(tx, ty))
    }

    /// Apply scale transformatoin by `[sx, sy]` before self
    pub fn scale(&self, sx: Scalar, sy: Scalar) -> Self {
        self.matmul(Self([sx, 0.0, 0.0, 0.0, sy, 0.0]))
    }

    /// Apply rotation by `a` angle around the origin before self
    pub fn rotate(&self, a: Scalar) -> Self {
        let (sin, cos) = a.sin_cos();
        self.matmul(Self([cos, -sin, 0.0, sin, cos, 0.0]))
    }

    /// Apply rotation around point `p` by angle `a` before self
    pub fn rotate_around(&self, a: Scalar, p: impl Into<Point>) -> Self {
        let p = p.into();
        self.translate(p.x(), p.y())
            .rotate(a)
            .translate(-p.x(), -p.y())
    }

    /// Multiply transformations in matrix form
    pub fn matmul(&self, other: Transform) -> Self {
        let Self([s00, s01, s02, s10, s11, s12]) = self;
        let Self([o00, o01, o02, o10, o11, o12]) = other;

        // s00, s01, s02 | o00, o01, o02
        // s10, s11, s12 | o10, o11, o12
        // 0  , 0  , 1   | 0  , 0  , 1
        Self([
            s00 * o00 + s01 * o10,
            s00 * o01 + s01 * o11,
            s00 * o02 + s01 * o12 + s02,
            s10 * o00 + s11 * o10,
            s10 * o01 + s11 * o11,
            s10 * o02 + s11 * o12 + s12,
        ])
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, other: Transform) -> Self::Output {
        self.matmul(other)
    }
}

/// Named reference point of a rectangle
///
/// `y` axis is directed downwards, so `Top` corresponds to the minimal `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RectAnchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

/// Axis aligned rectangle
///
/// Maximum coordinates are always derived as `x + width` and `y + height`, the
/// same expressions are used by clipping, so the boundary a point is moved to
/// is exactly the boundary it is classified against.
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RectFields")
)]
pub struct Rect {
    x: Scalar,
    y: Scalar,
    width: Scalar,
    height: Scalar,
}

/// Serialized form of [`Rect`], deserialization goes through [`Rect::new`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RectFields {
    x: Scalar,
    y: Scalar,
    width: Scalar,
    height: Scalar,
}

#[cfg(feature = "serde")]
impl From<RectFields> for Rect {
    fn from(fields: RectFields) -> Self {
        Rect::new(fields.x, fields.y, fields.width, fields.height)
    }
}

impl Rect {
    /// Construct rectangle from its origin and size
    ///
    /// Negative extent moves the origin, so resulting size is never negative.
    pub fn new(x: Scalar, y: Scalar, width: Scalar, height: Scalar) -> Self {
        let (x, width) = if width < 0.0 {
            (x + width, -width)
        } else {
            (x, width)
        };
        let (y, height) = if height < 0.0 {
            (y + height, -height)
        } else {
            (y, height)
        };
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Same as [`Rect::new`] but rejects non finite values
    pub fn try_new(x: Scalar, y: Scalar, width: Scalar, height: Scalar) -> Result<Self, Error> {
        check_finite("rect", &[x, y, width, height])?;
        Ok(Self::new(x, y, width, height))
    }

    /// Construct smallest rectangle which includes points `p0` and `p1`
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        let Point([x0, y0]) = p0.into();
        let Point([x1, y1]) = p1.into();
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    #[inline]
    pub fn x(&self) -> Scalar {
        self.x
    }

    #[inline]
    pub fn y(&self) -> Scalar {
        self.y
    }

    #[inline]
    pub fn width(&self) -> Scalar {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Scalar {
        self.height
    }

    #[inline]
    pub fn min_x(&self) -> Scalar {
        self.x
    }

    #[inline]
    pub fn min_y(&self) -> Scalar {
        self.y
    }

    #[inline]
    pub fn max_x(&self) -> Scalar {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> Scalar {
        self.y + self.height
    }

    /// Point with minmum values of x and y coordianetes
    pub fn min(&self) -> Point {
        Point::new(self.min_x(), self.min_y())
    }

    /// Point with maximum values of x and y coordianetes
    pub fn max(&self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    /// Horizontal center of the rectangle
    pub fn center_x(&self) -> Scalar {
        (self.min_x() + self.max_x()) / 2.0
    }

    /// Vertical center of the rectangle
    pub fn center_y(&self) -> Scalar {
        (self.min_y() + self.max_y()) / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Rectangle has no interior (zero width or height)
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Determine if the point is inside of the rectangle or on its boundary
    pub fn contains(&self, point: Point) -> bool {
        let Point([x, y]) = point;
        self.min_x() <= x && x <= self.max_x() && self.min_y() <= y && y <= self.max_y()
    }

    /// Closest point to `point` which lies within the rectangle
    pub fn clamp_point(&self, point: Point) -> Point {
        Point::new(
            clamp(point.x(), self.min_x(), self.max_x()),
            clamp(point.y(), self.min_y(), self.max_y()),
        )
    }

    /// Point corresponding to the anchor
    pub fn anchor_point(&self, anchor: RectAnchor) -> Point {
        use RectAnchor::*;
        let x = match anchor {
            TopLeft | Left | BottomLeft => self.min_x(),
            Top | Center | Bottom => self.center_x(),
            TopRight | Right | BottomRight => self.max_x(),
        };
        let y = match anchor {
            TopLeft | Top | TopRight => self.min_y(),
            Left | Center | Right => self.center_y(),
            BottomLeft | Bottom | BottomRight => self.max_y(),
        };
        Point::new(x, y)
    }

    /// Smallest rectangle which contains both rectangles
    ///
    /// Degenerate rectangles still contribute their point or segment.
    pub fn union(&self, other: Rect) -> Self {
        let (x, width) = span_union(self.x, self.width, other.x, other.width);
        let (y, height) = span_union(self.y, self.height, other.y, other.height);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Find rectangle of the intersection of two rectangles
    pub fn intersect(&self, other: Rect) -> Option<Rect> {
        let (x_min, x_max) =
            range_intersect(self.min_x(), self.max_x(), other.min_x(), other.max_x())?;
        let (y_min, y_max) =
            range_intersect(self.min_y(), self.max_y(), other.min_y(), other.max_y())?;
        Some(Rect::from_points((x_min, y_min), (x_max, y_max)))
    }
}

/// Union of two spans given as `(origin, extent)`
///
/// If one span already covers the other it is returned as is. Spans covering
/// each other (same origin, extents absorbed by rounding) keep the larger extent.
fn span_union(x0: Scalar, w0: Scalar, x1: Scalar, w1: Scalar) -> (Scalar, Scalar) {
    let (max0, max1) = (x0 + w0, x1 + w1);
    let covers0 = x0 <= x1 && max1 <= max0;
    let covers1 = x1 <= x0 && max0 <= max1;
    match (covers0, covers1) {
        (true, true) => (x0, w0.max(w1)),
        (true, false) => (x0, w0),
        (false, true) => (x1, w1),
        (false, false) => {
            let min = x0.min(x1);
            (min, max0.max(max1) - min)
        }
    }
}

/// Find intersection of two ranges
fn range_intersect(
    r0_min: Scalar,
    r0_max: Scalar,
    r1_min: Scalar,
    r1_max: Scalar,
) -> Option<(Scalar, Scalar)> {
    if r0_min > r1_max || r1_min > r0_max {
        None
    } else {
        Some((r0_min.max(r1_min), r0_max.min(r1_max)))
    }
}

/// Smallest rectangle containing both `r0` and `r1`
pub fn union(r0: Rect, r1: Rect) -> Rect {
    r0.union(r1)
}

/// Horizontal center of the rectangle
pub fn center_x(rect: Rect) -> Scalar {
    rect.center_x()
}

/// Vertical center of the rectangle
pub fn center_y(rect: Rect) -> Scalar {
    rect.center_y()
}

impl FromStr for Rect {
    type Err = Error;

    /// Parse `x,y,width,height`
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let [x, y, width, height] = parse_scalars::<4>(text)?;
        Ok(Rect::new(x, y, width, height))
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect x=")?;
        scalar_fmt(f, self.x())?;
        write!(f, ", y=")?;
        scalar_fmt(f, self.y())?;
        write!(f, ", w=")?;
        scalar_fmt(f, self.width())?;
        write!(f, ", h=")?;
        scalar_fmt(f, self.height())
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        scalar_fmt(f, self.x())?;
        write!(f, ",")?;
        scalar_fmt(f, self.y())?;
        write!(f, ",")?;
        scalar_fmt(f, self.width())?;
        write!(f, ",")?;
        scalar_fmt(f, self.height())
    }
}
