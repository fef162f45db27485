//! Line segment value type
use crate::{
    Error, Point, Rect, Scalar, Transform, scalar_fmt,
    utils::{check_finite, parse_scalars},
};
use std::{fmt, str::FromStr};

/// Line segment from `start` to `end`
///
/// [`Line::EMPTY`] marks the absence of a line (for example a line clipped away
/// completely). It is distinct from a zero-length line located at the origin.
/// Serialized as a pair of points, or `null` for the empty line.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Option<[Point; 2]>", into = "Option<[Point; 2]>")
)]
pub struct Line {
    points: [Point; 2],
    empty: bool,
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.empty {
            write!(f, "Line empty")
        } else {
            let [p0, p1] = self.points;
            write!(f, "Line {:?} {:?}", p0, p1)
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.empty {
            return write!(f, "empty");
        }
        let [p0, p1] = self.points;
        write!(f, "{},", p0)?;
        scalar_fmt(f, p1.x())?;
        write!(f, ",")?;
        scalar_fmt(f, p1.y())
    }
}

impl Line {
    /// Sentinel value representing no line at all
    pub const EMPTY: Line = Line {
        points: [Point::new(0.0, 0.0), Point::new(0.0, 0.0)],
        empty: true,
    };

    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        Self {
            points: [p0.into(), p1.into()],
            empty: false,
        }
    }

    /// Same as [`Line::new`] but rejects non finite coordinates
    pub fn try_new(p0: impl Into<Point>, p1: impl Into<Point>) -> Result<Self, Error> {
        let line = Self::new(p0, p1);
        line.check_finite()?;
        Ok(line)
    }

    pub(crate) fn check_finite(&self) -> Result<(), Error> {
        let [Point([x1, y1]), Point([x2, y2])] = self.points;
        check_finite("line", &[x1, y1, x2, y2])
    }

    /// Whether this is the [`Line::EMPTY`] sentinel
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Start and end points coincide (the sentinel is not a zero-length line)
    pub fn is_zero_length(&self) -> bool {
        !self.empty && self.points[0] == self.points[1]
    }

    /// `Some(self)` unless this is the empty sentinel
    pub fn non_empty(self) -> Option<Line> {
        if self.empty { None } else { Some(self) }
    }

    /// Start and end points of the line
    #[inline]
    pub fn points(&self) -> [Point; 2] {
        self.points
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.points[1]
    }

    #[inline]
    pub fn x1(&self) -> Scalar {
        self.points[0].x()
    }

    #[inline]
    pub fn y1(&self) -> Scalar {
        self.points[0].y()
    }

    #[inline]
    pub fn x2(&self) -> Scalar {
        self.points[1].x()
    }

    #[inline]
    pub fn y2(&self) -> Scalar {
        self.points[1].y()
    }

    /// Length of the line
    pub fn length(&self) -> Scalar {
        let [p0, p1] = self.points;
        p0.dist(p1)
    }

    /// Direction vector associated with the line segment
    pub fn direction(&self) -> Point {
        self.end() - self.start()
    }

    /// Point on the line at parameter `t`, `0.0` is the start and `1.0` the end
    pub fn at(&self, t: Scalar) -> Point {
        let [p0, p1] = self.points;
        (1.0 - t) * p0 + t * p1
    }

    /// Same line directed from end to start
    pub fn reverse(&self) -> Self {
        let [p0, p1] = self.points;
        Self {
            points: [p1, p0],
            empty: self.empty,
        }
    }

    /// Apply affine transformation to both ends of the line
    pub fn transform(&self, tr: Transform) -> Self {
        if self.empty {
            return *self;
        }
        let [p0, p1] = self.points;
        Self::new(tr.apply(p0), tr.apply(p1))
    }

    /// Bounding rectangle of the line, `None` for the empty line
    pub fn bounds(&self) -> Option<Rect> {
        if self.empty {
            None
        } else {
            Some(Rect::from_points(self.start(), self.end()))
        }
    }

    /// Extend the line at both ends by a fraction of its length
    ///
    /// `start_percent` and `end_percent` are fractions of the original segment,
    /// negative values shrink the line from the corresponding end. Shrinking
    /// past the midpoint reverses the orientation.
    pub fn extend(&self, start_percent: Scalar, end_percent: Scalar) -> Self {
        if self.empty {
            return *self;
        }
        let [p0, p1] = self.points;
        let delta = p1 - p0;
        Self::new(p0 - start_percent * delta, p1 + end_percent * delta)
    }

    /// Clip the line to the rectangle, see [`crate::clip_line`]
    pub fn clip(&self, rect: Rect) -> Self {
        crate::clip_line(*self, rect)
    }
}

impl From<Option<[Point; 2]>> for Line {
    fn from(points: Option<[Point; 2]>) -> Self {
        match points {
            None => Line::EMPTY,
            Some([p0, p1]) => Line::new(p0, p1),
        }
    }
}

impl From<Line> for Option<[Point; 2]> {
    fn from(line: Line) -> Self {
        line.non_empty().map(|line| line.points)
    }
}

impl FromStr for Line {
    type Err = Error;

    /// Parse `x1,y1,x2,y2`
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let [x1, y1, x2, y2] = parse_scalars::<4>(text)?;
        Ok(Line::new((x1, y1), (x2, y2)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PI, assert_approx_eq};

    #[test]
    fn test_empty_sentinel() {
        let zero = Line::new((0.0, 0.0), (0.0, 0.0));
        assert!(Line::EMPTY.is_empty());
        assert!(!zero.is_empty());
        assert!(zero.is_zero_length());
        assert!(!Line::EMPTY.is_zero_length());
        assert_ne!(zero, Line::EMPTY);
        assert_eq!(Line::EMPTY.non_empty(), None);
        assert_eq!(zero.non_empty(), Some(zero));
        assert_eq!(Line::EMPTY.bounds(), None);
        assert_eq!(Line::EMPTY.extend(1.0, 1.0), Line::EMPTY);
        assert_eq!(Line::EMPTY.transform(Transform::new_translate(1.0, 1.0)), Line::EMPTY);
    }

    #[test]
    fn test_try_new() {
        assert!(Line::try_new((0.0, 0.0), (1.0, 1.0)).is_ok());
        match Line::try_new((0.0, Scalar::NAN), (1.0, 1.0)) {
            Err(Error::InvalidArgument { name, .. }) => assert_eq!(name, "line"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_bounds() {
        let line = Line::new((5.0, 1.0), (2.0, 7.0));
        assert_eq!(line.bounds(), Some(Rect::new(2.0, 1.0, 3.0, 6.0)));
        let vertical = Line::new((3.0, 1.0), (3.0, 4.0));
        assert_eq!(vertical.bounds(), Some(Rect::new(3.0, 1.0, 0.0, 3.0)));
    }

    #[test]
    fn test_extend() {
        let line = Line::new((0.0, 0.0), (10.0, 0.0));
        let ext = line.extend(0.1, 0.2);
        assert_approx_eq!(ext.x1(), -1.0, 1e-12);
        assert_approx_eq!(ext.x2(), 12.0, 1e-12);
        assert_eq!(ext.y1(), 0.0);
        assert_eq!(ext.y2(), 0.0);

        // shrinking past the midpoint reverses the line
        let rev = line.extend(-0.75, -0.75);
        assert_approx_eq!(rev.x1(), 7.5, 1e-12);
        assert_approx_eq!(rev.x2(), 2.5, 1e-12);

        let diag = Line::new((1.0, 1.0), (3.0, 5.0)).extend(0.5, 0.0);
        assert_eq!(diag.start(), Point::new(0.0, -1.0));
        assert_eq!(diag.end(), Point::new(3.0, 5.0));
    }

    #[test]
    fn test_at_and_transform() {
        let line = Line::new((0.0, 0.0), (4.0, 2.0));
        assert_eq!(line.at(0.5), Point::new(2.0, 1.0));
        assert_eq!(line.reverse().start(), Point::new(4.0, 2.0));
        assert_eq!(line.direction(), Point::new(4.0, 2.0));

        let rotated = line.transform(Transform::new_rotate_around(PI, (0.0, 0.0)));
        assert_approx_eq!(rotated.x2(), -4.0, 1e-12);
        assert_approx_eq!(rotated.y2(), -2.0, 1e-12);
    }

    #[test]
    fn test_parse_display() -> Result<(), Error> {
        let line: Line = "1,2.5 -3,4".parse()?;
        assert_eq!(line, Line::new((1.0, 2.5), (-3.0, 4.0)));
        assert_eq!(line.to_string(), "1,2.5,-3,4");
        assert_eq!(line.to_string().parse::<Line>()?, line);
        assert_eq!(Line::EMPTY.to_string(), "empty");
        assert_eq!(format!("{:?}", line), "Line 1,2.5 -3,4");

        let line = Line::new((0.1234567, 1e-17), (12345.678, 1e20));
        assert_eq!(line.to_string().parse::<Line>()?, line);
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        let line = Line::new((1.0, 1.0), (2.0, 2.5));
        let value = serde_json::to_value(line)?;
        assert_eq!(value, serde_json::json!([[1.0, 1.0], [2.0, 2.5]]));
        assert_eq!(serde_json::from_value::<Line>(value)?, line);

        assert_eq!(serde_json::to_value(Line::EMPTY)?, serde_json::Value::Null);
        let empty: Line = serde_json::from_str("null")?;
        assert!(empty.is_empty());
        assert_eq!(empty, Line::EMPTY);

        let zero: Line = serde_json::from_str("[[0, 0], [0, 0]]")?;
        assert!(!zero.is_empty());
        assert_ne!(zero, Line::EMPTY);

        // the empty flag is not part of the serialized form
        let forged = r#"{"points": [[1, 1], [2, 2]], "empty": true}"#;
        assert!(serde_json::from_str::<Line>(forged).is_err());
        Ok(())
    }
}
