//! Cohen-Sutherland line clipping
//!
//! Region codes relative to a clipping rectangle (`y` grows downwards):
//! ```text
//!        |        |
//!  0011  |  0010  | 0110
//!        |        |
//! -------+--------+-------- min_y
//!        |        |
//!  0001  |  0000  | 0100
//!        |        |
//! -------+--------+-------- max_y
//!        |        |
//!  1001  |  1000  | 1100
//!        |        |
//!      min_x    max_x
//! ```
use crate::{Error, Line, Point, Rect, Scalar};
use std::{
    fmt,
    ops::{BitAnd, BitOr, BitOrAssign},
};

/// Maximum number of endpoint corrections before a line is rejected
pub const MAX_CLIP_STEPS: usize = 8;

/// Set of sides of a rectangle a point lies outside of
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Outcode = Outcode(0);
    pub const LEFT: Outcode = Outcode(1);
    pub const TOP: Outcode = Outcode(2);
    pub const RIGHT: Outcode = Outcode(4);
    pub const BOTTOM: Outcode = Outcode(8);

    /// Raw bit mask
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// No flags are set
    #[inline]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// All flags of `other` are set in self
    #[inline]
    pub fn contains(self, other: Outcode) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Outcode {
    type Output = Outcode;

    #[inline]
    fn bitor(self, other: Outcode) -> Self::Output {
        Outcode(self.0 | other.0)
    }
}

impl BitOrAssign for Outcode {
    #[inline]
    fn bitor_assign(&mut self, other: Outcode) {
        self.0 |= other.0
    }
}

impl BitAnd for Outcode {
    type Output = Outcode;

    #[inline]
    fn bitand(self, other: Outcode) -> Self::Output {
        Outcode(self.0 & other.0)
    }
}

impl fmt::Debug for Outcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Outcode({:04b})", self.0)
    }
}

/// Classify point `(x, y)` relative to `rect`
///
/// Points on the boundary are inside. Rectangle without horizontal (vertical)
/// extent excludes every point on both left and right (top and bottom) sides.
pub fn outcode(rect: Rect, x: Scalar, y: Scalar) -> Outcode {
    let mut out = Outcode::INSIDE;
    if rect.width() <= 0.0 {
        out |= Outcode::LEFT | Outcode::RIGHT;
    } else if x < rect.x() {
        out |= Outcode::LEFT;
    } else if x > rect.x() + rect.width() {
        out |= Outcode::RIGHT;
    }
    if rect.height() <= 0.0 {
        out |= Outcode::TOP | Outcode::BOTTOM;
    } else if y < rect.y() {
        out |= Outcode::TOP;
    } else if y > rect.y() + rect.height() {
        out |= Outcode::BOTTOM;
    }
    out
}

/// Move endpoint `p` (with outcode `code`) onto the boundary of `rect`
///
/// `dx` and `dy` are the direction of the whole line. Only one side is handled
/// per call, in order left, right, bottom, top. Returns `None` if none of the
/// sides indicated by `code` can be intersected.
fn clip_endpoint(rect: Rect, code: Outcode, p: Point, dx: Scalar, dy: Scalar) -> Option<Point> {
    let Point([x, y]) = p;
    if code.contains(Outcode::LEFT) && dx != 0.0 {
        let min_x = rect.x();
        Some(Point::new(min_x, y + (min_x - x) * dy / dx))
    } else if code.contains(Outcode::RIGHT) && dx != 0.0 {
        let max_x = rect.x() + rect.width();
        Some(Point::new(max_x, y + (max_x - x) * dy / dx))
    } else if code.contains(Outcode::BOTTOM) && dy != 0.0 {
        let max_y = rect.y() + rect.height();
        Some(Point::new(x + (max_y - y) * dx / dy, max_y))
    } else if code.contains(Outcode::TOP) && dy != 0.0 {
        let min_y = rect.y();
        Some(Point::new(x + (min_y - y) * dx / dy, min_y))
    } else {
        None
    }
}

/// Clip the line to the rectangle
///
/// Returns the part of the line inside of the rectangle (boundary included), or
/// [`Line::EMPTY`] if there is no such part. Coordinates must be finite, use
/// [`try_clip_line`] to validate them.
pub fn clip_line(line: Line, rect: Rect) -> Line {
    if line.is_empty() {
        return line;
    }
    let [mut p1, mut p2] = line.points();
    let mut f1 = outcode(rect, p1.x(), p1.y());
    let mut f2 = outcode(rect, p2.x(), p2.y());

    let mut steps = 0;
    while !(f1 | f2).is_inside() {
        if !(f1 & f2).is_inside() {
            return Line::EMPTY;
        }
        if steps == MAX_CLIP_STEPS {
            tracing::debug!(?line, ?rect, "clipping did not converge");
            return Line::EMPTY;
        }
        steps += 1;

        let Point([dx, dy]) = p2 - p1;
        if !f1.is_inside() {
            let Some(p) = clip_endpoint(rect, f1, p1, dx, dy) else {
                tracing::debug!(?line, ?rect, code = ?f1, "no boundary to clip start to");
                return Line::EMPTY;
            };
            p1 = p;
            f1 = outcode(rect, p1.x(), p1.y());
        } else {
            let Some(p) = clip_endpoint(rect, f2, p2, dx, dy) else {
                tracing::debug!(?line, ?rect, code = ?f2, "no boundary to clip end to");
                return Line::EMPTY;
            };
            p2 = p;
            f2 = outcode(rect, p2.x(), p2.y());
        }
    }
    Line::new(p1, p2)
}

/// Same as [`clip_line`] but validates that all coordinates are finite
pub fn try_clip_line(line: Line, rect: Rect) -> Result<Line, Error> {
    line.check_finite()?;
    Rect::try_new(rect.x(), rect.y(), rect.width(), rect.height())?;
    Ok(clip_line(line, rect))
}

/// Extend the line at both ends by a fraction of its length, see [`Line::extend`]
pub fn extend_line(line: Line, start_percent: Scalar, end_percent: Scalar) -> Line {
    line.extend(start_percent, end_percent)
}
