//! Linear gradients and their mapping onto the bounds of chart items
use crate::{EPSILON, Point, RGBA, Rect, Scalar, Shape};
use std::cmp::Ordering;

/// Gradient spread logic for the parameter smaller than 0 and greater than 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradSpread {
    /// Use the same colors as the edge of the gradient
    #[default]
    Pad,
    /// Repeat gradient
    Repeat,
    /// Repeat gradient but alternate reflected and non reflectet versions
    Reflect,
}

impl GradSpread {
    /// Map gradient parameter value to the range of [0, 1]
    pub fn at(&self, t: Scalar) -> Scalar {
        match self {
            GradSpread::Pad => t,
            GradSpread::Repeat => t.rem_euclid(1.0),
            GradSpread::Reflect => ((t + 1.0).rem_euclid(2.0) - 1.0).abs(),
        }
    }
}

/// Specifies color at a particular parmeter offset of the gradient
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradStop {
    pub position: Scalar,
    pub color: RGBA,
}

impl GradStop {
    pub fn new(position: Scalar, color: RGBA) -> Self {
        Self { position, color }
    }
}

/// List of all `GradStop` in the gradient
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradStops {
    stops: Vec<GradStop>,
}

impl GradStops {
    pub fn new(mut stops: Vec<GradStop>) -> Self {
        stops.sort_by(|s0, s1| {
            s0.position
                .partial_cmp(&s1.position)
                .unwrap_or(Ordering::Greater)
        });
        if stops.is_empty() {
            stops.push(GradStop {
                position: 0.0,
                color: RGBA::BLACK,
            });
        }
        Self { stops }
    }

    /// Stops sorted by position
    pub fn stops(&self) -> &[GradStop] {
        &self.stops
    }

    /// Color at parameter value `t`
    pub fn at(&self, t: Scalar) -> RGBA {
        let index = self.stops.binary_search_by(|stop| {
            if stop.position < t {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });
        let index = match index {
            Ok(index) => index,
            Err(index) => index,
        };
        let size = self.stops.len();
        if index == 0 {
            self.stops[index].color
        } else if index == size {
            self.stops[size - 1].color
        } else {
            let p0 = &self.stops[index - 1];
            let p1 = &self.stops[index];
            let ratio = (t - p0.position) / (p1.position - p0.position);
            p0.color.lerp(p1.color, ratio)
        }
    }
}

impl From<Vec<GradStop>> for GradStops {
    fn from(stops: Vec<GradStop>) -> Self {
        Self::new(stops)
    }
}

/// Linear gradient from `start` to `end` in user space coordinates
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearGradient {
    stops: GradStops,
    spread: GradSpread,
    start: Point,
    end: Point,
}

impl LinearGradient {
    pub fn new(
        stops: impl Into<GradStops>,
        spread: GradSpread,
        start: impl Into<Point>,
        end: impl Into<Point>,
    ) -> Self {
        Self {
            stops: stops.into(),
            spread,
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn stops(&self) -> &GradStops {
        &self.stops
    }

    pub fn spread(&self) -> GradSpread {
        self.spread
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Gradient parameter of the point, projection onto `start -> end`
    ///
    /// Gradient with coinciding ends evaluates to `0.0` everywhere.
    pub fn offset(&self, point: Point) -> Scalar {
        // t = (point - start).dot(end - start) / |end - start| ^ 2
        let dir = self.end - self.start;
        let length2 = dir.dot(dir);
        if length2 < EPSILON {
            return 0.0;
        }
        (point - self.start).dot(dir) / length2
    }

    /// Color of the gradient at the point
    pub fn at(&self, point: Point) -> RGBA {
        self.stops.at(self.spread.at(self.offset(point)))
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    #[cfg(feature = "serde")]
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// How a gradient is laid over the bounds of the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradientTransformType {
    /// From top edge to bottom edge
    #[default]
    Vertical,
    /// From left edge to right edge
    Horizontal,
    /// From center to the right edge, repeated
    CenterHorizontal,
    /// From top edge to the center, repeated
    CenterVertical,
}

/// Fits gradients to the bounds of the item being painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientTransformer {
    ty: GradientTransformType,
}

impl GradientTransformer {
    pub fn new(ty: GradientTransformType) -> Self {
        Self { ty }
    }

    pub fn ty(&self) -> GradientTransformType {
        self.ty
    }

    /// Gradient with the same stops spanning `bounds`
    pub fn transform(&self, gradient: &LinearGradient, bounds: Rect) -> LinearGradient {
        use GradientTransformType::*;
        let (cx, cy) = (bounds.center_x(), bounds.center_y());
        let (start, end, spread) = match self.ty {
            Vertical => (
                Point::new(cx, bounds.min_y()),
                Point::new(cx, bounds.max_y()),
                GradSpread::Repeat,
            ),
            Horizontal => (
                Point::new(bounds.min_x(), cy),
                Point::new(bounds.max_x(), cy),
                GradSpread::Pad,
            ),
            CenterHorizontal => (
                Point::new(cx, cy),
                Point::new(bounds.max_x(), cy),
                GradSpread::Repeat,
            ),
            CenterVertical => (
                Point::new(cx, bounds.min_y()),
                Point::new(cx, cy),
                GradSpread::Repeat,
            ),
        };
        LinearGradient {
            stops: gradient.stops.clone(),
            spread,
            start,
            end,
        }
    }

    /// Gradient spanning bounds of the shape, unchanged if the shape is empty
    pub fn transform_shape(&self, gradient: &LinearGradient, shape: &Shape) -> LinearGradient {
        match shape.bounds() {
            Some(bounds) => self.transform(gradient, bounds),
            None => gradient.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Line, assert_approx_eq};

    fn black_to_white() -> LinearGradient {
        LinearGradient::new(
            vec![
                GradStop::new(1.0, RGBA::WHITE),
                GradStop::new(0.0, RGBA::BLACK),
            ],
            GradSpread::Pad,
            (0.0, 0.0),
            (1.0, 0.0),
        )
    }

    #[test]
    fn test_spread() {
        use GradSpread::*;
        assert_approx_eq!(Reflect.at(0.3), 0.3, 1e-6);
        assert_approx_eq!(Reflect.at(-0.3), 0.3, 1e-6);
        assert_approx_eq!(Reflect.at(1.3), 0.7, 1e-6);
        assert_approx_eq!(Reflect.at(-1.3), 0.7, 1e-6);

        assert_approx_eq!(Repeat.at(0.3), 0.3);
        assert_approx_eq!(Repeat.at(-0.3), 0.7);
        assert_approx_eq!(Pad.at(-0.3), -0.3);
    }

    #[test]
    fn test_grad_stops() {
        let stops = GradStops::new(vec![
            GradStop::new(1.0, RGBA::new(0, 0, 200, 255)),
            GradStop::new(0.0, RGBA::new(200, 0, 0, 255)),
            GradStop::new(0.5, RGBA::new(0, 200, 0, 255)),
        ]);
        assert_eq!(stops.stops()[0].position, 0.0);
        assert_eq!(stops.at(-1.0), RGBA::new(200, 0, 0, 255));
        assert_eq!(stops.at(0.25), RGBA::new(100, 100, 0, 255));
        assert_eq!(stops.at(0.75), RGBA::new(0, 100, 100, 255));
        assert_eq!(stops.at(2.0), RGBA::new(0, 0, 200, 255));

        let empty = GradStops::new(Vec::new());
        assert_eq!(empty.at(0.5), RGBA::BLACK);
    }

    #[test]
    fn test_transform_types() {
        use GradientTransformType::*;
        let grad = black_to_white();
        let bounds = Rect::new(10.0, 20.0, 100.0, 50.0);
        let cases = [
            (Vertical, (60.0, 20.0), (60.0, 70.0), GradSpread::Repeat),
            (Horizontal, (10.0, 45.0), (110.0, 45.0), GradSpread::Pad),
            (CenterHorizontal, (60.0, 45.0), (110.0, 45.0), GradSpread::Repeat),
            (CenterVertical, (60.0, 20.0), (60.0, 45.0), GradSpread::Repeat),
        ];
        for (ty, start, end, spread) in cases {
            let result = GradientTransformer::new(ty).transform(&grad, bounds);
            assert_eq!(result.start(), Point::from(start), "{:?}", ty);
            assert_eq!(result.end(), Point::from(end), "{:?}", ty);
            assert_eq!(result.spread(), spread, "{:?}", ty);
            assert_eq!(result.stops(), grad.stops());
        }
        assert_eq!(GradientTransformer::default().ty(), Vertical);
    }

    #[test]
    fn test_transformed_colors() {
        let grad = black_to_white();
        let bounds = Rect::new(10.0, 20.0, 100.0, 50.0);

        let horizontal =
            GradientTransformer::new(GradientTransformType::Horizontal).transform(&grad, bounds);
        assert_eq!(horizontal.at(Point::new(10.0, 0.0)), RGBA::BLACK);
        assert_eq!(horizontal.at(Point::new(60.0, 45.0)), RGBA::new(128, 128, 128, 255));
        assert_eq!(horizontal.at(Point::new(0.0, 45.0)), RGBA::BLACK);
        assert_eq!(horizontal.at(Point::new(200.0, 45.0)), RGBA::WHITE);

        let vertical = GradientTransformer::default().transform(&grad, bounds);
        assert_eq!(vertical.at(Point::new(60.0, 82.5)), RGBA::new(64, 64, 64, 255));
    }

    #[test]
    fn test_transform_shape() {
        let grad = black_to_white();
        let transformer = GradientTransformer::new(GradientTransformType::Horizontal);
        let shape = Shape::diamond(2.0);
        let result = transformer.transform_shape(&grad, &shape);
        assert_eq!(result.start(), Point::new(-2.0, 0.0));
        assert_eq!(result.end(), Point::new(2.0, 0.0));

        let empty = Shape::Line(Line::EMPTY);
        assert_eq!(transformer.transform_shape(&grad, &empty), grad);
    }

    #[test]
    fn test_degenerate_bounds() {
        let grad = black_to_white();
        let flat = Rect::new(0.0, 5.0, 10.0, 0.0);
        let result = GradientTransformer::default().transform(&grad, flat);
        assert_eq!(result.start(), result.end());
        assert_eq!(result.offset(Point::new(3.0, 100.0)), 0.0);
        assert_eq!(result.at(Point::new(3.0, 100.0)), RGBA::BLACK);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json() -> Result<(), serde_json::Error> {
        let grad = GradientTransformer::default()
            .transform(&black_to_white(), Rect::new(0.0, 0.0, 4.0, 2.0));
        let value = grad.to_json()?;
        assert_eq!(value["spread"], serde_json::json!("Repeat"));
        assert_eq!(value["start"], serde_json::json!([2.0, 0.0]));
        assert_eq!(value["stops"]["stops"][0]["color"], serde_json::json!("#000000"));
        assert_eq!(LinearGradient::from_json(value)?, grad);
        Ok(())
    }
}
