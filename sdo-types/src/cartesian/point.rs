use nalgebra::Scalar;
use num_traits::Num;

/// Cartesian point, `f64` unless stated otherwise.
pub type Point2<N = f64> = nalgebra::Point2<N>;

/// A point with `x` and `y` cartesian coordinates.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: Num + Copy + PartialOrd + Scalar;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Exact equality of both coordinates.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}

impl<N: Num + Copy + PartialOrd + Scalar> CartesianPoint2d for Point2<N> {
    type Num = N;

    fn x(&self) -> N {
        self.x
    }

    fn y(&self) -> N {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scalar() {
        let a: Point2 = Point2::new(1.0, 2.0);
        let b = Point2::<f64>::new(1.0, 2.0);
        assert!(a.equal(&b));
        assert!(!a.equal(&Point2::new(1.0, 3.0)));
        assert_eq!((a.x(), a.y()), (1.0, 2.0));
    }
}
