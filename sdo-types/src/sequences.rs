//! Sub-range extraction, reversal and orientation of coordinate sequences.

use std::borrow::Cow;

use crate::cartesian::{area_signed, Point2, Rect, Winding};
use crate::error::SdoTypesError;
use crate::sequence::{CoordinateAccess, CoordinateSequenceFactory};

/// Copies coordinates `[from, to)` into a new sequence created by the factory.
///
/// If the range covers the whole sequence and the factory does not impose a different shape,
/// the sequence is returned as is.
pub fn subrange<'a, F: CoordinateSequenceFactory>(
    factory: &F,
    seq: &'a F::Sequence,
    from: usize,
    to: usize,
) -> Result<Cow<'a, F::Sequence>, SdoTypesError> {
    if from > to || to > seq.len() {
        return Err(SdoTypesError::OutOfBounds {
            index: from.max(to),
            size: seq.len(),
        });
    }

    let dimension = factory.dimension().unwrap_or(seq.dimension());
    let attribute_count = factory.attribute_count().unwrap_or(seq.attribute_count());

    if from == 0
        && to == seq.len()
        && dimension == seq.dimension()
        && attribute_count == seq.attribute_count()
    {
        return Ok(Cow::Borrowed(seq));
    }

    let ordinates = columns(dimension, from..to, |i, o| seq.ordinate(i, o));
    let attributes = columns(attribute_count, from..to, |i, a| seq.attribute(i, a));

    let mut result = factory.create(to - from, dimension, attribute_count);
    result.set_coordinate_arrays(&ordinates, &attributes)?;

    Ok(Cow::Owned(result))
}

fn columns(
    count: usize,
    range: std::ops::Range<usize>,
    get: impl Fn(usize, usize) -> f64,
) -> Vec<Vec<f64>> {
    (0..count)
        .map(|c| range.clone().map(|i| get(i, c)).collect())
        .collect()
}

/// Returns the sequence with its coordinates in the opposite order.
pub fn reverse<S: CoordinateAccess + Clone>(seq: &S) -> Result<S, SdoTypesError> {
    let mut result = seq.clone();
    if seq.len() < 2 {
        return Ok(result);
    }

    let mut ordinates = seq.to_ordinate_arrays();
    let mut attributes = seq.to_attribute_arrays();
    ordinates.iter_mut().for_each(|c| c.reverse());
    attributes.iter_mut().for_each(|c| c.reverse());

    result.set_coordinate_arrays(&ordinates, &attributes)?;
    Ok(result)
}

/// Appends the first coordinate to the end of the sequence, unless it is already there.
pub fn ensure_closed<'a, F: CoordinateSequenceFactory>(
    factory: &F,
    seq: &'a F::Sequence,
) -> Result<Cow<'a, F::Sequence>, SdoTypesError> {
    if is_closed(seq) || seq.is_empty() {
        return Ok(Cow::Borrowed(seq));
    }

    let len = seq.len();
    let dimension = factory.dimension().unwrap_or(seq.dimension());
    let attribute_count = factory.attribute_count().unwrap_or(seq.attribute_count());

    let wrap = |i: usize| if i == len { 0 } else { i };
    let ordinates = columns(dimension, 0..len + 1, |i, o| seq.ordinate(wrap(i), o));
    let attributes = columns(attribute_count, 0..len + 1, |i, a| {
        seq.attribute(wrap(i), a)
    });

    let mut result = factory.create(len + 1, dimension, attribute_count);
    result.set_coordinate_arrays(&ordinates, &attributes)?;

    Ok(Cow::Owned(result))
}

/// Returns true if the first and the last coordinates have the same `x` and `y`.
pub fn is_closed(seq: &impl CoordinateAccess) -> bool {
    match seq.len() {
        0 => false,
        len => seq.point2(0) == seq.point2(len - 1),
    }
}

/// `x` and `y` of every coordinate.
pub fn points2(seq: &impl CoordinateAccess) -> Vec<Point2> {
    (0..seq.len()).map(|i| seq.point2(i)).collect()
}

/// Winding of the ring formed by the sequence.
pub fn winding(seq: &impl CoordinateAccess) -> Winding {
    Winding::from_area(area_signed(points2(seq)))
}

/// Returns true if the ring formed by the sequence is counterclockwise.
pub fn is_ccw(seq: &impl CoordinateAccess) -> bool {
    winding(seq) == Winding::CounterClockwise
}

/// The ring in counterclockwise order, borrowed if it already is.
pub fn counter_clockwise<S: CoordinateAccess + Clone>(
    seq: &S,
) -> Result<Cow<'_, S>, SdoTypesError> {
    oriented(seq, Winding::CounterClockwise)
}

/// The ring in clockwise order, borrowed if it already is.
pub fn clockwise<S: CoordinateAccess + Clone>(seq: &S) -> Result<Cow<'_, S>, SdoTypesError> {
    oriented(seq, Winding::Clockwise)
}

fn oriented<S: CoordinateAccess + Clone>(
    seq: &S,
    target: Winding,
) -> Result<Cow<'_, S>, SdoTypesError> {
    if winding(seq) == target {
        Ok(Cow::Borrowed(seq))
    } else {
        Ok(Cow::Owned(reverse(seq)?))
    }
}

/// Returns the rectangle traced by the sequence if it is a closed 5-point axis-aligned box.
pub fn as_rectangle(seq: &impl CoordinateAccess) -> Option<Rect> {
    if seq.len() != 5 {
        return None;
    }

    Rect::from_ring(&points2(seq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{PackedCoordinates, PackedCoordinatesFactory, PointFactory};
    use nalgebra::Point3;

    fn square() -> PackedCoordinates {
        PackedCoordinates::xym(&[
            (0.0, 0.0, 1.0),
            (4.0, 0.0, 2.0),
            (4.0, 4.0, 3.0),
            (0.0, 4.0, 4.0),
            (0.0, 0.0, 5.0),
        ])
    }

    #[test]
    fn whole_range_is_borrowed() {
        let seq = square();
        let factory = PackedCoordinatesFactory::new();
        assert!(matches!(
            subrange(&factory, &seq, 0, 5).unwrap(),
            Cow::Borrowed(_)
        ));

        let part = subrange(&factory, &seq, 1, 3).unwrap();
        assert_eq!(
            *part,
            PackedCoordinates::xym(&[(4.0, 0.0, 2.0), (4.0, 4.0, 3.0)])
        );

        assert!(subrange(&factory, &seq, 3, 6).is_err());
        assert!(subrange(&factory, &seq, 3, 2).is_err());
    }

    #[test]
    fn subrange_with_fixed_shape() {
        let seq = square();
        let factory = PackedCoordinatesFactory::fixed(3, 0);
        let copy = subrange(&factory, &seq, 0, 5).unwrap();
        assert!(matches!(copy, Cow::Owned(_)));
        assert_eq!(copy.dimension(), 3);
        assert_eq!(copy.ordinate(2, 1), 4.0);
        assert!(copy.ordinate(2, 2).is_nan());
    }

    #[test]
    fn subrange_of_points() {
        let seq = vec![
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(4.0, 5.0, 6.0),
            Point3::new(7.0, 8.0, 9.0),
        ];
        let part = subrange(&PointFactory, &seq, 1, 3).unwrap();
        assert_eq!(*part, vec![Point3::new(4.0, 5.0, 6.0), Point3::new(7.0, 8.0, 9.0)]);
        assert_eq!(part.dimension(), 3);
    }

    #[test]
    fn reverse_keeps_attributes() {
        let reversed = reverse(&square()).unwrap();
        assert_eq!(reversed.ordinate(1, 0), 0.0);
        assert_eq!(reversed.ordinate(1, 1), 4.0);
        assert_eq!(reversed.attribute(0, 0), 5.0);
        assert_eq!(reversed.attribute(4, 0), 1.0);
        assert_eq!(reverse(&reversed).unwrap(), square());
    }

    #[test]
    fn closing() {
        let factory = PackedCoordinatesFactory::new();
        let open = PackedCoordinates::xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let closed = ensure_closed(&factory, &open).unwrap();
        assert_eq!(closed.len(), 4);
        assert!(is_closed(closed.as_ref()));

        let seq = square();
        assert!(matches!(
            ensure_closed(&factory, &seq).unwrap(),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn orientation() {
        let ccw = square();
        assert!(is_ccw(&ccw));
        assert!(matches!(counter_clockwise(&ccw).unwrap(), Cow::Borrowed(_)));

        let cw = clockwise(&ccw).unwrap();
        assert!(!is_ccw(cw.as_ref()));
        assert_eq!(winding(cw.as_ref()), Winding::Clockwise);
        assert_eq!(cw.ordinate(1, 0), 0.0);
        assert_eq!(cw.ordinate(1, 1), 4.0);
    }

    #[test]
    fn rectangle_detection() {
        assert_eq!(as_rectangle(&square()), Some(Rect::new(0.0, 0.0, 4.0, 4.0)));

        let triangle = PackedCoordinates::xy(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (0.0, 0.0)]);
        assert_eq!(as_rectangle(&triangle), None);
    }
}
