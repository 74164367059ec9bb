//! Decoding of SDO tuples into geometry trees.

use sdo_types::cartesian::{area_signed, CircularArc, Point2, Rect, Winding};
use sdo_types::sequences;
use sdo_types::{
    CircularString, CompoundCurve, CoordinateAccess, CoordinateSequenceFactory, Curve, Geometry,
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, OrdinateList,
    PackedCoordinatesFactory, Point, Polygon,
};

use crate::config::CodecConfig;
use crate::elem_info::{ElemInfo, ElementType, Interpretation};
use crate::error::SdoError;
use crate::gtype::GeometryTag;
use crate::layout::{OrdinateLayout, Slot};
use crate::sdo::SdoGeometry;

const POINTS: &[i32] = &[1];
const COMPONENTS: &[i32] = &[2];
const RINGS: &[i32] = &[3, 1003, 2003, 5, 1005, 2005, 1006, 1007];
const COLLECTION_MEMBERS: &[i32] = &[1, 2, 4, 3, 1003, 5, 1005, 1006];

/// An element, or `None` if it is not representable, and the index of the triplet after it.
type Decoded<T> = (Option<T>, usize);

/// Decodes SDO tuples into geometries with coordinate sequences produced by the factory.
///
/// The decoder holds only read-only configuration and can be shared between threads.
#[derive(Debug, Clone)]
pub struct SdoDecoder<F = PackedCoordinatesFactory> {
    factory: F,
    config: CodecConfig,
}

impl Default for SdoDecoder {
    fn default() -> Self {
        Self::new(PackedCoordinatesFactory::new())
    }
}

impl<F: CoordinateSequenceFactory> SdoDecoder<F> {
    /// Creates a decoder with default configuration.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            config: CodecConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Configuration of the decoder.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decodes the whole tuple.
    ///
    /// Returns `Ok(None)` if the geometry is valid but cannot be represented by the geometry
    /// model and [`CodecConfig::skip_unrepresentable`] is set.
    pub fn decode(&self, sdo: &SdoGeometry) -> Result<Option<Geometry<F::Sequence>>, SdoError> {
        self.decode_elements(sdo, 0, None)
    }

    /// Decodes the geometry described by the element info starting at triplet `triplet`.
    ///
    /// For multi geometries and collections `count` limits the number of decoded members
    /// (a polygon with its holes or a compound element with its components is one member).
    pub fn decode_elements(
        &self,
        sdo: &SdoGeometry,
        triplet: usize,
        count: Option<usize>,
    ) -> Result<Option<Geometry<F::Sequence>>, SdoError> {
        let gtype = sdo.gtype()?;
        let layout = gtype.layout();

        if sdo.elem_info.is_empty() {
            return match sdo.point {
                Some(point) if gtype.tag() == GeometryTag::Point && gtype.l() == 0 => {
                    log::trace!("decoding point shortcut of gtype {}", sdo.gtype);
                    let point = self.shortcut_point(point, layout, sdo.srid)?;
                    Ok(Some(point.into()))
                }
                _ => Err(SdoError::Malformed {
                    triplet: 0,
                    reason: "geometry has neither element info nor a point".into(),
                }),
            };
        }

        let stride = layout.stride();
        if sdo.ordinates.len() % stride != 0 {
            return Err(SdoError::OrdinateLength {
                len: sdo.ordinates.len(),
                dimension: stride,
            });
        }

        let info = sdo.elem_info()?;
        let elements = Elements {
            factory: &self.factory,
            config: &self.config,
            info,
            coords: self.coordinates(&sdo.ordinates, layout)?,
            srid: sdo.srid,
            stride,
            ordinate_len: sdo.ordinates.len(),
        };

        let mut start = triplet;
        while info.etype(start) == Some(ElementType::Custom.into()) {
            log::warn!("skipping custom element at triplet {start}");
            start += 1;
        }

        if start >= info.len() {
            return Err(SdoError::Malformed {
                triplet: start,
                reason: "no element to decode".into(),
            });
        }

        match gtype.tag() {
            GeometryTag::Point => Ok(elements.point(start)?.0.map(Geometry::from)),
            GeometryTag::Line => Ok(elements.line(start)?.0.map(Geometry::from)),
            GeometryTag::Polygon => Ok(elements.polygon(start)?.0.map(Geometry::from)),
            GeometryTag::MultiPoint => Ok(elements.multi_point(start, count)?.map(Geometry::from)),
            GeometryTag::MultiLine => Ok(elements.multi_line(start, count)?.map(Geometry::from)),
            GeometryTag::MultiPolygon | GeometryTag::Solid => {
                Ok(elements.multi_polygon(start, count)?.map(Geometry::from))
            }
            GeometryTag::Collection => Ok(elements.collection(start, count)?.map(Geometry::from)),
            GeometryTag::Unknown | GeometryTag::MultiSolid => elements.unrepresentable(start),
        }
    }

    fn shortcut_point(
        &self,
        point: [f64; 3],
        layout: OrdinateLayout,
        srid: Option<i32>,
    ) -> Result<Point<F::Sequence>, SdoError> {
        let dimension = self.factory.dimension().unwrap_or(layout.spatial());
        let attribute_count = self.factory.attribute_count().unwrap_or(0);

        let ordinates: Vec<Vec<f64>> = (0..dimension)
            .map(|o| match point.get(o) {
                Some(v) if o < layout.spatial() => vec![*v],
                _ => vec![f64::NAN],
            })
            .collect();
        let attributes = vec![vec![f64::NAN]; attribute_count];

        let mut coords = self.factory.create(1, dimension, attribute_count);
        coords.set_coordinate_arrays(&ordinates, &attributes)?;

        Ok(Point::new(coords, srid))
    }

    /// Reads the whole ordinate array into one sequence, column by column.
    fn coordinates(
        &self,
        ordinates: &[f64],
        layout: OrdinateLayout,
    ) -> Result<F::Sequence, SdoError> {
        let stride = layout.stride();
        let len = ordinates.len() / stride;
        let dimension = self.factory.dimension().unwrap_or(layout.spatial());
        let attribute_count = self
            .factory
            .attribute_count()
            .unwrap_or(layout.attributes());

        let mut ordinate_columns = vec![vec![f64::NAN; len]; dimension];
        let mut attribute_columns = vec![vec![f64::NAN; len]; attribute_count];
        for (slot_index, slot) in layout.slots().enumerate() {
            let column = match slot {
                Slot::Ordinate(o) => ordinate_columns.get_mut(o),
                Slot::Attribute(a) => attribute_columns.get_mut(a),
            };

            if let Some(column) = column {
                *column = OrdinateList::new(ordinates, slot_index, stride)?.to_vec();
            }
        }

        let mut coords = self.factory.create(len, dimension, attribute_count);
        coords.set_coordinate_arrays(&ordinate_columns, &attribute_columns)?;

        Ok(coords)
    }
}

/// Decoding state of a single tuple.
struct Elements<'a, F: CoordinateSequenceFactory> {
    factory: &'a F,
    config: &'a CodecConfig,
    info: ElemInfo<'a>,
    coords: F::Sequence,
    srid: Option<i32>,
    stride: usize,
    ordinate_len: usize,
}

impl<F: CoordinateSequenceFactory> Elements<'_, F> {
    fn missing(triplet: usize) -> SdoError {
        SdoError::Malformed {
            triplet,
            reason: "element info ends before this triplet".into(),
        }
    }

    fn etype(&self, triplet: usize) -> Result<i32, SdoError> {
        self.info
            .etype(triplet)
            .ok_or_else(|| Self::missing(triplet))
    }

    fn interpretation(&self, triplet: usize) -> Result<i32, SdoError> {
        self.info
            .interpretation(triplet)
            .ok_or_else(|| Self::missing(triplet))
    }

    fn expect_etype(&self, triplet: usize, expected: &'static [i32]) -> Result<i32, SdoError> {
        let etype = self.etype(triplet)?;
        if expected.contains(&etype) {
            Ok(etype)
        } else {
            Err(SdoError::UnexpectedEtype {
                triplet,
                etype,
                expected,
            })
        }
    }

    fn unrepresentable<T>(&self, triplet: usize) -> Result<Option<T>, SdoError> {
        let etype = self.info.etype(triplet).unwrap_or_default();
        let interpretation = self.info.interpretation(triplet).unwrap_or_default();

        if self.config.skip_unrepresentable {
            log::warn!(
                "element type {etype} with interpretation {interpretation} at triplet {triplet} is not representable, skipping"
            );
            Ok(None)
        } else {
            Err(SdoError::Unrepresentable {
                triplet,
                etype,
                interpretation,
            })
        }
    }

    /// Index of the first coordinate of the element.
    fn coordinate_index(&self, triplet: usize) -> Result<usize, SdoError> {
        let offset = self
            .info
            .starting_offset(triplet)
            .ok_or_else(|| Self::missing(triplet))?;

        if offset < 1 || offset as usize > self.ordinate_len {
            return Err(SdoError::StartingOffset {
                triplet,
                offset,
                len: self.ordinate_len,
            });
        }

        let index = offset as usize - 1;
        if index % self.stride != 0 {
            return Err(SdoError::Malformed {
                triplet,
                reason: format!(
                    "starting offset {offset} does not point at the first ordinate of a coordinate of {} ordinates",
                    self.stride
                ),
            });
        }

        Ok(index / self.stride)
    }

    /// End of an element: the start of the next triplet or the end of the ordinate array.
    fn element_end(&self, next: usize) -> Result<usize, SdoError> {
        match self.info.starting_offset(next) {
            Some(_) => self.coordinate_index(next),
            None => Ok(self.coords.len()),
        }
    }

    fn simple_range(&self, triplet: usize) -> Result<(usize, usize), SdoError> {
        Ok((
            self.coordinate_index(triplet)?,
            self.element_end(triplet + 1)?,
        ))
    }

    /// Components other than the last one extend to the first coordinate of the next component.
    fn component_range(&self, triplet: usize, last: bool) -> Result<(usize, usize), SdoError> {
        let from = self.coordinate_index(triplet)?;
        let to = if last {
            self.element_end(triplet + 1)?
        } else {
            self.coordinate_index(triplet + 1)? + 1
        };

        Ok((from, to))
    }

    fn slice(&self, triplet: usize, (from, to): (usize, usize)) -> Result<F::Sequence, SdoError> {
        if from >= to {
            return Err(SdoError::Malformed {
                triplet,
                reason: format!("element has no coordinates (range {from}..{to})"),
            });
        }

        Ok(sequences::subrange(self.factory, &self.coords, from, to)?.into_owned())
    }

    /// Sequence of the given points with the shape of `like`. Values other than `x` and `y` are
    /// absent.
    fn points_sequence(
        &self,
        points: &[Point2],
        like: &F::Sequence,
    ) -> Result<F::Sequence, SdoError> {
        let dimension = like.dimension();
        let attribute_count = like.attribute_count();

        let mut ordinates = vec![vec![f64::NAN; points.len()]; dimension];
        if let Some(x) = ordinates.get_mut(0) {
            *x = points.iter().map(|p| p.x).collect();
        }
        if let Some(y) = ordinates.get_mut(1) {
            *y = points.iter().map(|p| p.y).collect();
        }
        let attributes = vec![vec![f64::NAN; points.len()]; attribute_count];

        let mut seq = self
            .factory
            .create(points.len(), dimension, attribute_count);
        seq.set_coordinate_arrays(&ordinates, &attributes)?;

        Ok(seq)
    }

    fn point(&self, triplet: usize) -> Result<Decoded<Point<F::Sequence>>, SdoError> {
        self.expect_etype(triplet, POINTS)?;
        if self.interpretation(triplet)? != 1 {
            return Ok((self.unrepresentable(triplet)?, triplet + 1));
        }

        let from = self.coordinate_index(triplet)?;
        let coords = self.slice(triplet, (from, from + 1))?;

        Ok((Some(Point::new(coords, self.srid)), triplet + 1))
    }

    /// Point triplet whose interpretation is the number of points.
    fn point_cluster(&self, triplet: usize) -> Result<Decoded<Vec<Point<F::Sequence>>>, SdoError> {
        self.expect_etype(triplet, POINTS)?;
        let count = self.interpretation(triplet)?;
        if count < 1 {
            return Ok((self.unrepresentable(triplet)?, triplet + 1));
        }

        let from = self.coordinate_index(triplet)?;
        let to = from + count as usize;
        if to > self.coords.len() {
            return Err(SdoError::Malformed {
                triplet,
                reason: format!(
                    "{count} points starting at coordinate {from} exceed {} coordinates",
                    self.coords.len()
                ),
            });
        }

        let points = (from..to)
            .map(|i| Ok(Point::new(self.slice(triplet, (i, i + 1))?, self.srid)))
            .collect::<Result<Vec<_>, SdoError>>()?;

        Ok((Some(points), triplet + 1))
    }

    fn line(&self, triplet: usize) -> Result<Decoded<Curve<F::Sequence>>, SdoError> {
        let etype = self.expect_etype(triplet, ElementType::LINES)?;
        if etype == i32::from(ElementType::Compound) {
            return self.compound(triplet);
        }

        let range = self.simple_range(triplet)?;
        Ok((self.simple_curve(triplet, range)?, triplet + 1))
    }

    fn simple_curve(
        &self,
        triplet: usize,
        range: (usize, usize),
    ) -> Result<Option<Curve<F::Sequence>>, SdoError> {
        match Interpretation::try_from(self.interpretation(triplet)?) {
            Ok(Interpretation::Straight) => Ok(Some(Curve::Line(LineString::new(
                self.slice(triplet, range)?,
                self.srid,
            )))),
            Ok(Interpretation::Arcs) => self.circular(triplet, range).map(Some),
            _ => self.unrepresentable(triplet),
        }
    }

    fn circular(
        &self,
        triplet: usize,
        range: (usize, usize),
    ) -> Result<Curve<F::Sequence>, SdoError> {
        let coords = self.slice(triplet, range)?;
        let len = coords.len();
        if len < 3 || len % 2 == 0 {
            return Err(SdoError::Malformed {
                triplet,
                reason: format!("circular arcs need an odd number of at least 3 points, got {len}"),
            });
        }

        Ok(Curve::Circular(CircularString::new(
            coords,
            self.config.arc_segments,
            self.srid,
        )))
    }

    /// Compound element at `triplet` followed by as many components as its interpretation says.
    fn compound(&self, triplet: usize) -> Result<Decoded<Curve<F::Sequence>>, SdoError> {
        let count = self.interpretation(triplet)?;
        if count < 1 {
            return Err(SdoError::Malformed {
                triplet,
                reason: format!("compound element with {count} components"),
            });
        }

        let count = count as usize;
        let next = triplet + count + 1;
        let mut components = Vec::with_capacity(count);
        for i in 1..=count {
            let component = triplet + i;
            self.expect_etype(component, COMPONENTS)?;
            let range = self.component_range(component, i == count)?;
            match self.simple_curve(component, range)? {
                Some(curve) => components.push(curve),
                None => {
                    log::warn!("compound element at triplet {triplet} has an unrepresentable component, skipping");
                    return Ok((None, next));
                }
            }
        }

        Ok((
            Some(Curve::Compound(CompoundCurve::new(components, self.srid))),
            next,
        ))
    }

    fn ring(&self, triplet: usize) -> Result<Decoded<Curve<F::Sequence>>, SdoError> {
        let etype = self.expect_etype(triplet, RINGS)?;
        if ElementType::try_from(etype).is_ok_and(ElementType::is_compound) {
            return self.compound(triplet);
        }

        let range = self.simple_range(triplet)?;
        let ring = match Interpretation::try_from(self.interpretation(triplet)?) {
            Ok(Interpretation::Straight) => Some(self.straight_ring(triplet, range)?),
            Ok(Interpretation::Arcs) => Some(self.circular(triplet, range)?),
            Ok(Interpretation::Rectangle) => Some(self.rectangle(triplet, range)?),
            Ok(Interpretation::Circle) => Some(self.circle(triplet, range)?),
            Err(_) => self.unrepresentable(triplet)?,
        };

        Ok((ring, triplet + 1))
    }

    fn straight_ring(
        &self,
        triplet: usize,
        range: (usize, usize),
    ) -> Result<Curve<F::Sequence>, SdoError> {
        let coords = self.slice(triplet, range)?;
        let coords = sequences::ensure_closed(self.factory, &coords)?.into_owned();
        if coords.len() < 4 {
            return Err(SdoError::Malformed {
                triplet,
                reason: format!("ring needs at least 4 coordinates, got {}", coords.len()),
            });
        }

        Ok(Curve::Line(LineString::new(coords, self.srid)))
    }

    fn rectangle(
        &self,
        triplet: usize,
        range: (usize, usize),
    ) -> Result<Curve<F::Sequence>, SdoError> {
        let corners = self.slice(triplet, range)?;
        if corners.len() != 2 {
            return Err(SdoError::Malformed {
                triplet,
                reason: format!(
                    "rectangle needs exactly 2 corner coordinates, got {}",
                    corners.len()
                ),
            });
        }

        let ring = Rect::from_corners(&corners.point2(0), &corners.point2(1)).into_ring();
        let coords = self.points_sequence(&ring, &corners)?;

        Ok(Curve::Line(LineString::new(coords, self.srid)))
    }

    fn circle(
        &self,
        triplet: usize,
        range: (usize, usize),
    ) -> Result<Curve<F::Sequence>, SdoError> {
        let points = self.slice(triplet, range)?;
        if points.len() != 3 {
            return Err(SdoError::Malformed {
                triplet,
                reason: format!("circle needs exactly 3 coordinates, got {}", points.len()),
            });
        }

        let ring = CircularArc::circle(points.point2(0), points.point2(1), points.point2(2))
            .ok_or_else(|| SdoError::Malformed {
                triplet,
                reason: "circle points are collinear".into(),
            })?;
        let coords = self.points_sequence(&ring, &points)?;

        Ok(Curve::Circular(CircularString::new(
            coords,
            self.config.arc_segments,
            self.srid,
        )))
    }

    /// Exterior ring followed by its holes.
    ///
    /// Rings tagged as interior are always holes. A ring with the bare polygon tag is a hole if
    /// it is clockwise and otherwise starts the next polygon.
    fn polygon(&self, triplet: usize) -> Result<Decoded<Polygon<F::Sequence>>, SdoError> {
        self.expect_etype(triplet, ElementType::EXTERIOR_RINGS)?;
        let (exterior, mut next) = self.ring(triplet)?;

        let mut interiors = vec![];
        while let Some(Ok(tag)) = self.info.etype(next).map(ElementType::try_from) {
            if tag.is_interior() {
                let (hole, after) = self.ring(next)?;
                interiors.extend(hole);
                next = after;
            } else if tag.is_ambiguous_ring() {
                let (candidate, after) = self.ring(next)?;
                let Some(ring) = candidate else {
                    break;
                };

                let area = area_signed(ring.points2());
                if Winding::from_area(area) != Winding::Clockwise {
                    break;
                }
                if area == 0.0 {
                    log::warn!("ring at triplet {next} has zero area, treating it as a hole");
                }

                interiors.push(ring);
                next = after;
            } else {
                break;
            }
        }

        let polygon = exterior.map(|exterior| Polygon::new(exterior, interiors, self.srid));
        Ok((polygon, next))
    }

    fn members<T>(
        &self,
        triplet: usize,
        count: Option<usize>,
        mut member: impl FnMut(usize) -> Result<Option<Decoded<T>>, SdoError>,
    ) -> Result<Option<Vec<T>>, SdoError> {
        let mut items = vec![];
        let mut current = triplet;
        let mut decoded = 0;
        while count.map_or(true, |c| decoded < c) && current < self.info.len() {
            let Some((item, next)) = member(current)? else {
                break;
            };

            items.extend(item);
            current = next;
            decoded += 1;
        }

        if items.is_empty() {
            log::warn!("no representable members starting at triplet {triplet}");
            return Ok(None);
        }

        Ok(Some(items))
    }

    fn multi_point(
        &self,
        triplet: usize,
        count: Option<usize>,
    ) -> Result<Option<MultiPoint<F::Sequence>>, SdoError> {
        let clusters = self.members(triplet, count, |t| self.point_cluster(t).map(Some))?;
        Ok(clusters.map(|c| MultiPoint::new(c.into_iter().flatten().collect(), self.srid)))
    }

    fn multi_line(
        &self,
        triplet: usize,
        count: Option<usize>,
    ) -> Result<Option<MultiLineString<F::Sequence>>, SdoError> {
        let lines = self.members(triplet, count, |t| self.line(t).map(Some))?;
        Ok(lines.map(|l| MultiLineString::new(l, self.srid)))
    }

    fn multi_polygon(
        &self,
        triplet: usize,
        count: Option<usize>,
    ) -> Result<Option<MultiPolygon<F::Sequence>>, SdoError> {
        let polygons = self.members(triplet, count, |t| self.polygon(t).map(Some))?;
        Ok(polygons.map(|p| MultiPolygon::new(p, self.srid)))
    }

    fn collection(
        &self,
        triplet: usize,
        count: Option<usize>,
    ) -> Result<Option<GeometryCollection<F::Sequence>>, SdoError> {
        let geometries = self.members(triplet, count, |t| self.collection_member(t))?;
        Ok(geometries.map(|g| GeometryCollection::new(g, self.srid)))
    }

    /// Member of a collection, or `None` if the collection ends at this triplet.
    fn collection_member(
        &self,
        triplet: usize,
    ) -> Result<Option<Decoded<Geometry<F::Sequence>>>, SdoError> {
        let etype = self.etype(triplet)?;
        let decoded = match ElementType::try_from(etype) {
            Ok(ElementType::Point) if self.interpretation(triplet)? > 1 => {
                let (points, next) = self.point_cluster(triplet)?;
                (
                    points.map(|p| Geometry::from(MultiPoint::new(p, self.srid))),
                    next,
                )
            }
            Ok(ElementType::Point) => {
                let (point, next) = self.point(triplet)?;
                (point.map(Geometry::from), next)
            }
            Ok(ElementType::Line | ElementType::Compound) => {
                let (line, next) = self.line(triplet)?;
                (line.map(Geometry::from), next)
            }
            Ok(tag) if tag.is_interior() => {
                return Err(SdoError::UnexpectedEtype {
                    triplet,
                    etype,
                    expected: COLLECTION_MEMBERS,
                })
            }
            Ok(tag) if tag.is_ring() => {
                let (polygon, next) = self.polygon(triplet)?;
                (polygon.map(Geometry::from), next)
            }
            _ => {
                log::warn!("collection member at triplet {triplet} has element type {etype}, ignoring the rest of the collection");
                return Ok(None);
            }
        };

        Ok(Some(decoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use sdo_types::cartesian::Point2;
    use sdo_types::{GeometryKind, PackedCoordinates, PointFactory};

    fn sdo(gtype: i32, elem_info: &[i32], ordinates: &[f64]) -> SdoGeometry {
        SdoGeometry {
            gtype,
            srid: None,
            point: None,
            elem_info: elem_info.to_vec(),
            ordinates: ordinates.to_vec(),
        }
    }

    fn decode(sdo: &SdoGeometry) -> Geometry {
        let _ = env_logger::builder().is_test(true).try_init();
        SdoDecoder::default()
            .decode(sdo)
            .expect("valid geometry")
            .expect("representable geometry")
    }

    fn strict() -> SdoDecoder {
        SdoDecoder::default().with_config(CodecConfig::default().with_skip_unrepresentable(false))
    }

    fn line_coords(curve: &Curve) -> &PackedCoordinates {
        match curve {
            Curve::Line(line) => &line.coords,
            other => panic!("expected a line string, got {other:?}"),
        }
    }

    #[test]
    fn polygon_with_hole() {
        let mut geometry = sdo(
            2003,
            &[1, 1003, 1, 11, 2003, 1],
            &[
                0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0,
                1.0, 1.0, 1.0,
            ],
        );
        geometry.srid = Some(4326);

        let polygon = assert_matches!(decode(&geometry), Geometry::Polygon(p) => p);
        assert_eq!(polygon.srid, Some(4326));
        assert_eq!(
            line_coords(&polygon.exterior),
            &PackedCoordinates::xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)])
        );
        assert_eq!(polygon.interiors.len(), 1);
        assert_eq!(
            line_coords(&polygon.interiors[0]),
            &PackedCoordinates::xy(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0), (1.0, 1.0)])
        );
    }

    #[test]
    fn point_shortcut() {
        let geometry = SdoGeometry {
            gtype: 3001,
            srid: Some(0),
            point: Some([10.0, 20.0, 30.0]),
            ..Default::default()
        };

        let point = assert_matches!(decode(&geometry), Geometry::Point(p) => p);
        assert_eq!(point.srid, Some(0));
        assert_eq!(point.coords, PackedCoordinates::xyz(&[(10.0, 20.0, 30.0)]));
    }

    #[test]
    fn point_shortcut_2d_ignores_z() {
        let geometry = SdoGeometry {
            gtype: 2001,
            point: Some([1.0, 2.0, f64::NAN]),
            ..Default::default()
        };

        let point = assert_matches!(decode(&geometry), Geometry::Point(p) => p);
        assert_eq!(point.coords, PackedCoordinates::xy(&[(1.0, 2.0)]));
    }

    #[test]
    fn point_without_anything() {
        let geometry = sdo(2001, &[], &[]);
        assert_matches!(
            SdoDecoder::default().decode(&geometry),
            Err(SdoError::Malformed { .. })
        );
    }

    #[test]
    fn point_from_ordinates() {
        let point = assert_matches!(
            decode(&sdo(2001, &[1, 1, 1], &[5.0, 6.0])),
            Geometry::Point(p) => p
        );
        assert_eq!(point.coords, PackedCoordinates::xy(&[(5.0, 6.0)]));
    }

    #[test]
    fn line_with_measure() {
        let line = assert_matches!(
            decode(&sdo(3302, &[1, 2, 1], &[0.0, 0.0, 0.0, 3.0, 4.0, 5.0])),
            Geometry::LineString(l) => l
        );
        assert_eq!(
            line.coords,
            PackedCoordinates::xym(&[(0.0, 0.0, 0.0), (3.0, 4.0, 5.0)])
        );
        assert_abs_diff_eq!(line.coords.attribute(1, 0), 5.0);
    }

    #[test]
    fn measure_before_z() {
        // x, y, m, z
        let line = assert_matches!(
            decode(&sdo(4302, &[1, 2, 1], &[1.0, 2.0, 7.0, 3.0, 4.0, 5.0, 8.0, 6.0])),
            Geometry::LineString(l) => l
        );
        assert_eq!(
            line.coords,
            PackedCoordinates::from_values(vec![1.0, 2.0, 3.0, 7.0, 4.0, 5.0, 6.0, 8.0], 3, 1)
                .unwrap()
        );
    }

    #[test]
    fn circular_string() {
        let curve = assert_matches!(
            decode(&sdo(2002, &[1, 2, 2], &[0.0, 0.0, 1.0, 1.0, 2.0, 0.0])),
            Geometry::CircularString(c) => c
        );
        assert_eq!(curve.coords.len(), 3);
        assert_eq!(curve.arc_segments, sdo_types::DEFAULT_ARC_SEGMENTS);
    }

    #[test]
    fn circular_string_with_even_points() {
        assert_matches!(
            SdoDecoder::default().decode(&sdo(2002, &[1, 2, 2], &[0.0, 0.0, 1.0, 1.0])),
            Err(SdoError::Malformed { triplet: 0, .. })
        );
    }

    #[test]
    fn compound_line() {
        let compound = assert_matches!(
            decode(&sdo(
                2002,
                &[1, 4, 2, 1, 2, 1, 3, 2, 2],
                &[10.0, 10.0, 10.0, 14.0, 6.0, 10.0, 14.0, 10.0],
            )),
            Geometry::CompoundCurve(c) => c
        );

        assert_eq!(compound.components.len(), 2);
        assert_eq!(
            line_coords(&compound.components[0]),
            &PackedCoordinates::xy(&[(10.0, 10.0), (10.0, 14.0)])
        );
        let arc = assert_matches!(&compound.components[1], Curve::Circular(c) => c);
        assert_eq!(
            arc.coords,
            PackedCoordinates::xy(&[(10.0, 14.0), (6.0, 10.0), (14.0, 10.0)])
        );
    }

    #[test]
    fn compound_ring() {
        let polygon = assert_matches!(
            decode(&sdo(
                2003,
                &[1, 1005, 2, 1, 2, 1, 3, 2, 2],
                &[0.0, 0.0, 4.0, 0.0, 2.0, 2.0, 0.0, 0.0],
            )),
            Geometry::Polygon(p) => p
        );

        let ring = assert_matches!(&polygon.exterior, Curve::Compound(c) => c);
        assert_eq!(ring.components.len(), 2);
        assert!(polygon.exterior.is_closed());
        assert_eq!(polygon.exterior.winding(), Winding::CounterClockwise);
    }

    #[test]
    fn rectangle() {
        let polygon = assert_matches!(
            decode(&sdo(2003, &[1, 1003, 3], &[3.0, 4.0, 1.0, 1.0])),
            Geometry::Polygon(p) => p
        );
        assert_eq!(
            line_coords(&polygon.exterior),
            &PackedCoordinates::xy(&[(1.0, 1.0), (3.0, 1.0), (3.0, 4.0), (1.0, 4.0), (1.0, 1.0)])
        );
    }

    #[test]
    fn rectangle_keeps_dimension() {
        let polygon = assert_matches!(
            decode(&sdo(3003, &[1, 1003, 3], &[0.0, 0.0, 5.0, 2.0, 2.0, 5.0])),
            Geometry::Polygon(p) => p
        );
        let coords = line_coords(&polygon.exterior);
        assert_eq!(coords.len(), 5);
        assert_eq!(coords.dimension(), 3);
        assert!(coords.ordinate(2, 2).is_nan());
    }

    #[test]
    fn rectangle_with_extra_corner() {
        assert_matches!(
            SdoDecoder::default().decode(&sdo(
                2003,
                &[1, 1003, 3],
                &[0.0, 0.0, 5.0, 5.0, 9.0, 9.0]
            )),
            Err(SdoError::Malformed { triplet: 0, .. })
        );
    }

    #[test]
    fn circle() {
        let polygon = assert_matches!(
            decode(&sdo(2003, &[1, 1003, 4], &[-1.0, 0.0, 0.0, -1.0, 1.0, 0.0])),
            Geometry::Polygon(p) => p
        );
        let circle = assert_matches!(&polygon.exterior, Curve::Circular(c) => c);
        assert_eq!(circle.coords.len(), 5);
        assert_abs_diff_eq!(circle.coords.ordinate(3, 0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(circle.coords.ordinate(3, 1), 1.0, epsilon = 1e-9);
        assert_eq!(circle.coords.point2(4), Point2::new(-1.0, 0.0));
    }

    #[test]
    fn collinear_circle() {
        assert_matches!(
            SdoDecoder::default().decode(&sdo(
                2003,
                &[1, 1003, 4],
                &[0.0, 0.0, 1.0, 1.0, 2.0, 2.0]
            )),
            Err(SdoError::Malformed { .. })
        );
    }

    #[test]
    fn unclosed_ring_is_closed() {
        let polygon = assert_matches!(
            decode(&sdo(2003, &[1, 1003, 1], &[0.0, 0.0, 2.0, 0.0, 0.0, 2.0])),
            Geometry::Polygon(p) => p
        );
        assert_eq!(
            line_coords(&polygon.exterior),
            &PackedCoordinates::xy(&[(0.0, 0.0), (2.0, 0.0), (0.0, 2.0), (0.0, 0.0)])
        );
    }

    #[test]
    fn too_short_ring() {
        assert_matches!(
            SdoDecoder::default().decode(&sdo(2003, &[1, 1003, 1], &[0.0, 0.0, 2.0, 0.0])),
            Err(SdoError::Malformed { .. })
        );
    }

    #[test]
    fn ambiguous_rings() {
        // Second ring is clockwise and becomes a hole of the first one, the third one is
        // counterclockwise and starts a new polygon.
        let multi = assert_matches!(
            decode(&sdo(
                2007,
                &[1, 3, 1, 11, 3, 1, 21, 3, 1],
                &[
                    0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0,
                    2.0, 2.0, 1.0, 1.0, 1.0, 10.0, 10.0, 12.0, 10.0, 12.0, 12.0, 10.0, 12.0, 10.0,
                    10.0,
                ],
            )),
            Geometry::MultiPolygon(m) => m
        );

        assert_eq!(multi.polygons.len(), 2);
        assert_eq!(multi.polygons[0].interiors.len(), 1);
        assert!(multi.polygons[1].interiors.is_empty());
    }

    #[test]
    fn degenerate_ambiguous_ring_is_a_hole() {
        let polygon = assert_matches!(
            decode(&sdo(
                2003,
                &[1, 1003, 1, 11, 1003, 1],
                &[
                    0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0, 0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0,
                    3.0, 2.0, 2.0, 1.0, 1.0,
                ],
            )),
            Geometry::Polygon(p) => p
        );
        assert_eq!(polygon.interiors.len(), 1);
    }

    #[test]
    fn exterior_with_hole_tag() {
        assert_matches!(
            SdoDecoder::default().decode(&sdo(
                2003,
                &[1, 2003, 1],
                &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0]
            )),
            Err(SdoError::UnexpectedEtype {
                triplet: 0,
                etype: 2003,
                ..
            })
        );
    }

    #[test]
    fn multi_point_cluster() {
        let multi = assert_matches!(
            decode(&sdo(2005, &[1, 1, 3], &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0])),
            Geometry::MultiPoint(m) => m
        );
        assert_eq!(multi.points.len(), 3);
        assert_eq!(multi.points[2].coords, PackedCoordinates::xy(&[(3.0, 3.0)]));
    }

    #[test]
    fn multi_point_single_triplets() {
        let multi = assert_matches!(
            decode(&sdo(2005, &[1, 1, 1, 3, 1, 1], &[1.0, 1.0, 2.0, 2.0])),
            Geometry::MultiPoint(m) => m
        );
        assert_eq!(multi.points.len(), 2);
    }

    #[test]
    fn multi_point_cluster_too_long() {
        assert_matches!(
            SdoDecoder::default().decode(&sdo(2005, &[1, 1, 3], &[1.0, 1.0, 2.0, 2.0])),
            Err(SdoError::Malformed { .. })
        );
    }

    #[test]
    fn multi_line() {
        let multi = assert_matches!(
            decode(&sdo(
                2006,
                &[1, 2, 1, 5, 2, 1],
                &[0.0, 0.0, 1.0, 1.0, 5.0, 5.0, 6.0, 6.0]
            )),
            Geometry::MultiLineString(m) => m
        );
        assert_eq!(multi.lines.len(), 2);
        assert_eq!(
            line_coords(&multi.lines[1]),
            &PackedCoordinates::xy(&[(5.0, 5.0), (6.0, 6.0)])
        );
    }

    #[test]
    fn multi_line_with_polygon_member() {
        assert_matches!(
            SdoDecoder::default().decode(&sdo(
                2006,
                &[1, 2, 1, 5, 1003, 1],
                &[0.0, 0.0, 1.0, 1.0, 5.0, 5.0, 6.0, 5.0, 6.0, 6.0, 5.0, 5.0]
            )),
            Err(SdoError::UnexpectedEtype {
                triplet: 1,
                etype: 1003,
                ..
            })
        );
    }

    #[test]
    fn solid_decodes_as_multi_polygon() {
        let multi = assert_matches!(
            decode(&sdo(
                2008,
                &[1, 1003, 1],
                &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0]
            )),
            Geometry::MultiPolygon(m) => m
        );
        assert_eq!(multi.polygons.len(), 1);
    }

    #[test]
    fn collection() {
        let collection = assert_matches!(
            decode(&sdo(
                2004,
                &[1, 1, 1, 3, 2, 1, 7, 1003, 1, 15, 1, 2],
                &[
                    0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 5.0,
                    5.0, 6.0, 6.0,
                ],
            )),
            Geometry::GeometryCollection(c) => c
        );

        let kinds: Vec<_> = collection.geometries.iter().map(Geometry::kind).collect();
        assert_eq!(
            kinds,
            [
                GeometryKind::Point,
                GeometryKind::LineString,
                GeometryKind::Polygon,
                GeometryKind::MultiPoint
            ]
        );
    }

    #[test]
    fn collection_stops_at_custom_element() {
        let collection = assert_matches!(
            decode(&sdo(
                2004,
                &[1, 1, 1, 3, 0, 7, 5, 2, 1],
                &[0.0, 0.0, 1.0, 1.0, 2.0, 2.0]
            )),
            Geometry::GeometryCollection(c) => c
        );
        assert_eq!(collection.geometries.len(), 1);
    }

    #[test]
    fn collection_with_hole_member() {
        assert_matches!(
            SdoDecoder::default().decode(&sdo(
                2004,
                &[1, 2003, 1],
                &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0]
            )),
            Err(SdoError::UnexpectedEtype { etype: 2003, .. })
        );
    }

    #[test]
    fn leading_custom_elements_are_skipped() {
        let line = assert_matches!(
            decode(&sdo(2002, &[1, 0, 57, 1, 2, 1], &[0.0, 0.0, 1.0, 1.0])),
            Geometry::LineString(l) => l
        );
        assert_eq!(line.coords.len(), 2);
    }

    #[test]
    fn starting_offset_out_of_range() {
        let ordinates = [0.0, 0.0, 1.0, 1.0];
        for offset in [0, -1, 5] {
            assert_matches!(
                SdoDecoder::default().decode(&sdo(2002, &[offset, 2, 1], &ordinates)),
                Err(SdoError::StartingOffset { triplet: 0, len: 4, .. })
            );
        }
    }

    #[test]
    fn misaligned_starting_offset() {
        assert_matches!(
            SdoDecoder::default().decode(&sdo(2002, &[2, 2, 1], &[0.0, 0.0, 1.0, 1.0])),
            Err(SdoError::Malformed { triplet: 0, .. })
        );
    }

    #[test]
    fn ordinate_length_mismatch() {
        assert_matches!(
            SdoDecoder::default().decode(&sdo(3002, &[1, 2, 1], &[0.0, 0.0, 1.0, 1.0])),
            Err(SdoError::OrdinateLength {
                len: 4,
                dimension: 3
            })
        );
    }

    #[test]
    fn measure_past_dimension() {
        assert_matches!(
            SdoDecoder::default().decode(&sdo(2402, &[1, 2, 1], &[0.0, 0.0, 1.0, 1.0])),
            Err(SdoError::MeasurePosition { d: 2, l: 4 })
        );
    }

    #[test]
    fn incomplete_elem_info() {
        assert_matches!(
            SdoDecoder::default().decode(&sdo(2002, &[1, 2], &[0.0, 0.0, 1.0, 1.0])),
            Err(SdoError::Malformed { .. })
        );
    }

    #[test]
    fn unknown_geometry_type() {
        let geometry = sdo(2000, &[1, 2, 1], &[0.0, 0.0, 1.0, 1.0]);
        assert_matches!(SdoDecoder::default().decode(&geometry), Ok(None));
        assert_matches!(
            strict().decode(&geometry),
            Err(SdoError::Unrepresentable { triplet: 0, .. })
        );
    }

    #[test]
    fn unrepresentable_interpretation() {
        let geometry = sdo(2002, &[1, 2, 3], &[0.0, 0.0, 1.0, 1.0]);
        assert_matches!(SdoDecoder::default().decode(&geometry), Ok(None));
        assert_matches!(
            strict().decode(&geometry),
            Err(SdoError::Unrepresentable {
                triplet: 0,
                etype: 2,
                interpretation: 3
            })
        );
    }

    #[test]
    fn unrepresentable_member_is_skipped() {
        let multi = assert_matches!(
            decode(&sdo(
                2006,
                &[1, 2, 5, 5, 2, 1],
                &[0.0, 0.0, 1.0, 1.0, 5.0, 5.0, 6.0, 6.0]
            )),
            Geometry::MultiLineString(m) => m
        );
        assert_eq!(multi.lines.len(), 1);
    }

    #[test]
    fn decode_part_of_elements() {
        let geometry = sdo(
            2006,
            &[1, 2, 1, 5, 2, 1, 9, 2, 1],
            &[0.0, 0.0, 1.0, 1.0, 5.0, 5.0, 6.0, 6.0, 8.0, 8.0, 9.0, 9.0],
        );

        let multi = assert_matches!(
            SdoDecoder::default().decode_elements(&geometry, 1, Some(1)),
            Ok(Some(Geometry::MultiLineString(m))) => m
        );
        assert_eq!(multi.lines.len(), 1);
        assert_eq!(
            line_coords(&multi.lines[0]),
            &PackedCoordinates::xy(&[(5.0, 5.0), (6.0, 6.0)])
        );
    }

    #[test]
    fn fixed_factory_shape() {
        let decoder = SdoDecoder::new(PackedCoordinatesFactory::fixed(3, 1));
        let line = assert_matches!(
            decoder.decode(&sdo(2002, &[1, 2, 1], &[0.0, 0.0, 1.0, 1.0])),
            Ok(Some(Geometry::LineString(l))) => l
        );
        assert_eq!(line.coords.dimension(), 3);
        assert_eq!(line.coords.attribute_count(), 1);
        assert!(line.coords.ordinate(1, 2).is_nan());
        assert!(line.coords.attribute(1, 0).is_nan());
    }

    #[test]
    fn decode_into_points() {
        let decoder = SdoDecoder::new(PointFactory);
        let line = assert_matches!(
            decoder.decode(&sdo(3002, &[1, 2, 1], &[0.0, 0.0, 1.0, 1.0, 1.0, 2.0])),
            Ok(Some(Geometry::LineString(l))) => l
        );
        assert_eq!(
            line.coords,
            vec![
                nalgebra::Point3::new(0.0, 0.0, 1.0),
                nalgebra::Point3::new(1.0, 1.0, 2.0)
            ]
        );
    }
}
