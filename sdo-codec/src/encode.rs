//! Encoding of geometry trees into SDO tuples.

use sdo_types::cartesian::{Point2, Rect};
use sdo_types::sequences;
use sdo_types::{
    CompoundCurve, CoordinateAccess, Curve, Geometry, GeometryKind, MultiPoint, Point, Polygon,
};

use crate::config::{CodecConfig, RectanglePolicy};
use crate::elem_info::{ElemInfoBuilder, ElementType, Interpretation};
use crate::error::SdoError;
use crate::gtype::{GType, GeometryTag};
use crate::layout::{OrdinateLayout, Slot};
use crate::sdo::SdoGeometry;

/// Encodes geometries into SDO tuples.
///
/// Polygon rings are written with counterclockwise exteriors and clockwise holes regardless of
/// their orientation in the source geometry.
#[derive(Debug, Clone, Default)]
pub struct SdoEncoder {
    config: CodecConfig,
}

impl SdoEncoder {
    /// Creates an encoder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Configuration of the encoder.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encodes the geometry with its own SRID. The GTYPE is derived from the geometry kind and
    /// the shape of its coordinates.
    pub fn encode<S: CoordinateAccess + Clone>(
        &self,
        geometry: &Geometry<S>,
    ) -> Result<SdoGeometry, SdoError> {
        self.encode_with(geometry, geometry.srid(), None)
    }

    /// Encodes the geometry with the given SRID and, optionally, GTYPE.
    ///
    /// A supplied GTYPE decides the number of ordinates per coordinate and the measure position.
    /// Its geometry type must match the geometry.
    pub fn encode_with<S: CoordinateAccess + Clone>(
        &self,
        geometry: &Geometry<S>,
        srid: Option<i32>,
        gtype: Option<i32>,
    ) -> Result<SdoGeometry, SdoError> {
        if geometry.is_empty() {
            return Err(SdoError::Unencodable(format!(
                "empty {:?} has no SDO form",
                geometry.kind()
            )));
        }

        let tag = geometry_tag(geometry.kind());
        let gtype = match gtype {
            Some(value) => {
                let gtype = GType::parse(value)?;
                if gtype.tag() != tag {
                    return Err(SdoError::Unencodable(format!(
                        "gtype {value} does not describe a {:?}",
                        geometry.kind()
                    )));
                }
                gtype
            }
            None => {
                let (dimension, attribute_count) = geometry.shape();
                let layout = OrdinateLayout::for_shape(dimension, attribute_count)?;
                GType::new(
                    layout.stride() as i32,
                    layout.measure_position() as i32,
                    tag,
                )?
            }
        };
        let layout = gtype.layout();

        if let Geometry::Point(point) = geometry {
            if self.config.point_shortcut
                && layout.measure_position() == 0
                && layout.stride() <= 3
            {
                log::debug!("encoding point with gtype {} as point shortcut", gtype.value());
                return Ok(SdoGeometry {
                    gtype: gtype.value(),
                    srid,
                    point: Some(shortcut(point, layout)),
                    elem_info: vec![],
                    ordinates: vec![],
                });
            }
        }

        let mut writer = Writer {
            config: &self.config,
            layout,
            srid,
            info: ElemInfoBuilder::new(layout.stride()),
            ordinates: vec![],
        };
        writer.geometry(geometry)?;

        if writer.info.is_empty() {
            return Err(SdoError::Unencodable(
                "geometry has no non-empty members".into(),
            ));
        }

        Ok(SdoGeometry {
            gtype: gtype.value(),
            srid,
            point: None,
            elem_info: writer.info.finish(),
            ordinates: writer.ordinates,
        })
    }
}

fn geometry_tag(kind: GeometryKind) -> GeometryTag {
    match kind {
        GeometryKind::Point => GeometryTag::Point,
        GeometryKind::LineString | GeometryKind::CircularString | GeometryKind::CompoundCurve => {
            GeometryTag::Line
        }
        GeometryKind::Polygon => GeometryTag::Polygon,
        GeometryKind::MultiPoint => GeometryTag::MultiPoint,
        GeometryKind::MultiLineString => GeometryTag::MultiLine,
        GeometryKind::MultiPolygon => GeometryTag::MultiPolygon,
        GeometryKind::GeometryCollection => GeometryTag::Collection,
    }
}

fn shortcut<S: CoordinateAccess>(point: &Point<S>, layout: OrdinateLayout) -> [f64; 3] {
    let available = point.coords.dimension().min(layout.spatial());
    let mut values = [f64::NAN; 3];
    for (o, value) in values.iter_mut().enumerate().take(available) {
        *value = point.coords.ordinate(0, o);
    }

    values
}

/// Accumulates element info and ordinates while walking a geometry.
struct Writer<'a> {
    config: &'a CodecConfig,
    layout: OrdinateLayout,
    srid: Option<i32>,
    info: ElemInfoBuilder,
    ordinates: Vec<f64>,
}

impl Writer<'_> {
    /// Writes coordinates `from..` of the sequence, slot by slot.
    fn write<S: CoordinateAccess>(&mut self, coords: &S, from: usize) {
        let ordinates = coords.to_ordinate_arrays();
        let attributes = coords.to_attribute_arrays();
        let layout = self.layout;

        for i in from..coords.len() {
            for slot in layout.slots() {
                let column = match slot {
                    Slot::Ordinate(o) => ordinates.get(o),
                    Slot::Attribute(a) => attributes.get(a),
                };
                self.ordinates
                    .push(column.map_or(f64::NAN, |column| column[i]));
            }
        }
    }

    fn write_points(&mut self, points: &[Point2]) {
        let layout = self.layout;
        for point in points {
            for slot in layout.slots() {
                self.ordinates.push(match slot {
                    Slot::Ordinate(0) => point.x,
                    Slot::Ordinate(1) => point.y,
                    _ => f64::NAN,
                });
            }
        }
    }

    fn geometry<S: CoordinateAccess + Clone>(
        &mut self,
        geometry: &Geometry<S>,
    ) -> Result<(), SdoError> {
        match geometry {
            Geometry::Point(point) => self.point(point),
            Geometry::LineString(line) => {
                self.simple(ElementType::Line, Interpretation::Straight, &line.coords)?
            }
            Geometry::CircularString(curve) => {
                self.simple(ElementType::Line, Interpretation::Arcs, &curve.coords)?
            }
            Geometry::CompoundCurve(curve) => self.compound(ElementType::Compound, curve)?,
            Geometry::Polygon(polygon) => self.polygon(polygon)?,
            Geometry::MultiPoint(multi) => self.multi_point(multi),
            Geometry::MultiLineString(multi) => {
                for line in multi.lines.iter().filter(|line| !line.is_empty()) {
                    self.line(line)?;
                }
            }
            Geometry::MultiPolygon(multi) => {
                for polygon in multi.polygons.iter().filter(|p| !p.is_empty()) {
                    self.polygon(polygon)?;
                }
            }
            Geometry::GeometryCollection(collection) => {
                for member in collection.geometries.iter().filter(|g| !g.is_empty()) {
                    self.geometry(member)?;
                }
            }
        }

        Ok(())
    }

    fn point<S: CoordinateAccess>(&mut self, point: &Point<S>) {
        self.info.push(ElementType::Point, 1, 1);
        self.write_first(&point.coords);
    }

    fn write_first<S: CoordinateAccess>(&mut self, coords: &S) {
        let ordinates = coords.to_ordinate_arrays();
        let attributes = coords.to_attribute_arrays();
        let layout = self.layout;

        for slot in layout.slots() {
            let column = match slot {
                Slot::Ordinate(o) => ordinates.get(o),
                Slot::Attribute(a) => attributes.get(a),
            };
            self.ordinates
                .push(column.and_then(|c| c.first().copied()).unwrap_or(f64::NAN));
        }
    }

    fn multi_point<S: CoordinateAccess>(&mut self, multi: &MultiPoint<S>) {
        let points: Vec<_> = multi.points.iter().filter(|p| !p.is_empty()).collect();
        self.info
            .push(ElementType::Point, points.len() as i32, points.len());
        for point in points {
            self.write_first(&point.coords);
        }
    }

    fn simple<S: CoordinateAccess>(
        &mut self,
        etype: ElementType,
        interpretation: Interpretation,
        coords: &S,
    ) -> Result<(), SdoError> {
        if interpretation == Interpretation::Arcs {
            check_arcs(coords)?;
        }

        self.info.push(etype, interpretation.into(), coords.len());
        self.write(coords, 0);
        Ok(())
    }

    fn line<S: CoordinateAccess>(&mut self, curve: &Curve<S>) -> Result<(), SdoError> {
        match curve {
            Curve::Line(line) => {
                self.simple(ElementType::Line, Interpretation::Straight, &line.coords)
            }
            Curve::Circular(arcs) => {
                self.simple(ElementType::Line, Interpretation::Arcs, &arcs.coords)
            }
            Curve::Compound(compound) => self.compound(ElementType::Compound, compound),
        }
    }

    /// Writes a header triplet and one triplet per component. Every component after the first
    /// starts at the last coordinate of the previous one, which is written only once.
    fn compound<S: CoordinateAccess>(
        &mut self,
        header: ElementType,
        curve: &CompoundCurve<S>,
    ) -> Result<(), SdoError> {
        let mut components = vec![];
        flatten(curve, &mut components);

        for (interpretation, coords) in &components {
            if *interpretation == Interpretation::Arcs {
                check_arcs(*coords)?;
            }
        }
        for (i, pair) in components.windows(2).enumerate() {
            let (prev, next) = (pair[0].1, pair[1].1);
            let end = prev.point2(prev.len() - 1);
            let start = next.point2(0);
            if end != start {
                return Err(SdoError::Unencodable(format!(
                    "compound component {} starts at ({}, {}) but the previous one ends at ({}, {})",
                    i + 1,
                    start.x,
                    start.y,
                    end.x,
                    end.y
                )));
            }
        }

        self.info.push_header(header, components.len());
        for (i, (interpretation, coords)) in components.into_iter().enumerate() {
            let shares_start = i > 0;
            self.info.push_component(
                ElementType::Line,
                interpretation.into(),
                coords.len(),
                shares_start,
            );
            self.write(coords, usize::from(shares_start));
        }

        Ok(())
    }

    fn ring<S: CoordinateAccess>(
        &mut self,
        ring: &Curve<S>,
        exterior: bool,
    ) -> Result<(), SdoError> {
        let (simple, compound) = if exterior {
            (
                ElementType::PolygonExterior,
                ElementType::CompoundPolygonExterior,
            )
        } else {
            (
                ElementType::PolygonInterior,
                ElementType::CompoundPolygonInterior,
            )
        };

        match ring {
            Curve::Line(line) => self.simple(simple, Interpretation::Straight, &line.coords),
            Curve::Circular(arcs) => self.simple(simple, Interpretation::Arcs, &arcs.coords),
            Curve::Compound(curve) => self.compound(compound, curve),
        }
    }

    fn polygon<S: CoordinateAccess + Clone>(
        &mut self,
        polygon: &Polygon<S>,
    ) -> Result<(), SdoError> {
        let polygon = polygon.normalized()?;

        if polygon.interiors.is_empty() {
            if let Some(rect) = self.rectangle(&polygon.exterior) {
                log::debug!("encoding rectangular polygon as two corners");
                self.info.push(
                    ElementType::PolygonExterior,
                    Interpretation::Rectangle.into(),
                    2,
                );
                self.write_points(&[rect.min(), rect.max()]);
                return Ok(());
            }
        }

        self.ring(&polygon.exterior, true)?;
        for hole in polygon.interiors.iter().filter(|ring| !ring.is_empty()) {
            self.ring(hole, false)?;
        }

        Ok(())
    }

    /// Rectangle of the ring if it can be stored as two corners.
    fn rectangle<S: CoordinateAccess>(&self, ring: &Curve<S>) -> Option<Rect> {
        let allowed = match self.config.rectangles {
            RectanglePolicy::Always => true,
            RectanglePolicy::SridLess => self.srid.is_none(),
            RectanglePolicy::Never => false,
        };
        if !allowed || self.layout != OrdinateLayout::new(2, 0) {
            return None;
        }

        match ring {
            Curve::Line(line) if line.coords.attribute_count() == 0 => {
                sequences::as_rectangle(&line.coords)
            }
            _ => None,
        }
    }
}

/// Circular strings are chains of arcs sharing endpoints, so they have an odd number of at least
/// three coordinates.
fn check_arcs<S: CoordinateAccess>(coords: &S) -> Result<(), SdoError> {
    let len = coords.len();
    if len < 3 || len % 2 == 0 {
        return Err(SdoError::Unencodable(format!(
            "circular string needs an odd number of at least 3 coordinates, got {len}"
        )));
    }

    Ok(())
}

/// Collects the non-compound components of the curve in order.
fn flatten<'a, S: CoordinateAccess>(
    curve: &'a CompoundCurve<S>,
    components: &mut Vec<(Interpretation, &'a S)>,
) {
    for component in &curve.components {
        match component {
            _ if component.is_empty() => {}
            Curve::Line(line) => components.push((Interpretation::Straight, &line.coords)),
            Curve::Circular(arcs) => components.push((Interpretation::Arcs, &arcs.coords)),
            Curve::Compound(inner) => flatten(inner, components),
        }
    }
}
