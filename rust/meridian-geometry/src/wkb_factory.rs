use std::io::Write;

use crate::error::MeridianGeometryError;

/// Create WKB representing a POINT
///
/// A convenience wrapper for [write_wkb_point] that creates a Vec, which is
/// useful for cached substitute geometries and test fixtures.
pub fn wkb_point(pt: (f64, f64)) -> Result<Vec<u8>, MeridianGeometryError> {
    let mut out_wkb = Vec::with_capacity(21);
    write_wkb_point(&mut out_wkb, pt)?;
    Ok(out_wkb)
}

/// Write WKB representing a POINT into a buffer
pub fn write_wkb_point(buf: &mut impl Write, pt: (f64, f64)) -> Result<(), MeridianGeometryError> {
    buf.write_all(&[0x01, 0x01, 0x00, 0x00, 0x00])?;
    buf.write_all(&pt.0.to_le_bytes())?;
    buf.write_all(&pt.1.to_le_bytes())?;
    Ok(())
}

/// Create WKB representing a LINESTRING
///
/// A convenience wrapper for [write_wkb_linestring] that creates a Vec.
pub fn wkb_linestring<I: ExactSizeIterator<Item = (f64, f64)>>(
    pts: I,
) -> Result<Vec<u8>, MeridianGeometryError> {
    let mut out_wkb = Vec::with_capacity(5 + 4 + pts.len() * 16);
    write_wkb_linestring(&mut out_wkb, pts)?;
    Ok(out_wkb)
}

/// Write WKB representing a LINESTRING into a buffer
pub fn write_wkb_linestring<I: ExactSizeIterator<Item = (f64, f64)>>(
    buf: &mut impl Write,
    pts: I,
) -> Result<(), MeridianGeometryError> {
    let size_u32: u32 = pts.len().try_into()?;

    buf.write_all(&[0x01, 0x02, 0x00, 0x00, 0x00])?;
    buf.write_all(&size_u32.to_le_bytes())?;
    for pt in pts {
        buf.write_all(&pt.0.to_le_bytes())?;
        buf.write_all(&pt.1.to_le_bytes())?;
    }

    Ok(())
}

/// Create WKB representing a POLYGON
///
/// A convenience wrapper for [write_wkb_polygon] that creates a Vec.
pub fn wkb_polygon<I: ExactSizeIterator<Item = (f64, f64)>>(
    pts: I,
) -> Result<Vec<u8>, MeridianGeometryError> {
    let mut out_wkb = Vec::with_capacity(5 + 4 + 4 + pts.len() * 16);
    write_wkb_polygon(&mut out_wkb, pts)?;
    Ok(out_wkb)
}

/// Write WKB representing a POLYGON into a buffer
pub fn write_wkb_polygon<I: ExactSizeIterator<Item = (f64, f64)>>(
    buf: &mut impl Write,
    pts: I,
) -> Result<(), MeridianGeometryError> {
    let size_u32: u32 = pts.len().try_into()?;

    buf.write_all(&[0x01, 0x03, 0x00, 0x00, 0x00])?;

    // For zero points, write POLYGON EMPTY
    if size_u32 == 0 {
        buf.write_all(&[0x00, 0x00, 0x00, 0x00])?;
        return Ok(());
    }

    // For >= 0 points, write a single ring with n points
    buf.write_all(&[0x01, 0x00, 0x00, 0x00])?;
    buf.write_all(&size_u32.to_le_bytes())?;
    for pt in pts {
        buf.write_all(&pt.0.to_le_bytes())?;
        buf.write_all(&pt.1.to_le_bytes())?;
    }

    Ok(())
}

/// Create WKB representing a MULTIPOINT
///
/// A convenience wrapper for [write_wkb_multipoint] that creates a Vec.
pub fn wkb_multipoint<I>(points: I) -> Result<Vec<u8>, MeridianGeometryError>
where
    I: ExactSizeIterator<Item = (f64, f64)>,
{
    let capacity = 5 + 4 + points.len() * 21;
    let mut out_wkb = Vec::with_capacity(capacity);
    write_wkb_multipoint(&mut out_wkb, points)?;
    Ok(out_wkb)
}

/// Write WKB representing a MULTIPOINT into a buffer
pub fn write_wkb_multipoint<I>(
    buf: &mut impl Write,
    points: I,
) -> Result<(), MeridianGeometryError>
where
    I: ExactSizeIterator<Item = (f64, f64)>,
{
    let num_points: u32 = points.len().try_into()?;

    // Write header: byte order (little endian) and geometry type (4 for MultiPoint)
    buf.write_all(&[0x01, 0x04, 0x00, 0x00, 0x00])?;

    // Write number of points
    buf.write_all(&num_points.to_le_bytes())?;

    // For each point, write a complete point WKB
    for point in points {
        // Each point needs its own byte order and type
        buf.write_all(&[0x01, 0x01, 0x00, 0x00, 0x00])?;

        buf.write_all(&point.0.to_le_bytes())?;
        buf.write_all(&point.1.to_le_bytes())?;
    }

    Ok(())
}

/// Create WKB representing a MULTIPOLYGON
///
/// A convenience wrapper for [write_wkb_multipolygon] that creates a Vec.
/// Each element is the exterior ring of one polygon.
pub fn wkb_multipolygon<I>(polygons: I) -> Result<Vec<u8>, MeridianGeometryError>
where
    I: ExactSizeIterator<Item = Vec<(f64, f64)>> + Clone,
{
    let total_points: usize = polygons.clone().map(|ring| ring.len()).sum();
    let capacity = 5 + 4 + polygons.len() * 9 + total_points * 16;
    let mut out_wkb = Vec::with_capacity(capacity);
    write_wkb_multipolygon(&mut out_wkb, polygons)?;
    Ok(out_wkb)
}

/// Write WKB representing a MULTIPOLYGON into a buffer
pub fn write_wkb_multipolygon<I>(
    buf: &mut impl Write,
    polygons: I,
) -> Result<(), MeridianGeometryError>
where
    I: ExactSizeIterator<Item = Vec<(f64, f64)>>,
{
    let num_polygons: u32 = polygons.len().try_into()?;

    // Write header: byte order (little endian) and geometry type (6 for MultiPolygon)
    buf.write_all(&[0x01, 0x06, 0x00, 0x00, 0x00])?;

    // Write number of polygons
    buf.write_all(&num_polygons.to_le_bytes())?;

    // For each polygon, write a complete polygon WKB
    for polygon in polygons {
        // Each polygon needs its own byte order and type
        buf.write_all(&[0x01, 0x03, 0x00, 0x00, 0x00])?;

        if polygon.is_empty() {
            buf.write_all(&[0x00, 0x00, 0x00, 0x00])?;
            continue;
        }

        // A single exterior ring with n points
        buf.write_all(&[0x01, 0x00, 0x00, 0x00])?;
        let num_points: u32 = polygon.len().try_into()?;
        buf.write_all(&num_points.to_le_bytes())?;
        for pt in polygon {
            buf.write_all(&pt.0.to_le_bytes())?;
            buf.write_all(&pt.1.to_le_bytes())?;
        }
    }

    Ok(())
}
