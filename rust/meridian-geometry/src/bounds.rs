// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.
use geo_traits::{
    CoordTrait, GeometryCollectionTrait, GeometryTrait, GeometryType, LineStringTrait,
    MultiLineStringTrait, MultiPointTrait, MultiPolygonTrait, PointTrait, PolygonTrait,
};

use crate::{bounding_box::LatLonBounds, error::MeridianGeometryError};

/// Calculate the lat/lon extremes of a well-known binary geometry blob
///
/// Every vertex of every primitive contributes; duplicates are harmless
/// because the extremes are idempotent under repeated identical inputs.
pub fn wkb_bounds_latlon(wkb_value: &[u8]) -> Result<LatLonBounds, MeridianGeometryError> {
    let mut bounds = LatLonBounds::empty();
    wkb_update_latlon_bounds(wkb_value, &mut bounds)?;
    Ok(bounds)
}

/// Accumulate the lat/lon extremes of a WKB blob into an existing state
pub fn wkb_update_latlon_bounds(
    wkb_value: &[u8],
    bounds: &mut LatLonBounds,
) -> Result<(), MeridianGeometryError> {
    let wkb = wkb::reader::read_wkb(wkb_value)
        .map_err(|e| MeridianGeometryError::External(Box::new(e)))?;
    update_latlon_bounds(wkb, bounds)
}

/// Accumulate the lat/lon extremes of any geometry into an existing state
///
/// Coordinates are interpreted as `(x, y) = (longitude, latitude)` degrees.
/// Fails on geometry kinds outside the closed supported set and on
/// non-finite coordinates; in both cases `bounds` may already contain
/// contributions from earlier vertices and must be discarded by the caller.
pub fn update_latlon_bounds(
    geom: impl GeometryTrait<T = f64>,
    bounds: &mut LatLonBounds,
) -> Result<(), MeridianGeometryError> {
    match geom.as_type() {
        GeometryType::Point(pt) => {
            if let Some(coord) = PointTrait::coord(pt) {
                observe_coord(&coord, bounds)?;
            }
        }
        GeometryType::LineString(ls) => {
            for coord in ls.coords() {
                observe_coord(&coord, bounds)?;
            }
        }
        GeometryType::Polygon(pl) => {
            if let Some(exterior) = pl.exterior() {
                for coord in exterior.coords() {
                    observe_coord(&coord, bounds)?;
                }
            }

            for interior in pl.interiors() {
                for coord in interior.coords() {
                    observe_coord(&coord, bounds)?;
                }
            }
        }
        GeometryType::MultiPoint(multi_pt) => {
            for pt in multi_pt.points() {
                if let Some(coord) = PointTrait::coord(&pt) {
                    observe_coord(&coord, bounds)?;
                }
            }
        }
        GeometryType::MultiLineString(multi_ls) => {
            for ls in multi_ls.line_strings() {
                for coord in ls.coords() {
                    observe_coord(&coord, bounds)?;
                }
            }
        }
        GeometryType::MultiPolygon(multi_pl) => {
            for pl in multi_pl.polygons() {
                if let Some(exterior) = pl.exterior() {
                    for coord in exterior.coords() {
                        observe_coord(&coord, bounds)?;
                    }
                }

                for interior in pl.interiors() {
                    for coord in interior.coords() {
                        observe_coord(&coord, bounds)?;
                    }
                }
            }
        }
        GeometryType::GeometryCollection(collection) => {
            for geom in collection.geometries() {
                update_latlon_bounds(geom, bounds)?;
            }
        }
        _ => {
            return Err(MeridianGeometryError::Unsupported(
                "geometry kind not decomposable into lat/lon vertices".to_string(),
            ))
        }
    }

    Ok(())
}

fn observe_coord(
    coord: &impl CoordTrait<T = f64>,
    bounds: &mut LatLonBounds,
) -> Result<(), MeridianGeometryError> {
    let (lon, lat) = (coord.x(), coord.y());
    if !lon.is_finite() || !lat.is_finite() {
        return Err(MeridianGeometryError::NonFiniteCoordinate(lon, lat));
    }

    bounds.observe(lon, lat);
    Ok(())
}
