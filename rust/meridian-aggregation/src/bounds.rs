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
use meridian_geometry::{
    bounding_box::LatLonBounds,
    interval::{Interval, IntervalTrait, WraparoundInterval},
    wkb_factory::{wkb_linestring, wkb_multipolygon, wkb_point, wkb_polygon},
};

use crate::error::Result;

/// The final envelope reported by a geo-bounds aggregation
///
/// `left > right` means the envelope crosses the antimeridian and covers
/// `[left, 180] ∪ [-180, right]`. All fields at their infinite identities
/// mean no document contributed a value; that is a valid result, not an
/// error, and is reported by [GeoBoundingBox::has_value].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBoundingBox {
    /// Maximum latitude
    pub top: f64,
    /// Minimum latitude
    pub bottom: f64,
    /// Western longitude edge
    pub left: f64,
    /// Eastern longitude edge
    pub right: f64,
}

impl GeoBoundingBox {
    /// Resolve the envelope from a fully merged partial state
    ///
    /// With `wrap_longitude` set and values in both hemispheres, the
    /// narrower of the direct range and the dateline-crossing range is
    /// chosen; ties go to the direct range. With values in only one
    /// hemisphere that hemisphere's own range is used as is.
    pub(crate) fn resolve(bounds: &LatLonBounds, wrap_longitude: bool) -> Self {
        let lon = resolve_longitude(bounds, wrap_longitude);
        Self {
            top: bounds.top(),
            bottom: bounds.bottom(),
            left: lon.lo(),
            right: lon.hi(),
        }
    }

    /// True if at least one document contributed to this envelope
    pub fn has_value(&self) -> bool {
        self.bottom != f64::INFINITY
    }

    /// True if the envelope crosses the antimeridian
    pub fn crosses_dateline(&self) -> bool {
        self.has_value() && self.left > self.right
    }

    /// Render the envelope as a WKB geometry
    ///
    /// A box with height and width becomes a POLYGON, a box degenerate in
    /// one axis a LINESTRING, and a single position a POINT. An envelope
    /// that crosses the antimeridian becomes a MULTIPOLYGON of the two
    /// rectangles on either side of it. An empty envelope has no geometry.
    pub fn to_wkb(&self) -> Result<Option<Vec<u8>>> {
        if !self.has_value() {
            return Ok(None);
        }

        if self.crosses_dateline() {
            let western = vec![
                (self.left, self.bottom),
                (180.0, self.bottom),
                (180.0, self.top),
                (self.left, self.top),
                (self.left, self.bottom),
            ];
            let eastern = vec![
                (-180.0, self.bottom),
                (self.right, self.bottom),
                (self.right, self.top),
                (-180.0, self.top),
                (-180.0, self.bottom),
            ];
            return Ok(Some(wkb_multipolygon([western, eastern].into_iter())?));
        }

        let wkb = match (self.right > self.left, self.top > self.bottom) {
            (true, true) => wkb_polygon(
                [
                    (self.left, self.bottom),
                    (self.right, self.bottom),
                    (self.right, self.top),
                    (self.left, self.top),
                    (self.left, self.bottom),
                ]
                .into_iter(),
            )?,
            (false, true) | (true, false) => wkb_linestring(
                [(self.left, self.bottom), (self.right, self.top)].into_iter(),
            )?,
            (false, false) => wkb_point((self.left, self.bottom))?,
        };

        Ok(Some(wkb))
    }
}

fn resolve_longitude(bounds: &LatLonBounds, wrap_longitude: bool) -> WraparoundInterval {
    let pos = bounds.pos_lon();
    let neg = bounds.neg_lon();

    if pos.is_empty() {
        return (*neg).into();
    }
    if neg.is_empty() {
        return (*pos).into();
    }

    let direct = Interval::new(neg.lo(), pos.hi());
    if !wrap_longitude {
        return direct.into();
    }

    let wrapped = WraparoundInterval::new(pos.lo(), neg.hi());
    if direct.width() <= wrapped.width() {
        direct.into()
    } else {
        wrapped
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use meridian_geometry::bounds::wkb_bounds_latlon;

    fn bounds_of(coords: &[(f64, f64)]) -> LatLonBounds {
        let mut bounds = LatLonBounds::empty();
        for (lon, lat) in coords {
            bounds.observe(*lon, *lat);
        }
        bounds
    }

    #[test]
    fn empty_state_resolves_to_infinite_envelope() {
        let envelope = GeoBoundingBox::resolve(&LatLonBounds::empty(), true);
        assert!(!envelope.has_value());
        assert!(!envelope.crosses_dateline());
        assert_eq!(envelope.top, f64::NEG_INFINITY);
        assert_eq!(envelope.bottom, f64::INFINITY);
        assert_eq!(envelope.left, f64::INFINITY);
        assert_eq!(envelope.right, f64::NEG_INFINITY);
        assert_eq!(envelope.to_wkb().unwrap(), None);
    }

    #[test]
    fn single_hemisphere_uses_its_own_range() {
        let east = bounds_of(&[(10.0, 0.0), (20.0, 5.0)]);
        let envelope = GeoBoundingBox::resolve(&east, true);
        assert_eq!((envelope.left, envelope.right), (10.0, 20.0));
        assert!(!envelope.crosses_dateline());

        let west = bounds_of(&[(-10.0, 0.0), (-20.0, 5.0)]);
        let envelope = GeoBoundingBox::resolve(&west, true);
        assert_eq!((envelope.left, envelope.right), (-20.0, -10.0));
    }

    #[test]
    fn wrap_selects_the_narrower_range() {
        let straddling = bounds_of(&[(179.0, 1.0), (-179.0, 2.0)]);

        let wrapped = GeoBoundingBox::resolve(&straddling, true);
        assert!(wrapped.crosses_dateline());
        assert_eq!((wrapped.left, wrapped.right), (179.0, -179.0));

        let unwrapped = GeoBoundingBox::resolve(&straddling, false);
        assert!(!unwrapped.crosses_dateline());
        assert_eq!((unwrapped.left, unwrapped.right), (-179.0, 179.0));
    }

    #[test]
    fn wrap_keeps_the_direct_range_when_narrower() {
        // Both hemispheres populated but clustered around the prime meridian
        let central = bounds_of(&[(-5.0, 0.0), (5.0, 0.0)]);
        let envelope = GeoBoundingBox::resolve(&central, true);
        assert!(!envelope.crosses_dateline());
        assert_eq!((envelope.left, envelope.right), (-5.0, 5.0));
    }

    #[test]
    fn envelope_wkb_degeneracies() {
        // Height and width: POLYGON
        let body = GeoBoundingBox::resolve(&bounds_of(&[(0.0, 0.0), (2.0, 3.0)]), false);
        let polygon = body.to_wkb().unwrap().unwrap();
        let roundtrip = wkb_bounds_latlon(&polygon).unwrap();
        assert_eq!(roundtrip.pos_left(), 0.0);
        assert_eq!(roundtrip.pos_right(), 2.0);
        assert_eq!(roundtrip.top(), 3.0);

        // Width only: LINESTRING
        let flat = GeoBoundingBox::resolve(&bounds_of(&[(0.0, 1.0), (2.0, 1.0)]), false);
        let line = flat.to_wkb().unwrap().unwrap();
        assert_eq!(line[1], 0x02);

        // Single position: POINT
        let dot = GeoBoundingBox::resolve(&bounds_of(&[(7.0, 8.0)]), false);
        let point = dot.to_wkb().unwrap().unwrap();
        assert_eq!(point[1], 0x01);
        assert_eq!(point.len(), 21);
    }

    #[test]
    fn wrapped_envelope_renders_as_split_multipolygon() {
        let straddling = bounds_of(&[(175.0, -2.0), (-175.0, 2.0)]);
        let envelope = GeoBoundingBox::resolve(&straddling, true);
        let wkb_value = envelope.to_wkb().unwrap().unwrap();
        assert_eq!(wkb_value[1], 0x06);

        // Both halves contribute their vertices
        let roundtrip = wkb_bounds_latlon(&wkb_value).unwrap();
        assert_eq!(roundtrip.pos_lon().lo(), 175.0);
        assert_eq!(roundtrip.pos_lon().hi(), 180.0);
        assert_eq!(roundtrip.neg_lon().lo(), -180.0);
        assert_eq!(roundtrip.neg_lon().hi(), -175.0);
    }
}
