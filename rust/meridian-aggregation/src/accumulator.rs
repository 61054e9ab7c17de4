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
use meridian_geometry::{bounding_box::LatLonBounds, bounds::wkb_update_latlon_bounds};

use crate::error::{MeridianAggregationError, Result};

/// Accumulates latitude/longitude extremes across documents and partial states
///
/// Each segment owns one accumulator while scanning; the reducing layer
/// folds the handed-off states, in memory via [GeoBoundsAccumulator::merge]
/// or across process boundaries via [GeoBoundsAccumulator::state] and
/// [GeoBoundsAccumulator::merge_state]. Merging is associative and
/// commutative, so flat and tree reductions produce identical results.
#[derive(Debug)]
pub struct GeoBoundsAccumulator {
    bounds: LatLonBounds,
}

impl Default for GeoBoundsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoBoundsAccumulator {
    /// Create an accumulator with the empty state
    pub fn new() -> Self {
        Self {
            bounds: LatLonBounds::empty(),
        }
    }

    /// Fold every vertex of an encoded geometry into the extremes
    pub fn update_wkb(&mut self, wkb_value: &[u8]) -> Result<()> {
        wkb_update_latlon_bounds(wkb_value, &mut self.bounds)?;
        Ok(())
    }

    /// Fold another partial state into this one
    pub fn merge(&mut self, other: &LatLonBounds) {
        self.bounds.merge_bounds(other);
    }

    /// The current partial state
    pub fn bounds(&self) -> &LatLonBounds {
        &self.bounds
    }

    /// Consume the accumulator, yielding its partial state
    pub fn into_bounds(self) -> LatLonBounds {
        self.bounds
    }

    /// Serialize the partial state for transport across process or shard
    /// boundaries
    pub fn state(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.bounds).map_err(|e| {
            MeridianAggregationError::Internal(format!("failed to serialize bounds state: {e}"))
        })
    }

    /// Fold a serialized partial state into this one
    pub fn merge_state(&mut self, state: &[u8]) -> Result<()> {
        let other: LatLonBounds = serde_json::from_slice(state).map_err(|e| {
            MeridianAggregationError::Internal(format!("failed to deserialize bounds state: {e}"))
        })?;
        self.bounds.merge_bounds(&other);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use meridian_geometry::wkb_factory::{wkb_multipoint, wkb_point};

    #[test]
    fn update_and_merge() {
        let mut acc = GeoBoundsAccumulator::new();
        assert!(acc.bounds().is_empty());

        acc.update_wkb(&wkb_point((10.0, 20.0)).unwrap()).unwrap();
        acc.update_wkb(&wkb_multipoint([(170.0, -5.0), (-170.0, 5.0)].into_iter()).unwrap())
            .unwrap();
        assert_eq!(acc.bounds().pos_left(), 10.0);
        assert_eq!(acc.bounds().pos_right(), 170.0);
        assert_eq!(acc.bounds().neg_left(), -170.0);
        assert_eq!(acc.bounds().top(), 20.0);
        assert_eq!(acc.bounds().bottom(), -5.0);

        let mut other = GeoBoundsAccumulator::new();
        other.update_wkb(&wkb_point((-30.0, 88.0)).unwrap()).unwrap();
        acc.merge(other.bounds());
        assert_eq!(acc.bounds().neg_right(), -30.0);
        assert_eq!(acc.bounds().top(), 88.0);
    }

    #[test]
    fn state_roundtrip() {
        let mut acc = GeoBoundsAccumulator::new();
        acc.update_wkb(&wkb_point((55.0, 66.0)).unwrap()).unwrap();

        let state = acc.state().unwrap();
        let mut merged = GeoBoundsAccumulator::new();
        merged.merge_state(&state).unwrap();
        assert_eq!(merged.bounds(), acc.bounds());

        // The empty state serializes and merges as the identity
        let empty_state = GeoBoundsAccumulator::new().state().unwrap();
        merged.merge_state(&empty_state).unwrap();
        assert_eq!(merged.bounds(), acc.bounds());
    }

    #[test]
    fn bad_state_bytes_are_rejected() {
        let mut acc = GeoBoundsAccumulator::new();
        let err = acc.merge_state(b"not a state").unwrap_err();
        assert!(matches!(err, MeridianAggregationError::Internal(_)));
    }

    #[test]
    fn bad_wkb_is_rejected() {
        let mut acc = GeoBoundsAccumulator::new();
        let err = acc.update_wkb(&[0xff, 0x00]).unwrap_err();
        assert!(matches!(err, MeridianAggregationError::Geometry(_)));
    }
}
