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
use serde::{Deserialize, Serialize};

use crate::interval::{Interval, IntervalTrait};

/// Accumulated latitude/longitude extremes with hemisphere-split longitudes
///
/// Latitude extremes are a single [Interval]. Longitudes are tracked as two
/// independent intervals, one for values `>= 0` and one for values `< 0`, so
/// that after any sequence of merges a minimal envelope crossing the
/// antimeridian can still be recovered. Either hemisphere interval may stay
/// empty when no value fell on that side.
///
/// This is the partial state of the geo-bounds aggregation: one instance is
/// owned exclusively by each segment scan and becomes immutable once handed
/// to the reducing layer. [LatLonBounds::merge_bounds] is associative and
/// commutative with the empty state as identity, so reduction order never
/// affects the result.
///
/// This structure implements Serialize and Deserialize to support passing
/// it between query engine components where there is not yet a mechanism
/// to do so.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLonBounds {
    lat: Interval,
    pos_lon: Interval,
    neg_lon: Interval,
}

impl LatLonBounds {
    /// Create a state with no accumulated values
    pub fn empty() -> Self {
        Self {
            lat: Interval::empty(),
            pos_lon: Interval::empty(),
            neg_lon: Interval::empty(),
        }
    }

    /// Widen the extremes to include one coordinate
    ///
    /// Coordinates are `(longitude, latitude)` in degrees, x before y. Both
    /// values must be finite; callers reject NaN before it reaches the state.
    pub fn observe(&mut self, lon: f64, lat: f64) {
        self.lat.update_value(lat);
        if lon >= 0.0 {
            self.pos_lon.update_value(lon);
        } else {
            self.neg_lon.update_value(lon);
        }
    }

    /// Widen this state to include everything another state observed
    pub fn merge_bounds(&mut self, other: &Self) {
        self.lat = self.lat.merge_interval(&other.lat);
        self.pos_lon = self.pos_lon.merge_interval(&other.pos_lon);
        self.neg_lon = self.neg_lon.merge_interval(&other.neg_lon);
    }

    /// True if no coordinate was ever observed
    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }

    /// The latitude interval
    pub fn lat(&self) -> &Interval {
        &self.lat
    }

    /// The interval of longitudes `>= 0`, empty if none was observed
    pub fn pos_lon(&self) -> &Interval {
        &self.pos_lon
    }

    /// The interval of longitudes `< 0`, empty if none was observed
    pub fn neg_lon(&self) -> &Interval {
        &self.neg_lon
    }

    /// Maximum latitude seen
    pub fn top(&self) -> f64 {
        self.lat.hi()
    }

    /// Minimum latitude seen
    pub fn bottom(&self) -> f64 {
        self.lat.lo()
    }

    /// Minimum longitude among longitudes `>= 0`
    pub fn pos_left(&self) -> f64 {
        self.pos_lon.lo()
    }

    /// Maximum longitude among longitudes `>= 0`
    pub fn pos_right(&self) -> f64 {
        self.pos_lon.hi()
    }

    /// Minimum longitude among longitudes `< 0`
    pub fn neg_left(&self) -> f64 {
        self.neg_lon.lo()
    }

    /// Maximum longitude among longitudes `< 0`
    pub fn neg_right(&self) -> f64 {
        self.neg_lon.hi()
    }
}
