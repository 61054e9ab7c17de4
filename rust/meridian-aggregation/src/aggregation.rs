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
use std::sync::Arc;

use meridian_geometry::bounding_box::LatLonBounds;

use crate::{
    bounds::GeoBoundingBox,
    collector::{GeoBoundsCollector, GeometryValues},
    config::GeoBoundsConfig,
    error::Result,
    missing::resolve_missing,
};

/// A configured geo-bounds aggregation
///
/// Constructed explicitly per request (there is no process-wide registry).
/// The aggregation hands out one [GeoBoundsCollector] per segment; segments
/// run independently, each owning its collector, and their finished states
/// are folded by [GeoBoundsAggregation::reduce] before
/// [GeoBoundsAggregation::finish] resolves the final envelope.
#[derive(Debug, Clone)]
pub struct GeoBoundsAggregation {
    config: GeoBoundsConfig,
    missing_wkb: Option<Arc<[u8]>>,
}

impl GeoBoundsAggregation {
    /// Create an aggregation, validating the configuration eagerly
    ///
    /// An unparseable `missing` substitute fails here, once, before any
    /// document is visited.
    pub fn try_new(config: GeoBoundsConfig) -> Result<Self> {
        let missing_wkb = match &config.missing {
            Some(missing) => Some(Arc::from(resolve_missing(missing)?)),
            None => None,
        };
        Ok(Self {
            config,
            missing_wkb,
        })
    }

    /// The field this aggregation reads
    pub fn field(&self) -> &str {
        &self.config.field
    }

    /// Whether the final envelope may cross the antimeridian
    pub fn wrap_longitude(&self) -> bool {
        self.config.wrap_longitude
    }

    /// Create the collector for one segment's scan
    pub fn collector<V: GeometryValues>(&self, values: V) -> GeoBoundsCollector<V> {
        GeoBoundsCollector::new(values, self.missing_wkb.clone())
    }

    /// Fold any number of partial states into one
    ///
    /// Merge is associative and commutative, so flat and tree reductions of
    /// the same states produce identical results.
    pub fn reduce<I: IntoIterator<Item = LatLonBounds>>(&self, states: I) -> LatLonBounds {
        let mut merged = LatLonBounds::empty();
        for state in states {
            merged.merge_bounds(&state);
        }
        merged
    }

    /// Resolve the final envelope from the fully merged state
    pub fn finish(&self, bounds: &LatLonBounds) -> GeoBoundingBox {
        GeoBoundingBox::resolve(bounds, self.config.wrap_longitude)
    }
}
