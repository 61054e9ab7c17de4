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
use meridian_aggregation::{
    accumulator::GeoBoundsAccumulator, aggregation::GeoBoundsAggregation, bounds::GeoBoundingBox,
    config::GeoBoundsConfig, error::Result,
};
use meridian_geometry::bounding_box::LatLonBounds;

use crate::source::MemoryGeometryValues;

/// Drives a geo-bounds aggregation the way the engine does
///
/// Each segment gets its own collector; every finished segment state is
/// serialized and folded into a single reducing accumulator through the
/// wire-bytes path, exercising all the pieces of the aggregation in a
/// predictable way before the envelope is resolved.
#[derive(Debug)]
pub struct GeoBoundsTester {
    aggregation: GeoBoundsAggregation,
}

impl GeoBoundsTester {
    /// Create a tester, validating the configuration eagerly
    pub fn new(config: GeoBoundsConfig) -> Result<Self> {
        Ok(Self {
            aggregation: GeoBoundsAggregation::try_new(config)?,
        })
    }

    /// The aggregation under test
    pub fn aggregation(&self) -> &GeoBoundsAggregation {
        &self.aggregation
    }

    /// Collect each WKT segment and reduce all states into one
    ///
    /// `None` entries are documents without a value for the field.
    pub fn partial_wkt(&self, segments: &[Vec<Option<&str>>]) -> Result<LatLonBounds> {
        let mut reducer = GeoBoundsAccumulator::new();
        for segment in segments {
            let values = MemoryGeometryValues::from_wkt(segment);
            let num_docs = values.len() as u32;
            let mut collector = self.aggregation.collector(values);
            for doc_id in 0..num_docs {
                collector.collect(doc_id)?;
            }

            let bounds = collector.finish();
            let state =
                serde_json::to_vec(&bounds).expect("bounds state serializes");
            reducer.merge_state(&state)?;
        }
        Ok(reducer.into_bounds())
    }

    /// Aggregate WKT segments all the way to the final envelope
    pub fn aggregate_wkt(&self, segments: &[Vec<Option<&str>>]) -> Result<GeoBoundingBox> {
        let merged = self.partial_wkt(segments)?;
        Ok(self.aggregation.finish(&merged))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn two_segments_round_trip() {
        let tester = GeoBoundsTester::new(GeoBoundsConfig::new("geometry")).unwrap();
        let envelope = tester
            .aggregate_wkt(&[
                vec![Some("POINT (10 20)"), None],
                vec![Some("POINT (-30 -40)")],
            ])
            .unwrap();
        assert!(envelope.has_value());
        assert_eq!(envelope.top, 20.0);
        assert_eq!(envelope.bottom, -40.0);
        assert_eq!(envelope.left, -30.0);
        assert_eq!(envelope.right, 10.0);
    }
}
