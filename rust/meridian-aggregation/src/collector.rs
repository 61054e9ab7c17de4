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

use log::debug;
use meridian_geometry::bounding_box::LatLonBounds;

use crate::{accumulator::GeoBoundsAccumulator, error::Result};

/// Per-segment access to a stored geometry field
///
/// Implemented by the document store, which owns decoding and per-segment
/// layout. The contract mirrors a forward doc-values iterator:
/// [GeometryValues::advance] positions the reader on a document and reports
/// whether it carries a value; [GeometryValues::current] is only meaningful
/// after `advance` returned `true` and stays valid until the next `advance`.
pub trait GeometryValues {
    /// Position the reader on `doc_id`, returning whether the document has a
    /// value for the field
    fn advance(&mut self, doc_id: u32) -> Result<bool>;

    /// The encoded (WKB) geometry of the current document
    fn current(&self) -> &[u8];
}

/// Scans one segment's matching documents into a partial bounds state
///
/// One collector exists per segment and exclusively owns its accumulator for
/// the duration of the scan; nothing is shared across segment threads except
/// the immutable cached substitute geometry. [GeoBoundsCollector::finish]
/// hands off the state, after which no further mutation is possible.
pub struct GeoBoundsCollector<V> {
    values: V,
    missing: Option<Arc<[u8]>>,
    accumulator: GeoBoundsAccumulator,
    docs_seen: u64,
}

impl<V: GeometryValues> GeoBoundsCollector<V> {
    pub(crate) fn new(values: V, missing: Option<Arc<[u8]>>) -> Self {
        Self {
            values,
            missing,
            accumulator: GeoBoundsAccumulator::new(),
            docs_seen: 0,
        }
    }

    /// Fold one matching document into the segment's partial state
    ///
    /// A document lacking the field uses the configured substitute geometry,
    /// or contributes nothing when none is configured. Decode failures,
    /// unsupported geometry kinds, and non-finite coordinates abort the scan.
    pub fn collect(&mut self, doc_id: u32) -> Result<()> {
        if self.values.advance(doc_id)? {
            self.accumulator.update_wkb(self.values.current())?;
        } else if let Some(missing) = &self.missing {
            self.accumulator.update_wkb(missing)?;
        }

        self.docs_seen += 1;
        Ok(())
    }

    /// Finish the scan, yielding this segment's immutable partial state
    pub fn finish(self) -> LatLonBounds {
        debug!(
            "geo-bounds segment scan done: {} docs, empty={}",
            self.docs_seen,
            self.accumulator.bounds().is_empty()
        );
        self.accumulator.into_bounds()
    }
}
