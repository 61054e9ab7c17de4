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
use std::str::FromStr;

use meridian_geometry::wkb_factory::wkb_point;
use wkb::{writer::WriteOptions, Endianness};
use wkt::Wkt;

use crate::{
    config::MissingGeometry,
    error::{MeridianAggregationError, Result},
};

/// Resolve the configured substitute value to encoded geometry bytes
///
/// Runs exactly once per aggregation; the resulting WKB is cached and shared
/// by every segment collector. An unparseable textual value fails here with
/// [MeridianAggregationError::InvalidMissingValue] rather than per document.
pub(crate) fn resolve_missing(missing: &MissingGeometry) -> Result<Vec<u8>> {
    match missing {
        MissingGeometry::Text(text) => {
            let wkt = Wkt::<f64>::from_str(text)
                .map_err(|_| MeridianAggregationError::InvalidMissingValue(text.clone()))?;
            let mut out = Vec::new();
            wkb::writer::write_geometry(
                &mut out,
                &wkt,
                &WriteOptions {
                    endianness: Endianness::LittleEndian,
                },
            )
            .map_err(|_| MeridianAggregationError::InvalidMissingValue(text.clone()))?;
            Ok(out)
        }
        MissingGeometry::Point { lon, lat } => {
            if !lon.is_finite() || !lat.is_finite() {
                return Err(MeridianAggregationError::InvalidCoordinate(*lon, *lat));
            }
            Ok(wkb_point((*lon, *lat))?)
        }
    }
}
