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
use meridian_geometry::error::MeridianGeometryError;
use thiserror::Error;

/// Convenience alias used throughout the aggregation
pub type Result<T, E = MeridianAggregationError> = std::result::Result<T, E>;

/// Errors surfaced by the geo-bounds aggregation
///
/// All variants are fatal to the aggregation request that raised them;
/// retries, if any, belong to the query-execution layer above.
#[derive(Error, Debug)]
pub enum MeridianAggregationError {
    /// An encoded geometry's kind is outside the supported closed set
    #[error("Unsupported geometry kind: {0}")]
    UnsupportedGeometryKind(String),

    /// The configured substitute value does not resolve to a geometry
    ///
    /// Raised once at configuration time, before any document is visited.
    #[error("Unknown geometry type: {0}")]
    InvalidMissingValue(String),

    /// A decoded coordinate is non-finite
    #[error("Invalid coordinate ({0}, {1})")]
    InvalidCoordinate(f64, f64),

    /// A geometry failed to decode
    #[error(transparent)]
    Geometry(MeridianGeometryError),

    /// The document store failed to provide a field value
    #[error("{0}")]
    Store(String),

    /// An invariant breach inside the aggregation itself
    #[error("Internal aggregation error: {0}")]
    Internal(String),
}

impl From<MeridianGeometryError> for MeridianAggregationError {
    fn from(value: MeridianGeometryError) -> Self {
        match value {
            MeridianGeometryError::Unsupported(kind) => Self::UnsupportedGeometryKind(kind),
            MeridianGeometryError::NonFiniteCoordinate(lon, lat) => {
                Self::InvalidCoordinate(lon, lat)
            }
            other => Self::Geometry(other),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn errors() {
        let missing = MeridianAggregationError::InvalidMissingValue("invalid".to_string());
        assert!(missing.to_string().starts_with("Unknown geometry type"));

        let coordinate = MeridianAggregationError::InvalidCoordinate(f64::NAN, 2.0);
        assert_eq!(coordinate.to_string(), "Invalid coordinate (NaN, 2)");
    }

    #[test]
    fn geometry_errors_are_classified() {
        let unsupported: MeridianAggregationError =
            MeridianGeometryError::Unsupported("Rect".to_string()).into();
        assert!(matches!(
            unsupported,
            MeridianAggregationError::UnsupportedGeometryKind(_)
        ));

        let non_finite: MeridianAggregationError =
            MeridianGeometryError::NonFiniteCoordinate(f64::NAN, 1.0).into();
        assert!(matches!(
            non_finite,
            MeridianAggregationError::InvalidCoordinate(_, _)
        ));

        let invalid: MeridianAggregationError =
            MeridianGeometryError::Invalid("bad".to_string()).into();
        assert!(matches!(invalid, MeridianAggregationError::Geometry(_)));
    }
}
