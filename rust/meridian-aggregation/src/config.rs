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

/// Substitute geometry for documents lacking the target field
#[derive(Debug, Clone, PartialEq)]
pub enum MissingGeometry {
    /// A well-known-text literal, resolved once at configuration time
    Text(String),
    /// A raw longitude/latitude point in degrees
    Point { lon: f64, lat: f64 },
}

/// Configuration of one geo-bounds aggregation request
///
/// An immutable value constructed once per request. Validation is eager:
/// [crate::aggregation::GeoBoundsAggregation::try_new] resolves `missing`
/// immediately and fails fast on an unparseable substitute, before any
/// document is visited.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoBoundsConfig {
    /// Name of the geometry field to aggregate
    pub field: String,
    /// Report a dateline-crossing envelope when it is narrower
    pub wrap_longitude: bool,
    /// Substitute for documents lacking the field; documents are skipped
    /// silently when this is unset
    pub missing: Option<MissingGeometry>,
}

impl GeoBoundsConfig {
    /// Configuration with default options: wrapped longitudes, no substitute
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            wrap_longitude: true,
            missing: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeoBoundsConfig::new("location");
        assert_eq!(config.field, "location");
        assert!(config.wrap_longitude);
        assert_eq!(config.missing, None);
    }
}
