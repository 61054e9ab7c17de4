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

use wkb::{writer::WriteOptions, Endianness};
use wkt::Wkt;

/// Create a WKB from a WKT string.
///
/// Panics on invalid WKT.
pub fn make_wkb(wkt_value: &str) -> Vec<u8> {
    let geom = Wkt::<f64>::from_str(wkt_value).unwrap();
    let mut out: Vec<u8> = vec![];
    wkb::writer::write_geometry(
        &mut out,
        &geom,
        &WriteOptions {
            endianness: Endianness::LittleEndian,
        },
    )
    .unwrap();
    out
}

/// Create per-document WKB values from a sequence of WKT literals
///
/// `None` stands for a document with no value for the field. Panics on
/// invalid WKT.
pub fn make_wkb_values(wkt_values: &[Option<&str>]) -> Vec<Option<Vec<u8>>> {
    wkt_values
        .iter()
        .map(|maybe_wkt| maybe_wkt.map(make_wkb))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use meridian_geometry::bounds::wkb_bounds_latlon;

    #[test]
    fn wkt_to_wkb() {
        let wkb_value = make_wkb("POINT (30 -20)");
        let bounds = wkb_bounds_latlon(&wkb_value).unwrap();
        assert_eq!(bounds.pos_left(), 30.0);
        assert_eq!(bounds.bottom(), -20.0);
    }

    #[test]
    fn values_preserve_missing_slots() {
        let values = make_wkb_values(&[Some("POINT (0 0)"), None]);
        assert!(values[0].is_some());
        assert!(values[1].is_none());
    }
}
