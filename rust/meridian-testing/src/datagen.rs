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
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `count` random `(lon, lat)` points covering the whole globe
///
/// Seeded for deterministic test data.
pub fn random_points(seed: u64, count: usize) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let lon_dist = Uniform::new(-180.0, 180.0);
    let lat_dist = Uniform::new(-90.0, 90.0);
    (0..count)
        .map(|_| (rng.sample(lon_dist), rng.sample(lat_dist)))
        .collect()
}

/// Generate random points clustered within `half_width` degrees of longitude
/// around `center_lon`, normalized into `[-180, 180)`
pub fn random_points_near(
    seed: u64,
    count: usize,
    center_lon: f64,
    half_width: f64,
) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let offset_dist = Uniform::new(-half_width, half_width);
    let lat_dist = Uniform::new(-90.0, 90.0);
    (0..count)
        .map(|_| {
            let mut lon = center_lon + rng.sample(offset_dist);
            if lon >= 180.0 {
                lon -= 360.0;
            } else if lon < -180.0 {
                lon += 360.0;
            }
            (lon, rng.sample(lat_dist))
        })
        .collect()
}

/// WKT literal for one point
pub fn point_wkt(lon: f64, lat: f64) -> String {
    format!("POINT ({lon} {lat})")
}

/// WKT literal for a multipoint
pub fn multipoint_wkt(points: &[(f64, f64)]) -> String {
    let body = points
        .iter()
        .map(|(lon, lat)| format!("{lon} {lat}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("MULTIPOINT ({body})")
}
