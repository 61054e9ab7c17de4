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

/// Total JSON representation for interval bounds
///
/// JSON has no literal for the non-finite doubles that represent the empty
/// interval, and serde_json would otherwise flatten them to null. Non-finite
/// bounds are written as the strings "inf", "-inf", and "nan" instead.
mod total_f64 {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Finite(f64),
        Named(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("nan")
        } else if *value > 0.0 {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Finite(value) => Ok(value),
            Repr::Named(name) => match name.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "nan" => Ok(f64::NAN),
                _ => Err(serde::de::Error::custom(format!(
                    "invalid float literal: {name}"
                ))),
            },
        }
    }
}

/// Read access shared by [Interval] and [WraparoundInterval]
pub trait IntervalTrait {
    /// The lower bound
    fn lo(&self) -> f64;

    /// The upper bound
    fn hi(&self) -> f64;

    /// True if no value was ever accumulated into this interval
    fn is_empty(&self) -> bool;

    /// The span covered by this interval (0.0 when empty)
    fn width(&self) -> f64;
}

/// A closed min/max interval over doubles
///
/// The empty interval is `[+inf, -inf]`, which makes [Interval::update_value]
/// and [Interval::merge_interval] plain min/max operations with empty as the
/// identity element. Because min/max of doubles never round, accumulation and
/// merging are exact and order-independent.
///
/// This structure implements Serialize and Deserialize to support passing
/// it between query engine components where there is not yet a mechanism
/// to do so.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(with = "total_f64")]
    lo: f64,
    #[serde(with = "total_f64")]
    hi: f64,
}

impl Interval {
    /// Create an interval containing no values
    pub fn empty() -> Self {
        Self {
            lo: f64::INFINITY,
            hi: f64::NEG_INFINITY,
        }
    }

    /// Create an interval from explicit bounds
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Widen this interval to include a value
    ///
    /// Accumulating the same value twice is a no-op; callers are responsible
    /// for rejecting NaN before it reaches the interval.
    pub fn update_value(&mut self, value: f64) {
        if value < self.lo {
            self.lo = value;
        }
        if value > self.hi {
            self.hi = value;
        }
    }

    /// The union of this interval with another
    ///
    /// Associative and commutative, with [Interval::empty] as the identity.
    pub fn merge_interval(&self, other: &Self) -> Self {
        Self {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }
}

impl IntervalTrait for Interval {
    fn lo(&self) -> f64 {
        self.lo
    }

    fn hi(&self) -> f64 {
        self.hi
    }

    fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.hi - self.lo
        }
    }
}

impl From<(f64, f64)> for Interval {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// A longitude interval that may cross the antimeridian
///
/// Bounds are in degrees in `[-180, 180]`. Unlike [Interval], `lo > hi` is
/// meaningful here: it denotes the wraparound interval
/// `[lo, 180] ∪ [-180, hi]`. The empty interval is the exact `[+inf, -inf]`
/// pair, distinguishing it from any finite wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WraparoundInterval {
    #[serde(with = "total_f64")]
    lo: f64,
    #[serde(with = "total_f64")]
    hi: f64,
}

impl WraparoundInterval {
    /// Create an interval containing no values
    pub fn empty() -> Self {
        Self {
            lo: f64::INFINITY,
            hi: f64::NEG_INFINITY,
        }
    }

    /// Create an interval from explicit bounds
    ///
    /// `lo > hi` denotes an interval crossing the antimeridian.
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// True if this interval crosses the antimeridian
    pub fn wraps(&self) -> bool {
        !self.is_empty() && self.lo > self.hi
    }
}

impl IntervalTrait for WraparoundInterval {
    fn lo(&self) -> f64 {
        self.lo
    }

    fn hi(&self) -> f64 {
        self.hi
    }

    fn is_empty(&self) -> bool {
        self.lo == f64::INFINITY && self.hi == f64::NEG_INFINITY
    }

    fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else if self.lo <= self.hi {
            self.hi - self.lo
        } else {
            360.0 - (self.lo - self.hi)
        }
    }
}

impl From<Interval> for WraparoundInterval {
    fn from(value: Interval) -> Self {
        if value.is_empty() {
            Self::empty()
        } else {
            Self::new(value.lo, value.hi)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn interval_empty_is_identity() {
        let mut interval = Interval::empty();
        assert!(interval.is_empty());
        assert_eq!(interval.width(), 0.0);

        let finite = Interval::new(-10.0, 20.0);
        assert_eq!(finite.merge_interval(&Interval::empty()), finite);
        assert_eq!(Interval::empty().merge_interval(&finite), finite);

        interval.update_value(5.0);
        assert!(!interval.is_empty());
        assert_eq!(interval, Interval::new(5.0, 5.0));
        assert_eq!(interval.width(), 0.0);

        // Repeated identical values don't widen anything
        interval.update_value(5.0);
        assert_eq!(interval, Interval::new(5.0, 5.0));
    }

    #[test]
    fn interval_update_and_merge() {
        let mut interval = Interval::empty();
        interval.update_value(3.0);
        interval.update_value(-7.0);
        interval.update_value(1.0);
        assert_eq!(interval, Interval::new(-7.0, 3.0));
        assert_eq!(interval.width(), 10.0);

        let merged = interval.merge_interval(&Interval::new(-1.0, 12.0));
        assert_eq!(merged, Interval::new(-7.0, 12.0));

        // Merge is commutative and associative
        let a = Interval::new(0.0, 1.0);
        let b = Interval::new(-5.0, -2.0);
        let c = Interval::new(0.5, 9.0);
        assert_eq!(a.merge_interval(&b), b.merge_interval(&a));
        assert_eq!(
            a.merge_interval(&b).merge_interval(&c),
            a.merge_interval(&b.merge_interval(&c))
        );
    }

    #[test]
    fn wraparound_widths() {
        let plain = WraparoundInterval::new(-10.0, 20.0);
        assert!(!plain.wraps());
        assert_eq!(plain.width(), 30.0);

        let wrapped = WraparoundInterval::new(170.0, -170.0);
        assert!(wrapped.wraps());
        assert_eq!(wrapped.width(), 20.0);

        assert!(WraparoundInterval::empty().is_empty());
        assert!(!WraparoundInterval::empty().wraps());
        assert_eq!(WraparoundInterval::empty().width(), 0.0);
    }

    #[test]
    fn wraparound_from_interval() {
        let finite: WraparoundInterval = Interval::new(3.0, 4.0).into();
        assert_eq!(finite, WraparoundInterval::new(3.0, 4.0));
        assert!(!finite.wraps());

        let empty: WraparoundInterval = Interval::empty().into();
        assert!(empty.is_empty());
    }

    #[test]
    fn serialize_deserialize() {
        let interval = Interval::new(10.0 / 17.0, 20.0 / 13.0);
        let json_bytes = serde_json::to_vec(&interval).unwrap();
        let roundtrip: Interval = serde_json::from_slice(&json_bytes).unwrap();
        assert_eq!(interval, roundtrip);

        // The infinite empty bounds survive JSON
        let empty_bytes = serde_json::to_vec(&Interval::empty()).unwrap();
        let empty_roundtrip: Interval = serde_json::from_slice(&empty_bytes).unwrap();
        assert!(empty_roundtrip.is_empty());
    }
}
