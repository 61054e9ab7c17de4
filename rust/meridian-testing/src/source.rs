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
    collector::GeometryValues,
    error::{MeridianAggregationError, Result},
};

use crate::create::make_wkb_values;

/// In-memory [GeometryValues] over one segment's optional WKB values
///
/// Stands in for the document store in tests: index `i` is document id `i`,
/// and `None` is a document without a value for the field.
pub struct MemoryGeometryValues {
    docs: Vec<Option<Vec<u8>>>,
    current: Option<usize>,
}

impl MemoryGeometryValues {
    pub fn new(docs: Vec<Option<Vec<u8>>>) -> Self {
        Self {
            docs,
            current: None,
        }
    }

    /// Build a segment from WKT literals; `None` is a valueless document
    pub fn from_wkt(wkt_values: &[Option<&str>]) -> Self {
        Self::new(make_wkb_values(wkt_values))
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl GeometryValues for MemoryGeometryValues {
    fn advance(&mut self, doc_id: u32) -> Result<bool> {
        match self.docs.get(doc_id as usize) {
            Some(Some(_)) => {
                self.current = Some(doc_id as usize);
                Ok(true)
            }
            Some(None) => {
                self.current = None;
                Ok(false)
            }
            None => Err(MeridianAggregationError::Store(format!(
                "document {doc_id} out of segment range"
            ))),
        }
    }

    fn current(&self) -> &[u8] {
        let doc = self.current.expect("advance returned true");
        self.docs[doc].as_deref().expect("advance returned true")
    }
}
