//! Serialization of Dfp.
//! A number is serialized as its decimal string.

use crate::num::Dfp;
use serde::{Serialize, Serializer};

impl Serialize for Dfp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
