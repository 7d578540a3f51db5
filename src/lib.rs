#[macro_use]
extern crate tracing;

use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, time::Duration};

pub mod closure;
pub mod normalize;
pub mod utils;

pub mod attribute;
pub use attribute::{AttrSet, Attribute};

pub mod fd;
pub use fd::{Fd, FdSet};

#[cfg(test)]
pub(crate) mod tests;

pub use closure::{attr_closure, fd_set_closure};
pub use normalize::{bcnf_decompose, bcnf_decompose_tree, find_superkeys, is_bcnf, DecomposeTree};

/// Outcome of normalizing one schema, as emitted by the driver.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct NormalizeResult {
    #[serde(with = "serde_time")]
    pub decompose_time: Duration,
    pub schemas: BTreeSet<AttrSet>,
    pub num_of_schemas: usize,
}

mod serde_time {
    use super::*;
    use serde::{de::Deserializer, ser::Serializer};

    pub fn serialize<S: Serializer>(t: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(t.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let t = <f64>::deserialize(d)?;
        Ok(Duration::from_secs_f64(t))
    }
}
