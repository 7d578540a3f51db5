use anyhow::{Error, Result};
use itertools::Itertools;
use std::collections::BTreeSet;
use tracing_subscriber::EnvFilter;

pub fn init_tracing_subscriber(default_filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(Error::msg)
}

/// All subsets of the input set, the empty set and the full set included.
pub fn power_set<T: Ord + Clone>(set: &BTreeSet<T>) -> BTreeSet<BTreeSet<T>> {
    set.iter()
        .cloned()
        .powerset()
        .map(BTreeSet::from_iter)
        .collect()
}
