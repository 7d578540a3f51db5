use super::*;
use crate::{attrs, fd};
use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// S(A, B, C, D) with A -> B, B -> C. Not in BCNF: {B} is not a superkey.
pub(crate) static FIXTURE_CHAIN: Lazy<(AttrSet, FdSet)> = Lazy::new(|| {
    (
        attrs!("A" "B" "C" "D"),
        FdSet::from([fd!("A" => "B"), fd!("B" => "C")]),
    )
});

/// U(A, B, C, D, E) with AE -> D, AB -> C, D -> B. The only key is {A, E}.
pub(crate) static FIXTURE_COURSE: Lazy<(AttrSet, FdSet)> = Lazy::new(|| {
    (
        attrs!("A" "B" "C" "D" "E"),
        FdSet::from([fd!("A" "E" => "D"), fd!("A" "B" => "C"), fd!("D" => "B")]),
    )
});

/// Check the BCNF decomposition invariants: every output schema is in BCNF
/// under the projection of the closure onto it, and the schemas cover the
/// original relation.
pub(crate) fn assert_bcnf_cover(rel: &AttrSet, fds: &FdSet, schemas: &BTreeSet<AttrSet>) {
    let closure = fd_set_closure(fds);
    let mut union = AttrSet::default();
    for schema in schemas {
        let projected: FdSet = closure
            .iter()
            .filter(|fd| fd.attrs().is_subset(schema))
            .cloned()
            .collect();
        assert!(
            is_bcnf(schema, &projected).unwrap(),
            "schema {{{schema}}} is not in BCNF"
        );
        union.extend(schema.iter().cloned());
    }
    assert_eq!(union, *rel, "schemas do not cover the original relation");
}
