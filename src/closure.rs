//! Armstrong's axioms (reflexivity, augmentation, transitivity) driven to
//! fixpoint over a finite attribute universe.

use crate::{
    attribute::AttrSet,
    fd::{Fd, FdSet},
    utils::power_set,
};
use itertools::Itertools;
use ref_cast::RefCast;

/// All trivial FDs derivable from the left sides of `fds` by reflexivity.
///
/// For each `L -> R` in `fds`, emits `L -> X` for every non-empty `X`
/// contained in `L`. FDs with an empty right side are vacuous and excluded.
pub fn trivial(fds: &FdSet) -> FdSet {
    let mut ans = FdSet::default();
    for fd in fds.iter() {
        for sub in power_set(&fd.left.0) {
            if sub.is_empty() {
                continue;
            }
            ans.insert(Fd::new(fd.left.clone(), AttrSet::from(sub)));
        }
    }
    ans
}

/// Augment every FD in `fds` with the given attributes on both sides.
pub fn augment(fds: &FdSet, attrs: &AttrSet) -> FdSet {
    fds.iter()
        .map(|fd| {
            Fd::new(
                fd.left.union(attrs).cloned().collect(),
                fd.right.union(attrs).cloned().collect(),
            )
        })
        .collect()
}

/// Exhaustively chain FDs whose right side equals another's left side.
///
/// The join point requires set equality; subset chaining is left to
/// [`fd_set_closure`], which feeds augmented FDs back in. Returns only the
/// newly derived FDs, the input set excluded.
pub fn transitive(fds: &FdSet) -> FdSet {
    let mut derived = fds.clone();
    loop {
        let start_size = derived.len();
        let chained: Vec<Fd> = derived
            .iter()
            .cartesian_product(derived.iter())
            .filter(|(f1, f2)| f1 != f2 && f1.right == f2.left)
            .map(|(f1, f2)| Fd::new(f1.left.clone(), f2.right.clone()))
            .collect();
        derived.extend(chained);
        if derived.len() == start_size {
            break;
        }
    }
    derived.difference(fds).cloned().collect()
}

/// The Armstrong closure of `fds`: the smallest FD set containing `fds` and
/// closed under the three axioms.
///
/// Brute force: folds in [`trivial`], [`augment`] over every subset of the
/// attribute universe, and [`transitive`] until the set stops growing. The
/// FD count over a finite universe is bounded, so the fixpoint terminates.
/// Cost is doubly exponential in the universe size; keep it small.
pub fn fd_set_closure(fds: &FdSet) -> FdSet {
    let mut closure = fds.clone();
    let universe = closure.attrs();
    let subsets = power_set(&universe.0);
    loop {
        let start_size = closure.len();
        let trivial_fds = trivial(&closure);
        closure.extend(trivial_fds);
        for attrs in &subsets {
            let augmented = augment(&closure, AttrSet::ref_cast(attrs));
            closure.extend(augmented);
        }
        let transitive_fds = transitive(&closure);
        closure.extend(transitive_fds);
        if closure.len() == start_size {
            break;
        }
    }
    closure
}

/// The set of attributes functionally determined by `seed` under `fds`.
pub fn attr_closure(seed: &AttrSet, fds: &FdSet) -> AttrSet {
    let mut closure = seed.clone();
    loop {
        let start_size = closure.len();
        for fd in fds.iter() {
            if fd.left.is_subset(&closure) {
                closure.extend(fd.right.iter().cloned());
            }
        }
        if closure.len() == start_size {
            break;
        }
    }
    closure
}
