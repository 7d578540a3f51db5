use crate::attribute::{AttrSet, Attribute};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

/// A functional dependency `left -> right`.
///
/// Both sides are stored as attribute sets, so an FD built from an ordered
/// sequence compares equal to one built from a set of the same attributes.
#[derive(
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Constructor,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Fd {
    pub left: AttrSet,
    pub right: AttrSet,
}

impl Fd {
    /// Build an FD from attribute sequences. Duplicates collapse.
    pub fn of<L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator,
        L::Item: Into<Attribute>,
        R: IntoIterator,
        R::Item: Into<Attribute>,
    {
        Self {
            left: left.into_iter().map(Into::into).collect(),
            right: right.into_iter().map(Into::into).collect(),
        }
    }

    /// All attributes mentioned on either side.
    pub fn attrs(&self) -> AttrSet {
        self.left.union(&self.right).cloned().collect()
    }

    /// An FD is trivial iff its right side is contained in its left side.
    pub fn is_trivial(&self) -> bool {
        self.right.is_subset(&self.left)
    }
}

impl fmt::Display for Fd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.left, self.right)
    }
}

/// A set of FDs with set semantics over structural FD equality.
#[derive(
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Constructor,
    derive_more::Deref,
    derive_more::DerefMut,
    derive_more::AsRef,
    derive_more::AsMut,
    derive_more::From,
    derive_more::IntoIterator,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[from(forward)]
#[as_ref(forward)]
#[as_mut(forward)]
pub struct FdSet(pub BTreeSet<Fd>);

impl FdSet {
    /// The attribute universe of the set.
    pub fn attrs(&self) -> AttrSet {
        let mut ans = AttrSet::default();
        for fd in self.iter() {
            ans.extend(fd.left.iter().cloned());
            ans.extend(fd.right.iter().cloned());
        }
        ans
    }
}

impl FromIterator<Fd> for FdSet {
    fn from_iter<T: IntoIterator<Item = Fd>>(iter: T) -> Self {
        Self(BTreeSet::from_iter(iter))
    }
}

impl fmt::Display for FdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(none)");
        }

        for (i, fd) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{fd}")?;
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! fd {
    ($($l: literal)+ => $($r: literal)+) => {{
        let mut left = $crate::attribute::AttrSet::default();
        $(
            left.insert($crate::attribute::Attribute::from($l));
        )+
        let mut right = $crate::attribute::AttrSet::default();
        $(
            right.insert($crate::attribute::Attribute::from($r));
        )+
        $crate::fd::Fd::new(left, right)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attrs, fd};

    #[test]
    fn test_display() {
        assert_eq!("A -> B", format!("{}", fd!("A" => "B")));
        assert_eq!("A B -> C D", format!("{}", fd!("B" "A" => "D" "C")));
        assert_eq!(
            "A -> B, B -> C",
            format!("{}", FdSet::from([fd!("B" => "C"), fd!("A" => "B")]))
        );
        assert_eq!("(none)", format!("{}", FdSet::default()));
    }

    #[test]
    fn test_sequence_and_set_forms_are_equal() {
        assert_eq!(Fd::of(["B", "A", "A"], ["C"]), fd!("A" "B" => "C"));
        assert_eq!(
            Fd::new(attrs!("A" "E"), attrs!("D")),
            Fd::of(["E", "A"], ["D"])
        );
    }

    #[test]
    fn test_is_trivial() {
        assert!(fd!("A" "B" => "A").is_trivial());
        assert!(fd!("A" "B" => "A" "B").is_trivial());
        assert!(!fd!("A" "B" => "C").is_trivial());
        assert!(!fd!("A" => "A" "B").is_trivial());
    }

    #[test]
    fn test_attrs() {
        assert_eq!(fd!("A" "E" => "D").attrs(), attrs!("A" "D" "E"));
        let fds = FdSet::from([fd!("A" => "B"), fd!("B" => "C")]);
        assert_eq!(fds.attrs(), attrs!("A" "B" "C"));
    }

    #[test]
    fn test_set_semantics() {
        let fds = FdSet::from([fd!("A" => "B"), Fd::of(["A"], ["B", "B"])]);
        assert_eq!(fds.len(), 1);
    }
}
