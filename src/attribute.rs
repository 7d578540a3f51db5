use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

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
    derive_more::Display,
    derive_more::Constructor,
    derive_more::Deref,
    derive_more::DerefMut,
    derive_more::AsRef,
    derive_more::AsMut,
    derive_more::From,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[as_ref(forward)]
#[as_mut(forward)]
#[from(forward)]
pub struct Attribute(pub String);

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
    derive_more::Deref,
    derive_more::DerefMut,
    derive_more::AsRef,
    derive_more::AsMut,
    derive_more::From,
    derive_more::IntoIterator,
    ref_cast::RefCast,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[from(forward)]
#[as_ref(forward)]
#[as_mut(forward)]
#[repr(transparent)]
pub struct AttrSet(pub BTreeSet<Attribute>);

impl FromIterator<Attribute> for AttrSet {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for AttrSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self(iter.into_iter().map(Attribute::from).collect())
    }
}

impl fmt::Display for AttrSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attr) in self.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{attr}")?;
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! attrs {
    () => {
        $crate::attribute::AttrSet::default()
    };
    ($($x: literal)+) => {{
        let mut s = $crate::attribute::AttrSet::default();
        $(
            s.insert($crate::attribute::Attribute::from($x));
        )+
        s
    }};
}
