//! The two name-based inputs of the engine.
//!
//! [`KnownVariables`] is the compile-time set of legal variable names.
//! [`Bindings`] supplies a value for each of them at evaluation time and must
//! cover every variable the expression was compiled with.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Set of variable names an expression may reference.
pub trait KnownVariables {
    fn contains(&self, name: &str) -> bool;
}

/// Variable values for one evaluation.
pub trait Bindings {
    fn get(&self, name: &str) -> Option<f64>;
}

impl<T: KnownVariables + ?Sized> KnownVariables for &T {
    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }
}

impl<S, H> KnownVariables for HashSet<S, H>
where
    S: Borrow<str> + Eq + Hash,
    H: BuildHasher,
{
    fn contains(&self, name: &str) -> bool {
        HashSet::contains(self, name)
    }
}

impl<S, H> KnownVariables for hashbrown::HashSet<S, H>
where
    S: Borrow<str> + Eq + Hash,
    H: BuildHasher,
{
    fn contains(&self, name: &str) -> bool {
        hashbrown::HashSet::contains(self, name)
    }
}

impl<S: Borrow<str> + Ord> KnownVariables for BTreeSet<S> {
    fn contains(&self, name: &str) -> bool {
        BTreeSet::contains(self, name)
    }
}

impl<S: AsRef<str>> KnownVariables for [S] {
    fn contains(&self, name: &str) -> bool {
        self.iter().any(|known| known.as_ref() == name)
    }
}

impl<S: AsRef<str>, const N: usize> KnownVariables for [S; N] {
    fn contains(&self, name: &str) -> bool {
        KnownVariables::contains(self.as_slice(), name)
    }
}

impl<S: AsRef<str>> KnownVariables for Vec<S> {
    fn contains(&self, name: &str) -> bool {
        KnownVariables::contains(self.as_slice(), name)
    }
}

/// No bindings at all, for expressions without variables.
impl Bindings for () {
    fn get(&self, _name: &str) -> Option<f64> {
        None
    }
}

impl<T: Bindings + ?Sized> Bindings for &T {
    fn get(&self, name: &str) -> Option<f64> {
        (**self).get(name)
    }
}

impl<S, H> Bindings for HashMap<S, f64, H>
where
    S: Borrow<str> + Eq + Hash,
    H: BuildHasher,
{
    fn get(&self, name: &str) -> Option<f64> {
        HashMap::get(self, name).copied()
    }
}

impl<S, H> Bindings for hashbrown::HashMap<S, f64, H>
where
    S: Borrow<str> + Eq + Hash,
    H: BuildHasher,
{
    fn get(&self, name: &str) -> Option<f64> {
        hashbrown::HashMap::get(self, name).copied()
    }
}

impl<S: Borrow<str> + Ord> Bindings for BTreeMap<S, f64> {
    fn get(&self, name: &str) -> Option<f64> {
        BTreeMap::get(self, name).copied()
    }
}

impl<S: AsRef<str>> Bindings for [(S, f64)] {
    fn get(&self, name: &str) -> Option<f64> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| *value)
    }
}

impl<S: AsRef<str>, const N: usize> Bindings for [(S, f64); N] {
    fn get(&self, name: &str) -> Option<f64> {
        Bindings::get(self.as_slice(), name)
    }
}

impl<S: AsRef<str>> Bindings for Vec<(S, f64)> {
    fn get(&self, name: &str) -> Option<f64> {
        Bindings::get(self.as_slice(), name)
    }
}
