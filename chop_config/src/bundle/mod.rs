//! Bundles of configuration fragments and the layering used to build them.
//!
//! A [`Bundle`] is assembled by pushing [`FragmentLayer`] values onto a
//! [`BundleComposer`] and folding them with [`merge_fragments`]. Each fragment
//! keeps the [`FragmentSource`] of the layer that supplied its final content,
//! so callers can tell generated fragments from overrides.

mod composer;
mod layer;
mod merge;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Serialize, Serializer};

use crate::{Fragments, Scope};

pub use composer::BundleComposer;
pub use layer::{FragmentLayer, FragmentSource};
pub use merge::merge_fragments;

/// Content of a single bundle entry along with its provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fragment {
    content: String,
    source: FragmentSource,
}

impl Fragment {
    pub(crate) const fn new(content: String, source: FragmentSource) -> Self {
        Self { content, source }
    }

    /// Fragment content, never interpreted by the aggregator.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Layer that supplied the content.
    #[must_use]
    pub const fn source(&self) -> FragmentSource {
        self.source
    }
}

/// The complete set of fragments for one scope, keyed by filename.
///
/// Iteration follows filename order, so two bundles built from the same
/// inputs are identical entry for entry. Serialises as a plain
/// filename-to-content map.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bundle {
    scope: Scope,
    entries: BTreeMap<String, Fragment>,
    shadowed: BTreeSet<String>,
}

impl Bundle {
    pub(crate) const fn new(
        scope: Scope,
        entries: BTreeMap<String, Fragment>,
        shadowed: BTreeSet<String>,
    ) -> Self {
        Self {
            scope,
            entries,
            shadowed,
        }
    }

    /// Scope the bundle was assembled for.
    #[must_use]
    pub const fn scope(&self) -> Scope {
        self.scope
    }

    /// Content stored under `filename`.
    #[must_use]
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.entries.get(filename).map(Fragment::content)
    }

    /// Fragment stored under `filename`, including its provenance.
    #[must_use]
    pub fn fragment(&self, filename: &str) -> Option<&Fragment> {
        self.entries.get(filename)
    }

    /// Provenance of the content stored under `filename`.
    #[must_use]
    pub fn source(&self, filename: &str) -> Option<FragmentSource> {
        self.entries.get(filename).map(Fragment::source)
    }

    /// Whether the bundle holds `filename`.
    #[must_use]
    pub fn contains(&self, filename: &str) -> bool {
        self.entries.contains_key(filename)
    }

    /// Number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle holds no fragments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(filename, content)` pairs in filename order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(filename, fragment)| (filename.as_str(), fragment.content()))
    }

    /// Iterate over filenames in order.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Filenames whose generated content was replaced by an override.
    pub fn shadowed(&self) -> impl Iterator<Item = &str> {
        self.shadowed.iter().map(String::as_str)
    }

    /// Consume the bundle, returning the filename-to-content mapping.
    #[must_use]
    pub fn into_map(self) -> Fragments {
        self.entries
            .into_iter()
            .map(|(filename, fragment)| (filename, fragment.content))
            .collect()
    }
}

impl IntoIterator for Bundle {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_map().into_iter()
    }
}

impl From<Bundle> for Fragments {
    fn from(bundle: Bundle) -> Self {
        bundle.into_map()
    }
}

impl Serialize for Bundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
