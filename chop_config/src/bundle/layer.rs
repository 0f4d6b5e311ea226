//! Fragment layers and their provenance.

use crate::{Fragments, Section};

/// Origin of a fragment within a bundle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FragmentSource {
    /// Rendered from a named section under its generated filename.
    Generated(Section),
    /// Extra file supplied by the content provider for the scope.
    Files,
    /// Operator-authored override.
    Override,
}

impl FragmentSource {
    /// Whether the fragment was produced by the content provider rather than
    /// supplied as an override.
    #[must_use]
    pub const fn is_generated(self) -> bool {
        !matches!(self, Self::Override)
    }
}

/// A set of fragments contributed by a single source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FragmentLayer {
    source: FragmentSource,
    fragments: Fragments,
}

impl FragmentLayer {
    /// Construct a layer holding the rendered content of `section`.
    #[must_use]
    pub fn section(section: Section, content: String) -> Self {
        Self {
            source: FragmentSource::Generated(section),
            fragments: Fragments::from([(section.fragment_filename(), content)]),
        }
    }

    /// Construct a layer of extra files supplied by the content provider.
    #[must_use]
    pub const fn files(fragments: Fragments) -> Self {
        Self {
            source: FragmentSource::Files,
            fragments,
        }
    }

    /// Construct a layer of operator overrides.
    #[must_use]
    pub const fn overrides(fragments: Fragments) -> Self {
        Self {
            source: FragmentSource::Override,
            fragments,
        }
    }

    /// Returns the provenance of the layer.
    #[must_use]
    pub const fn source(&self) -> FragmentSource {
        self.source
    }

    /// Borrow the fragments held by the layer.
    #[must_use]
    pub const fn fragments(&self) -> &Fragments {
        &self.fragments
    }

    /// Consume the layer, returning its fragments.
    #[must_use]
    pub fn into_fragments(self) -> Fragments {
        self.fragments
    }
}
