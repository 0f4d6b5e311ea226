//! Builder that folds fragment layers into a bundle.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::{Fragments, Scope, Section, non_empty};

use super::{Bundle, Fragment, FragmentLayer, merge_fragments};

/// Accumulates [`FragmentLayer`] values for one scope.
///
/// Layers are applied in push order by [`finish`](Self::finish); each layer
/// overwrites filenames supplied by earlier layers.
///
/// ```rust
/// use chop_config::{BundleComposer, Fragments, FragmentSource, Scope, Section};
///
/// let mut composer = BundleComposer::new(Scope::Common);
/// composer.push_section(Section::Settings, Some("<yandex/>".to_owned()));
/// composer.push_overrides(Fragments::from([(
///     "chop-generated-settings.xml".to_owned(),
///     "<custom/>".to_owned(),
/// )]));
///
/// let bundle = composer.finish();
/// assert_eq!(bundle.get("chop-generated-settings.xml"), Some("<custom/>"));
/// assert_eq!(
///     bundle.source("chop-generated-settings.xml"),
///     Some(FragmentSource::Override)
/// );
/// ```
#[derive(Clone, Debug)]
pub struct BundleComposer {
    scope: Scope,
    layers: Vec<FragmentLayer>,
}

impl BundleComposer {
    /// Create an empty composer for `scope`.
    #[must_use]
    pub const fn new(scope: Scope) -> Self {
        Self {
            scope,
            layers: Vec::new(),
        }
    }

    /// Scope the composer is assembling.
    #[must_use]
    pub const fn scope(&self) -> Scope {
        self.scope
    }

    /// Push the rendered content of `section`.
    ///
    /// Absent or empty content contributes no layer. Returns whether a layer
    /// was pushed.
    pub fn push_section(&mut self, section: Section, content: Option<String>) -> bool {
        let Some(rendered) = non_empty(content) else {
            trace!(scope = %self.scope, %section, "section has no content");
            return false;
        };
        self.push_layer(FragmentLayer::section(section, rendered));
        true
    }

    /// Push extra files supplied by the content provider.
    pub fn push_files(&mut self, fragments: Fragments) {
        self.push_layer(FragmentLayer::files(fragments));
    }

    /// Push operator overrides.
    pub fn push_overrides(&mut self, fragments: Fragments) {
        self.push_layer(FragmentLayer::overrides(fragments));
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: FragmentLayer) {
        self.layers.push(layer);
    }

    /// Borrow the accumulated layers in push order.
    #[must_use]
    pub fn layers(&self) -> &[FragmentLayer] {
        &self.layers
    }

    /// Consume the composer and fold its layers into a [`Bundle`].
    #[must_use]
    pub fn finish(self) -> Bundle {
        let mut entries = BTreeMap::new();
        let mut shadowed = BTreeSet::new();

        for layer in self.layers {
            let source = layer.source();
            let fragments = layer
                .into_fragments()
                .into_iter()
                .map(|(filename, content)| (filename, Fragment::new(content, source)));
            for (filename, previous) in merge_fragments(&mut entries, fragments) {
                if source.is_generated() {
                    trace!(
                        scope = %self.scope,
                        %filename,
                        "extra file replaced a generated section"
                    );
                    continue;
                }
                if previous.source().is_generated() {
                    debug!(scope = %self.scope, %filename, "override shadows generated fragment");
                    shadowed.insert(filename);
                }
            }
        }

        let bundle = Bundle::new(self.scope, entries, shadowed);
        debug!(
            scope = %bundle.scope(),
            fragments = bundle.len(),
            shadowed = bundle.shadowed().count(),
            "assembled configuration bundle"
        );
        bundle
    }
}
