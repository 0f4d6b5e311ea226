//! Ordered overwrite merge over filename-keyed mappings.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Overlay `layer` onto `target`, updating `target` in place.
///
/// Behaviour:
/// - Filenames absent from `target` are inserted.
/// - Filenames already present are overwritten by the layer's value.
///
/// Overwrite on collision is the only rule, so the outcome depends solely on
/// the order in which layers are merged. The replaced entries are returned
/// with their previous values, in filename order.
///
/// # Examples
///
/// ```rust
/// use chop_config::{Fragments, merge_fragments};
///
/// let mut bundle = Fragments::from([
///     ("a.xml".to_owned(), "generated".to_owned()),
/// ]);
/// let replaced = merge_fragments(
///     &mut bundle,
///     [
///         ("a.xml".to_owned(), "override".to_owned()),
///         ("b.xml".to_owned(), "extra".to_owned()),
///     ],
/// );
///
/// assert_eq!(bundle["a.xml"], "override");
/// assert_eq!(bundle["b.xml"], "extra");
/// assert_eq!(replaced, vec![("a.xml".to_owned(), "generated".to_owned())]);
/// ```
pub fn merge_fragments<V, I>(target: &mut BTreeMap<String, V>, layer: I) -> Vec<(String, V)>
where
    I: IntoIterator<Item = (String, V)>,
{
    let mut replaced = Vec::new();
    for (filename, value) in layer {
        match target.entry(filename) {
            Entry::Occupied(mut slot) => {
                let previous = slot.insert(value);
                replaced.push((slot.key().clone(), previous));
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
    replaced.sort_by(|left, right| left.0.cmp(&right.0));
    replaced
}
