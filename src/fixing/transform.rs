//! Transform trait.

/// Deterministic repair of a piece of corpus data.
pub trait Transform<T> {
    /// Takes ownership of the item and returns the repaired one.
    fn transform_own(&self, item: T) -> T;
}

/// Apply literal replacements in order.
pub(super) fn replace_in_order(mut s: String, replacements: &[(&str, &str)]) -> String {
    for (from, to) in replacements {
        if s.contains(from) {
            s = s.replace(from, to);
        }
    }
    s
}
