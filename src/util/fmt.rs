use std::fmt::{self, Display, Formatter};

/// Writes `items` as `[a, b, c]` using each item's [`Display`] implementation.
pub(crate) fn write_list<I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write_joined(f, "[", items, ", ", "]")
}

/// Writes `items` between `open` and `close`, separated by `sep`.
pub(crate) fn write_joined<I>(
    f: &mut Formatter<'_>,
    open: &str,
    items: I,
    sep: &str,
    close: &str,
) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(f, "{open}")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, "{sep}")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "{close}")
}

/// Displays a key and its associated value as `key: value`.
pub(crate) struct Pair<K, V>(pub K, pub V);

impl<K: Display, V: Display> Display for Pair<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0, self.1)
    }
}
