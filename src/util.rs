use crate::ordered::Node;

/// Collects `elements` into an ascending `Vec` with duplicates removed.
pub(crate) fn sorted_distinct<T, I>(elements: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut values: Vec<T> = elements.into_iter().collect();
    values.sort_unstable();
    values.dedup();
    values
}

/// Returns the height of the subtree rooted at `node` (`-1` when absent) or
/// `None` as soon as some node's children differ in height by more than one.
pub(crate) fn balanced_height<T>(node: Option<&Node<T>>) -> Option<isize> {
    let Some(node) = node else {
        return Some(-1);
    };

    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;
    if (left - right).abs() > 1 {
        return None;
    }

    Some(left.max(right) + 1)
}
