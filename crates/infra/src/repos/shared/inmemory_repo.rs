/// Useful functions for creating inmemory repositories

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(collection: &[T], mut compare: F) -> Vec<T> {
    collection
        .iter()
        .filter(|item| compare(item))
        .cloned()
        .collect()
}

pub fn find_by_limited<T: Clone, F: FnMut(&T) -> bool>(
    collection: &[T],
    limit: i64,
    mut compare: F,
) -> Vec<T> {
    let limit = usize::try_from(limit).unwrap_or(0);
    collection
        .iter()
        .filter(|item| compare(item))
        .take(limit)
        .cloned()
        .collect()
}
