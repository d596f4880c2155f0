/// One page of a list query plus the total count of active rows.
///
/// The total always reflects the full active set, so a page past the end
/// carries an empty `items` with the real `total`.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}
