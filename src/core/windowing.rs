use crate::core::IndexDomain;

/// Borrows the records inside an inclusive index window.
///
/// The window is clipped to the slice bounds, so a host whose dataset
/// shrank since the window was computed still gets a valid (possibly
/// shorter) slice instead of a panic.
#[must_use]
pub fn window_slice<T>(records: &[T], domain: Option<IndexDomain>) -> &[T] {
    let Some(domain) = domain else {
        return &[];
    };
    if records.is_empty() {
        return &[];
    }

    let last = records.len() - 1;
    if domain.start() > last {
        return &[];
    }
    let end = domain.end().min(last);
    &records[domain.start()..=end]
}
