//! Atomically reference-counted pointers.

use std::any::type_name_of_val;
use std::sync::Arc;

use super::DemoReport;

const SHARED_SLICE_LEN: usize = 10;

/// Two owners of one value; each reset releases one count.
pub fn shared() -> DemoReport {
    let mut report = DemoReport::new("shared");

    let mut first: Option<Arc<i32>> = Some(Arc::new(1));
    let mut second = first.clone();
    for owner in [&first, &second].into_iter().flatten() {
        report.push(owner);
    }
    if let Some(owner) = &second {
        report.push(format!("strong_count={}", Arc::strong_count(owner)));
    }

    first = None;
    report.push(first.is_some());
    report.push(second.is_some());
    if let Some(owner) = &second {
        report.push(format!("strong_count={}", Arc::strong_count(owner)));
    }

    second = None;
    report.push(second.is_some());
    report
}

/// A shared value and a shared slice, each built in a single allocation.
pub fn make_shared() -> DemoReport {
    let mut report = DemoReport::new("make-shared");

    let single = Arc::new(22);
    report.push(type_name_of_val(&single));

    let many: Arc<[i32]> = Arc::from(vec![10; SHARED_SLICE_LEN]);
    report.push(type_name_of_val(&many));
    report.push(format!("len={}", many.len()));

    tracing::trace!(
        single = *single,
        filled = many.iter().all(|&v| v == 10),
        "make-shared values"
    );
    report
}
