//! Single-owner pointers: a boxed value and a boxed slice.

use super::DemoReport;

const SLICE_LEN: usize = 2;

/// A box that is re-seated, then cleared. Re-seating frees the old value.
pub fn scoped_box() -> DemoReport {
    let mut report = DemoReport::new("scoped-box");

    let mut slot: Option<Box<i32>> = Some(Box::new(1));
    if let Some(value) = slot.as_deref() {
        report.push(value);
    }

    slot = Some(Box::new(2));
    if let Some(value) = slot.as_deref() {
        report.push(value);
    }

    slot = None;
    report.push(slot.is_some());
    report
}

/// A fixed-length boxed slice written through a pointer to its first element
/// and through indexing.
pub fn scoped_slice() -> DemoReport {
    let mut report = DemoReport::new("scoped-slice");

    let mut values: Box<[i32]> = vec![0; SLICE_LEN].into_boxed_slice();
    if let Some(first) = values.first_mut() {
        *first = 2;
    }
    values[1] = 3;

    for value in values.iter() {
        report.push(value);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_box_reseats_then_clears() {
        assert_eq!(scoped_box().lines, ["1", "2", "false"]);
    }

    #[test]
    fn scoped_slice_holds_written_values() {
        assert_eq!(scoped_slice().lines, ["2", "3"]);
    }
}
