//! Intrusive reference counting: the counted object owns its counter and
//! handles only ask it to add or release a reference.

use std::cell::Cell;

use super::DemoReport;

/// An object whose lifetime bookkeeping lives inside the object.
pub trait RefCounted {
    /// Increment the count; returns the new count.
    fn add_ref(&self) -> usize;
    /// Decrement the count; returns the new count.
    fn release(&self) -> usize;
}

/// Handle that holds one reference on `T` for as long as it lives.
#[derive(Debug)]
pub struct IntrusivePtr<'a, T: RefCounted> {
    target: &'a T,
}

impl<'a, T: RefCounted> IntrusivePtr<'a, T> {
    pub fn new(target: &'a T) -> Self {
        target.add_ref();
        Self { target }
    }

    pub fn get(&self) -> &'a T {
        self.target
    }
}

impl<T: RefCounted> Clone for IntrusivePtr<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.target)
    }
}

impl<T: RefCounted> Drop for IntrusivePtr<'_, T> {
    fn drop(&mut self) {
        self.target.release();
    }
}

/// Stand-in for an object whose storage is managed elsewhere.
#[derive(Debug, Default)]
pub struct ExternalObject {
    refs: Cell<usize>,
}

impl ExternalObject {
    pub fn ref_count(&self) -> usize {
        self.refs.get()
    }
}

impl RefCounted for ExternalObject {
    fn add_ref(&self) -> usize {
        let refs = self.refs.get() + 1;
        self.refs.set(refs);
        refs
    }

    fn release(&self) -> usize {
        // Saturate: an unbalanced release must not wrap.
        let refs = self.refs.get().saturating_sub(1);
        self.refs.set(refs);
        if refs == 0 {
            tracing::trace!("last intrusive reference released");
        }
        refs
    }
}

/// Two handles on one externally-managed object, dropped one at a time.
pub fn intrusive() -> DemoReport {
    let mut report = DemoReport::new("intrusive");
    let object = ExternalObject::default();

    let first = IntrusivePtr::new(&object);
    report.push(format!("refs={}", first.get().ref_count()));

    let second = first.clone();
    report.push(format!("refs={}", object.ref_count()));

    drop(first);
    report.push(format!("refs={}", second.get().ref_count()));

    drop(second);
    report.push(format!("refs={}", object.ref_count()));
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intrusive_count_follows_handles() {
        assert_eq!(intrusive().lines, ["refs=1", "refs=2", "refs=1", "refs=0"]);
    }

    #[test]
    fn count_returns_to_zero_after_many_clones() {
        let object = ExternalObject::default();
        {
            let root = IntrusivePtr::new(&object);
            let clones: Vec<_> = (0..5).map(|_| root.clone()).collect();
            assert_eq!(object.ref_count(), 6);
            drop(clones);
            assert_eq!(object.ref_count(), 1);
        }
        assert_eq!(object.ref_count(), 0);
    }

    #[test]
    fn unbalanced_release_saturates() {
        let object = ExternalObject::default();
        assert_eq!(object.release(), 0);
    }
}
