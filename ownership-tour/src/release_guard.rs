//! Scope-bound ownership of a resource with a custom closer.
//!
//! Runs the closer exactly once when the guard leaves scope, even on early
//! returns or panics.

use std::fmt;
use std::ops::Deref;

/// Drop guard pairing a resource with the function that releases it.
///
/// The closer receives the resource by value.
///
/// # Examples
///
/// ```ignore
/// let guard = ReleaseGuard::new(File::open(path)?, |file| {
///     tracing::debug!("closing handle");
///     drop(file);
/// });
/// let len = guard.metadata()?.len();
/// // closer runs here
/// ```
pub struct ReleaseGuard<T, F>
where
    F: FnOnce(T),
{
    /// Always `Some` until the guard is dropped.
    inner: Option<(T, F)>,
}

impl<T, F> ReleaseGuard<T, F>
where
    F: FnOnce(T),
{
    /// Take ownership of `resource`; `release` runs when the guard drops.
    pub fn new(resource: T, release: F) -> Self {
        Self {
            inner: Some((resource, release)),
        }
    }
}

impl<T, F> Deref for ReleaseGuard<T, F>
where
    F: FnOnce(T),
{
    type Target = T;

    fn deref(&self) -> &T {
        match &self.inner {
            Some((resource, _)) => resource,
            None => unreachable!("guard used after release"),
        }
    }
}

impl<T, F> Drop for ReleaseGuard<T, F>
where
    F: FnOnce(T),
{
    fn drop(&mut self) {
        if let Some((resource, release)) = self.inner.take() {
            tracing::trace!("release guard running closer");
            release(resource);
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for ReleaseGuard<T, F>
where
    F: FnOnce(T),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseGuard")
            .field("resource", &self.inner.as_ref().map(|(resource, _)| resource))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn closer_runs_once_on_drop() {
        let calls = Cell::new(0);
        {
            let guard = ReleaseGuard::new(7, |value| {
                assert_eq!(value, 7);
                calls.set(calls.get() + 1);
            });
            assert_eq!(*guard, 7);
            assert_eq!(calls.get(), 0);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn closer_runs_during_unwind() {
        let log = RefCell::new(Vec::new());
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = ReleaseGuard::new("handle", |name| log.borrow_mut().push(name));
            panic!("early exit");
        }));

        assert!(result.is_err());
        assert_eq!(*log.borrow(), vec!["handle"]);
    }

    #[test]
    fn debug_shows_resource() {
        let guard = ReleaseGuard::new(42, |_| {});
        assert!(format!("{guard:?}").contains("42"));
    }
}
