//! Zone-based copy capabilities.

use crate::object::Object;

/// Opaque allocation zone token.
///
/// Accepted by the zone-based copy operations for interop and otherwise
/// ignored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    _private: (),
}

impl Zone {
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

/// Copying with an erased result, usable through `dyn Copying`.
pub trait Copying: Object {
    fn copy_with_zone_erased(&self, zone: Option<&Zone>) -> Box<dyn Object>;
}

/// Copying into the mutable variant of a type.
///
/// Generated types implement every method and route
/// [`Copying::copy_with_zone_erased`] through [`MutableCopying::copy_with_zone`].
pub trait MutableCopying: Copying {
    type Mutable: Object;

    /// Deep copy into a new mutable instance.
    fn copy_with_zone(&self, zone: Option<&Zone>) -> Self::Mutable;

    /// [`copy_with_zone`](MutableCopying::copy_with_zone) without a zone.
    fn copy(&self) -> Self::Mutable {
        self.copy_with_zone(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        count: u32,
    }

    struct MutableCounter {
        count: u32,
    }

    impl Object for Counter {}
    impl Object for MutableCounter {}

    impl Copying for Counter {
        fn copy_with_zone_erased(&self, zone: Option<&Zone>) -> Box<dyn Object> {
            Box::new(self.copy_with_zone(zone))
        }
    }

    impl MutableCopying for Counter {
        type Mutable = MutableCounter;

        fn copy_with_zone(&self, _zone: Option<&Zone>) -> MutableCounter {
            MutableCounter { count: self.count }
        }
    }

    #[test]
    fn test_default_copy_uses_zone_copy() {
        let counter = Counter { count: 4 };
        assert_eq!(counter.copy().count, 4);
    }

    #[test]
    fn test_erased_copy_through_dyn() {
        let zone = Zone::new();
        let copying: &dyn Copying = &Counter { count: 9 };
        let copy = copying.copy_with_zone_erased(Some(&zone));
        assert_eq!(copy.downcast_ref::<MutableCounter>().map(|c| c.count), Some(9));
    }

    #[test]
    fn test_zone_default() {
        assert_eq!(Zone::default(), Zone::new());
    }
}
