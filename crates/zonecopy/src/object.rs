//! The root marker trait.

use std::any::{self, Any};

/// Root of every interop object. Interfaces passed to `#[copyable]` must
/// inherit it, and generated types implement it.
pub trait Object: Any {
    /// Name of the concrete type behind this object.
    fn class_name(&self) -> &'static str {
        any::type_name::<Self>()
    }
}

impl dyn Object {
    /// Whether the concrete type is `T`.
    pub fn is<T: Object>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref()
    }

    pub fn downcast_mut<T: Object>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut()
    }

    /// Recover the concrete type from an erased copy.
    pub fn downcast<T: Object>(self: Box<Self>) -> Result<Box<T>, Box<dyn Object>> {
        if self.is::<T>() {
            let any: Box<dyn Any> = self;
            // the type was checked above
            Ok(any.downcast().unwrap_or_else(|_| unreachable!()))
        } else {
            Err(self)
        }
    }
}
