//! Serde support: an atomic float serializes as the plain float it holds.
//!
//! Serialization performs an acquire [`load`](crate::AtomicF32::load) of the
//! current value; deserialization constructs a fresh cell. Round-tripping a
//! cell that other threads are concurrently writing captures one value from
//! its modification order, the same as any load would.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::AtomicF32;

impl Serialize for AtomicF32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.load().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AtomicF32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f32::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(all(
    feature = "atomic_f64",
    not(any(target_arch = "powerpc", target_arch = "mips", force_disable_atomic64))
))]
mod f64_impls {
    use super::*;
    use crate::AtomicF64;

    impl Serialize for AtomicF64 {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.load().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for AtomicF64 {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            f64::deserialize(deserializer).map(Self::new)
        }
    }
}
