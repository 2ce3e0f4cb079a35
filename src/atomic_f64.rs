use core::cell::UnsafeCell;
use core::sync::atomic::{
    AtomicU64,
    Ordering::{AcqRel, Acquire, Release},
};

/// A 64-bit floating point value which can be safely shared between threads.
///
/// This type has the same in-memory representation as an [`f64`], and is as
/// portable as [`AtomicU64`](core::sync::atomic::AtomicU64) — which is to
/// say, not universally: it is gated behind the on-by-default `atomic_f64`
/// feature and compiled out on targets known to lack 64-bit atomics.
///
/// The API and the memory orderings are identical to [`AtomicF32`]: loads
/// are `Acquire`, stores are `Release`, read-modify-write operations are
/// `AcqRel`. See [`AtomicF32`] for the full discussion; only the width
/// differs.
///
/// [`AtomicF32`]: crate::AtomicF32
///
/// # Example
///
/// ```
/// # use afloat::AtomicF64;
/// static TOTAL: AtomicF64 = AtomicF64::new(0.0);
///
/// std::thread::scope(|s| {
///     for _ in 0..100 {
///         s.spawn(|| {
///             TOTAL.add(1.0);
///         });
///     }
/// });
///
/// assert_eq!(TOTAL.load(), 100.0);
/// ```
#[repr(transparent)]
pub struct AtomicF64(UnsafeCell<f64>);

// SAFETY: We only ever access the underlying data by refcasting to AtomicU64,
// which guarantees no data races.
unsafe impl Send for AtomicF64 {}
unsafe impl Sync for AtomicF64 {}

// Layout equality between the cell and the atomic we cast it to, cited in
// `AtomicF64::as_atomic_bits()`.
const _: [(); core::mem::size_of::<AtomicU64>()] = [(); core::mem::size_of::<UnsafeCell<f64>>()];
const _: [(); core::mem::align_of::<AtomicU64>()] = [(); core::mem::align_of::<UnsafeCell<f64>>()];

impl AtomicF64 {
    /// Initialize an `AtomicF64` from an `f64`.
    ///
    /// # Example
    ///
    /// ```
    /// # use afloat::AtomicF64;
    /// static A_STATIC: AtomicF64 = AtomicF64::new(800.0);
    /// assert_eq!(A_STATIC.load(), 800.0);
    /// ```
    #[inline]
    pub const fn new(float: f64) -> Self {
        Self(UnsafeCell::new(float))
    }

    /// Returns a mutable reference to the underlying float.
    ///
    /// This is safe because the mutable reference guarantees that no other
    /// threads are concurrently accessing the atomic data.
    #[inline]
    pub fn get_mut(&mut self) -> &mut f64 {
        // SAFETY: the mutable reference guarantees unique ownership.
        unsafe { &mut *self.0.get() }
    }

    /// Consumes the atomic and returns the contained value.
    ///
    /// # Example
    ///
    /// ```
    /// # use afloat::AtomicF64;
    /// let v = AtomicF64::new(6.0);
    /// assert_eq!(v.into_inner(), 6.0f64);
    /// ```
    #[inline]
    pub fn into_inner(self) -> f64 {
        self.0.into_inner()
    }

    /// Loads the current value, with `Acquire` ordering.
    ///
    /// # Example
    ///
    /// ```
    /// use afloat::AtomicF64;
    /// let v = AtomicF64::new(22.5);
    /// assert_eq!(v.load(), 22.5);
    /// ```
    #[inline]
    pub fn load(&self) -> f64 {
        f64::from_bits(self.as_atomic_bits().load(Acquire))
    }

    /// Stores a value unconditionally, with `Release` ordering.
    ///
    /// # Example
    ///
    /// ```
    /// use afloat::AtomicF64;
    /// let v = AtomicF64::new(22.5);
    /// v.store(30.0);
    /// assert_eq!(v.load(), 30.0);
    /// ```
    #[inline]
    pub fn store(&self, value: f64) {
        self.as_atomic_bits().store(value.to_bits(), Release);
    }

    /// Stores a value, returning the previous value. `AcqRel` ordering.
    ///
    /// # Example
    ///
    /// ```
    /// use afloat::AtomicF64;
    /// let v = AtomicF64::new(4.5);
    /// assert_eq!(v.swap(100.0), 4.5);
    /// assert_eq!(v.load(), 100.0);
    /// ```
    #[inline]
    pub fn swap(&self, new_value: f64) -> f64 {
        f64::from_bits(self.as_atomic_bits().swap(new_value.to_bits(), AcqRel))
    }

    /// Stores `new` if the current value is *bitwise identical* to
    /// `expected`, returning whether the store happened.
    ///
    /// The comparison is on the bit representation, not IEEE-754 value
    /// equality: a `-0.0` `expected` does not match `+0.0` contents, and an
    /// `expected` NaN matches exactly the bit-identical NaN. See
    /// [`AtomicF32::compare_and_swap`](crate::AtomicF32::compare_and_swap)
    /// for the full caveats; they apply here unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// # use afloat::AtomicF64;
    /// let v = AtomicF64::new(5.0);
    /// assert!(v.compare_and_swap(5.0, 10.0));
    /// assert!(!v.compare_and_swap(5.0, 12.0));
    /// assert_eq!(v.load(), 10.0);
    /// ```
    #[inline]
    pub fn compare_and_swap(&self, expected: f64, new: f64) -> bool {
        self.as_atomic_bits()
            .compare_exchange(expected.to_bits(), new.to_bits(), AcqRel, Acquire)
            .is_ok()
    }

    /// Adds `delta` to the current value, returning the result of this
    /// addition.
    ///
    /// A lock-free compare-and-swap retry loop, exactly as in
    /// [`AtomicF32::add`](crate::AtomicF32::add): ordinary `f64` addition,
    /// no retry cap, eventual progress guaranteed for the system but not a
    /// time bound for the individual call.
    ///
    /// # Example
    ///
    /// ```
    /// # use afloat::AtomicF64;
    /// let x = AtomicF64::new(7.0);
    /// assert_eq!(x.add(2.0), 9.0);
    /// assert_eq!(x.add(-100.0), -91.0);
    /// ```
    #[inline]
    pub fn add(&self, delta: f64) -> f64 {
        let bits = self.as_atomic_bits();
        let mut current = bits.load(Acquire);
        loop {
            let candidate = f64::from_bits(current) + delta;
            match bits.compare_exchange_weak(current, candidate.to_bits(), AcqRel, Acquire) {
                Ok(_) => return candidate,
                Err(observed) => current = observed,
            }
        }
    }

    /// Returns a reference to an atomic integer which can be used to access
    /// the atomic float's underlying bits in a thread safe manner.
    ///
    /// Zero cost; see
    /// [`AtomicF32::as_atomic_bits`](crate::AtomicF32::as_atomic_bits) for
    /// why this escape hatch exists.
    ///
    /// # Example
    ///
    /// ```
    /// # use afloat::AtomicF64;
    /// # use std::sync::atomic::Ordering;
    /// let v = AtomicF64::new(22.5);
    /// assert_eq!(v.as_atomic_bits().load(Ordering::Relaxed), 22.5f64.to_bits());
    /// ```
    #[inline]
    pub fn as_atomic_bits(&self) -> &AtomicU64 {
        // SAFETY: all potentially shared reads/writes go through this, and
        // the static assertions above ensure that AtomicU64 and
        // UnsafeCell<f64> are compatible as pointers.
        unsafe { &*(&self.0 as *const _ as *const AtomicU64) }
    }
}

/// Returns a zero-initialized atomic (bit pattern 0, i.e. `+0.0`).
impl Default for AtomicF64 {
    #[inline]
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Equivalent to `<f64 as core::fmt::Debug>::fmt` on the current value.
impl core::fmt::Debug for AtomicF64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.load().fmt(f)
    }
}

/// Compares the currently loaded values with ordinary `f64` equality.
///
/// Two separate atomic loads, IEEE-754 value equality; see
/// [`AtomicF32`](crate::AtomicF32)'s impl for the caveats.
impl PartialEq for AtomicF64 {
    fn eq(&self, other: &Self) -> bool {
        self.load() == other.load()
    }
}

/// Equivalent to `AtomicF64::new`.
impl From<f64> for AtomicF64 {
    #[inline]
    fn from(f: f64) -> Self {
        Self::new(f)
    }
}
