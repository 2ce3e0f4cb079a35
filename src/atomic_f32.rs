use core::cell::UnsafeCell;
use core::sync::atomic::{
    AtomicU32,
    Ordering::{AcqRel, Acquire, Release},
};

/// A 32-bit floating point value which can be safely shared between threads.
///
/// This type has the same in-memory representation as an [`f32`], and is as
/// portable as [`AtomicU32`](core::sync::atomic::AtomicU32) (see the module
/// documentation for [core::sync::atomic] for details).
///
/// All operations use a fixed memory ordering chosen for the operation:
/// loads are `Acquire`, stores are `Release`, and the read-modify-write
/// operations are `AcqRel`. A [`store`](AtomicF32::store) is therefore
/// always visible to a subsequent [`load`](AtomicF32::load) on any thread,
/// and no stronger (and slower) `SeqCst` fence is ever issued.
///
/// # Example
///
/// A shared accumulator that many threads bump without a mutex:
///
/// ```
/// # use afloat::AtomicF32;
/// static TOTAL: AtomicF32 = AtomicF32::new(0.0);
///
/// std::thread::scope(|s| {
///     for _ in 0..100 {
///         s.spawn(|| {
///             TOTAL.add(1.0);
///         });
///     }
/// });
///
/// // Every partial sum up to 100 is exactly representable, so the result
/// // is exact regardless of interleaving.
/// assert_eq!(TOTAL.load(), 100.0);
/// ```
///
/// The type deliberately implements neither `Copy` nor `Clone`: a value copy
/// would create a second, independent cell preloaded with the current bits,
/// which then silently diverges from the original under concurrent writes.
/// Share an `AtomicF32` by reference (or `Arc`), never by value.
///
/// # Implementation
///
/// Note: these details are not part of the stability guarantee of this
/// crate.
///
/// Under the hood this is a transparent `UnsafeCell<f32>`, and the
/// `&UnsafeCell<f32>` is cast to an `&AtomicU32` to perform atomic
/// operations on the underlying bits. Loads and stores are therefore as
/// cheap as their integer counterparts; [`add`](AtomicF32::add) needs a
/// compare-and-swap loop and is considerably slower than integer
/// `fetch_add`.
#[repr(transparent)]
pub struct AtomicF32(UnsafeCell<f32>);

// SAFETY: We only ever access the underlying data by refcasting to AtomicU32,
// which guarantees no data races.
unsafe impl Send for AtomicF32 {}
unsafe impl Sync for AtomicF32 {}

// Static assertions that the layout is identical, we cite these in a safety
// comment in `AtomicF32::as_atomic_bits()`. The alignment check is stricter
// than we need (it would still be safe if AtomicU32 were less strictly
// aligned than f32), but in practice both are 4.
const _: [(); core::mem::size_of::<AtomicU32>()] = [(); core::mem::size_of::<UnsafeCell<f32>>()];
const _: [(); core::mem::align_of::<AtomicU32>()] = [(); core::mem::align_of::<UnsafeCell<f32>>()];

impl AtomicF32 {
    /// Initialize an `AtomicF32` from an `f32`.
    ///
    /// # Example
    ///
    /// Use as a variable:
    ///
    /// ```
    /// # use afloat::AtomicF32;
    /// let x = AtomicF32::new(3.0f32);
    /// assert_eq!(x.load(), 3.0f32);
    /// ```
    ///
    /// Use as a static:
    ///
    /// ```
    /// # use afloat::AtomicF32;
    /// static A_STATIC: AtomicF32 = AtomicF32::new(800.0);
    /// assert_eq!(A_STATIC.load(), 800.0);
    /// ```
    #[inline]
    pub const fn new(float: f32) -> Self {
        Self(UnsafeCell::new(float))
    }

    /// Returns a mutable reference to the underlying float.
    ///
    /// This is safe because the mutable reference guarantees that no other
    /// threads are concurrently accessing the atomic data.
    ///
    /// # Example
    ///
    /// ```
    /// # use afloat::AtomicF32;
    /// let mut some_float = AtomicF32::new(1.0);
    /// *some_float.get_mut() += 1.0;
    /// assert_eq!(some_float.load(), 2.0);
    /// ```
    #[inline]
    pub fn get_mut(&mut self) -> &mut f32 {
        // SAFETY: the mutable reference guarantees unique ownership.
        unsafe { &mut *self.0.get() }
    }

    /// Consumes the atomic and returns the contained value.
    ///
    /// This is safe because passing `self` by value guarantees that no other
    /// threads are concurrently accessing the atomic data.
    ///
    /// # Example
    ///
    /// ```
    /// # use afloat::AtomicF32;
    /// let v = AtomicF32::new(6.0);
    /// assert_eq!(v.into_inner(), 6.0f32);
    /// ```
    #[inline]
    pub fn into_inner(self) -> f32 {
        self.0.into_inner()
    }

    /// Loads the current value, with `Acquire` ordering.
    ///
    /// Every write that preceded the observed value in the cell's
    /// modification order is visible after this call returns. A load never
    /// observes a torn value: the bits returned were written whole by some
    /// single prior store.
    ///
    /// # Example
    ///
    /// ```
    /// use afloat::AtomicF32;
    /// let v = AtomicF32::new(22.5);
    /// assert_eq!(v.load(), 22.5);
    /// ```
    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.as_atomic_bits().load(Acquire))
    }

    /// Stores a value unconditionally, with `Release` ordering.
    ///
    /// # Example
    ///
    /// ```
    /// use afloat::AtomicF32;
    /// let v = AtomicF32::new(22.5);
    /// v.store(30.0);
    /// assert_eq!(v.load(), 30.0);
    /// ```
    #[inline]
    pub fn store(&self, value: f32) {
        self.as_atomic_bits().store(value.to_bits(), Release);
    }

    /// Stores a value, returning the previous value. `AcqRel` ordering.
    ///
    /// The replacement is a single indivisible step: no other thread can
    /// write between the read-out of the old value and the write of the new
    /// one. The returned value is bit-exact, NaN payloads included.
    ///
    /// # Example
    ///
    /// ```
    /// use afloat::AtomicF32;
    /// let v = AtomicF32::new(4.5);
    /// assert_eq!(v.swap(100.0), 4.5);
    /// assert_eq!(v.load(), 100.0);
    /// ```
    #[inline]
    pub fn swap(&self, new_value: f32) -> f32 {
        f32::from_bits(self.as_atomic_bits().swap(new_value.to_bits(), AcqRel))
    }

    /// Stores `new` if the current value is *bitwise identical* to
    /// `expected`, returning whether the store happened.
    ///
    /// On success the operation has `Release` semantics (as part of an
    /// `AcqRel` exchange); on failure it performs an `Acquire` load, so a
    /// retry loop built on this method always observes a fresh, ordered
    /// value to retry with.
    ///
    /// # Bitwise comparison
    ///
    /// The comparison is on the bit representation, not IEEE-754 value
    /// equality, and the two diverge in both directions:
    ///
    /// - `+0.0` and `-0.0` compare equal as floats but have different bit
    ///   patterns, so a `-0.0` `expected` does **not** match a cell holding
    ///   `+0.0`.
    /// - `NaN == NaN` is always false as floats, but an `expected` NaN
    ///   **does** match a cell holding the bit-identical NaN.
    ///
    /// For this reason, avoid deriving `expected` by arithmetic; use a value
    /// previously returned by [`load`](Self::load) or [`swap`](Self::swap).
    /// (Also note that on Wasm targets LLVM may canonicalize NaNs during
    /// loads, which perturbs NaN round trips; see
    /// [`as_atomic_bits`](Self::as_atomic_bits) for a way around that.)
    ///
    /// # Example
    ///
    /// ```
    /// # use afloat::AtomicF32;
    /// let v = AtomicF32::new(5.0);
    /// assert!(v.compare_and_swap(5.0, 10.0));
    /// assert_eq!(v.load(), 10.0);
    ///
    /// // Wrong expected value: the cell is left untouched.
    /// assert!(!v.compare_and_swap(6.0, 12.0));
    /// assert_eq!(v.load(), 10.0);
    /// ```
    #[inline]
    pub fn compare_and_swap(&self, expected: f32, new: f32) -> bool {
        self.as_atomic_bits()
            .compare_exchange(expected.to_bits(), new.to_bits(), AcqRel, Acquire)
            .is_ok()
    }

    /// Adds `delta` to the current value, returning the result of this
    /// addition.
    ///
    /// Implemented as an optimistic retry loop: read the current value,
    /// compute `current + delta` with ordinary `f32` addition (Infinity and
    /// NaN propagate per IEEE-754, nothing is special-cased), and attempt a
    /// compare-and-swap of the result. If another thread won the race, retry
    /// against the freshly observed value.
    ///
    /// The loop is lock-free: a failed attempt means some other thread's
    /// update succeeded, so the system as a whole always makes progress. It
    /// is not wait-free; under sustained contention an individual call may
    /// retry an unbounded number of times. Callers that need a latency bound
    /// must impose their own policy on top.
    ///
    /// # Example
    ///
    /// ```
    /// # use afloat::AtomicF32;
    /// let x = AtomicF32::new(7.0);
    /// assert_eq!(x.add(2.0), 9.0);
    /// assert_eq!(x.add(-100.0), -91.0);
    /// assert_eq!(x.load(), -91.0);
    /// ```
    #[inline]
    pub fn add(&self, delta: f32) -> f32 {
        let bits = self.as_atomic_bits();
        let mut current = bits.load(Acquire);
        loop {
            let candidate = f32::from_bits(current) + delta;
            // The weak exchange may fail spuriously, which only costs one
            // more lap here and compiles better on LL/SC targets.
            match bits.compare_exchange_weak(current, candidate.to_bits(), AcqRel, Acquire) {
                Ok(_) => return candidate,
                Err(observed) => current = observed,
            }
        }
    }

    /// Returns a reference to an atomic integer which can be used to access
    /// the atomic float's underlying bits in a thread safe manner.
    ///
    /// This is essentially a `transmute::<&Self, &AtomicU32>(self)`, and is
    /// zero cost. It exists as an escape hatch for the cases where the
    /// bitwise-identicality caveats on
    /// [`compare_and_swap`](Self::compare_and_swap) get in the way
    /// (typically NaN handling on Wasm, see [rust-lang/rust#73328]), and for
    /// callers that want an ordering other than the fixed ones this type
    /// picks.
    ///
    /// [rust-lang/rust#73328]: https://github.com/rust-lang/rust/issues/73328
    ///
    /// # Example
    ///
    /// ```
    /// # use afloat::AtomicF32;
    /// # use std::sync::atomic::Ordering;
    /// let v = AtomicF32::new(22.5);
    /// assert_eq!(v.as_atomic_bits().load(Ordering::Relaxed), 22.5f32.to_bits());
    /// ```
    #[inline]
    pub fn as_atomic_bits(&self) -> &AtomicU32 {
        // SAFETY: all potentially shared reads/writes go through this, and
        // the static assertions above ensure that AtomicU32 and
        // UnsafeCell<f32> are compatible as pointers.
        unsafe { &*(&self.0 as *const _ as *const AtomicU32) }
    }
}

/// Returns a zero-initialized atomic (bit pattern 0, i.e. `+0.0`).
///
/// # Example
///
/// ```
/// # use afloat::AtomicF32;
/// let x = AtomicF32::default();
/// assert_eq!(x.load(), 0.0);
/// ```
impl Default for AtomicF32 {
    #[inline]
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Equivalent to `<f32 as core::fmt::Debug>::fmt` on the current value.
///
/// # Example
///
/// ```
/// # use afloat::AtomicF32;
/// let v = AtomicF32::new(40.0);
/// assert_eq!(format!("{:?}", v), format!("{:?}", 40.0f32));
/// ```
impl core::fmt::Debug for AtomicF32 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.load().fmt(f)
    }
}

/// Compares the currently loaded values with ordinary `f32` equality.
///
/// The two loads are separate atomic operations; the comparison as a whole
/// is not atomic, and follows IEEE-754 value equality (`-0.0 == +0.0`,
/// NaN-holding cells never compare equal), not the bitwise comparison of
/// [`compare_and_swap`](AtomicF32::compare_and_swap).
///
/// # Example
///
/// ```
/// # use afloat::AtomicF32;
/// assert_eq!(AtomicF32::new(2.5), AtomicF32::new(2.5));
/// assert_ne!(AtomicF32::new(2.5), AtomicF32::new(3.5));
/// ```
impl PartialEq for AtomicF32 {
    fn eq(&self, other: &Self) -> bool {
        self.load() == other.load()
    }
}

/// Equivalent to `AtomicF32::new`.
impl From<f32> for AtomicF32 {
    #[inline]
    fn from(f: f32) -> Self {
        Self::new(f)
    }
}
