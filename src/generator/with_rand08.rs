//! Integration with `rand` (v0.8) crate.

use std::sync;

use rand::{rngs::OsRng, CryptoRng, RngCore};

use super::{Generator, RandSource, StdSystemTime};

/// Reads the operating system's random number source without any shared state.
impl RandSource for OsRng {
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        RngCore::try_fill_bytes(&mut OsRng, dest)
    }
}

/// Serializes access to a stateful [`CryptoRng`] shared by the callers of a generator.
impl<T: RngCore + CryptoRng> RandSource for sync::Mutex<T> {
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        let mut rng = self.lock().unwrap_or_else(sync::PoisonError::into_inner);
        RngCore::try_fill_bytes(&mut *rng, dest)
    }
}

impl<T: RngCore + CryptoRng> Generator<sync::Mutex<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] and [`CryptoRng`] from `rand` (v0.8) crate.
    ///
    /// The random number generator is kept behind its own lock, separate from the clock state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use uuid58::Generator;
    ///
    /// let g = Generator::with_rand08(StdRng::from_entropy());
    /// println!("{}", g.new_v7()?);
    /// # Ok::<(), uuid58::GenerateError>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::with_sources(sync::Mutex::new(rng), StdSystemTime)
    }
}
