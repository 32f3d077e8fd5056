//! UUID generator and related types.

#![cfg(feature = "std")]
#![cfg_attr(docsrs, doc(cfg(feature = "std")))]

use std::{sync, time};

use rand::rngs::OsRng;
use thiserror::Error;

use crate::{Uuid, Variant};

pub mod with_rand08;


/// A trait that defines the random number source interface for [`Generator`].
///
/// The source is shared by all callers of a generator, so it fills bytes through `&self`.
/// Implementations must be cryptographically secure and must report failure instead of producing
/// low-quality bytes.
pub trait RandSource {
    /// Fills `dest` with random data.
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<(), rand::Error>;
}

/// A trait that defines the clock interface for [`Generator`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in milliseconds.
    fn unix_ts_ms(&self) -> u64;
}

/// The default [`TimeSource`] that reads [`std::time::SystemTime`].
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&self) -> u64 {
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn unix_ts_ms(&self) -> u64 {
        (**self).unix_ts_ms()
    }
}

impl<T: RandSource + ?Sized> RandSource for &T {
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        (**self).try_fill_bytes(dest)
    }
}

/// Error generating a UUID.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The random number source failed; no identifier is produced from partial randomness.
    #[error("random number source unavailable")]
    RandSource(#[from] rand::Error),
}

/// Mutable clock state of a [`Generator`], always accessed under its lock.
#[derive(Debug)]
struct ClockState {
    seeded: bool,
    clock_sequence: u16,
    last_timestamp_ms: u64,
}

impl ClockState {
    const fn new() -> Self {
        Self {
            seeded: false,
            clock_sequence: 0,
            last_timestamp_ms: 0,
        }
    }

    fn seed(&mut self, clock_sequence: u16) {
        tracing::trace!(clock_sequence, "seeded clock sequence");
        self.clock_sequence = clock_sequence;
        self.seeded = true;
    }

    /// Records a call at `unix_ts_ms` and returns the timestamp and clock sequence to embed.
    ///
    /// The clock sequence is bumped whenever the clock has not advanced past the last timestamp
    /// seen. The returned timestamp never decreases.
    fn advance(&mut self, unix_ts_ms: u64) -> (u64, u16) {
        if unix_ts_ms > self.last_timestamp_ms {
            self.last_timestamp_ms = unix_ts_ms;
        } else {
            if unix_ts_ms < self.last_timestamp_ms {
                tracing::debug!(
                    unix_ts_ms,
                    last_timestamp_ms = self.last_timestamp_ms,
                    "clock moved backwards"
                );
            }
            self.clock_sequence = self.clock_sequence.wrapping_add(1);
            if self.clock_sequence == 0 {
                tracing::debug!(
                    last_timestamp_ms = self.last_timestamp_ms,
                    "clock sequence wrapped around"
                );
            }
        }
        (self.last_timestamp_ms, self.clock_sequence)
    }
}

/// Represents a UUID generator that owns one clock authority.
///
/// A generator produces random UUIDv4 values and time-ordered UUIDv7 values. It is `Sync` and is
/// meant to be shared (e.g., through a `static` or an [`Arc`](std::sync::Arc)) by all threads
/// issuing identifiers for the same authority. Independent generators keep independent clock
/// states.
///
/// # Examples
///
/// ```rust
/// use std::thread;
/// use uuid58::Generator;
///
/// static G: Generator = Generator::new();
///
/// thread::scope(|s| {
///     for i in 0..4 {
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", G.new_v7().unwrap(), i);
///             }
///         });
///     }
/// });
/// ```
///
/// # UUIDv7 field and bit layout
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                          unix_ts_ms                           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |          unix_ts_ms           |  ver  |    clock_sequence     |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |var|                          rand                             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                             rand                              |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The 16-bit clock sequence is drawn at random on the first UUIDv7 call and incremented (with
/// wrap-around) on every later call whose clock reading has not advanced past the last one seen.
/// Its top four bits are overwritten by the version field, so only the low 12 bits appear in the
/// output. If the clock goes backwards, the generator goes on with the last timestamp seen, so the
/// embedded timestamp never decreases.
///
/// More than 4096 calls within a single millisecond (or during a clock rollback) repeat the
/// 12-bit clock sequence field. Such values still differ in their 62 random bits with
/// overwhelming probability, but they are no longer ordered by generation.
#[derive(Debug)]
pub struct Generator<R = OsRng, T = StdSystemTime> {
    clock: sync::Mutex<ClockState>,
    rand_source: R,
    time_source: T,
}

impl Generator {
    /// Creates a generator backed by [`OsRng`] and the system clock.
    pub const fn new() -> Self {
        Self::with_sources(OsRng, StdSystemTime)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, T> Generator<R, T> {
    /// Creates a generator with a specified random number source and clock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::rngs::OsRng;
    /// use uuid58::{Generator, TimeSource};
    ///
    /// struct Frozen;
    ///
    /// impl TimeSource for Frozen {
    ///     fn unix_ts_ms(&self) -> u64 {
    ///         0x0123_4567_89ab
    ///     }
    /// }
    ///
    /// let g = Generator::with_sources(OsRng, Frozen);
    /// let x = g.new_v7()?;
    /// let y = g.new_v7()?;
    /// assert_eq!(x.timestamp_v7(), y.timestamp_v7());
    /// assert_ne!(x, y);
    /// # Ok::<(), uuid58::GenerateError>(())
    /// ```
    pub const fn with_sources(rand_source: R, time_source: T) -> Self {
        Self {
            clock: sync::Mutex::new(ClockState::new()),
            rand_source,
            time_source,
        }
    }
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Generates a new UUIDv4 object from 122 random bits.
    ///
    /// This method does not touch the clock state and never blocks on other callers.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RandSource`] if the random number source fails.
    pub fn new_v4(&self) -> Result<Uuid, GenerateError> {
        let mut bytes = [0u8; 16];
        self.rand_source.try_fill_bytes(&mut bytes)?;

        let mut uuid = Uuid::from(bytes);
        uuid.set_version(Uuid::V4);
        uuid.set_variant(Variant::Rfc4122);
        Ok(uuid)
    }

    /// Generates a new UUIDv7 object from the current timestamp.
    ///
    /// See the [`Generator`] type documentation for the layout and ordering guarantees.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RandSource`] if the random number source fails.
    pub fn new_v7(&self) -> Result<Uuid, GenerateError> {
        let (unix_ts_ms, clock_sequence) = self.next_clock()?;

        let mut bytes = [0u8; 16];
        bytes[..6].copy_from_slice(&unix_ts_ms.to_be_bytes()[2..]);
        bytes[6..8].copy_from_slice(&clock_sequence.to_be_bytes());
        self.rand_source.try_fill_bytes(&mut bytes[8..])?;

        let mut uuid = Uuid::from(bytes);
        uuid.set_version(Uuid::V7);
        uuid.set_variant(Variant::Rfc4122);
        Ok(uuid)
    }

    /// Reads the clock and advances the clock state under the lock, seeding the clock sequence on
    /// first use.
    fn next_clock(&self) -> Result<(u64, u16), GenerateError> {
        // the state stays consistent even if a holder panicked
        let mut state = self
            .clock
            .lock()
            .unwrap_or_else(sync::PoisonError::into_inner);

        if !state.seeded {
            let mut seed = [0u8; 2];
            self.rand_source.try_fill_bytes(&mut seed)?;
            state.seed(u16::from_be_bytes(seed));
        }

        Ok(state.advance(self.time_source.unix_ts_ms()))
    }
}
