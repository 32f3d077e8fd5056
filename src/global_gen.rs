//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use crate::{GenerateError, Generator, Uuid};

/// The process-wide generator; one clock authority shared by all threads.
static GLOBAL_GEN: Generator = Generator::new();

/// Generates a UUIDv7 object.
///
/// This function employs a global generator and guarantees the process-wide monotonic order of
/// timestamps and the uniqueness of clock sequences within the same millisecond (see
/// [`Generator`] for the limits).
///
/// # Examples
///
/// ```rust
/// let uuid = uuid58::new_v7()?;
/// println!("{}", uuid); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{}", uuid.encode_base58()); // e.g., "1Bm3MYdbYzfWEyD6wR9qku"
/// # Ok::<(), uuid58::GenerateError>(())
/// ```
///
/// # Errors
///
/// Returns [`GenerateError::RandSource`] if the operating system's random number source fails.
pub fn new_v7() -> Result<Uuid, GenerateError> {
    GLOBAL_GEN.new_v7()
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid58::new_v4()?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// # Ok::<(), uuid58::GenerateError>(())
/// ```
///
/// # Errors
///
/// Returns [`GenerateError::RandSource`] if the operating system's random number source fails.
pub fn new_v4() -> Result<Uuid, GenerateError> {
    GLOBAL_GEN.new_v4()
}
