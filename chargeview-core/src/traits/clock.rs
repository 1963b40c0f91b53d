//! Monotonic millisecond clock

/// Source of monotonic time
///
/// Wraps at 2^32 ms (about 49 days). Callers use wrapping arithmetic and do
/// not otherwise handle the wrap.
pub trait Clock {
    /// Milliseconds since boot
    fn now_ms(&self) -> u32;
}
