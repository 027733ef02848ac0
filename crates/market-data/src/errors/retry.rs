/// Classification for retry policy.
///
/// Used by callers to decide how to respond to a provider error.
///
/// # Behavior Summary
///
/// | Class | Retry? |
/// |-------|--------|
/// | `Never` | No - the request is fundamentally invalid |
/// | `WithBackoff` | Once, after a short delay |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - bad symbol, validation error, or terminal failure.
    /// The request is fundamentally invalid and retrying won't help.
    Never,

    /// Retry after a short backoff.
    ///
    /// Used for transient errors like rate limiting (429), timeouts, or
    /// network hiccups. The quote service retries at most once; a second
    /// failure degrades the ticker instead of blocking the request.
    WithBackoff,
}
