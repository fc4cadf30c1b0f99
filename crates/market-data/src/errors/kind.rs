/// Broad classification of a market data failure.
///
/// Callers use this to decide how a failure surfaces: transport and
/// malformed failures degrade the affected feed with the appropriate
/// severity. An empty result set is not a failure at all - operations
/// that find no rows return empty collections, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Network-level failure: connect error, timeout, throttling, or a
    /// non-success HTTP status.
    Transport,

    /// The provider answered but the payload could not be interpreted:
    /// invalid JSON, a missing field, or a non-numeric value.
    Malformed,
}
