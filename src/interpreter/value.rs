/// Core runtime value types.
///
/// Declares the `Value` enum and its supporting types (hash pairs, closure
/// values), together with type tags, truthiness, equality, and the textual
/// inspection used by the REPL and `puts`.
pub mod core;

/// Lexical environments.
///
/// A chain of name-to-value maps with an optional outer link, shared between
/// closures through reference counting.
pub mod environment;

/// Hash key derivation.
///
/// The `(type tag, u64)` fingerprint that keys hash values, derived from
/// integers, booleans, and FNV-1a-hashed strings.
pub mod hash_key;
