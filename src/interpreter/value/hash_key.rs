use crate::{error::RuntimeError, interpreter::value::core::Value};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// The fingerprint that keys hash values.
///
/// A `HashKey` pairs the source value's type tag with a 64-bit payload:
/// integers use their two's-complement bits, booleans use `1`/`0`, and
/// strings use the FNV-1a hash of their UTF-8 bytes. Equality is field-wise,
/// so equal keys of the same type always collide and keys of different
/// types never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    kind:  &'static str,
    value: u64,
}

impl HashKey {
    pub(crate) const fn new(kind: &'static str, value: u64) -> Self {
        Self { kind, value }
    }
}

impl Value {
    /// Derives the [`HashKey`] of a hashable value.
    ///
    /// Only integers, booleans, and strings are hashable; every other type
    /// produces an `UnusableHashKey` error.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnusableHashKey` for non-hashable values.
    ///
    /// # Example
    /// ```
    /// use brio::interpreter::value::core::Value;
    ///
    /// let a = Value::from("Hello World");
    /// let b = Value::from("Hello World");
    ///
    /// assert_eq!(a.hash_key().unwrap(), b.hash_key().unwrap());
    /// assert!(Value::Null.hash_key().is_err());
    /// ```
    pub fn hash_key(&self) -> Result<HashKey, RuntimeError> {
        match self {
            Self::Integer(value) => Ok(HashKey::new(self.type_name(), *value as u64)),
            Self::Boolean(value) => Ok(HashKey::new(self.type_name(), u64::from(*value))),
            Self::String(value) => Ok(HashKey::new(self.type_name(), fnv1a_64(value.as_bytes()))),
            _ => Err(RuntimeError::UnusableHashKey { kind: self.type_name() }),
        }
    }
}

/// Computes the 64-bit FNV-1a hash of a byte slice.
fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
