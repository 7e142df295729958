//! A concrete token type for data read from external sources.

use core::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A record identifier or an immutable composite key.
///
/// Equality, ordering and hashing are structural. With serde, integers,
/// strings and arrays of keys are accepted; floats, booleans, nulls and maps
/// are not.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// An integer identifier.
    Int(i64),
    /// A string identifier.
    Str(String),
    /// A composite key.
    Tuple(Vec<Key>),
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Tuple(keys) => {
                write!(f, "(")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<Self>> for Key {
    fn from(keys: Vec<Self>) -> Self {
        Self::Tuple(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn display() {
        let key = Key::from(vec![Key::from("buy"), Key::Int(42), Key::from(vec![Key::Int(1)])]);
        assert_eq!(key.to_string(), "(buy, 42, (1))");
        assert_ne!(Key::Int(1), Key::from("1"));
        assert_eq!(Key::from(vec![Key::from("a")]), Key::from(vec![Key::from("a".to_string())]));
    }
}
