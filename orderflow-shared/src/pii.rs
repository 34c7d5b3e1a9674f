use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wraps sensitive text (customer names, payment methods) so that `Debug` and
/// `Display` only reveal the trailing characters.
///
/// Serialization writes the real value: audit sinks need it, log macros don't.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Masked<T>(pub T);

const VISIBLE_TAIL: usize = 4;

impl<T: AsRef<str>> Masked<T> {
    fn redacted(&self) -> String {
        let value = self.0.as_ref();
        let count = value.chars().count();
        if count <= VISIBLE_TAIL {
            return "****".to_string();
        }
        let tail: String = value.chars().skip(count - VISIBLE_TAIL).collect();
        format!("****{}", tail)
    }
}

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
