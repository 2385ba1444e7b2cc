use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wraps client contact details so they never show up in log output.
///
/// `Debug` and `Display` print a redacted form; serialization writes the real
/// value because ledger rows and API responses need it.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Masked<T>(pub T);

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0.as_ref()))
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0.as_ref()))
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

impl<T> Masked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Keeps the first character and, for e-mail addresses, the domain.
fn redact(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let first: String = value.chars().take(1).collect();
    match value.split_once('@') {
        Some((_, domain)) => format!("{}***@{}", first, domain),
        None => format!("{}********", first),
    }
}
