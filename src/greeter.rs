/// Name used when the caller does not supply one.
pub const DEFAULT_NAME: &str = "World";

/// Formats greetings with a fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    prefix: String,
}

impl Greeter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns `"<prefix>, <name>!"`, substituting [`DEFAULT_NAME`] for an empty name.
    pub fn greet(&self, name: &str) -> String {
        let name = if name.is_empty() { DEFAULT_NAME } else { name };
        format!("{}, {}!", self.prefix, name)
    }

    pub fn greet_uppercase(&self, name: &str) -> String {
        self.greet(name).to_uppercase()
    }

    /// One greeting per name, in input order.
    pub fn greet_multiple<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        names.iter().map(|name| self.greet(name.as_ref())).collect()
    }
}
