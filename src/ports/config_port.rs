//! Configuration access port trait.

/// Section/key lookups over a configuration source. `get_bool` falls back to
/// `default` when the key is missing or is not a recognised boolean.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool;
}
