/// Oracle over encounter-scoped variables recorded by upstream log processing.
///
/// Values are kept as the raw strings upstream stored; callers parse them.
pub trait VariableOracle {
    fn scalar(&self, key: &str) -> Option<String>;

    /// Ordered list value.
    fn list(&self, key: &str) -> Option<Vec<String>>;

    /// Key-value map value, as `(key, value)` pairs.
    fn map(&self, key: &str) -> Option<Vec<(String, String)>>;
}
