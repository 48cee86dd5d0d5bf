use std::collections::HashMap;

use encounter_content::VariableSpec;
use encounter_core::VariableOracle;

/// Encounter variables as upstream log processing would have stored them.
///
/// Every value is kept as text; interpretation is up to the reader.
#[derive(Clone, Debug, Default)]
pub struct InMemoryVariables {
    scalars: HashMap<String, String>,
    lists: HashMap<String, Vec<String>>,
    maps: HashMap<String, Vec<(String, String)>>,
}

impl InMemoryVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spec(spec: &VariableSpec) -> Self {
        let mut variables = Self::new();
        for (key, value) in &spec.scalars {
            variables.set_scalar(key, value.to_string());
        }
        for (key, values) in &spec.lists {
            variables.set_list(key, values.iter().map(ToString::to_string).collect());
        }
        for (key, entries) in &spec.maps {
            let entries = entries
                .iter()
                .map(|(k, v)| (k.clone(), v.to_string()))
                .collect();
            variables.set_map(key, entries);
        }
        variables
    }

    pub fn set_scalar(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.scalars.insert(key.into(), value.into());
    }

    pub fn set_list(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.lists.insert(key.into(), values);
    }

    pub fn set_map(&mut self, key: impl Into<String>, entries: Vec<(String, String)>) {
        self.maps.insert(key.into(), entries);
    }
}

impl VariableOracle for InMemoryVariables {
    fn scalar(&self, key: &str) -> Option<String> {
        self.scalars.get(key).cloned()
    }

    fn list(&self, key: &str) -> Option<Vec<String>> {
        self.lists.get(key).cloned()
    }

    fn map(&self, key: &str) -> Option<Vec<(String, String)>> {
        self.maps.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encounter_content::Literal;

    #[test]
    fn stringifies_scenario_literals() {
        let mut spec = VariableSpec::default();
        spec.scalars.insert("rotation".into(), Literal::Integer(5));
        spec.lists
            .insert("statuses".into(), vec![Literal::Integer(1), "9".into()]);
        spec.maps.insert(
            "markers".into(),
            [("4000".to_string(), Literal::Integer(0))].into_iter().collect(),
        );

        let variables = InMemoryVariables::from_spec(&spec);
        assert_eq!(variables.scalar("rotation").as_deref(), Some("5"));
        assert_eq!(
            variables.list("statuses"),
            Some(vec!["1".to_string(), "9".to_string()])
        );
        assert_eq!(
            variables.map("markers"),
            Some(vec![("4000".to_string(), "0".to_string())])
        );
        assert_eq!(variables.scalar("party"), None);
    }
}
