use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Named sets of meter serial numbers, as stored in `groups.json`.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeterGroups(BTreeMap<String, Vec<String>>);

impl MeterGroups {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(name, meters)| (name.as_str(), meters.as_slice()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Result<&[String]> {
        self.0.get(name).map(Vec::as_slice).with_context(|| format!("group `{name}` does not exist"))
    }

    pub fn create(&mut self, name: &str, meters: &[String]) -> Result {
        let name = name.trim();
        ensure!(!name.is_empty(), "group name is empty");
        ensure!(!self.0.contains_key(name), "group `{name}` already exists");
        self.0.insert(name.to_owned(), Vec::new());
        self.add(name, meters)
    }

    pub fn delete(&mut self, name: &str) -> Result<Vec<String>> {
        self.0.remove(name).with_context(|| format!("group `{name}` does not exist"))
    }

    /// Add the meters, skipping those already in the group.
    pub fn add(&mut self, name: &str, meters: &[String]) -> Result {
        let group = self.get_mut(name)?;
        for meter in meters {
            let meter = meter.trim();
            ensure!(!meter.is_empty(), "meter serial number is empty");
            if !group.iter().any(|existing| existing == meter) {
                group.push(meter.to_owned());
            }
        }
        Ok(())
    }

    /// Remove the meters, returning how many were actually in the group.
    pub fn remove(&mut self, name: &str, meters: &[String]) -> Result<usize> {
        let group = self.get_mut(name)?;
        let n_before = group.len();
        group.retain(|existing| !meters.iter().any(|meter| meter.trim() == existing));
        Ok(n_before - group.len())
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Vec<String>> {
        self.0.get_mut(name).with_context(|| format!("group `{name}` does not exist"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meters(serial_numbers: &[&str]) -> Vec<String> {
        serial_numbers.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_create_and_get() -> Result {
        let mut groups = MeterGroups::default();
        groups.create("office", &meters(&["m2", "m1", "m2"]))?;
        assert_eq!(groups.get("office")?, ["m2", "m1"]);
        assert!(groups.create("office", &[]).is_err());
        assert!(groups.create(" ", &[]).is_err());
        assert!(groups.get("plant").is_err());
        Ok(())
    }

    #[test]
    fn test_add_and_remove() -> Result {
        let mut groups = MeterGroups::default();
        groups.create("plant", &meters(&["a"]))?;
        groups.add("plant", &meters(&["b", "a", " c "]))?;
        assert_eq!(groups.get("plant")?, ["a", "b", "c"]);
        assert_eq!(groups.remove("plant", &meters(&["a", "zzz"]))?, 1);
        assert_eq!(groups.get("plant")?, ["b", "c"]);
        assert!(groups.add("office", &meters(&["a"])).is_err());
        Ok(())
    }

    #[test]
    fn test_delete() -> Result {
        let mut groups = MeterGroups::default();
        groups.create("plant", &meters(&["a"]))?;
        assert_eq!(groups.delete("plant")?, ["a"]);
        assert!(groups.is_empty());
        assert!(groups.delete("plant").is_err());
        Ok(())
    }

    #[test]
    fn test_json_shape() -> Result {
        let groups: MeterGroups = serde_json::from_str(r#"{ "office": ["m1", "m2"] }"#)?;
        assert_eq!(groups.iter().count(), 1);
        assert_eq!(serde_json::to_string(&groups)?, r#"{"office":["m1","m2"]}"#);
        Ok(())
    }
}
