//! CIDR aggregation across accounts and regions.
//!
//! Each distinct CIDR is kept once, with the union of every rule description
//! that referenced it.

use crate::models::Ipv4;
use std::collections::{BTreeMap, BTreeSet};

/// CIDR -> distinct rule descriptions.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CidrMap {
    entries: BTreeMap<Ipv4, BTreeSet<String>>,
}

impl CidrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one rule. A missing description still registers the CIDR.
    pub fn add(&mut self, cidr: Ipv4, description: Option<&str>) {
        let descriptions = self.entries.entry(cidr).or_default();
        if let Some(description) = description {
            descriptions.insert(description.to_string());
        }
    }

    pub fn get(&self, cidr: &Ipv4) -> Option<&BTreeSet<String>> {
        self.entries.get(cidr)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ipv4, &BTreeSet<String>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cidr(s: &str) -> Ipv4 {
        Ipv4::new(s).unwrap()
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut map = CidrMap::new();
        map.add(cidr("1.2.3.0/24"), Some("A"));
        map.add(cidr("1.2.3.0/24"), Some("B"));
        map.add(cidr("1.2.3.0/24"), Some("A"));

        assert_eq!(map.len(), 1);
        let descriptions: Vec<&str> = map
            .get(&cidr("1.2.3.0/24"))
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(descriptions, vec!["A", "B"]);
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut forward = CidrMap::new();
        forward.add(cidr("1.2.3.0/24"), Some("A"));
        forward.add(cidr("5.6.7.8/32"), None);
        forward.add(cidr("1.2.3.0/24"), Some("B"));

        let mut backward = CidrMap::new();
        backward.add(cidr("1.2.3.0/24"), Some("B"));
        backward.add(cidr("5.6.7.8/32"), None);
        backward.add(cidr("1.2.3.0/24"), Some("A"));

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_missing_description_registers_cidr() {
        let mut map = CidrMap::new();
        map.add(cidr("5.6.7.8/32"), None);
        assert_eq!(map.len(), 1);
        assert!(map.get(&cidr("5.6.7.8/32")).unwrap().is_empty());

        map.add(cidr("5.6.7.8/32"), Some("office"));
        assert_eq!(map.get(&cidr("5.6.7.8/32")).unwrap().len(), 1);
    }
}
