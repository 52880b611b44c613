use std::collections::{BTreeMap, HashMap};

use crate::core::Package;

pub mod builder;
pub mod ops;
pub mod viz;

#[derive(Debug, Default)]
pub struct DependencyGraph {
    pub packages: HashMap<String, Package>,
    /// External requirement name to the number of internal packages
    /// requiring it. Kept whether or not external nodes are displayed.
    pub external_usage: BTreeMap<String, usize>,
    pub show_external: bool,
}

impl DependencyGraph {
    pub fn new(show_external: bool) -> Self {
        Self {
            show_external,
            ..Self::default()
        }
    }

    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
