use std::collections::HashSet;

/// A set of codes that iterates in first-insertion order.
#[derive(Debug, Default, Clone)]
pub(crate) struct InsertionSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl InsertionSet {
    pub(crate) fn insert(&mut self, code: &str) {
        if !self.seen.contains(code) {
            self.seen.insert(code.to_string());
            self.order.push(code.to_string());
        }
    }

    pub(crate) fn contains(&self, code: &str) -> bool {
        self.seen.contains(code)
    }

    pub(crate) fn first(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }
}
