use serde::Serialize;

/// Ingredient names to buy. Unique, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShoppingList(Vec<String>);

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the item was already listed.
    pub fn add(&mut self, item: &str) -> bool {
        if self.contains(item) {
            return false;
        }
        self.0.push(item.to_string());
        true
    }

    /// Returns `false` when the item was not listed.
    pub fn remove(&mut self, item: &str) -> bool {
        match self.0.iter().position(|listed| listed == item) {
            Some(position) => {
                self.0.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.iter().any(|listed| listed == item)
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_adds_never_duplicate() {
        let mut list = ShoppingList::new();
        for item in ["soy sauce", "butter", "soy sauce", "soy sauce", "butter", "cumin"] {
            list.add(item);
        }

        assert_eq!(list.items(), ["soy sauce", "butter", "cumin"]);
    }

    #[test]
    fn test_remove_present_and_absent() {
        let mut list = ShoppingList::new();
        list.add("butter");
        list.add("cumin");

        assert!(!list.remove("saffron"));
        assert_eq!(list.len(), 2);

        assert!(list.remove("butter"));
        assert_eq!(list.len(), 1);
        assert!(!list.contains("butter"));
    }
}
