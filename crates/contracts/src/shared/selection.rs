use std::collections::HashSet;

/// Selected row ids on a list screen.
///
/// Only ever holds ids from the currently displayed page; cleared on
/// every successful refetch and after a batch action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<i64>,
}

impl Selection {
    pub fn toggle(&mut self, id: i64, selected: bool) {
        if selected {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    pub fn select_all(&mut self, ids: impl IntoIterator<Item = i64>) {
        self.ids = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.ids.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_clear() {
        let mut sel = Selection::default();
        sel.toggle(1, true);
        sel.toggle(2, true);
        sel.toggle(1, false);
        assert_eq!(sel.len(), 1);
        assert!(sel.contains(2));

        sel.clear();
        assert!(sel.is_empty());
    }

    #[test]
    fn test_select_all_replaces_previous() {
        let mut sel = Selection::default();
        sel.toggle(99, true);
        sel.select_all([1, 2, 3]);
        assert_eq!(sel.len(), 3);
        assert!(!sel.contains(99));
    }
}
