//! Keyed sequence diffing between row snapshots.
//!
//! The binder hands two snapshots plus its identity and content predicates
//! to a [`DiffStrategy`], which returns an edit script. Applying the script
//! ops in order transforms the old sequence into the new one.

/// A single edit applied to the live list.
///
/// Indices refer to the list *at the time the op is applied*, after all
/// preceding ops in the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp<T> {
    Insert { index: usize, item: T },
    Remove { index: usize },
    Move { from: usize, to: usize },
    Update { index: usize, item: T },
}

/// Ordered sequence of edits produced by a diff.
pub type EditScript<T> = Vec<EditOp<T>>;

/// Computes the edit script between two snapshots.
///
/// `same_identity` answers "is this conceptually the same row?";
/// `same_content` answers "does this row need a re-render?". Callers must
/// guarantee identity keys are unique within each snapshot.
pub trait DiffStrategy<T> {
    fn diff(
        &self,
        old: &[T],
        new: &[T],
        same_identity: &dyn Fn(&T, &T) -> bool,
        same_content: &dyn Fn(&T, &T) -> bool,
    ) -> EditScript<T>;
}

/// Default diff strategy: deterministic keyed diff.
///
/// Tie-break policy: identities absent from the new snapshot are removed
/// back-to-front, then a forward walk over the new snapshot emits a move
/// (never a remove+insert pair) for surviving identities that are out of
/// place, an insert for brand-new identities, and an update whenever the
/// content predicate reports a difference.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyedDiff;

impl<T: Clone> DiffStrategy<T> for KeyedDiff {
    fn diff(
        &self,
        old: &[T],
        new: &[T],
        same_identity: &dyn Fn(&T, &T) -> bool,
        same_content: &dyn Fn(&T, &T) -> bool,
    ) -> EditScript<T> {
        let mut script = EditScript::new();
        let mut work: Vec<T> = old.to_vec();

        for index in (0..work.len()).rev() {
            if !new.iter().any(|item| same_identity(&work[index], item)) {
                script.push(EditOp::Remove { index });
                work.remove(index);
            }
        }

        for (to, item) in new.iter().enumerate() {
            // Positions before `to` are already settled.
            match work[to..].iter().position(|w| same_identity(w, item)) {
                Some(0) => {}
                Some(offset) => {
                    let from = to + offset;
                    let moved = work.remove(from);
                    work.insert(to, moved);
                    script.push(EditOp::Move { from, to });
                }
                None => {
                    script.push(EditOp::Insert {
                        index: to,
                        item: item.clone(),
                    });
                    work.insert(to, item.clone());
                    continue;
                }
            }
            if !same_content(&work[to], item) {
                script.push(EditOp::Update {
                    index: to,
                    item: item.clone(),
                });
                work[to] = item.clone();
            }
        }

        script
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal keyed item: identity is `key`, content is `(key, version)`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Item {
        key: u32,
        version: u32,
    }

    fn item(key: u32, version: u32) -> Item {
        Item { key, version }
    }

    fn diff(old: &[Item], new: &[Item]) -> EditScript<Item> {
        KeyedDiff.diff(
            old,
            new,
            &|a, b| a.key == b.key,
            &|a, b| a.key == b.key && a.version == b.version,
        )
    }

    /// Replay a script against `old` and check the result matches `new`.
    fn apply(old: &[Item], script: &EditScript<Item>) -> Vec<Item> {
        let mut list = old.to_vec();
        for op in script {
            match op {
                EditOp::Insert { index, item } => list.insert(*index, item.clone()),
                EditOp::Remove { index } => {
                    list.remove(*index);
                }
                EditOp::Move { from, to } => {
                    let moved = list.remove(*from);
                    list.insert(*to, moved);
                }
                EditOp::Update { index, item } => list[*index] = item.clone(),
            }
        }
        list
    }

    #[test]
    fn test_identical_snapshots_produce_empty_script() {
        let rows = vec![item(1, 0), item(2, 0), item(3, 0)];
        assert!(diff(&rows, &rows).is_empty());
    }

    #[test]
    fn test_content_change_emits_update() {
        let old = vec![item(1, 0), item(2, 0)];
        let new = vec![item(1, 0), item(2, 1)];
        assert_eq!(
            diff(&old, &new),
            vec![EditOp::Update {
                index: 1,
                item: item(2, 1)
            }]
        );
    }

    #[test]
    fn test_append_emits_insert() {
        let old = vec![item(1, 0)];
        let new = vec![item(1, 0), item(2, 0)];
        assert_eq!(
            diff(&old, &new),
            vec![EditOp::Insert {
                index: 1,
                item: item(2, 0)
            }]
        );
    }

    #[test]
    fn test_removal_emits_remove() {
        let old = vec![item(1, 0), item(2, 0), item(3, 0)];
        let new = vec![item(1, 0), item(3, 0)];
        assert_eq!(diff(&old, &new), vec![EditOp::Remove { index: 1 }]);
    }

    #[test]
    fn test_reorder_emits_moves_not_churn() {
        let old = vec![item(1, 0), item(2, 0), item(3, 0)];
        let new = vec![item(3, 0), item(1, 0), item(2, 0)];
        let script = diff(&old, &new);
        assert_eq!(script, vec![EditOp::Move { from: 2, to: 0 }]);
        assert_eq!(apply(&old, &script), new);
    }

    #[test]
    fn test_mixed_edits_converge() {
        let old = vec![item(1, 0), item(2, 0), item(3, 0), item(4, 0)];
        let new = vec![item(4, 1), item(2, 0), item(5, 0), item(1, 0)];
        let script = diff(&old, &new);
        assert_eq!(apply(&old, &script), new);
    }

    #[test]
    fn test_empty_to_populated_and_back() {
        let rows = vec![item(1, 0), item(2, 0)];
        let grow = diff(&[], &rows);
        assert_eq!(apply(&[], &grow), rows);
        let shrink = diff(&rows, &[]);
        assert_eq!(
            shrink,
            vec![EditOp::Remove { index: 1 }, EditOp::Remove { index: 0 }]
        );
        assert!(apply(&rows, &shrink).is_empty());
    }

    #[test]
    fn test_diff_is_deterministic() {
        let old = vec![item(1, 0), item(2, 0), item(3, 0)];
        let new = vec![item(2, 1), item(3, 0), item(4, 0)];
        let first = diff(&old, &new);
        for _ in 0..8 {
            assert_eq!(diff(&old, &new), first);
        }
    }
}
