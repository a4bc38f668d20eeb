//! Node toggle state machine.
//!
//! Per item states, read from its classes:
//!
//! | State       | On toggle click                                   |
//! |-------------|---------------------------------------------------|
//! | `collapsed` | reveal loaded children, or fetch one level        |
//! | `expanded`  | collapse; the children stay in the DOM            |
//! | `leaf`      | nothing                                           |
//! | `loading`   | nothing                                           |
//! | `error`     | nothing until the item is re-rendered             |

/// What a toggle click does to an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Collapsed with children already in the DOM: swap to expanded
    Reveal,
    /// Collapsed with no children container: create one and load a level
    Fetch,
    /// Expanded: swap to collapsed
    Collapse,
    /// Leaf, loading or failed: no-op
    Ignore,
}

impl Transition {
    /// Decide the transition from an item's current state.
    ///
    /// `collapsed` wins over `expanded` if both are somehow present.
    pub fn decide(collapsed: bool, expanded: bool, has_children: bool) -> Self {
        match (collapsed, expanded) {
            (true, _) if has_children => Self::Reveal,
            (true, _) => Self::Fetch,
            (false, true) => Self::Collapse,
            (false, false) => Self::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_with_children_reveals() {
        assert_eq!(Transition::decide(true, false, true), Transition::Reveal);
    }

    #[test]
    fn test_collapsed_without_children_fetches() {
        assert_eq!(Transition::decide(true, false, false), Transition::Fetch);
    }

    #[test]
    fn test_expanded_collapses_without_fetch() {
        for has_children in [true, false] {
            assert_eq!(Transition::decide(false, true, has_children), Transition::Collapse);
        }
    }

    #[test]
    fn test_leaf_loading_and_error_are_ignored() {
        // None of these states carry collapsed or expanded.
        assert_eq!(Transition::decide(false, false, false), Transition::Ignore);
        assert_eq!(Transition::decide(false, false, true), Transition::Ignore);
    }

    #[test]
    fn test_collapsed_takes_precedence() {
        assert_eq!(Transition::decide(true, true, true), Transition::Reveal);
    }
}
