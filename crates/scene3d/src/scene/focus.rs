//! Keyboard, scroll and selection focus
//!
//! Focus references are plain ids and never keep an actor alive; the scene
//! clears them when the focused actor or one of its ancestors leaves the tree.

use bitflags::bitflags;

use crate::scene::{ActorGraph, ActorId};

bitflags! {
    /// Set of focus kinds
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FocusKinds: u8 {
        /// Receives key events
        const KEYBOARD = 1 << 0;
        /// Receives scroll events
        const SCROLL = 1 << 1;
        /// Currently selected by a pointer
        const SELECTION = 1 << 2;
    }
}

/// A single focus change, used to notify the actors involved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    /// Which focus changed
    pub kind: FocusKinds,
    /// Actor that lost it
    pub lost: Option<ActorId>,
    /// Actor that gained it
    pub gained: Option<ActorId>,
}

/// Current focus holders
#[derive(Debug, Clone, Default)]
pub struct Focus {
    keyboard: Option<ActorId>,
    scroll: Option<ActorId>,
    selection: Option<ActorId>,
}

impl Focus {
    /// Holder of one focus kind
    ///
    /// `kind` must be a single flag; combined flags return `None`.
    pub fn get(&self, kind: FocusKinds) -> Option<ActorId> {
        match kind {
            k if k == FocusKinds::KEYBOARD => self.keyboard,
            k if k == FocusKinds::SCROLL => self.scroll,
            k if k == FocusKinds::SELECTION => self.selection,
            _ => None,
        }
    }

    /// Set one focus kind; `None` when nothing changed
    pub fn set(&mut self, kind: FocusKinds, actor: Option<ActorId>) -> Option<FocusChange> {
        let slot = self.slot_mut(kind)?;
        if *slot == actor {
            return None;
        }
        let lost = std::mem::replace(slot, actor);
        Some(FocusChange {
            kind,
            lost,
            gained: actor,
        })
    }

    /// Clear every focus held by `actor` or one of its descendants
    pub fn unfocus(&mut self, graph: &ActorGraph, actor: ActorId) -> Vec<FocusChange> {
        let mut changes = Vec::new();
        if !graph.contains(actor) {
            return changes;
        }
        for kind in [FocusKinds::KEYBOARD, FocusKinds::SCROLL, FocusKinds::SELECTION] {
            let Some(holder) = self.get(kind) else {
                continue;
            };
            // A stale holder can no longer be reached from anywhere, drop it too
            let inside = !graph.contains(holder) || graph.is_descendant_of(holder, actor).unwrap_or(false);
            if inside {
                changes.extend(self.set(kind, None));
            }
        }
        changes
    }

    /// Clear every focus
    pub fn unfocus_all(&mut self) -> Vec<FocusChange> {
        [FocusKinds::KEYBOARD, FocusKinds::SCROLL, FocusKinds::SELECTION]
            .into_iter()
            .filter_map(|kind| self.set(kind, None))
            .collect()
    }

    /// Union of the kinds in a list of changes
    pub fn kinds_of(changes: &[FocusChange]) -> FocusKinds {
        changes.iter().fold(FocusKinds::empty(), |acc, change| acc | change.kind)
    }

    fn slot_mut(&mut self, kind: FocusKinds) -> Option<&mut Option<ActorId>> {
        match kind {
            k if k == FocusKinds::KEYBOARD => Some(&mut self.keyboard),
            k if k == FocusKinds::SCROLL => Some(&mut self.scroll),
            k if k == FocusKinds::SELECTION => Some(&mut self.selection),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Actor;

    #[test]
    fn test_set_reports_changes_once() {
        let mut graph = ActorGraph::new();
        let a = graph.insert(Actor::new());
        let mut focus = Focus::default();

        let change = focus.set(FocusKinds::KEYBOARD, Some(a)).unwrap();
        assert_eq!(change.lost, None);
        assert_eq!(change.gained, Some(a));
        assert!(focus.set(FocusKinds::KEYBOARD, Some(a)).is_none());
        assert_eq!(focus.get(FocusKinds::KEYBOARD), Some(a));
    }

    #[test]
    fn test_unfocus_clears_descendants_only() {
        let mut graph = ActorGraph::new();
        let group = graph.insert(Actor::group());
        let inner = graph.insert(Actor::new());
        let outside = graph.insert(Actor::new());
        graph.attach(group, inner).unwrap();

        let mut focus = Focus::default();
        focus.set(FocusKinds::KEYBOARD, Some(inner));
        focus.set(FocusKinds::SCROLL, Some(outside));
        focus.set(FocusKinds::SELECTION, Some(group));

        let changes = focus.unfocus(&graph, group);
        assert_eq!(Focus::kinds_of(&changes), FocusKinds::KEYBOARD | FocusKinds::SELECTION);
        assert_eq!(focus.get(FocusKinds::KEYBOARD), None);
        assert_eq!(focus.get(FocusKinds::SCROLL), Some(outside));
    }

    #[test]
    fn test_combined_kind_is_rejected() {
        let mut focus = Focus::default();
        assert!(focus.set(FocusKinds::KEYBOARD | FocusKinds::SCROLL, None).is_none());
        assert_eq!(focus.get(FocusKinds::all()), None);
    }
}
