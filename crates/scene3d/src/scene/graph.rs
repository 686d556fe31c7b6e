//! Actor arena and parent/child bookkeeping
//!
//! Actors live in a `SlotMap` and refer to each other by [`ActorId`]. A child
//! has at most one parent; attaching it elsewhere first detaches it. Structural
//! mutation is crate-private so the [`Scene`](crate::scene::Scene) can keep
//! focus state coherent around it.

use std::fmt::Write as _;

use slotmap::SlotMap;

use crate::error::{SceneError, SceneResult};
use crate::foundation::math::Mat4;
use crate::scene::{Actor, ActorId};

/// Callback fired with a group's id whenever its child list changes
pub type ChildrenChangedHook = Box<dyn FnMut(ActorId)>;

/// Arena of actors forming one or more trees
#[derive(Default)]
pub struct ActorGraph {
    actors: SlotMap<ActorId, Actor>,
    children_changed: Option<ChildrenChangedHook>,
}

impl ActorGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a detached actor and return its id
    pub fn insert(&mut self, actor: Actor) -> ActorId {
        self.actors.insert(actor)
    }

    /// Look up an actor
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    /// Look up an actor mutably
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id)
    }

    /// Whether the id refers to a live actor
    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(id)
    }

    /// Number of live actors, attached or not
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether the arena is empty
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Iterate all live actors in arena order
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors.iter()
    }

    /// Parent of an actor
    pub fn parent(&self, id: ActorId) -> Option<ActorId> {
        self.actors.get(id).and_then(Actor::parent)
    }

    /// Children of an actor, empty for leaves and stale ids
    pub fn children(&self, id: ActorId) -> &[ActorId] {
        self.actors.get(id).map(Actor::children).unwrap_or(&[])
    }

    /// Install or clear the children-changed callback
    pub fn set_children_changed_hook(&mut self, hook: Option<ChildrenChangedHook>) {
        self.children_changed = hook;
    }

    /// Whether `actor` is `ancestor` or lies below it
    ///
    /// # Errors
    /// `InvalidArgument` when either id is not a live actor.
    pub fn is_descendant_of(&self, actor: ActorId, ancestor: ActorId) -> SceneResult<bool> {
        self.require(actor, "actor")?;
        self.require(ancestor, "ancestor")?;
        let mut current = Some(actor);
        while let Some(id) = current {
            if id == ancestor {
                return Ok(true);
            }
            current = self.parent(id);
        }
        Ok(false)
    }

    /// Whether `actor` is `descendant` or lies above it
    ///
    /// # Errors
    /// `InvalidArgument` when either id is not a live actor.
    pub fn is_ascendant_of(&self, actor: ActorId, descendant: ActorId) -> SceneResult<bool> {
        self.is_descendant_of(descendant, actor)
    }

    /// First actor below `root` with the given name
    ///
    /// Immediate children are compared before any grandchildren, then each
    /// child subtree is searched in order.
    pub fn find_actor(&self, root: ActorId, name: &str) -> Option<ActorId> {
        let children = self.children(root);
        if let Some(found) = children
            .iter()
            .copied()
            .find(|&child| self.get(child).and_then(Actor::name) == Some(name))
        {
            return Some(found);
        }
        children
            .iter()
            .filter(|&&child| self.get(child).is_some_and(Actor::is_group))
            .find_map(|&child| self.find_actor(child, name))
    }

    /// `root` and everything below it, parents before children
    pub fn subtree(&self, root: ActorId) -> Vec<ActorId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !self.contains(id) {
                continue;
            }
            out.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        out
    }

    /// Compose world matrices top-down from `root`
    ///
    /// `world(child) = world(parent) · local(child)`; the root's parent world
    /// is its own parent's world if it has one, identity otherwise. Also
    /// refreshes every actor's world bounding sphere.
    pub fn update_world_transforms(&mut self, root: ActorId) {
        let base = self
            .parent(root)
            .and_then(|parent| self.get(parent))
            .map_or_else(Mat4::identity, |parent| *parent.transform().world_matrix());

        let mut stack = vec![(root, base)];
        while let Some((id, parent_world)) = stack.pop() {
            let Some(actor) = self.actors.get_mut(id) else {
                continue;
            };
            let world = parent_world * actor.transform().local_matrix();
            actor.set_world(world);
            stack.extend(actor.children().iter().rev().map(|&child| (child, world)));
        }
    }

    /// Indented dump of the hierarchy below `root`
    pub fn print_tree(&self, root: ActorId) -> String {
        let mut out = String::new();
        self.print_into(root, "", &mut out);
        log::debug!("Actor hierarchy:\n{}", out);
        out
    }

    fn print_into(&self, id: ActorId, indent: &str, out: &mut String) {
        for &child in self.children(id) {
            if let Some(actor) = self.get(child) {
                let _ = writeln!(out, "{indent}{actor}");
                if actor.is_group() {
                    self.print_into(child, &format!("{indent}|  "), out);
                }
            }
        }
    }

    /// Attach `child` to the end of `group`'s children, detaching it from its
    /// previous parent first. Returns the previous parent.
    pub(crate) fn attach(&mut self, group: ActorId, child: ActorId) -> SceneResult<Option<ActorId>> {
        let target = self.get(group).ok_or(SceneError::UnknownActor(group))?;
        if !target.is_group() {
            return Err(SceneError::NotAGroup(group));
        }
        let in_scene = target.in_scene;
        if !self.contains(child) {
            return Err(SceneError::UnknownActor(child));
        }
        if self.is_descendant_of(group, child)? {
            return Err(SceneError::InvalidArgument(format!(
                "adding {child:?} under {group:?} would create a cycle"
            )));
        }

        let previous = self.parent(child);
        if let Some(old) = previous {
            self.detach(old, child);
        }

        if let Some(children) = self.actors.get_mut(group).and_then(|g| g.children.as_mut()) {
            children.push(child);
        }
        if let Some(actor) = self.actors.get_mut(child) {
            actor.parent = Some(group);
        }
        self.set_in_scene(child, in_scene);
        log::debug!("Attached {:?} to {:?}", child, group);
        self.fire_children_changed(group);
        Ok(previous)
    }

    /// Remove `child` from `group`'s children; `false` if it was not there
    pub(crate) fn detach(&mut self, group: ActorId, child: ActorId) -> bool {
        let Some(children) = self.actors.get_mut(group).and_then(|g| g.children.as_mut()) else {
            return false;
        };
        let Some(index) = children.iter().position(|&c| c == child) else {
            return false;
        };
        children.remove(index);
        if let Some(actor) = self.actors.get_mut(child) {
            actor.parent = None;
        }
        self.set_in_scene(child, false);
        log::debug!("Detached {:?} from {:?}", child, group);
        self.fire_children_changed(group);
        true
    }

    /// Detach every child of `group` and return them in their former order
    pub(crate) fn clear_children(&mut self, group: ActorId) -> Vec<ActorId> {
        let Some(children) = self.actors.get_mut(group).and_then(|g| g.children.as_mut()) else {
            return Vec::new();
        };
        let removed = std::mem::take(children);
        for &child in &removed {
            if let Some(actor) = self.actors.get_mut(child) {
                actor.parent = None;
            }
            self.set_in_scene(child, false);
        }
        self.fire_children_changed(group);
        removed
    }

    /// Drop an actor from the arena; the caller has already detached it
    pub(crate) fn remove(&mut self, id: ActorId) -> Option<Actor> {
        self.actors.remove(id)
    }

    /// Mark an actor as root of a scene
    pub(crate) fn mark_root(&mut self, id: ActorId) {
        self.set_in_scene(id, true);
    }

    fn set_in_scene(&mut self, id: ActorId, in_scene: bool) {
        for current in self.subtree(id) {
            if let Some(actor) = self.actors.get_mut(current) {
                actor.in_scene = in_scene;
            }
        }
    }

    fn fire_children_changed(&mut self, group: ActorId) {
        if let Some(hook) = self.children_changed.as_mut() {
            hook(group);
        }
    }

    fn require(&self, id: ActorId, what: &str) -> SceneResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(SceneError::InvalidArgument(format!("{what} {id:?} is not a live actor")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{utils, Vec3};
    use approx::assert_relative_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn rooted() -> (ActorGraph, ActorId) {
        let mut graph = ActorGraph::new();
        let root = graph.insert(Actor::group());
        graph.mark_root(root);
        (graph, root)
    }

    #[test]
    fn test_attach_cascades_in_scene() {
        let (mut graph, root) = rooted();
        let group = graph.insert(Actor::group());
        let leaf = graph.insert(Actor::new());
        graph.attach(group, leaf).unwrap();
        assert!(!graph.get(leaf).unwrap().is_in_scene());

        graph.attach(root, group).unwrap();
        assert!(graph.get(group).unwrap().is_in_scene());
        assert!(graph.get(leaf).unwrap().is_in_scene());

        assert!(graph.detach(root, group));
        assert!(!graph.get(leaf).unwrap().is_in_scene());
        assert_eq!(graph.get(leaf).unwrap().parent(), Some(group));
    }

    #[test]
    fn test_subtree_lists_parents_before_children() {
        let (mut graph, root) = rooted();
        let group = graph.insert(Actor::group());
        let inner = graph.insert(Actor::new());
        let sibling = graph.insert(Actor::new());
        graph.attach(root, group).unwrap();
        graph.attach(group, inner).unwrap();
        graph.attach(root, sibling).unwrap();

        assert_eq!(graph.subtree(root), vec![root, group, inner, sibling]);
        assert_eq!(graph.subtree(group), vec![group, inner]);
    }

    #[test]
    fn test_attach_is_a_move() {
        let (mut graph, root) = rooted();
        let a = graph.insert(Actor::group());
        let b = graph.insert(Actor::group());
        let leaf = graph.insert(Actor::new());
        graph.attach(root, a).unwrap();
        graph.attach(root, b).unwrap();

        graph.attach(a, leaf).unwrap();
        let previous = graph.attach(b, leaf).unwrap();
        assert_eq!(previous, Some(a));
        assert!(graph.children(a).is_empty());
        assert_eq!(graph.children(b), &[leaf]);
        assert_eq!(graph.parent(leaf), Some(b));
    }

    #[test]
    fn test_attach_to_leaf_fails() {
        let (mut graph, _) = rooted();
        let leaf = graph.insert(Actor::new());
        let other = graph.insert(Actor::new());
        assert!(matches!(graph.attach(leaf, other), Err(SceneError::NotAGroup(_))));
    }

    #[test]
    fn test_cycles_are_rejected() {
        let (mut graph, _) = rooted();
        let outer = graph.insert(Actor::group());
        let inner = graph.insert(Actor::group());
        graph.attach(outer, inner).unwrap();
        assert!(matches!(graph.attach(inner, outer), Err(SceneError::InvalidArgument(_))));
        assert!(matches!(graph.attach(outer, outer), Err(SceneError::InvalidArgument(_))));
        assert_eq!(graph.parent(outer), None);
    }

    #[test]
    fn test_detach_missing_child_returns_false() {
        let (mut graph, root) = rooted();
        let leaf = graph.insert(Actor::new());
        assert!(!graph.detach(root, leaf));
    }

    #[test]
    fn test_descendant_queries() {
        let (mut graph, root) = rooted();
        let group = graph.insert(Actor::group());
        let leaf = graph.insert(Actor::new());
        graph.attach(root, group).unwrap();
        graph.attach(group, leaf).unwrap();

        assert!(graph.is_descendant_of(leaf, root).unwrap());
        assert!(graph.is_descendant_of(leaf, leaf).unwrap());
        assert!(!graph.is_descendant_of(root, leaf).unwrap());
        assert!(graph.is_ascendant_of(root, leaf).unwrap());

        let stale = graph.insert(Actor::new());
        graph.remove(stale);
        assert!(matches!(graph.is_descendant_of(leaf, stale), Err(SceneError::InvalidArgument(_))));
        assert!(matches!(graph.is_ascendant_of(stale, leaf), Err(SceneError::InvalidArgument(_))));
    }

    #[test]
    fn test_find_actor_prefers_shallow_matches() {
        let (mut graph, root) = rooted();
        let group = graph.insert(Actor::group().with_name("group"));
        let deep = graph.insert(Actor::new().with_name("target"));
        let shallow = graph.insert(Actor::new().with_name("target"));
        graph.attach(root, group).unwrap();
        graph.attach(group, deep).unwrap();
        graph.attach(root, shallow).unwrap();

        assert_eq!(graph.find_actor(root, "target"), Some(shallow));
        assert_eq!(graph.find_actor(root, "group"), Some(group));
        assert_eq!(graph.find_actor(root, "missing"), None);
    }

    #[test]
    fn test_world_transforms_compose_top_down() {
        let (mut graph, root) = rooted();
        let group = graph.insert(Actor::group());
        let leaf = graph.insert(Actor::new());
        graph.attach(root, group).unwrap();
        graph.attach(group, leaf).unwrap();

        let parent = graph.get_mut(group).unwrap().transform_mut();
        parent.set_position(Vec3::new(10.0, 0.0, 0.0));
        parent.set_uniform_scale(2.0);
        graph.get_mut(leaf).unwrap().transform_mut().set_position(Vec3::new(1.0, 0.0, 0.0));

        graph.update_world_transforms(root);
        let world = graph.get(leaf).unwrap().transform().world_matrix();
        assert_relative_eq!(utils::translation_of(world), Vec3::new(12.0, 0.0, 0.0));
        assert_relative_eq!(utils::max_axis_scale(world), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_children_changed_hook() {
        let (mut graph, root) = rooted();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        graph.set_children_changed_hook(Some(Box::new(move |id| sink.borrow_mut().push(id))));

        let a = graph.insert(Actor::group());
        let leaf = graph.insert(Actor::new());
        graph.attach(root, a).unwrap();
        graph.attach(root, leaf).unwrap();
        graph.attach(a, leaf).unwrap();
        assert_eq!(*seen.borrow(), vec![root, root, root, a]);
    }

    #[test]
    fn test_print_tree() {
        let (mut graph, root) = rooted();
        let group = graph.insert(Actor::group().with_name("ships"));
        let leaf = graph.insert(Actor::new().with_name("cube"));
        graph.attach(root, group).unwrap();
        graph.attach(group, leaf).unwrap();
        assert_eq!(graph.print_tree(root), "ships\n|  cube\n");
    }
}
