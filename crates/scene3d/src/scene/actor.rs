//! Actors: positionable, optionally renderable members of the scene tree
//!
//! An actor is a plain value stored in the scene's arena. Whether it can hold
//! children is a capability (`children` is `Some`), not a separate type.

use std::fmt;
use std::sync::Arc;

use slotmap::new_key_type;

use crate::action::ActionId;
use crate::events::{same_listener, SharedListener};
use crate::foundation::math::utils;
use crate::picking::BoundingSphere;
use crate::render::Geometry;
use crate::scene::TransformNode;

new_key_type! {
    /// Stable, generation-checked handle to an actor in a scene
    pub struct ActorId;
}

/// A node of the scene tree
pub struct Actor {
    transform: TransformNode,
    name: Option<String>,
    visible: bool,
    listeners: Vec<SharedListener>,
    geometry: Option<Arc<Geometry>>,
    bounds: Option<BoundingSphere>,
    pub(crate) actions: Vec<ActionId>,
    pub(crate) parent: Option<ActorId>,
    pub(crate) in_scene: bool,
    pub(crate) children: Option<Vec<ActorId>>,
}

impl Actor {
    /// Leaf actor without geometry
    pub fn new() -> Self {
        Self {
            transform: TransformNode::new(),
            name: None,
            visible: true,
            listeners: Vec::new(),
            geometry: None,
            bounds: None,
            actions: Vec::new(),
            parent: None,
            in_scene: false,
            children: None,
        }
    }

    /// Actor with the group capability
    pub fn group() -> Self {
        Self {
            children: Some(Vec::new()),
            ..Self::new()
        }
    }

    /// Leaf actor drawing `geometry`
    pub fn model(geometry: Arc<Geometry>) -> Self {
        Self {
            geometry: Some(geometry),
            ..Self::new()
        }
    }

    /// Builder pattern: set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder pattern: set the transform
    pub fn with_transform(mut self, transform: TransformNode) -> Self {
        self.transform = transform;
        self
    }

    /// Transform state
    pub fn transform(&self) -> &TransformNode {
        &self.transform
    }

    /// Mutable transform state
    pub fn transform_mut(&mut self) -> &mut TransformNode {
        &mut self.transform
    }

    /// Lookup name, not required to be unique
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set or clear the lookup name
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Hidden actors and their subtrees are neither drawn nor picked, but keep acting
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the actor
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Add a listener; returns `false` if it was already registered
    pub fn add_listener(&mut self, listener: SharedListener) -> bool {
        if self.listeners.iter().any(|l| same_listener(l, &listener)) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Remove a listener; returns `false` if it was not registered
    pub fn remove_listener(&mut self, listener: &SharedListener) -> bool {
        let Some(index) = self.listeners.iter().position(|l| same_listener(l, listener)) else {
            return false;
        };
        self.listeners.remove(index);
        true
    }

    /// Remove every listener
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Registered listeners in registration order
    pub fn listeners(&self) -> &[SharedListener] {
        &self.listeners
    }

    /// Ids of the attached top-level actions in attach order
    pub fn actions(&self) -> &[ActionId] {
        &self.actions
    }

    /// Parent actor, if attached to one
    pub fn parent(&self) -> Option<ActorId> {
        self.parent
    }

    /// Whether the actor is attached to a tree rooted at a scene's root
    pub fn is_in_scene(&self) -> bool {
        self.in_scene
    }

    /// Whether the actor can hold children
    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }

    /// Children in draw order; empty for leaves
    pub fn children(&self) -> &[ActorId] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Whether the actor has at least one child
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Geometry drawn and picked for this actor
    pub fn geometry(&self) -> Option<&Arc<Geometry>> {
        self.geometry.as_ref()
    }

    /// Replace or clear the geometry
    pub fn set_geometry(&mut self, geometry: Option<Arc<Geometry>>) {
        self.geometry = geometry;
        self.refresh_bounds();
    }

    /// World bounding sphere as of the last world transform pass
    pub fn bounding_sphere(&self) -> Option<&BoundingSphere> {
        self.bounds.as_ref()
    }

    pub(crate) fn set_world(&mut self, world: crate::foundation::math::Mat4) {
        self.transform.set_world(world);
        self.refresh_bounds();
    }

    /// Center is the model box center through the world matrix; radius is
    /// half the box diagonal times the largest world axis scale
    fn refresh_bounds(&mut self) {
        let world = self.transform.world_matrix();
        self.bounds = self
            .geometry
            .as_ref()
            .and_then(|geometry| geometry.bounds())
            .map(|aabb| {
                BoundingSphere::new(
                    utils::transform_point(world, &aabb.center()),
                    aabb.diagonal() * 0.5 * utils::max_axis_scale(world),
                )
            });
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, self.is_group()) {
            (Some(name), _) => write!(f, "{name}"),
            (None, true) => write!(f, "Group"),
            (None, false) => write!(f, "Actor"),
        }
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("name", &self.name)
            .field("visible", &self.visible)
            .field("position", &self.transform.position())
            .field("parent", &self.parent)
            .field("in_scene", &self.in_scene)
            .field("children", &self.children)
            .field("actions", &self.actions.len())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
