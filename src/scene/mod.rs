mod object;

pub use object::{Alignment, MeshObject, SceneObject, TextObject};

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Unique identifier for an object linked into a [`Scene`].
    pub struct ObjectId;
}

/// The single capability the importer needs from a scene: linking a new
/// object into it.
pub trait SceneSink {
    /// Links `object` into the scene.
    fn add_object(&mut self, object: SceneObject);
}

impl SceneSink for Vec<SceneObject> {
    fn add_object(&mut self, object: SceneObject) {
        self.push(object);
    }
}

/// Arena of scene objects. Objects are never unlinked, so slot order is
/// insertion order.
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<ObjectId, SceneObject>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Links an object and returns its ID.
    pub fn insert(&mut self, object: SceneObject) -> ObjectId {
        self.objects.insert(object)
    }

    /// Objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> + '_ {
        self.objects.iter()
    }

    /// Mesh objects in insertion order.
    pub fn meshes(&self) -> impl Iterator<Item = &MeshObject> + '_ {
        self.iter().filter_map(|(_, object)| object.as_mesh())
    }

    /// Text objects in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &TextObject> + '_ {
        self.iter().filter_map(|(_, object)| object.as_text())
    }

    /// Number of linked objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if nothing is linked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl SceneSink for Scene {
    fn add_object(&mut self, object: SceneObject) {
        self.insert(object);
    }
}
