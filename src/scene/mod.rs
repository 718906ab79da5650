//! Authoritative scene: flat element storage with per-element layout
//! targets.
//!
//! Every card is an [`Element`] carrying its source data, its current
//! transform, and the precomputed [`LayoutTargets`] tweens move it
//! towards.

/// Card dataset decoding.
pub mod dataset;
/// Layout arrangements and per-element targets.
pub mod layout;

use glam::{Quat, Vec3};
pub use layout::{Layout, LayoutTargets};
use rand::Rng;

use self::dataset::CardData;
use crate::options::SceneOptions;

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// World-space placement of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Element centre.
    pub position: Vec3,
    /// Element orientation; the card face looks along local +Z.
    pub rotation: Quat,
}

impl Transform {
    /// Unrotated transform at `position`.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// Stable element identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// One card in the scene.
#[derive(Debug, Clone)]
pub struct Element {
    /// Identifier, unique within the scene.
    pub id: ElementId,
    /// Source data.
    pub card: CardData,
    /// Current placement.
    pub transform: Transform,
    /// Placement in each layout.
    pub targets: LayoutTargets,
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The authoritative scene. Owns all elements in a flat list.
#[derive(Debug, Default)]
pub struct Scene {
    /// Elements in insertion order.
    elements: Vec<Element>,
    next_id: u32,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether the scene changed since the last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Record that the renderer consumed the current state.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    /// Replace the scene contents with one element per card, each starting
    /// at its random-layout position.
    pub fn populate<R: Rng + ?Sized>(
        &mut self,
        cards: Vec<CardData>,
        options: &SceneOptions,
        rng: &mut R,
    ) {
        let count = cards.len();
        self.elements.clear();
        self.elements.reserve(count);
        for (index, card) in cards.into_iter().enumerate() {
            let targets = LayoutTargets::compute(index, count, options, rng);
            let id = ElementId(self.next_id);
            self.next_id += 1;
            self.elements.push(Element {
                id,
                card,
                transform: targets.random,
                targets,
            });
        }
        self.invalidate();
    }

    /// All elements in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Look up an element.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.index_of(id).map(|i| &self.elements[i])
    }

    /// Ids are assigned in increasing order, so the list stays sorted.
    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.binary_search_by_key(&id, |e| e.id).ok()
    }

    /// Set an element's transform. Returns `false` for unknown ids.
    pub fn set_transform(&mut self, id: ElementId, transform: Transform) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.elements[index].transform = transform;
        self.invalidate();
        true
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the scene has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn cards(n: usize) -> Vec<CardData> {
        (0..n)
            .map(|i| CardData {
                name: format!("card {i}"),
                awards: serde_json::Value::Null,
                recs: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn populate_starts_at_random_targets() {
        let mut scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(3);
        scene.populate(cards(30), &SceneOptions::default(), &mut rng);
        assert_eq!(scene.len(), 30);
        assert!(scene.is_dirty());
        for element in scene.elements() {
            assert_eq!(element.transform, element.targets.random);
        }
        assert_eq!(scene.elements()[29].targets.grid.position.z, -1000.0);
    }

    #[test]
    fn set_transform_marks_dirty() {
        let mut scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(3);
        scene.populate(cards(2), &SceneOptions::default(), &mut rng);
        scene.mark_rendered();
        assert!(!scene.is_dirty());

        let id = scene.elements()[1].id;
        assert!(scene.set_transform(id, Transform::at(Vec3::ONE)));
        assert!(scene.is_dirty());
        assert_eq!(scene.element(id).map(|e| e.transform.position), Some(Vec3::ONE));
        assert!(!scene.set_transform(ElementId(99), Transform::default()));
    }
}
