//! A minimal scene of movable, resizable boxes.

use indexmap::IndexMap;
use waypoint_input::BoundsProvider;
use waypoint_ui_graphics::{Point, Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

#[derive(Default)]
pub struct TestScene {
    next_id: u32,
    entities: IndexMap<EntityId, Rect>,
}

impl TestScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a box whose top-left corner is at `(x, y)`.
    pub fn spawn(&mut self, x: f32, y: f32, width: f32, height: f32) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, Rect::new(x, y, width, height));
        id
    }

    pub fn move_to(&mut self, entity: EntityId, position: Point) {
        if let Some(rect) = self.entities.get_mut(&entity) {
            rect.x = position.x;
            rect.y = position.y;
        }
    }

    pub fn resize(&mut self, entity: EntityId, size: Size) {
        if let Some(rect) = self.entities.get_mut(&entity) {
            rect.width = size.width;
            rect.height = size.height;
        }
    }

    pub fn despawn(&mut self, entity: EntityId) -> bool {
        self.entities.shift_remove(&entity).is_some()
    }

    pub fn entities(&self) -> impl Iterator<Item = &EntityId> {
        self.entities.keys()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl BoundsProvider<EntityId> for TestScene {
    fn bounds_of(&self, entity: &EntityId) -> Option<Rect> {
        self.entities.get(entity).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_moves_and_resizes() {
        let mut scene = TestScene::new();
        let id = scene.spawn(0.0, 0.0, 10.0, 10.0);

        scene.move_to(id, Point::new(5.0, 6.0));
        scene.resize(id, Size::new(1.0, 2.0));

        assert_eq!(scene.bounds_of(&id), Some(Rect::new(5.0, 6.0, 1.0, 2.0)));
    }

    #[test]
    fn despawned_entities_have_no_bounds() {
        let mut scene = TestScene::new();
        let id = scene.spawn(0.0, 0.0, 10.0, 10.0);
        assert!(scene.despawn(id));
        assert!(!scene.despawn(id));
        assert_eq!(scene.bounds_of(&id), None);
        assert!(scene.is_empty());
    }
}
