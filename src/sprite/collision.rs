//! Axis-aligned bounding boxes and the overlap test.

use super::entity::Entity;

/// Edges of an entity's collision box in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Entity {
    /// Collision box centered on the entity's position, using the scaled
    /// dimensions. Rotation is ignored.
    pub fn bounding_box(&self) -> Bounds {
        let half_width = self.scaled_width() / 2.0;
        let half_height = self.scaled_height() / 2.0;
        Bounds {
            left: self.position.x - half_width,
            right: self.position.x + half_width,
            top: self.position.y - half_height,
            bottom: self.position.y + half_height,
        }
    }
}

/// True when the two entities' collision boxes overlap. Boxes that exactly
/// touch on an edge count as overlapping.
pub fn check_collision(a: &Entity, b: &Entity) -> bool {
    let box_a = a.bounding_box();
    let box_b = b.bounding_box();
    !(box_a.right < box_b.left
        || box_a.left > box_b.right
        || box_a.bottom < box_b.top
        || box_a.top > box_b.bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::{vec2, Vec2};

    fn entity_at(position: Vec2, frame: f32) -> Entity {
        Entity::new(
            crate::sprite::test_texture(),
            position,
            Some(vec2(frame, frame)),
            vec2(1.0, 1.0),
        )
    }

    #[test]
    fn test_bounding_box_is_centered() {
        let entity = entity_at(vec2(100.0, 50.0), 40.0);
        let bounds = entity.bounding_box();
        assert_eq!(bounds.left, 80.0);
        assert_eq!(bounds.right, 120.0);
        assert_eq!(bounds.top, 30.0);
        assert_eq!(bounds.bottom, 70.0);
    }

    #[test]
    fn test_bounding_box_tracks_scale() {
        let mut entity = entity_at(vec2(100.0, 100.0), 40.0);
        entity.set_scale(0.5);
        let bounds = entity.bounding_box();
        assert_eq!(bounds.right - bounds.left, 20.0);
        assert_eq!(bounds.bottom - bounds.top, 20.0);
    }

    #[test]
    fn test_disjoint_boxes_do_not_collide() {
        let a = entity_at(vec2(100.0, 100.0), 40.0);
        let b = entity_at(vec2(200.0, 100.0), 40.0);
        assert!(!check_collision(&a, &b));

        let below = entity_at(vec2(100.0, 300.0), 40.0);
        assert!(!check_collision(&a, &below));
    }

    #[test]
    fn test_overlapping_boxes_collide() {
        let a = entity_at(vec2(100.0, 100.0), 40.0);
        let b = entity_at(vec2(125.0, 110.0), 40.0);
        assert!(check_collision(&a, &b));
        assert!(check_collision(&b, &a));
    }

    #[test]
    fn test_touching_edges_collide() {
        // Half widths are 20 each: centers 40 apart share one edge.
        let a = entity_at(vec2(100.0, 100.0), 40.0);
        let b = entity_at(vec2(140.0, 100.0), 40.0);
        assert!(check_collision(&a, &b));
    }

    #[test]
    fn test_contained_box_collides() {
        let big = entity_at(vec2(100.0, 100.0), 80.0);
        let small = entity_at(vec2(100.0, 100.0), 10.0);
        assert!(check_collision(&big, &small));
    }

    #[test]
    fn test_rotation_does_not_affect_collision() {
        let mut a = entity_at(vec2(100.0, 100.0), 40.0);
        let b = entity_at(vec2(141.0, 100.0), 40.0);
        assert!(!check_collision(&a, &b));
        a.rotation = 45.0;
        assert!(!check_collision(&a, &b));
    }
}
