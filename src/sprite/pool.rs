//! Fixed-capacity entity pool.
//!
//! Slots are recycled, never freed: releasing a slot just clears its active
//! flag, and the next insert overwrites the lowest inactive slot.

use super::entity::Entity;

pub struct EntityPool {
    slots: Vec<Entity>,
    capacity: usize,
}

impl EntityPool {
    pub fn new(capacity: usize) -> EntityPool {
        EntityPool {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Lowest free slot: an inactive occupied one, or a fresh one while the
    /// pool is below capacity.
    fn free_slot(&self) -> Option<usize> {
        match self.slots.iter().position(|entity| !entity.active) {
            Some(index) => Some(index),
            None if self.slots.len() < self.capacity => Some(self.slots.len()),
            None => None,
        }
    }

    /// Places `entity` in the first free slot and returns its index. `None`
    /// means the pool was full and the entity was dropped; that is not an
    /// error condition.
    pub fn insert(&mut self, entity: Entity) -> Option<usize> {
        let index = self.free_slot()?;
        if index == self.slots.len() {
            self.slots.push(entity);
        } else {
            self.slots[index] = entity;
        }
        Some(index)
    }

    /// Deactivates a slot, leaving the entity in place for reuse. Panics on
    /// an out-of-range index.
    pub fn release(&mut self, index: usize) {
        assert!(index < self.slots.len(), "pool slot {} out of range", index);
        self.slots[index].active = false;
    }

    /// Deactivates every slot.
    pub fn clear(&mut self) {
        for entity in &mut self.slots {
            entity.active = false;
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Occupied slots, active or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.slots.get_mut(index)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|entity| entity.active).count()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Entity> {
        self.slots.iter().filter(|entity| entity.active)
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.slots.iter_mut().filter(|entity| entity.active)
    }
}
