//! Ordered pools of scrolling entities
//!
//! Insertion order is spawn order, which for ground tiles and obstacles is
//! also left-to-right screen order. An entity belongs to exactly one pool.

use serde::{Deserialize, Serialize};

use super::entity::{EntityRole, ScrollingEntity};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityPools {
    pub ground: Vec<ScrollingEntity>,
    pub sky: Vec<ScrollingEntity>,
    pub obstacles: Vec<ScrollingEntity>,
}

impl EntityPools {
    pub fn new() -> Self {
        Self::default()
    }

    fn pool_mut(&mut self, role: EntityRole) -> &mut Vec<ScrollingEntity> {
        match role {
            EntityRole::Ground => &mut self.ground,
            EntityRole::Sky => &mut self.sky,
            EntityRole::Obstacle => &mut self.obstacles,
        }
    }

    /// Append to the pool matching the entity's kind
    pub fn append(&mut self, entity: ScrollingEntity) {
        self.pool_mut(entity.role()).push(entity);
    }

    /// Remove every entity flagged as garbage.
    ///
    /// Survivors keep their relative order; removed entities come back ground
    /// first, then sky, then obstacles, each in pool order.
    pub fn sweep(&mut self) -> Vec<ScrollingEntity> {
        let mut removed = Vec::new();
        for pool in [&mut self.ground, &mut self.sky, &mut self.obstacles] {
            if !pool.iter().any(|e| e.garbage) {
                continue;
            }
            let (garbage, keep): (Vec<_>, Vec<_>) = pool.drain(..).partition(|e| e.garbage);
            *pool = keep;
            removed.extend(garbage);
        }
        removed
    }

    /// Ground ++ sky ++ obstacles
    pub fn iter_all(&self) -> impl Iterator<Item = &ScrollingEntity> {
        self.ground.iter().chain(self.sky.iter()).chain(self.obstacles.iter())
    }

    pub fn iter_all_mut(&mut self) -> impl Iterator<Item = &mut ScrollingEntity> {
        self.ground
            .iter_mut()
            .chain(self.sky.iter_mut())
            .chain(self.obstacles.iter_mut())
    }

    pub fn last_ground(&self) -> Option<&ScrollingEntity> {
        self.ground.last()
    }

    /// Most recently spawned obstacle; `None` means no adjacency rule applies
    pub fn last_obstacle(&self) -> Option<&ScrollingEntity> {
        self.obstacles.last()
    }

    pub fn len(&self) -> usize {
        self.ground.len() + self.sky.len() + self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, id: u32) -> Option<&ScrollingEntity> {
        self.iter_all().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::EntityKind;
    use crate::sim::sprite::SpriteMetrics;

    fn cloud(id: u32, x: f32) -> ScrollingEntity {
        let mut e = ScrollingEntity::new(
            id,
            EntityKind::Sky {
                variant: "cloud".into(),
            },
            SpriteMetrics::centred(46.0, 14.0),
        );
        e.x = x;
        e
    }

    fn tile(id: u32) -> ScrollingEntity {
        ScrollingEntity::new(
            id,
            EntityKind::Ground {
                variant: "floor".into(),
            },
            SpriteMetrics::centred(200.0, 12.0),
        )
    }

    #[test]
    fn test_append_routes_by_kind() {
        let mut pools = EntityPools::new();
        pools.append(tile(1));
        pools.append(cloud(2, 0.0));
        assert_eq!(pools.ground.len(), 1);
        assert_eq!(pools.sky.len(), 1);
        assert!(pools.obstacles.is_empty());
        assert!(pools.last_obstacle().is_none());
        assert_eq!(pools.len(), 2);
    }

    #[test]
    fn test_sweep_preserves_survivor_order() {
        let mut pools = EntityPools::new();
        for id in 0..6 {
            let mut c = cloud(id, id as f32);
            c.garbage = id % 2 == 0;
            pools.append(c);
        }
        pools.append(tile(10));

        let removed = pools.sweep();
        let removed_ids: Vec<u32> = removed.iter().map(|e| e.id).collect();
        assert_eq!(removed_ids, vec![0, 2, 4]);
        let kept: Vec<u32> = pools.sky.iter().map(|e| e.id).collect();
        assert_eq!(kept, vec![1, 3, 5]);
        assert_eq!(pools.ground.len(), 1);
    }

    #[test]
    fn test_iter_all_concatenates_in_pool_order() {
        let mut pools = EntityPools::new();
        pools.append(cloud(1, 0.0));
        pools.append(tile(2));
        let ids: Vec<u32> = pools.iter_all().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(pools.find(1).is_some());
        assert!(pools.find(99).is_none());
    }
}
