use std::sync::Arc;

use crate::server::{
    data::store::{MemoryStore, Store},
    model::chore::ChoreSchedule,
};

/// Repository for chore schedules keyed by guild ID
#[derive(Clone)]
pub struct ChoreScheduleRepository {
    store: Arc<dyn Store<u64, ChoreSchedule>>,
}

impl ChoreScheduleRepository {
    pub fn new(store: Arc<dyn Store<u64, ChoreSchedule>>) -> Self {
        Self { store }
    }

    /// Creates a repository backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub async fn get(&self, guild_id: u64) -> Option<ChoreSchedule> {
        self.store.get(&guild_id).await
    }

    /// Stores a schedule, returning the one it replaced
    pub async fn put(&self, schedule: ChoreSchedule) -> Option<ChoreSchedule> {
        self.store.put(schedule.guild_id, schedule).await
    }

    pub async fn delete(&self, guild_id: u64) -> Option<ChoreSchedule> {
        self.store.delete(&guild_id).await
    }

    /// Moves the rotation of a schedule from one index to the next
    ///
    /// Only applies when the stored schedule still has the given revision and is still at
    /// `from_index`, so an advance computed against a schedule that has since been
    /// replaced or already advanced is dropped.
    ///
    /// # Arguments
    /// - `guild_id` - Guild owning the schedule
    /// - `revision` - Revision the reminder was posted for
    /// - `from_index` - Rotation index the reminder was posted with
    /// - `to_index` - Rotation index to store
    ///
    /// # Returns
    /// - `true` - Rotation index updated
    /// - `false` - Schedule missing or changed, nothing was written
    pub async fn advance_rotation(
        &self,
        guild_id: u64,
        revision: u64,
        from_index: usize,
        to_index: usize,
    ) -> bool {
        let mut advanced = false;

        self.store
            .update(guild_id, &mut |slot: &mut Option<ChoreSchedule>| {
                if let Some(schedule) = slot.as_mut() {
                    if schedule.revision == revision && schedule.rotation_index == from_index {
                        schedule.rotation_index = to_index;
                        advanced = true;
                    }
                }
            })
            .await;

        advanced
    }
}
