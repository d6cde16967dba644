//! Test doubles shared by the service and bot tests.
//!
//! `ManualTriggerEngine` records installed triggers and fires them on demand instead of
//! waiting for wall-clock time. `RecordingMessenger` keeps every posted message and can
//! be told to treat a channel as unreachable or to hold sends to it until released.

use chrono::Weekday;
use serenity::{all::ChannelType, async_trait};
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};
use tokio::sync::Notify;
use tokio_cron_scheduler::JobSchedulerError;
use uuid::Uuid;

use crate::server::{
    error::AppError,
    model::chore::{ConfigureChoresParam, DestinationChannel},
    scheduler::{TriggerCallback, TriggerEngine, TriggerHandle, TriggerSpec},
    service::messenger::ChannelMessenger,
    state::AppState,
};

pub const GUILD_ID: u64 = 100;
pub const CHANNEL_ID: u64 = 200;
pub const USER_ID: u64 = 300;

struct InstalledTrigger {
    handle: TriggerHandle,
    spec: TriggerSpec,
    callback: TriggerCallback,
}

#[derive(Default)]
struct EngineState {
    active: Vec<InstalledTrigger>,
    cancelled: Vec<InstalledTrigger>,
    installs: usize,
}

/// Trigger engine driven explicitly by tests
#[derive(Default)]
pub struct ManualTriggerEngine {
    state: Mutex<EngineState>,
    fail_after: Option<usize>,
}

impl ManualTriggerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that rejects every install after the first `installs` succeeded
    pub fn failing_after(installs: usize) -> Self {
        Self {
            state: Mutex::default(),
            fail_after: Some(installs),
        }
    }

    pub fn active_count(&self) -> usize {
        self.state.lock().unwrap().active.len()
    }

    pub fn cancelled_count(&self) -> usize {
        self.state.lock().unwrap().cancelled.len()
    }

    pub fn active_specs(&self) -> Vec<TriggerSpec> {
        self.state
            .lock()
            .unwrap()
            .active
            .iter()
            .map(|trigger| trigger.spec)
            .collect()
    }

    /// Runs the callback of every live trigger installed for `weekday`
    pub async fn fire(&self, weekday: Weekday) {
        let callbacks: Vec<TriggerCallback> = self
            .state
            .lock()
            .unwrap()
            .active
            .iter()
            .filter(|trigger| trigger.spec.weekday == weekday)
            .map(|trigger| trigger.callback.clone())
            .collect();

        for callback in callbacks {
            callback().await;
        }
    }

    /// Runs the callback of every cancelled trigger, simulating a firing that raced
    /// with its cancellation
    pub async fn fire_cancelled(&self) {
        let callbacks: Vec<TriggerCallback> = self
            .state
            .lock()
            .unwrap()
            .cancelled
            .iter()
            .map(|trigger| trigger.callback.clone())
            .collect();

        for callback in callbacks {
            callback().await;
        }
    }
}

#[async_trait]
impl TriggerEngine for ManualTriggerEngine {
    async fn schedule(
        &self,
        spec: TriggerSpec,
        callback: TriggerCallback,
    ) -> Result<TriggerHandle, AppError> {
        let mut state = self.state.lock().unwrap();

        if self.fail_after.is_some_and(|limit| state.installs >= limit) {
            return Err(JobSchedulerError::CantAdd.into());
        }

        state.installs += 1;
        let handle = TriggerHandle(Uuid::new_v4());
        state.active.push(InstalledTrigger {
            handle,
            spec,
            callback,
        });

        Ok(handle)
    }

    async fn cancel(&self, handle: TriggerHandle) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();

        if let Some(position) = state.active.iter().position(|t| t.handle == handle) {
            let trigger = state.active.remove(position);
            state.cancelled.push(trigger);
        }

        Ok(())
    }
}

/// Messenger recording every message it was asked to post
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<(u64, String)>>,
    unreachable: Mutex<HashSet<u64>>,
    held: Mutex<HashSet<u64>>,
    send_started: Notify,
    release: Notify,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later send to `channel_id` fail
    pub fn make_unreachable(&self, channel_id: u64) {
        self.unreachable.lock().unwrap().insert(channel_id);
    }

    /// Makes later sends to `channel_id` block until `release` is called
    pub fn hold(&self, channel_id: u64) {
        self.held.lock().unwrap().insert(channel_id);
    }

    /// Waits until a send to a held channel has started
    pub async fn wait_for_held_send(&self) {
        self.send_started.notified().await;
    }

    /// Lets one blocked send to a held channel complete
    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn sent(&self) -> Vec<(u64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChannelMessenger for RecordingMessenger {
    async fn send(&self, channel_id: u64, content: &str) -> Result<(), AppError> {
        if self.unreachable.lock().unwrap().contains(&channel_id) {
            return Err(AppError::NotFound(format!(
                "Channel {} is unreachable",
                channel_id
            )));
        }

        let held = self.held.lock().unwrap().contains(&channel_id);
        if held {
            self.send_started.notify_one();
            self.release.notified().await;
        }

        self.sent
            .lock()
            .unwrap()
            .push((channel_id, content.to_string()));

        Ok(())
    }
}

/// Application state wired to test doubles
pub struct TestContext {
    pub state: AppState,
    pub engine: Arc<ManualTriggerEngine>,
    pub messenger: Arc<RecordingMessenger>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_engine(ManualTriggerEngine::new())
    }

    pub fn with_engine(engine: ManualTriggerEngine) -> Self {
        let engine = Arc::new(engine);
        let messenger = Arc::new(RecordingMessenger::new());
        let state = AppState::new(engine.clone(), messenger.clone());

        Self {
            state,
            engine,
            messenger,
        }
    }
}

pub fn text_channel(id: u64) -> DestinationChannel {
    DestinationChannel {
        id,
        kind: ChannelType::Text,
    }
}

/// Valid chore parameters for `GUILD_ID`; tests override the fields they exercise
pub fn chores_param(people: &str, chores: &str, days: &str) -> ConfigureChoresParam {
    ConfigureChoresParam {
        guild_id: GUILD_ID,
        people: people.to_string(),
        chores: chores.to_string(),
        days: days.to_string(),
        time: "18:00".to_string(),
        timezone: "Europe/London".to_string(),
        channel: text_channel(CHANNEL_ID),
    }
}
