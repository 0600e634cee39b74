use async_trait::async_trait;
use chain_launch::{ChainDescriptor, ChainIdError, Event, EventSink, EventStatus};
use chain_launch_client::{AccountResolver, Genesis, GenesisError, GenesisFetcher};
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(|e| panic!("Fixture state poisoned: {e}"))
}

/// A chain descriptor with fixed values.
#[derive(Debug, Clone)]
pub struct TestChain {
    pub id: Result<String, ChainIdError>,
    pub name: String,
    pub source_url: String,
    pub source_hash: String,
}

impl TestChain {
    pub fn new(id: &str) -> Self {
        Self {
            id: Ok(id.to_string()),
            name: "mychain".to_string(),
            source_url: "https://github.com/example/mychain".to_string(),
            source_hash: "0a1b2c3d4e5f".to_string(),
        }
    }

    /// A chain whose id cannot be derived.
    pub fn without_id(reason: &str) -> Self {
        Self {
            id: Err(ChainIdError(reason.to_string())),
            ..Self::new("")
        }
    }
}

impl ChainDescriptor for TestChain {
    fn id(&self) -> Result<String, ChainIdError> {
        self.id.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn source_hash(&self) -> &str {
        &self.source_hash
    }
}

/// An account whose address is `<prefix>1<suffix>` on every network.
#[derive(Debug, Clone)]
pub struct TestAccount {
    pub name: String,
    pub suffix: String,
}

impl TestAccount {
    pub fn new(name: &str, suffix: &str) -> Self {
        Self {
            name: name.to_string(),
            suffix: suffix.to_string(),
        }
    }
}

impl AccountResolver for TestAccount {
    fn name(&self) -> &str {
        &self.name
    }

    fn address(&self, prefix: &str) -> String {
        format!("{prefix}1{}", self.suffix)
    }
}

/// Serves genesis files from memory and records every fetch.
#[derive(Debug, Default)]
pub struct StaticGenesisFetcher {
    files: Mutex<HashMap<String, Vec<u8>>>,
    fetches: Mutex<Vec<String>>,
}

impl StaticGenesisFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(&self, url: &str, content: &[u8]) {
        lock(&self.files).insert(url.to_string(), content.to_vec());
    }

    pub fn fetches(&self) -> Vec<String> {
        lock(&self.fetches).clone()
    }
}

#[async_trait]
impl GenesisFetcher for StaticGenesisFetcher {
    async fn fetch(&self, url: &str) -> Result<Genesis, GenesisError> {
        lock(&self.fetches).push(url.to_string());

        let content = lock(&self.files)
            .get(url)
            .cloned()
            .ok_or_else(|| GenesisError::Status {
                url: url.to_string(),
                status: 404,
            })?;
        Genesis::from_bytes(content)
    }
}

/// Keeps every event it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<Event>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        lock(&self.events).clone()
    }

    pub fn messages(&self, status: EventStatus) -> Vec<String> {
        lock(&self.events)
            .iter()
            .filter(|e| e.status == status)
            .map(|e| e.message.clone())
            .collect()
    }
}

impl EventSink for RecordingEventSink {
    fn send(&self, event: Event) {
        lock(&self.events).push(event);
    }
}
