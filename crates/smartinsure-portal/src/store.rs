//! In-memory session storage

use dashmap::DashMap;
use parking_lot::Mutex;
use smartinsure_common::{Result, SessionError};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::PortalConfig;
use crate::delay::{Sleeper, TokioSleeper};
use crate::session::PortalSession;

pub type SharedSession = Arc<Mutex<PortalSession>>;

/// Sessions keyed by id
///
/// Uses DashMap for concurrent access; each session sits behind its own
/// mutex. Guards are never held across an await. Creation is serialized so
/// eviction and insert together never push the store past `max_sessions`.
pub struct SessionStore {
    sessions: DashMap<Uuid, SharedSession>,
    create_lock: Mutex<()>,
    config: PortalConfig,
    sleeper: Arc<dyn Sleeper>,
}

impl SessionStore {
    pub fn new(config: PortalConfig) -> Self {
        Self::with_sleeper(config, Arc::new(TokioSleeper))
    }

    /// Store whose AI quote delays run on the given clock
    pub fn with_sleeper(config: PortalConfig, sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            sessions: DashMap::new(),
            create_lock: Mutex::new(()),
            config,
            sleeper,
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Open a new session, evicting the least recently used ones when full
    pub fn create(&self) -> (Uuid, SharedSession) {
        let _creating = self.create_lock.lock();
        self.evict_if_needed();

        let id = Uuid::now_v7();
        let session = Arc::new(Mutex::new(PortalSession::new(id, &self.config)));
        self.sessions.insert(id, session.clone());
        info!(session = %id, total = self.sessions.len(), "Session created");
        (id, session)
    }

    pub fn get(&self, id: &Uuid) -> Result<SharedSession> {
        self.sessions
            .get(id)
            .map(|s| s.value().clone())
            .ok_or_else(|| SessionError::NotFound(id.to_string()).into())
    }

    pub fn remove(&self, id: &Uuid) -> Result<()> {
        self.sessions
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| SessionError::NotFound(id.to_string()).into())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Lock a session and run `f` against it
    pub fn with_session<T>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&mut PortalSession) -> Result<T>,
    ) -> Result<T> {
        let session = self.get(id)?;
        let mut guard = session.lock();
        f(&mut guard)
    }

    /// Run the simulated AI quote for a session to completion.
    ///
    /// Returns the new base premium, or `None` if the run was cancelled.
    pub async fn run_ai_quote(&self, id: &Uuid) -> Result<Option<rust_decimal::Decimal>> {
        let session = self.get(id)?;
        let started = {
            let mut guard = session.lock();
            guard.begin_ai_quote()
        };
        let (ticket, delay) = started?;

        let outcome = delay.wait(self.sleeper.as_ref()).await;

        let mut guard = session.lock();
        guard.finish_ai_quote(ticket, outcome)
    }

    fn evict_if_needed(&self) {
        while self.sessions.len() >= self.config.max_sessions.max(1) {
            let oldest = self
                .sessions
                .iter()
                .min_by_key(|entry| entry.value().lock().last_active())
                .map(|entry| *entry.key());

            match oldest {
                Some(id) => {
                    self.sessions.remove(&id);
                    debug!(session = %id, "Evicted idle session");
                }
                None => break,
            }
        }
    }
}
