//! Application context
//!
//! Owns everything a command handler needs: resolved paths, settings, the
//! record store, and the id/time sources. Built once in `main` and passed
//! down by explicit reference; nothing in the crate reaches for ambient
//! global state.

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::{Settings, TabunganPaths};
use crate::error::TabunganResult;
use crate::models::{Clock, IdGenerator, SystemClock, SystemIdGenerator};
use crate::services::RecordService;
use crate::storage::{LoadOutcome, RecordStore};

/// Everything a command handler operates on
pub struct AppContext {
    pub paths: TabunganPaths,
    pub settings: Settings,
    pub store: RecordStore,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl AppContext {
    /// Build a context with the system clock and wall-clock id generator
    pub fn new(paths: TabunganPaths) -> TabunganResult<Self> {
        Self::with_sources(
            paths,
            Box::new(SystemIdGenerator::new()),
            Box::new(SystemClock),
        )
    }

    /// Build a context with explicit id and time sources (used by tests)
    pub fn with_sources(
        paths: TabunganPaths,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> TabunganResult<Self> {
        paths.ensure_directories()?;
        let settings = Settings::load_or_create(&paths)?;
        let store = RecordStore::new(paths.tabungan_file(), paths.pengeluaran_file());

        Ok(Self {
            paths,
            settings,
            store,
            ids,
            clock,
        })
    }

    /// Load persisted entries into the store
    pub fn load(&mut self) -> LoadOutcome {
        self.store.load()
    }

    /// Current instant
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Today's date
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Record operations bound to this context
    pub fn records(&mut self) -> RecordService<'_> {
        RecordService::new(&mut self.store, self.ids.as_mut(), self.settings.min_amount)
    }
}
