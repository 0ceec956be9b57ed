//! # pearls-core
//!
//! Core library for Pearls, a once-a-day tracker for a fixed exercise routine.
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime dependency. One user, one process, one prompt at a time.
//! - **Append-only history**: Stored sessions are never rewritten; each day is linked once.
//! - **Injected collaborators**: Storage goes through [`RecordStore`], terminal I/O through
//!   [`Presenter`], and rule tuning through [`RulesConfig`], so everything runs under test
//!   without a terminal or home directory.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pearls_core::{CsvRecordStore, RepsRules, StorageConfig, Tracker};
//!
//! let storage = StorageConfig::from_home()?;
//! let store = CsvRecordStore::new(&storage.records_file());
//! let mut tracker = Tracker::open(store, RepsRules::default(), today)?;
//! tracker.run(&mut presenter)?;
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod rules;
pub mod session;
pub mod storage;
pub mod store;
pub mod tracker;

pub use config::{load_tracker_config, RulesConfig, TrackerConfig};
pub use error::{Result, TrackerError};
pub use report::StatusReport;
pub use rules::{Advice, RepsRules};
pub use session::{ChainState, Session, SessionChain, SessionRecord};
pub use storage::StorageConfig;
pub use store::{CsvRecordStore, InMemoryRecordStore, RecordStore};
pub use tracker::{Presenter, Tracker};
