//! Keyword Match (workspace facade crate).
//!
//! A terminal quiz: drag keywords onto the definitions they match, against a
//! pause-aware timer, with a local best-times leaderboard. The implementation
//! lives in dedicated crates under `crates/`; this package re-exports them as
//! `keyword_match::{core,input,store,term,types}` and adds start-up config.

pub mod config;
pub mod logging;

pub use keyword_match_core as core;
pub use keyword_match_input as input;
pub use keyword_match_store as store;
pub use keyword_match_term as term;
pub use keyword_match_types as types;

pub use config::AppConfig;
pub use logging::init_logging;
