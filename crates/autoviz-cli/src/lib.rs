//! CLI library components for the autoviz analyzer.

pub mod logging;
