//! Welfare scheme discovery: catalog loading, eligibility matching and the
//! presentation adapters that sit on top of the categorized results.

pub mod briefing;
pub mod config;
pub mod error;
pub mod presentation;
pub mod schemes;
pub mod telemetry;
