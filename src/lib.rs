//! Workload Metrics Engine
//!
//! This crate turns a month of daily attendance records into workload
//! metrics: accumulated and daily overwork, time remaining today, working
//! days remaining, and progress toward an estimated monthly hour quota.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
