//! LCA Engine - Computational core of a building life cycle assessment tool.
//!
//! This crate resolves unit conversions between process datasets, aggregates
//! processes of a life cycle and turns indicator results into calibrated
//! benchmark scores.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
