//! Trade Compass - Business Readiness Assessment for the Trades
//!
//! This crate implements a guided assessment interview for trades
//! professionals: a fixed sequence of categorized questions, free-text
//! answer interpretation, weighted scoring with tag accumulation, and a
//! closing tier recommendation with matched training and service offers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
