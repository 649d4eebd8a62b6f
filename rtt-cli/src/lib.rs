//! Terminal departure board for direct UK trains.
//!
//! Looks up booked departures between two stations on the RealTimeTrains
//! API, either straight from the command line or through a full-screen
//! station picker.

pub mod config;
pub mod domain;
pub mod rtt;
pub mod stations;
pub mod ui;
