//! St Helena bus journey planner server.
//!
//! A web application that answers: "which bus gets me from this stop to
//! that one, and what will it cost?" It also serves the island timetables
//! and quotes for taxis and car hire.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod planner;
pub mod quotes;
pub mod web;
