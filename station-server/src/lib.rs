//! Station arrivals server.
//!
//! A web application that records arrival schedules for transit lines and
//! answers: "when will two or more trains next arrive in the same minute?"

pub mod config;
pub mod domain;
pub mod schedule;
pub mod web;
