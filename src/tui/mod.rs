//! Ratatui front end: a configuration menu and a table that deals and
//! classifies one hand per key press.

pub mod app;
pub mod controller;
pub mod ui;
