// ABOUTME: Library crate for autopilot-onboard exposing the wizard for testing and embedding

#![allow(missing_docs)]

pub mod app;
pub mod audit;
pub mod completion;
pub mod components;
pub mod config;
