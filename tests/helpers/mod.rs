// ABOUTME: Shared helpers for PTY and screen-capture tests

#![allow(dead_code)]

pub mod visual_debug;
#[cfg(feature = "vt100-tests")]
pub mod vt100_helper;
