// Shared type definitions used across the shell.

pub mod action;
pub mod bookmark;
pub mod chrome;
pub mod config;
pub mod errors;
pub mod event;
pub mod tab;
pub mod theme;
