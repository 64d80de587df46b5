#![doc = "g3-core: core logic library for g3."]

//! This crate contains everything `g3` does: finding the enclosing git
//! repository, writing the marker files, mirroring a directory to a bucket
//! with `rclone`, and committing the markers with `git`.
//! The `g3` binary crate only parses arguments and calls into here.
//!
//! # Usage
//! Build a [`config::SyncConfig`], pick a [`contract::CommandRunner`]
//! (the real [`runner::SystemRunner`] or a mock in tests) and call
//! [`synchronise::init`] or [`synchronise::push`].

pub mod config;
pub mod contract;
pub mod error;
pub mod git;
pub mod locate;
pub mod marker;
pub mod rclone;
pub mod runner;
pub mod synchronise;

pub use error::G3Error;
