//! Shared building blocks for the launchpad staking contracts.
//!
//! - [`roles`]: the admin role hierarchy and its storage helpers.

#![no_std]

pub mod roles;

pub use roles::AdminRole;
