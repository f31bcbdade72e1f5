//! # Lift Core
//!
//! The block-elevator mechanic: players standing on a configured block type
//! ride between vertically aligned blocks of the same type. Sneaking sends
//! the player to the nearest matching block below, jumping to the nearest
//! matching block above, each gated by a per-player cooldown flag that only
//! re-arms once the triggering input is released.
//!
//! The world itself is owned by the host: this crate reads it through the
//! [`world::WorldView`] and [`world::PlayerView`] traits and is ticked from
//! the outside through [`elevator::ElevatorSystem::tick`].

/// Static configuration.
pub mod config;
/// Dimension identities and their vertical bounds.
pub mod dimension;
/// The elevator mechanic itself.
pub mod elevator;
/// Traits the host world implements.
pub mod world;

#[cfg(test)]
pub(crate) mod testing;
