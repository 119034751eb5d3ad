#![deny(missing_docs)]
#![doc = "Coupled-channel unitarization: the Chew-Mandelstam loop function \
and the two-channel scattering-length partial wave."]

pub mod chew_mandelstam;
pub mod two_channel;

pub use chew_mandelstam::{channel_momentum, chew_mandelstam};
pub use two_channel::TwoChannel;
