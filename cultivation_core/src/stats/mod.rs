//! Stat bags, effect application and secondary-stat derivation

mod apply;
mod cultivation;
mod secondary;
mod stat_bag;

pub use apply::{apply_effects, StatEffect};
pub use cultivation::CultivationContext;
pub use secondary::{derive_secondary, SecondaryStats};
pub use stat_bag::StatBag;
