mod auction;
mod error;
mod sweep;

pub use {
    auction::*,
    error::*,
    sweep::*,
};
