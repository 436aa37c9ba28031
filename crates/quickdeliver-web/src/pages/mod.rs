//! One page component per screen

mod account;
mod auth;
mod browse;
mod cart;
mod home;
mod orders;
mod store;

pub use account::{Notifications, Profile};
pub use auth::{ForgotPassword, Login, Register};
pub use browse::{Browse, Search};
pub use cart::{Cart, Checkout};
pub use home::Home;
pub use orders::{Orders, Review, Tracking};
pub use store::{Product, Store};
