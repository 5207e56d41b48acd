//! Page Components

mod demo;
mod home;

pub use demo::{DemoPage, DemoSection};
pub use home::HomePage;
