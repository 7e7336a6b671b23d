mod client_utils;
mod errors;
mod provider;
mod random_user;
mod telemetry;
mod types;

pub mod person_sdk_test;

pub use errors::*;
pub use provider::PersonProvider;
pub use random_user::{RandomUserApi, RandomUserApiOptions, RANDOM_USER_API_URL};
pub use types::*;
