//! Client module - HTTP access to the activities API for both WASM and no-WASM environments
//!
//! Both implementations share the endpoint paths below and implement
//! [`crate::interface::ActivitiesApi`]: `gloo_net` in the browser and
//! `reqwest` everywhere else.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;

pub const ACTIVITIES_PATH: &str = "/activities";

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// `/activities/{activity}/signup` with the name percent-encoded.
pub fn signup_path(activity: &str) -> String {
    format!("{}/{}/signup", ACTIVITIES_PATH, encode_component(activity))
}
