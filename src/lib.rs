//! Browser client for the activity sign-up service: lists activities,
//! signs a student up (behind a reCAPTCHA check), and lets an organizer
//! remove a participant. Rust + Yew WASM front-end over the existing API.

pub mod api;
pub mod board;
pub mod captcha;
pub mod model;
