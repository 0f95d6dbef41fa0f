//! Course client - talks to the course service for both WASM and no-WASM environments
//!
//! Both implementations provide the same `CourseApi`, backed by gloo_net (WASM)
//! or reqwest (no-WASM).

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;
