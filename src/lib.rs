//! Page behaviors for the robotics club website.
//!
//! This crate is compiled to WebAssembly and loaded by every page of the
//! static site. It installs four independent behaviors once the document is
//! ready: the mobile menu toggle, fade-in of sections on scroll, background
//! submission of the contact form, and freezing the office bearer scroller
//! after a manual scroll. Styling and animation stay in CSS; this crate only
//! adds and removes classes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Element hooks, class names, endpoint, and timing |
//! | [`dom`] | Capability traits the behaviors are written against |
//! | [`menu`] | Mobile menu toggle |
//! | [`reveal`] | One-shot reveal of sections entering the viewport |
//! | [`form`] | Contact form snapshot, no-cors send, and feedback |
//! | [`scroller`] | Auto-scroll freeze state machine |
//! | [`startup`] | Discovery of all behaviors with fault isolation |
//! | `browser` | `web-sys` bindings and the wasm start hook (`browser` feature) |

pub mod config;
pub mod dom;
pub mod form;
pub mod menu;
pub mod reveal;
pub mod scroller;
pub mod startup;

#[cfg(feature = "browser")]
pub mod browser;

#[cfg(test)]
mod testing;
