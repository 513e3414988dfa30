#![doc = "resume-pages: library for rendering a structured resume and publishing it to GitHub Pages."]

//! The pipeline is: document model ([`resume`]) → pure HTML rendering
//! ([`render`]) → publish orchestration ([`publish`]) over the hosting
//! platform client ([`contract`], [`github`]). The CLI modules are thin glue
//! around those pieces.
//!
//! Editing UI, credential acquisition and document persistence live in the
//! embedding application; this crate only needs a `&mut Resume` and a bearer
//! token per publish call.

pub mod cli;
pub mod contract;
pub mod github;
pub mod load_config;
pub mod publish;
pub mod render;
pub mod resume;
pub mod tracker;

pub use cli::{run, Cli, Commands};
