//! Lumis marketing site API.
//!
//! A thin request/response layer behind the public website. It accepts
//! two kinds of user submissions and serves fixed site content:
//!
//! ```text
//! POST /api/contact        ─┐
//! POST /api/appointments   ─┼─ validate ─ stamp id + created_at ─ MongoDB
//! GET  /api/contacts       ─┤                                   (≤ 100 back)
//! GET  /api/appointments   ─┘
//!
//! GET  /api/testimonials, /case-studies[/{id}], /blog-posts,
//!      /services, /available-times              ─ in-process Catalog
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`intake`]: Submission validation and persistence
//! - [`catalog`]: Read-only site content
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Prometheus counters and histograms
//! - [`utils`]: Utility functions

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod intake;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, AppError, Result};
