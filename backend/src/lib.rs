//! # Subway Rust Backend
//!
//! Subway network metadata service: stations, lines, and the ordered chain of
//! track sections that makes up each line.
//!
//! The heart of the crate is the line topology engine
//! ([`models::LineTopology`]), which keeps every line a single connected path
//! of stations while sections are appended, prepended, split or removed.
//! Around it sit an in-memory station directory / line registry, a service
//! layer doing explicit load / mutate / save cycles, and an axum REST API.
//!
//! ## Architecture
//!
//! - [`models`]: stations, sections, lines and the topology engine
//! - [`db`]: repository traits, in-memory implementation and factory
//! - [`services`]: repository-agnostic business operations
//! - [`config`]: TOML + environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use subway_rust::models::{LineTopology, Section, StationId};
//!
//! let mut line = LineTopology::new(Section::new(StationId(1), StationId(2), 5).unwrap());
//! line.add_section(Section::new(StationId(1), StationId(3), 2).unwrap()).unwrap();
//! assert_eq!(
//!     line.ordered_stations(),
//!     vec![StationId(1), StationId(3), StationId(2)]
//! );
//! ```

pub mod config;
pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
