#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unused_async)]

//! # poli-api
//!
//! HTTP backend for the Politécnico Ann y Ted Kheel website. The web frontend
//! talks to it on `http://127.0.0.1:8000` by default.
//!
//! ## API surface
//!
//! | Method | Path           | Response body                                      |
//! |--------|----------------|----------------------------------------------------|
//! | GET    | `/noticias`    | `{"mensaje": "Aquí irán las noticias"}`            |
//! | POST   | `/eventos`     | `{"mensaje": "Evento creado"}`                     |
//! | GET    | `/estudiantes` | `{"estudiantes": ["Juan", "Ana", "Karla"]}`        |
//! | PUT    | `/horarios`    | `{"mensaje": "Horarios actualizados"}`             |
//!
//! Every other path or method gets `404 {"detail": "Not Found"}`.
//!
//! ## Architecture
//!
//! ```text
//! main.rs          — entry point, clap subcommands, logging setup
//! config.rs        — TOML + env-var configuration
//! error.rs         — startup errors
//! server.rs        — router + middleware, bind, graceful shutdown
//! routes/
//!   noticias.rs    — GET /noticias
//!   eventos.rs     — POST /eventos
//!   estudiantes.rs — GET /estudiantes
//!   horarios.rs    — PUT /horarios
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::Config;
pub use error::{ConfigError, ServeError};
pub use server::build_router;
