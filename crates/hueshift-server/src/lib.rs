//! Hueshift server - HTTP front end for the hue rotation engine.
//!
//! A single route, `GET /process?image=<url>&hue=<0-360>`, downloads the
//! image, rotates its hue and answers with a PNG. Requests share nothing but
//! the read-only [`AppState`](state::AppState).

pub mod acquire;
pub mod config;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use setup::routes::build_router;
pub use setup::server::start_server;
pub use state::AppState;
