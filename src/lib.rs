pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod model;
pub mod response;
pub mod route;
pub mod server;

use crate::config::Config;

pub struct AppState {
    pub config: Config,
}
