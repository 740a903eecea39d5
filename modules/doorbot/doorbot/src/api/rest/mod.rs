//! HTTP entry points of the module.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod problem;
pub mod routes;
pub mod tenant;

pub use problem::Problem;
pub use routes::router;
