pub mod error;
pub mod policy;
pub mod ports;
pub mod rendering;
pub mod repos;
pub mod service;
