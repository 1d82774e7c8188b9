//! Request-boundary handlers

pub mod error_handler;
