pub mod command_handlers;
pub mod config;
pub mod context;
pub mod cqrs;
pub mod dto;
pub mod registry;
pub mod repository;
pub mod services;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
