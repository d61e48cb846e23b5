mod command;
mod dispatcher;

pub mod commands;

pub use command::*;
pub use dispatcher::*;
