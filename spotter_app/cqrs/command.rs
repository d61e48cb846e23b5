use async_trait::async_trait;
use std::any::TypeId;

use spotter_core::ApplicationError;

use crate::context::AppContext;

/// A marker trait for Command structs.
/// A command describes one intended operation together with its inputs.
/// The type it produces is fixed by the command itself, never chosen by
/// the caller.
pub trait Command: Send + Sync + 'static {
    /// The data type the handler returns for this command.
    type Output: Send + 'static;

    /// Stable name, used when reporting wiring errors.
    const NAME: &'static str;
}

/// A trait for handlers that execute Commands.
/// It receives the command by value and the shared application context
/// holding the repository and the other collaborators.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    async fn handle(&self, command: C, ctx: &AppContext) -> Result<C::Output, ApplicationError>;
}

/// Identifies a command type in the handler registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandKey {
    type_id: TypeId,
    name: &'static str,
}

impl CommandKey {
    pub fn of<C: Command>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name: C::NAME,
        }
    }

    /// `TypeId` of the command itself, the registry key.
    pub fn command_type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}
