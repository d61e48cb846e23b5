use async_trait::async_trait;
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    marker::PhantomData,
};

use spotter_core::{ApplicationError, DispatchError};

use crate::{
    context::AppContext,
    cqrs::{Command, CommandHandler, CommandKey},
};

/// Type-erased view of a `CommandHandler<C>`, so handlers for different
/// commands can live in the same registry.
#[async_trait]
trait ErasedHandler: Send + Sync {
    async fn handle_erased(
        &self,
        command: Box<dyn Any + Send>,
        ctx: &AppContext,
    ) -> Result<Box<dyn Any + Send>, ApplicationError>;
}

struct Registered<C, H> {
    handler: H,
    _command: PhantomData<fn() -> C>,
}

#[async_trait]
impl<C, H> ErasedHandler for Registered<C, H>
where
    C: Command,
    H: CommandHandler<C> + 'static,
{
    async fn handle_erased(
        &self,
        command: Box<dyn Any + Send>,
        ctx: &AppContext,
    ) -> Result<Box<dyn Any + Send>, ApplicationError> {
        // The registry key and `C` come from the same registration, so this
        // only fails if the map was corrupted.
        let command = command
            .downcast::<C>()
            .map_err(|_| DispatchError::TypeMismatch(C::NAME))?;

        let output = self.handler.handle(*command, ctx).await?;
        Ok(Box::new(output))
    }
}

/// Collects handler registrations at startup.
#[derive(Default)]
pub struct DispatcherBuilder {
    handlers: HashMap<TypeId, Box<dyn ErasedHandler>>,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handler for `C`. A second registration for the same
    /// command is rejected.
    pub fn register<C, H>(mut self, handler: H) -> Result<Self, ApplicationError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let key = TypeId::of::<C>();
        if self.handlers.contains_key(&key) {
            return Err(DispatchError::AlreadyRegistered(C::NAME).into());
        }

        self.handlers.insert(
            key,
            Box::new(Registered {
                handler,
                _command: PhantomData,
            }),
        );
        Ok(self)
    }

    pub fn build(self, context: AppContext) -> Dispatcher {
        Dispatcher {
            context,
            handlers: self.handlers,
        }
    }
}

/// Routes each command to the one handler registered for its type.
///
/// The registry is frozen once built: `dispatch` only reads it, so any
/// number of dispatches may run concurrently. The dispatcher does not
/// validate, log, retry or transform anything; handler errors are returned
/// unchanged and the only error it raises itself is
/// [`DispatchError::HandlerNotRegistered`].
pub struct Dispatcher {
    context: AppContext,
    handlers: HashMap<TypeId, Box<dyn ErasedHandler>>,
}

impl Dispatcher {
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    pub async fn dispatch<C: Command>(&self, command: C) -> Result<C::Output, ApplicationError> {
        let handler = self
            .handlers
            .get(&TypeId::of::<C>())
            .ok_or(DispatchError::HandlerNotRegistered(C::NAME))?;

        let output = handler.handle_erased(Box::new(command), &self.context).await?;

        output
            .downcast::<C::Output>()
            .map(|output| *output)
            .map_err(|_| DispatchError::TypeMismatch(C::NAME).into())
    }

    pub fn is_registered<C: Command>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<C>())
    }

    /// Startup self-check: fails with every command in `commands` that has
    /// no handler.
    pub fn ensure_registered(&self, commands: &[CommandKey]) -> Result<(), ApplicationError> {
        let missing: Vec<&'static str> = commands
            .iter()
            .filter(|key| !self.handlers.contains_key(&key.command_type_id()))
            .map(|key| key.name())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::MissingHandlers(missing).into())
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }
}
