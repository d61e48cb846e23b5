//! Stateless checks shared by the command handlers. Each one either passes
//! or fails with one specific domain error.

use uuid::Uuid;

use spotter_core::{ApplicationError, DomainError};
use spotter_domain::{Document, Owned};

/// Fails with the document's not-found error when `entity` is `None`.
pub fn ensure_found<T: Document>(entity: Option<T>, id: Uuid) -> Result<T, ApplicationError> {
    entity.ok_or_else(|| T::not_found(id).into())
}

/// Fails with [`DomainError::NotOwner`] unless `user_id` owns `entity`.
pub fn ensure_owner<T: Owned>(entity: &T, user_id: Uuid) -> Result<(), ApplicationError> {
    if entity.owner_id() != user_id {
        return Err(DomainError::NotOwner {
            resource: T::RESOURCE,
            id: entity.id(),
            user_id,
        }
        .into());
    }
    Ok(())
}

/// Existence first, then ownership.
pub fn ensure_owned<T: Owned>(entity: Option<T>, id: Uuid, user_id: Uuid) -> Result<T, ApplicationError> {
    let entity = ensure_found(entity, id)?;
    ensure_owner(&entity, user_id)?;
    Ok(entity)
}

pub fn ensure_unique(
    already_exists: bool,
    duplicate: impl FnOnce() -> DomainError,
) -> Result<(), ApplicationError> {
    if already_exists {
        return Err(duplicate().into());
    }
    Ok(())
}

/// `limit: None` means unlimited. Fails once `current` reached the limit.
pub fn ensure_within_limit(
    current: usize,
    limit: Option<usize>,
    exceeded: impl FnOnce(usize) -> DomainError,
) -> Result<(), ApplicationError> {
    match limit {
        Some(limit) if current >= limit => Err(exceeded(limit).into()),
        _ => Ok(()),
    }
}

pub fn ensure_not_blank(value: &str, field: &'static str) -> Result<(), ApplicationError> {
    if value.trim().is_empty() {
        return Err(DomainError::BlankField(field).into());
    }
    Ok(())
}

pub fn ensure_not_self(user_id: Uuid, other_id: Uuid) -> Result<(), ApplicationError> {
    if user_id == other_id {
        return Err(DomainError::CannotTargetSelf.into());
    }
    Ok(())
}
