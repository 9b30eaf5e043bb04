// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor identity and role-based authorization.
//!
//! Ownership rules for cancellation live in the reservation engine, not
//! here; this module only establishes who the actor is and gates the
//! operations whose permission depends on role alone.

use roombook_core::{ActorContext, ActorRole};

use crate::error::AuthError;

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Admin role: may create rooms, book rooms, and cancel any booking.
    Admin,
    /// Hr role: may book rooms and cancel their own bookings.
    Hr,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Hr => "hr",
        }
    }
}

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this authenticated actor into an engine actor context.
    ///
    /// The engine never consults ambient identity; every decision it
    /// makes receives the acting user through this context.
    #[must_use]
    pub fn to_actor_context(&self) -> ActorContext {
        let role: ActorRole = match self.role {
            Role::Admin => ActorRole::Admin,
            Role::Hr => ActorRole::Hr,
        };
        ActorContext::new(self.id.clone(), role)
    }
}

/// Stub authentication function.
///
/// This is a minimal placeholder. It does NOT implement real
/// authentication; the caller asserts the actor's identity and role.
/// In a real deployment this would validate credentials or tokens.
///
/// # Arguments
///
/// * `actor_id` - The identifier of the actor to authenticate
/// * `role` - The role to assign to the actor
///
/// # Errors
///
/// Returns an error if the actor ID is empty.
pub fn authenticate_stub(actor_id: String, role: Role) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(actor_id, role))
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor is authorized to create a room.
    ///
    /// Only Admin actors may create rooms.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_create_room(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Hr => Err(AuthError::Unauthorized {
                action: String::from("create_room"),
                required_role: String::from("Admin"),
            }),
        }
    }
}
