//! Todo tracking core.
//!
//! This crate implements the ownership-enforced todo service: validated todo
//! records, the pure success/failed status classifier, the service layer that
//! is the only writer of todo state, and the persistence port with its
//! PostgreSQL adapter. Transport, authentication, and rendering live in the
//! embedding application; callers hand the service an already-authenticated
//! [`domain::UserId`] and map [`domain::ErrorCode`] onto their protocol.

pub mod domain;
pub mod outbound;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
