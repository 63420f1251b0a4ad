//! Authenticated owner identity consumed by the task core.
//!
//! Authentication itself (credential storage, password verification, token
//! issuance) is a collaborator outside this crate. What the task core
//! needs from it is the identity of the requesting user, delivered as an
//! [`domain::AuthenticatedUser`] the transport layer constructs after
//! verifying the request. The core trusts that value and never re-checks
//! credentials.

pub mod domain;
