//! Validation of access tokens issued by the hosted auth provider.

pub mod jwt;
