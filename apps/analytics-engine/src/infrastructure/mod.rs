//! Infrastructure layer - collaborator adapters.

pub mod persistence;
