//! Infrastructure layer implementing domain interfaces against PostgreSQL.

pub mod persistence;
