//! In-crate timing runs for the pool hot paths
