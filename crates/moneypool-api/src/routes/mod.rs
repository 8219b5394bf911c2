//! Route handlers

pub mod pool;
