//! Command handlers for blogrec

pub mod dispatch;
