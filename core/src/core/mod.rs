//! Core simulation plumbing (logical time)

pub mod time;
