//! Entity Module

pub mod book;
pub mod review;
