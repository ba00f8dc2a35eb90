//! Value Object Module

pub mod book_draft;
pub mod comment;
pub mod paging;
pub mod rating;
pub mod review_draft;
pub mod sort;
