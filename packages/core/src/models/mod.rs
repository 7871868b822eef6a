//! Data Models
//!
//! This module contains the records held by the trivia store:
//!
//! - `Question` - A trivia question with its answer, category and difficulty
//! - `Category` - A named question category
//!
//! Both are serialized as the flat JSON mappings returned by the HTTP layer.

mod category;
mod question;

pub use category::{category_map, Category, CategoryMap};
pub use question::{DeleteResult, NewQuestion, Question, ValidationError};
