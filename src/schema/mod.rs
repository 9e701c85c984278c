pub mod industry;
pub mod section;
pub mod template;
