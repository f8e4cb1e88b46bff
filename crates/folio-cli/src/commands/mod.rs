pub mod cache;
pub mod comments;
pub mod dispatch;
pub mod show;
pub mod tree;
