pub mod api;
pub mod output;
pub mod retry;
