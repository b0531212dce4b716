//! Summarization oracle adapters

pub mod http;
