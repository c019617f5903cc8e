//! Google Gemini API client.
//!
//! Implements the `CompletionService` trait for Gemini models via the
//! Generative Language API `generateContent` method.

mod api;
mod client;
mod config;
mod wire;


pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use wire::parse_response_body;
