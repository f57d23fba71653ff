//! Provider implementations

pub mod anthropic;
pub mod google;

pub use anthropic::AnthropicProvider;
pub use google::GoogleProvider;
