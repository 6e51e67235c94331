mod client;

pub use client::AocClient;
