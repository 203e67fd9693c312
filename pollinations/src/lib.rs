mod client;

pub use client::PollinationsClient;
