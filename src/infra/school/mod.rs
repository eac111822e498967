mod client;

pub use client::SchoolApiClient;
