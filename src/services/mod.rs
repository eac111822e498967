pub mod results_api;

pub use results_api::ResultsApi;
