pub mod analysis_service;
pub mod chart_service;
pub mod market_service;
