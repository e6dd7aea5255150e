pub mod domain;
pub mod engagement_use_cases;
pub mod ports;
pub mod services;
