pub mod ports;
pub mod services;
pub mod skill_use_cases;
pub mod use_cases;
