pub mod app_state_builder;
pub mod project_test_fixtures;
pub mod stubs;
