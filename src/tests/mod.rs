pub mod executor_tests;
pub mod schema_tests;
pub mod support;
