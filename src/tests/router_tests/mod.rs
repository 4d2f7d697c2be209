mod api_tests;
mod auth_tests;
mod list_tests;
mod summary_tests;
mod wizard_tests;
