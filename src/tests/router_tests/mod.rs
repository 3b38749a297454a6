mod auth_tests;
mod board_tests;
mod hook_tests;
mod pages_tests;
