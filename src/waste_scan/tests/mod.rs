mod app_test;
mod core_test;
