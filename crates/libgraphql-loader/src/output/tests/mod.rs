mod loader_output_tests;
mod output_mode_tests;
