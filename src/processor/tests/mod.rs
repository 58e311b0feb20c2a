mod paths_tests;
mod processor_tests;
