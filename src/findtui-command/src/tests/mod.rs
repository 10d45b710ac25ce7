mod property_tests;
mod scenario_tests;
