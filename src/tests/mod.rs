pub mod account_tests;
pub mod basket_tests;
pub mod e2e_tests;
pub mod prop_tests;
