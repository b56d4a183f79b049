mod access_tests;
mod pages_tests;
mod vehicles_tests;
