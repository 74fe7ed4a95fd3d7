#[cfg(test)]
mod common;

#[cfg(test)]
mod permission_property_tests;
