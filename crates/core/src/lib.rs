pub mod communication;
pub mod configuration;
pub mod plugins;

#[cfg(test)]
mod configuration_tests;
#[cfg(test)]
mod test_helpers;
