pub mod autocomplete;
pub mod generate;
