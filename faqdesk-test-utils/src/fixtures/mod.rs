pub mod factory;
pub mod mockito;
