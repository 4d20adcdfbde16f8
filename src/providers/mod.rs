pub mod privatbank;
