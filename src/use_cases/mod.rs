pub mod env_boot;
