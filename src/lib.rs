pub mod config;
pub mod controller;
pub mod domain;
pub mod resource;
pub mod scenario;
pub mod simulator;
