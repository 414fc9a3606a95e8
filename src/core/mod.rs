pub mod controller;
pub mod render;
