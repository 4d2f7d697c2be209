pub mod components;
pub mod layouts;
pub mod pages;
pub mod steps;

pub use layouts::desktop::desktop_layout;
