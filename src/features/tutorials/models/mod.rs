mod tutorial;

pub use tutorial::{NewTutorial, Tutorial};
