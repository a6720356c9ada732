pub mod observer;
pub mod theme;
pub mod widgets;
