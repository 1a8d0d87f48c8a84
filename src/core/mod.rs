pub mod copy;
pub mod events;
pub mod scanner;
pub mod state;
