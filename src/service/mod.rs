pub mod countdown;
pub mod layout;
pub mod resolver;
