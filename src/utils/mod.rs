pub mod hash;
pub mod mail;
pub mod token;
pub mod webutils;
