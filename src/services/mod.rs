// Service module exports

pub mod alert;
pub mod assets;
pub mod countdown;
pub mod notification;
pub mod settings;
pub mod sound;
