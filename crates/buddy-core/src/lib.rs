pub mod event_bus;
pub mod ports;
pub mod timer;
pub mod matcher;
pub mod collaborator;
pub mod machine;
