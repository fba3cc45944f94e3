pub mod health;
pub mod ports;


pub use health::health_handler;
pub use ports::{create_port_handler, get_port_handler, update_port_handler};
