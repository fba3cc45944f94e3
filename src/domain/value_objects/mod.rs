mod port_id;

pub use port_id::PortId;
