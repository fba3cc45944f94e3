mod port;

pub use port::Port;
