mod in_memory_port_repository;

pub use in_memory_port_repository::InMemoryPortRepository;
