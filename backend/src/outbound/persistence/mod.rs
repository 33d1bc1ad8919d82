//! Store adapters implementing the repository port.

mod in_memory;

pub use in_memory::InMemoryEmployeeRepository;
