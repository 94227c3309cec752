pub mod atomic_writer;
pub mod directory_sink;

pub use atomic_writer::AtomicWriter;
pub use directory_sink::DirectorySink;
