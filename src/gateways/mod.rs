pub mod blackhole;
pub mod in_memory;
