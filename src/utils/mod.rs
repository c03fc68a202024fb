pub mod atomic;
pub mod environment;

pub use atomic::atomic_write;
pub use environment::get_output_dir;
