//! Process lifecycle: graceful shutdown.

mod shutdown;

pub use shutdown::shutdown_signal;
