pub mod init;

pub use init::xavier_init;
