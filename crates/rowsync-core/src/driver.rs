mod connection;
pub use connection::Connection;

pub mod operation;
pub use operation::Operation;

mod response;
pub use response::{Response, Rows};

mod source;
pub use source::DataSource;
