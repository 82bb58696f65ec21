mod process_time;
mod server_name;

pub use process_time::process_time_middleware;
pub use server_name::server_name_middleware;
