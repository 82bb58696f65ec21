mod json;
mod notfound;

pub use json::json_handler;
pub use notfound::handler_404;
