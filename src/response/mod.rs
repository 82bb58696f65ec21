mod generic;

pub use generic::ApiResponse;
