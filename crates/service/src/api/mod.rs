pub mod transform_handler;
pub mod verify;

pub use transform_handler::transform_input_file;
pub use verify::verify;
