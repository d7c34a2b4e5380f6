pub mod review;
pub mod upload;

pub use review::{Review, Verdict};
pub use upload::SelectedFile;
