mod board;
mod job_detail;

pub use board::Board;
pub use job_detail::JobDetail;
