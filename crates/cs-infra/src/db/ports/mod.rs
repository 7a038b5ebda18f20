mod executor;
mod mapper;

pub use executor::DbExecutor;
pub use mapper::RecordMapper;
