use diesel::SqliteConnection;

/// Runs a closure against a checked-out connection. The connection goes
/// back to the pool when the closure returns, on success or error.
pub trait DbExecutor: Send + Sync {
    fn run<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> anyhow::Result<T>,
    ) -> anyhow::Result<T>;
}
