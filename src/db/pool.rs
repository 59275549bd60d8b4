//! Database connection pool using the OnceCell pattern.

use std::future::Future;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::error::DbError;
use crate::settings::Settings;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Get or initialize the database connection pool.
///
/// The first caller loads [`Settings`] and builds the pool lazily: the handle
/// is usable immediately and no connection is opened here. A malformed or
/// missing `DATABASE_URL` is a [`DbError`]; in that case nothing is cached
/// and a later call retries initialization.
///
/// Initialization also spawns a one-shot readiness probe so operators can see
/// at startup whether the backend is reachable. The probe is observational
/// only: no caller waits on it, and its failure leaves the handle in place.
pub async fn get_pool() -> Result<&'static PgPool, DbError> {
    POOL.get_or_try_init(init_pool).await
}

async fn init_pool() -> Result<PgPool, DbError> {
    let settings = Settings::new()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&settings.database.url)
        .map_err(DbError::InvalidUrl)?;

    spawn_readiness_probe(pool.clone());

    Ok(pool)
}

/// Fire-and-forget connectivity check. No retry, no timeout, no effect on the
/// stored pool; the outcome goes to the log and nowhere else.
fn spawn_readiness_probe(pool: PgPool) {
    tokio::spawn(report_readiness(async move {
        pool.acquire().await.map(drop)
    }));
}

async fn report_readiness(connect: impl Future<Output = Result<(), sqlx::Error>>) {
    match connect.await {
        Ok(()) => tracing::info!(target: "backoffice_db", "database connected"),
        Err(e) => {
            tracing::error!(target: "backoffice_db", error = %e, "database connection check failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Shared in-memory sink for the fmt subscriber.
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture_probe(connect: impl Future<Output = Result<(), sqlx::Error>>) -> String {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .without_time()
            .finish();

        let rt = tokio::runtime::Runtime::new().unwrap();
        tracing::subscriber::with_default(subscriber, || {
            rt.block_on(report_readiness(connect));
        });

        capture.contents()
    }

    #[test]
    fn probe_success_logs_once() {
        let out = capture_probe(async { Ok(()) });

        assert_eq!(out.matches("database connected").count(), 1);
        assert!(!out.contains("database connection check failed"));
    }

    #[test]
    fn probe_failure_logs_error_message() {
        let out = capture_probe(async {
            Err(sqlx::Error::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused by backend",
            )))
        });

        assert_eq!(out.matches("database connection check failed").count(), 1);
        assert!(out.contains("connection refused by backend"));
        assert!(!out.contains("database connected\n"));
    }
}
