use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::MakeWriter, prelude::*, registry, EnvFilter};

// --- Custom "Tee" Writer ---
struct Tee<A, B> {
    a: A,
    b: B,
}

impl<A, B> Write for Tee<A, B>
where
    A: Write,
    B: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let res_a = self.a.write(buf);
        let res_b = self.b.write(buf);
        res_a.or(res_b)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.a.flush()?;
        self.b.flush()
    }
}

#[derive(Clone)]
struct MakeTee<A, B> {
    make_a: A,
    make_b: B,
}

impl<'a, A, B, W1, W2> MakeWriter<'a> for MakeTee<A, B>
where
    A: MakeWriter<'a, Writer = W1>,
    B: MakeWriter<'a, Writer = W2>,
    W1: Write + 'a,
    W2: Write + 'a,
{
    type Writer = Tee<W1, W2>;
    fn make_writer(&'a self) -> Self::Writer {
        Tee {
            a: self.make_a.make_writer(),
            b: self.make_b.make_writer(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Compact,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Console,
    File,
    Both,
    None,
}

/// Logging settings read from `TOM_LOG_*` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    pub output: LogOutput,
    pub file_path: PathBuf,
}

impl LogSettings {
    /// Builds settings from an environment lookup. Unknown values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("TOM_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            Some("compact") => LogFormat::Compact,
            _ => LogFormat::Human,
        };
        let output = match lookup("TOM_LOG_OUTPUT").as_deref() {
            Some("file") => LogOutput::File,
            Some("both") => LogOutput::Both,
            Some("none") => LogOutput::None,
            _ => LogOutput::Console,
        };
        let file_path = lookup("TOM_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join("tom.log"));

        Self {
            level: lookup("TOM_LOG_LEVEL").unwrap_or_else(|| "warn".to_string()),
            format,
            output,
            file_path,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }
}

/// Initializes the global tracing subscriber based on environment variables.
///
/// Console logs go to stderr. The returned guard flushes the file sink and
/// must be held until the process exits.
pub fn init_subscriber() -> Option<WorkerGuard> {
    init_with(&LogSettings::from_env())
}

pub fn init_with(settings: &LogSettings) -> Option<WorkerGuard> {
    if settings.output == LogOutput::None {
        return None;
    }

    // RUST_LOG wins over TOM_LOG_LEVEL.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));
    let subscriber = registry().with(env_filter);

    let log_path = settings.file_path.as_path();
    let log_dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    let log_filename = log_path.file_name().unwrap_or("tom.log".as_ref());

    let mut guard: Option<WorkerGuard> = None;

    macro_rules! install {
        ($writer:expr) => {{
            let fmt_layer = tracing_subscriber::fmt::layer().with_writer($writer);
            let _ = match settings.format {
                LogFormat::Json => subscriber.with(fmt_layer.json()).try_init(),
                LogFormat::Compact => subscriber.with(fmt_layer.compact()).try_init(),
                LogFormat::Human => subscriber.with(fmt_layer).try_init(),
            };
        }};
    }

    match settings.output {
        LogOutput::Both => {
            let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
            let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(file_guard);

            install!(MakeTee {
                make_a: std::io::stderr,
                make_b: non_blocking,
            });
        }
        LogOutput::File => {
            let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
            let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(file_guard);

            install!(non_blocking);
        }
        LogOutput::Console => install!(std::io::stderr),
        LogOutput::None => {}
    }

    guard
}
