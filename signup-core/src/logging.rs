use std::path::PathBuf;

/// Initialize logging for the whole process.
///
/// `RUST_LOG` wins when set; otherwise the level is info. The TUI owns the
/// terminal, so callers pass a log file while it runs. If the file cannot be
/// opened we fall back to stderr.
pub fn init_with(log_file: Option<PathBuf>) {
    use env_logger::{Env, Target};
    use std::fs;
    use std::io;

    let target = log_file
        .and_then(|path| {
            (|| -> io::Result<Target> {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                let file = fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)?;
                Ok(Target::Pipe(Box::new(file)))
            })()
            .ok()
        })
        .unwrap_or(Target::Stderr);

    // try_init: tests and embedders may have installed a logger already.
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(target)
        .try_init();
}
