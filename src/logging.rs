use std::io::Write;

/// Initialize the console logger. `RUST_LOG` overrides `default_level`.
pub fn init_logger(default_level: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format("%H:%M:%S");
            let level = record.level();
            let message = record.args();
            let target = record.target();

            // Include the target when it differs from the module path
            if target != record.module_path().unwrap_or("unknown") {
                writeln!(buf, "[{timestamp}] {level} [{target}]: {message}")
            } else {
                writeln!(buf, "[{timestamp}] {level}: {message}")
            }
        })
        .try_init()
        .ok();

    log::debug!("Logger initialized at {default_level}");
}
