/// Sets up the process wide logger: `<local time> [LEVEL] - message` on stderr.
///
/// The level defaults to info and can be changed through `RUST_LOG`.
use chrono::Local;
use env_logger::{Builder, Env};
use std::io::Write;

pub fn init_logger() {
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init();
}
