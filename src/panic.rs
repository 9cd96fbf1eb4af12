use anyhow::Result;
use tracing::error;

/// Installs a panic hook that gives the terminal back before reporting.
pub fn init() -> Result<()> {
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(r) = crate::tui::restore() {
            error!("Unable to restore terminal: {:?}", r);
        }

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, metadata, print_msg};
            let metadata = metadata!();
            let file_path = handle_dump(&metadata, panic_info);
            if let Err(e) = print_msg(file_path, &metadata) {
                eprintln!("human-panic: failed to print error message: {e}");
            }
            eprintln!("{}", panic_info);
            eprintln!("\nThis is a bug. Consider reporting it at {}", env!("CARGO_PKG_REPOSITORY"));
        }

        let msg = format!("{}", panic_info);
        error!("Panic: {}", strip_ansi_escapes::strip_str(msg));

        #[cfg(debug_assertions)]
        {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        std::process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}
