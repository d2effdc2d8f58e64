//! Main application entry point (native).
//!
//! Usage: `roughpad <session.json> [output.svg]`. Without an output path the
//! SVG is written to stdout.

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting RoughPad");

    if let Err(err) = run() {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(feature = "native")]
fn run() -> Result<(), roughpad_app::AppError> {
    use roughpad_app::{App, Script, ShortcutRegistry};

    let mut args = std::env::args().skip(1);
    let Some(script_path) = args.next() else {
        eprintln!("usage: roughpad <session.json> [output.svg]");
        ShortcutRegistry::print_all();
        std::process::exit(2);
    };

    let script = Script::load(&script_path)?;
    let app = App::from_script(&script)?;

    match args.next() {
        Some(output) => app.save_svg(output)?,
        None => print!("{}", app.render_svg()?),
    }
    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
