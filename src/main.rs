mod cli;
mod defaults;
mod invoker;
mod resolver;
mod selector;

fn main() {
    // Delegate to CLI runner; errors are printed nicely inside.
    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
