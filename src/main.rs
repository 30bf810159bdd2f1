// knit - entry point

use knit::cli::CliHandler;
use knit::KnitError;

fn main() {
    let handler = CliHandler::new();

    if let Err(e) = handler.run() {
        match e.downcast_ref::<KnitError>() {
            Some(knit_error) => eprintln!("{}", knit_error.format_detailed()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        std::process::exit(1);
    }
}
