// # dynhover
//
// Update a Hover A record with this machine's current public IP (think dyndns).
//
// ```bash
// dynhover -u USERNAME -p PASSWORD home.example.com
// dynhover -c hover.toml            # uses `domain` from the [hover] table
// ```

use clap::Parser;
use hover_tools::dynamic::{self, DynArgs};
use hover_tools::logging::init_logging;
use hover_tools::ToolExitCode;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = DynArgs::parse();

    if let Err(e) = init_logging(args.common.log_level) {
        eprintln!("{}", e);
        return ToolExitCode::Unexpected.into();
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {}", e);
            return ToolExitCode::Unexpected.into();
        }
    };

    let result = rt.block_on(async { dynamic::run(&args, &mut std::io::stdout()).await });

    match result {
        Ok(_) => ToolExitCode::Success.into(),
        Err(e) => {
            eprintln!("Unable to update DNS: {:#}", e);
            ToolExitCode::for_error(&e).into()
        }
    }
}
