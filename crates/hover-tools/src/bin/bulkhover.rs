// # bulkhover
//
// Import or export the DNS records of one Hover domain.
//
// ```bash
// bulkhover -u USERNAME -p PASSWORD (import|export) DOMAIN DNS_FILE
// bulkhover -c hover.toml export example.com - | bulkhover -c hover.toml -f import other.com -
// ```

use clap::Parser;
use hover_tools::bulk::{self, BulkArgs};
use hover_tools::logging::init_logging;
use hover_tools::ToolExitCode;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = BulkArgs::parse();

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

    let result = rt.block_on(async { bulk::run(&args, &mut std::io::stdout()).await });

    match result {
        Ok(()) => ToolExitCode::Success.into(),
        Err(e) => {
            eprintln!("Failed while importing DNS: {:#}", e);
            ToolExitCode::for_error(&e).into()
        }
    }
}
