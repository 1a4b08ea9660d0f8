use assetfs_cli::commands::{GenerateArgs, run_generate};
use assetfs_cli::utils::escape_passthrough;
use clap::Parser;
use miette::Result as MietteResult;

#[derive(Parser)]
#[command(name = "assetfs")]
#[command(about = "Run go-bindata and append an assetFS() constructor to its output")]
// `-h` and `--version` belong to go-bindata.
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse_from(escape_passthrough(std::env::args_os()));

    assetfs_cli::utils::ui::init_logging();

    run_generate(cli.generate).map_err(miette::Report::new)
}
