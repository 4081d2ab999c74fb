use clap::Parser;
use env_logger::{Builder, Env};
use log::error;

mod cli;
mod cmd_generate;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — info.
    // Пример: RUST_LOG=debug ./javaidx ...
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    let cli = cli::Cli::parse();
    let res = match cli.cmd {
        cli::Cmd::Generate {
            out,
            fields_file,
            fields_json,
            timestamp_unit,
            last_modified,
            expires,
            version,
            url,
            namespace_id,
            codebase_ip,
            dump,
        } => cmd_generate::exec(
            out,
            fields_file,
            fields_json,
            timestamp_unit,
            last_modified,
            expires,
            version,
            url,
            namespace_id,
            codebase_ip,
            dump,
        ),
    };

    if let Err(e) = res {
        error!("{:?}", e);
        std::process::exit(1);
    }
}
