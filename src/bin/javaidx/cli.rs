use clap::{Parser, Subcommand};
use std::path::PathBuf;

use JavaIdx::TimestampUnit;

/// CLI генератора index-файлов Java Plugin cache (формат 6.05)
#[derive(Parser, Debug)]
#[command(name = "javaidx", version, about = "Java Plugin cache index file generator (format 6.05)")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Generate an index file (sample fixture values unless overridden)
    ///
    /// Поля можно задать JSON'ом (файл или строка), поверх — флагами.
    /// Пример:
    ///   javaidx generate --out ./index605.idx
    ///   javaidx generate --out ./i.idx --timestamp-unit seconds --url "http://host/applet.jar"
    Generate {
        /// Output file path
        #[arg(long)]
        out: PathBuf,

        /// JSON-файл со значениями record'а (см. IndexRecord)
        #[arg(long)]
        fields_file: Option<PathBuf>,

        /// JSON-строка со значениями (если fields_file не задан)
        #[arg(long)]
        fields_json: Option<String>,

        /// Stored unit for last-modified/expires
        #[arg(long, value_enum, default_value_t = TimestampUnit::Millis)]
        timestamp_unit: TimestampUnit,

        /// Last-modified, epoch seconds (stored per --timestamp-unit)
        #[arg(long)]
        last_modified: Option<i64>,

        /// Expiration date, epoch seconds (stored per --timestamp-unit)
        #[arg(long)]
        expires: Option<i64>,

        /// Version text field
        #[arg(long)]
        version: Option<String>,

        /// URL text field
        #[arg(long)]
        url: Option<String>,

        /// Namespace ID text field
        #[arg(long)]
        namespace_id: Option<String>,

        /// Codebase IP text field
        #[arg(long)]
        codebase_ip: Option<String>,

        /// Print a hex dump of the produced bytes
        #[arg(long, default_value_t = false)]
        dump: bool,
    },
}
