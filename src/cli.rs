use clap::{value_parser, Arg, ArgAction, Command};

pub const DEFAULT_CSV_FILE: &str = "metricas.csv";
pub const DEFAULT_INTERVAL: &str = "1.0";

/// Build the command line definition.
///
/// Kept out of `main` so the parser can be exercised from tests with
/// `try_get_matches_from`.
pub fn build_cli() -> Command {
    Command::new("sysmetrics")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Exibe informações do sistema e opcionalmente grava métricas em CSV")
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Gravar métricas em CSV")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("csv-file")
                .long("csv-file")
                .value_name("PATH")
                .help("Caminho do arquivo CSV (padrão: metricas.csv)")
                .default_value(DEFAULT_CSV_FILE),
        )
        .arg(
            Arg::new("interval")
                .long("interval")
                .value_name("SECONDS")
                .help("Intervalo em segundos para medir CPU (padrão: 1.0)")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value(DEFAULT_INTERVAL),
        )
        .arg(
            Arg::new("local-time")
                .long("local-time")
                .help("Usar timestamp local formatado (YYYY-MM-DD HH:MM:SS) em vez de ISO UTC")
                .action(ArgAction::SetTrue),
        )
}
