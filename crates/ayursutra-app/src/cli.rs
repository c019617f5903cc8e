use clap::Parser;

/// Chat with the Ayurvedic therapy assistant from a terminal.
#[derive(Parser, Debug)]
#[command(name = "ayursutra", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error, or a full filter directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model identifier override.
    #[arg(long)]
    pub model: Option<String>,

    /// Ask a single question, print the reply, and exit.
    #[arg(long)]
    pub ask: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_shot_question() {
        let args = Args::try_parse_from(["ayursutra", "--ask", "What is Abhyanga?"]).unwrap();
        assert_eq!(args.ask.as_deref(), Some("What is Abhyanga?"));
        assert!(!args.print_config);
    }

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "ayursutra",
            "--config",
            "/tmp/a.toml",
            "--log-level",
            "debug",
            "--model",
            "gemini-1.5-pro",
            "--print-config",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref(), Some("/tmp/a.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.model.as_deref(), Some("gemini-1.5-pro"));
        assert!(args.print_config);
    }

    #[test]
    fn no_arguments_is_interactive() {
        let args = Args::try_parse_from(["ayursutra"]).unwrap();
        assert!(args.ask.is_none());
        assert!(args.config.is_none());
    }
}
