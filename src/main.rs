mod cli;

use clap::Parser;
use cli::Cli;
use lighthouse_report::audit::{self, AuditRun};
use lighthouse_report::error::{LighthouseError, INSTALL_HINT};
use lighthouse_report::{config, output, runner::AuditRequest};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lighthouse_report=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = config::Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    if let Some(bin) = cli.lighthouse_bin {
        config.lighthouse.command = vec![bin];
    }
    if let Some(flags) = cli.chrome_flags {
        config.lighthouse.chrome_flags = flags;
    }
    if let Some(secs) = cli.timeout {
        config.lighthouse.timeout_secs = Some(secs);
    }

    let run = match (&cli.input, cli.url) {
        (Some(input), _) => audit::load_saved(input).unwrap_or_else(|e| fail(&e)),
        (None, Some(url)) => {
            let runner = audit::check_installed(&config.lighthouse).unwrap_or_else(|e| fail(&e));
            let request = AuditRequest {
                url,
                preset: cli.preset,
                categories: cli.categories,
                chrome_flags: config.lighthouse.chrome_flags.clone(),
            };

            println!("\n🔍 Running Lighthouse audit on: {}", request.url);
            println!("📱 Preset: {}", request.preset);
            if !request.categories.is_empty() {
                let names: Vec<&str> = request.categories.iter().map(|c| c.key()).collect();
                println!("📋 Categories: {}", names.join(", "));
            }
            println!("\n⏳ This may take 30-60 seconds...\n");

            audit::run_audit(&runner, &request, cli.output.as_deref())
                .unwrap_or_else(|e| fail(&e))
        }
        (None, None) => {
            eprintln!("Error: a URL is required unless --input is given");
            std::process::exit(2);
        }
    };

    print_report(&run, cli.format, &config.report);

    if let Some(out_path) = cli.output {
        println!("\n💾 Full JSON report saved to: {}\n", out_path.display());
    }
}

fn print_report(run: &AuditRun, format: output::ReportFormat, limits: &config::ReportConfig) {
    print!("{}", output::format_report(&run.report, format, limits));
}

fn fail(error: &LighthouseError) -> ! {
    match error {
        LighthouseError::NotInstalled { .. } => {
            eprintln!("❌ Error: {error}");
            eprintln!();
            eprintln!("To install Lighthouse:");
            eprintln!("  {INSTALL_HINT}");
        }
        _ => eprintln!("Error: {error}"),
    }
    std::process::exit(1);
}
