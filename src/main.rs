// src/main.rs
//
// Calculatrice — point d’entrée ligne de commande
// -----------------------------------------------
// - sans expression : boucle interactive (invite, "exit" pour quitter)
// - avec expression : évaluation unique, code de sortie non nul en cas d'erreur
// - journaux : tracing, vers --log-file (sinon avalés, pour ne pas polluer la sortie)

use std::fs;
use std::io;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::prelude::*;

mod app;
mod config;
mod noyau;

use app::EtatSession;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    #[clap(short, long, action, help = "a toml file containing configuration")]
    config_file: Option<String>,

    #[clap(short, long, action, help = "the file to write logs to, by default they are swallowed")]
    log_file: Option<String>,

    #[clap(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "show more in logs, may be provided multiple times"
    )]
    verbose: u8,

    #[clap(short, long, help = "print results with this many decimals")]
    digits: Option<usize>,

    #[clap(long, action, help = "print the tokens, postfix sequence and tree of each result")]
    demarche: bool,

    #[clap(
        allow_hyphen_values = true,
        trailing_var_arg = true,
        help = "an expression to evaluate once instead of starting the interactive loop"
    )]
    expression: Vec<String>,
}

/// Écrivain des journaux : fichier si demandé, sinon rien.
struct JournalWriterBuilder {
    log_file: Option<Mutex<fs::File>>,
}

impl<'writer> tracing_subscriber::fmt::MakeWriter<'writer> for JournalWriterBuilder {
    type Writer = Box<dyn io::Write + 'writer>;

    fn make_writer(&'writer self) -> Self::Writer {
        match &self.log_file {
            Some(log_file) => match log_file.lock() {
                Ok(guard) => Box::new(FileGuardWriter(guard)),
                Err(_) => Box::new(io::empty()),
            },
            None => Box::new(io::empty()),
        }
    }
}

struct FileGuardWriter<'a>(std::sync::MutexGuard<'a, fs::File>);

impl io::Write for FileGuardWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut *self.0, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(&mut *self.0)
    }
}

fn init_journaux(args: &Args) -> anyhow::Result<()> {
    let log_level_filter = if args.verbose == 0 {
        tracing_subscriber::filter::LevelFilter::INFO
    } else if args.verbose == 1 {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::TRACE
    };

    let writer = JournalWriterBuilder {
        log_file: match &args.log_file {
            Some(lf) => Some(Mutex::new(
                fs::File::create(lf).context("unable to create log file")?,
            )),
            None => None,
        },
    };

    tracing_subscriber::registry::Registry::default()
        .with(log_level_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer),
        )
        .try_init()
        .context("creating logger")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_journaux(&args)?;

    let config = config::read_config(&args.config_file)?;
    let digits = args.digits.or(config.digits);
    let demarche = args.demarche || config.demarche();
    info!(config = ?config, digits = ?digits, demarche = demarche, "démarrage");

    let mut etat = EtatSession::new(digits, demarche);
    let stdout = io::stdout();
    let mut sortie = stdout.lock();

    if !args.expression.is_empty() {
        let expr = args.expression.join(" ");
        return app::boucle::une_fois(&mut etat, &expr, &mut sortie);
    }

    let stdin = io::stdin();
    app::boucle::executer(&mut etat, &config, stdin.lock(), &mut sortie)
}
