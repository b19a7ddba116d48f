use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use cindermark::{parse, to_html};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { file, output } => {
            let start_dir = start_dir_for(&file)?;
            let (cfg, cfg_path) = cindermark::config::load(cli.config.as_deref(), &start_dir)?;

            if let Some(path) = &cfg_path {
                log::debug!("Using config from: {}", path.display());
            } else {
                log::debug!("Using default config");
            }

            let input = read_all(file.as_ref())?;
            let html = to_html(&input, Some(cfg));

            match output {
                Some(path) => fs::write(path, html)?,
                None => io::stdout().write_all(html.as_bytes())?,
            }

            Ok(())
        }
        Commands::Parse { file } => {
            let input = read_all(file.as_ref())?;
            let blocks = parse(&input);
            println!("{:#?}", blocks);
            Ok(())
        }
    }
}
