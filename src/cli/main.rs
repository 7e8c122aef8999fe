use std::{fs::File, io::BufWriter, path::PathBuf};

use otter_resolve::{context::Context, io::writer::write_refutation, types::err};

mod misc;
mod parse;

use crate::misc::{display_stats, load_problem};

fn main() {
    env_logger::init();

    let matches = parse::cli::cli().get_matches();
    let config = parse::config::config_from_args(&matches);

    let (Some(input), Some(output)) = (
        matches.get_one::<PathBuf>("input"),
        matches.get_one::<PathBuf>("output"),
    ) else {
        println!("c Input and output paths required");
        std::process::exit(1);
    };
    let show_stats = matches.get_flag("stats");
    let quiet = matches.get_flag("quiet");

    let mut the_context = Context::from_config(config);

    let goal = match load_problem(&mut the_context, input) {
        Ok(goal) => goal,
        Err(e) => {
            println!("c Error loading problem: {e:?}");
            std::process::exit(1);
        }
    };

    let refutation = match the_context.refute(&goal) {
        Ok(refutation) => refutation,
        Err(err::ErrorKind::Resource(limit)) => {
            println!("c Refutation stopped: {limit:?}");
            std::process::exit(2);
        }
        Err(e) => {
            println!("c Refutation error: {e:?}");
            std::process::exit(2);
        }
    };

    let written = File::create(output).and_then(|file| {
        write_refutation(BufWriter::new(file), &refutation, &the_context.atom_db)
    });
    if let Err(e) = written {
        println!("c Failed to write {output:?}: {e}");
        std::process::exit(3);
    }

    if show_stats {
        display_stats(&the_context, &refutation);
    }

    if !quiet {
        println!("{}", refutation.report);
    }
}
