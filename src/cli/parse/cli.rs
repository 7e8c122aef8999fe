use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use otter_resolve::config::WORKERS_MAX;

pub fn cli() -> Command {
    Command::new("otter_resolve")
        .about("Determines whether a knowledge base entails a goal, by resolution refutation")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("input")
            .short('i')
            .long("input")
            .value_parser(value_parser!(PathBuf))
            .default_value("Input.txt")
            .num_args(1)
            .help("The problem to read: a goal, a count of lines, and the lines of the knowledge base."))

        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_parser(value_parser!(PathBuf))
            .default_value("Output.txt")
            .num_args(1)
            .help("Where to write the clauses derived in each generation, followed by YES or NO."))

        .arg(Arg::new("literal_order")
            .long("literal-order")
            .value_parser(["sorted", "preserved"])
            .required(false)
            .num_args(1)
            .help("How to order the literals of a clause read from the problem.")
            .long_help("How to order the literals of a clause read from the problem.
Default: sorted

sorted    - Literals are sorted by symbol.
preserved - Literals are kept in the order read.
            Resolution assumes literals are sorted, and so resolvents of clauses read out of order may differ."))

        .arg(Arg::new("multi_character_symbols")
            .short('m')
            .long("multi-character-symbols")
            .action(ArgAction::SetTrue)
            .help("Permit symbols of more than one character, e.g. 'rain'."))

        .arg(Arg::new("generation_limit")
            .long("generation-limit")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("Stop with an error after this many generations, 0 for no limit."))

        .arg(Arg::new("clause_limit")
            .long("clause-limit")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("Stop with an error if more than this many clauses are known, 0 for no limit."))

        .arg(Arg::new("workers")
            .short('w')
            .long("workers")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The count of threads used to resolve pairs of clauses, between 1 and {WORKERS_MAX}.")))

        .arg(Arg::new("stats")
            .short('s')
            .long("stats")
            .action(ArgAction::SetTrue)
            .help("Display counts from the refutation."))

        .arg(Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .help("Do not print the verdict, only write the output file."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        let matches = cli().try_get_matches_from(["otter_resolve", "-q", "--stats"]).unwrap();
        assert!(matches.get_flag("quiet"));
        assert!(matches.get_flag("stats"));
        assert_eq!(
            matches.get_one::<PathBuf>("input"),
            Some(&PathBuf::from("Input.txt"))
        );

        let matches = cli().try_get_matches_from(["otter_resolve"]).unwrap();
        assert!(!matches.get_flag("quiet"));
    }
}
