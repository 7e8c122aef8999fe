use clap::ArgMatches;

use otter_resolve::config::{Config, ConfigOption, LiteralOrder};

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(order)) = args.try_get_one::<String>("literal_order") {
        match order.parse::<LiteralOrder>() {
            Ok(order) => set_or_exit(&mut the_config.literal_order, order),
            Err(_) => {
                println!("c Unknown literal order: {order}");
                std::process::exit(1);
            }
        }
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("multi_character_symbols") {
        set_or_exit(&mut the_config.multi_character_symbols, true);
    };

    if let Ok(Some(limit)) = args.try_get_one::<usize>("generation_limit") {
        set_or_exit(&mut the_config.generation_limit, *limit);
    };

    if let Ok(Some(limit)) = args.try_get_one::<usize>("clause_limit") {
        set_or_exit(&mut the_config.clause_limit, *limit);
    };

    if let Ok(Some(workers)) = args.try_get_one::<usize>("workers") {
        set_or_exit(&mut the_config.workers, *workers);
    };

    the_config
}

/// Sets the value of `option`, or terminates the process with a message if the value is invalid.
fn set_or_exit<T: Clone + PartialOrd + std::fmt::Display>(option: &mut ConfigOption<T>, value: T) {
    let (min, max) = option.min_max();
    match option.set(value) {
        Ok(()) => log::info!("{} set to: {}", option.name, option.value),
        Err(_) => {
            println!("c {} requires a value between {min} and {max}", option.name);
            std::process::exit(1);
        }
    }
}
