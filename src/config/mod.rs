/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
Each option is a [ConfigOption], which records the name of the option alongside the bounds of the option.

```rust
# use otter_resolve::config::{Config, LiteralOrder};
let mut config = Config::default();

assert_eq!(config.literal_order.value, LiteralOrder::Sorted);
assert!(config.workers.set(4).is_ok());
assert!(config.workers.set(0).is_err());
```

Limits of zero are treated as no limit.
*/

mod config_option;
pub use config_option::ConfigOption;

mod literal_order;
pub use literal_order::LiteralOrder;

/// The upper bound on the count of worker threads.
pub const WORKERS_MAX: usize = 256;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// How the literals of a parsed clause are ordered.
    pub literal_order: ConfigOption<LiteralOrder>,

    /// Permit symbols of more than one character.
    pub multi_character_symbols: ConfigOption<bool>,

    /// The maximum count of generations in a refutation, or 0 for no limit.
    pub generation_limit: ConfigOption<usize>,

    /// The maximum count of clauses held during a refutation, or 0 for no limit.
    pub clause_limit: ConfigOption<usize>,

    /// The count of threads used to resolve pairs of clauses during a generation.
    pub workers: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            literal_order: ConfigOption {
                name: "literal_order",
                min: LiteralOrder::MIN,
                max: LiteralOrder::MAX,
                value: LiteralOrder::Sorted,
            },

            multi_character_symbols: ConfigOption {
                name: "multi_character_symbols",
                min: false,
                max: true,
                value: false,
            },

            generation_limit: ConfigOption {
                name: "generation_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            clause_limit: ConfigOption {
                name: "clause_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            workers: ConfigOption {
                name: "workers",
                min: 1,
                max: WORKERS_MAX,
                value: 1,
            },
        }
    }
}
