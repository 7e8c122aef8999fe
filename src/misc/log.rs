/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
Note, no log implementation is provided by the library.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::builder)
    pub const PARSER: &str = "parser";

    /// Logs related to [resolution](crate::procedures::resolve)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [refutation](crate::procedures::refute)
    pub const SATURATION: &str = "saturation";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to the [atom database](crate::db::atom)
    pub const SYMBOLS: &str = "symbols";
}
