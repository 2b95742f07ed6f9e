use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use skinmatch::catalog::TiebreakField;
use skinmatch::engine::MatchPolicy;

#[derive(Parser, Debug)]
#[command(name = "skinmatch", bin_name = "skinmatch", version)]
#[command(
    about = "Filter and rank a skincare catalog by attribute",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog JSON file
    #[arg(
        long,
        global = true,
        env = "SKINMATCH_CATALOG",
        value_name = "FILE",
        help_heading = "Options"
    )]
    pub catalog: Option<PathBuf>,

    /// Config file, read before the platform config directory
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank catalog items against the selected attributes
    #[command(alias = "s")]
    Search {
        /// Attribute names, e.g. ACNE OILY
        names: Vec<String>,

        /// Inclusion rule (defaults to the configured policy)
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,

        /// Field that orders equally ranked items
        #[arg(long, value_enum)]
        tiebreak: Option<TiebreakArg>,

        /// Show at most this many items
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Show how the result count changes if each attribute is toggled
    #[command(alias = "p")]
    Preview {
        /// Currently selected attribute names
        names: Vec<String>,

        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
    },

    /// Decode a mask (decimal, 0b.., or 0x..) into attribute names
    Decode { mask: String },

    /// List the catalog's attributes and their bits
    #[command(alias = "attrs")]
    Attributes,

    /// Set an item's stock level
    SetStock { id: String, stock: u32 },

    /// Set an item's price, in cents
    SetPrice { id: String, cents: u64 },

    /// Show the effective configuration
    Config {
        /// Print a commented config file template instead
        #[arg(long)]
        template: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    AnyOverlap,
    EmptyReturnsAll,
    FullCoverage,
}

impl From<PolicyArg> for MatchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::AnyOverlap => MatchPolicy::AnyOverlap,
            PolicyArg::EmptyReturnsAll => MatchPolicy::EmptyQueryReturnsAll,
            PolicyArg::FullCoverage => MatchPolicy::FullCoverage,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TiebreakArg {
    Stock,
    Rating,
    Price,
    Catalog,
}

impl From<TiebreakArg> for TiebreakField {
    fn from(arg: TiebreakArg) -> Self {
        match arg {
            TiebreakArg::Stock => TiebreakField::Stock,
            TiebreakArg::Rating => TiebreakField::Rating,
            TiebreakArg::Price => TiebreakField::Price,
            TiebreakArg::Catalog => TiebreakField::Catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("skinmatch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_search_with_overrides() {
        let cli = parse(&[
            "search", "ACNE", "OILY", "--policy", "full-coverage", "--tiebreak", "price", "-n", "3",
        ]);
        match cli.command {
            Commands::Search {
                names,
                policy,
                tiebreak,
                limit,
            } => {
                assert_eq!(names, vec!["ACNE", "OILY"]);
                assert_eq!(policy, Some(PolicyArg::FullCoverage));
                assert_eq!(tiebreak, Some(TiebreakArg::Price));
                assert_eq!(limit, Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["attributes", "--json", "-vv", "--catalog", "c.json"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.catalog, Some(PathBuf::from("c.json")));
    }

    #[test]
    fn policy_names_map_to_engine_policies() {
        assert_eq!(
            MatchPolicy::from(PolicyArg::EmptyReturnsAll),
            MatchPolicy::EmptyQueryReturnsAll
        );
        assert_eq!(TiebreakField::from(TiebreakArg::Rating), TiebreakField::Rating);
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = Cli::try_parse_from(["skinmatch", "search", "--policy", "sometimes"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
