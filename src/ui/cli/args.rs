// Wed Jan 15 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "typelayout")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Sizes and member offsets of described binary types", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// JSON type database to load before answering queries
    #[arg(short, long, global = true)]
    pub defs: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Target pointer width in bytes (4 or 8)
    #[arg(long, global = true)]
    pub pointer_width: Option<u32>,

    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the byte size of each name
    Sizeof(SizeofArgs),
    /// Print the member layout of a struct or union
    Layout(LayoutArgs),
    /// List registered aliases and aggregates
    List(ListArgs),
}

#[derive(Parser, Debug)]
pub struct SizeofArgs {
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct LayoutArgs {
    pub name: String,

    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Include built-in primitive spellings
    #[arg(long)]
    pub primitives: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sizeof() {
        let args = Args::parse_from(["typelayout", "--defs", "types.json", "sizeof", "int", "Node"]);
        assert_eq!(args.defs, Some(PathBuf::from("types.json")));
        match args.command {
            Command::Sizeof(sizeof) => assert_eq!(sizeof.names, vec!["int", "Node"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_layout_with_global_flags_after_subcommand() {
        let args = Args::parse_from(["typelayout", "layout", "Node", "--json", "--pointer-width", "4"]);
        assert_eq!(args.pointer_width, Some(4));
        assert!(matches!(args.command, Command::Layout(LayoutArgs { json: true, .. })));
    }

    #[test]
    fn test_sizeof_requires_names() {
        assert!(Args::try_parse_from(["typelayout", "sizeof"]).is_err());
    }
}
