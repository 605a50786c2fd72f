pub(crate) mod completions;
pub(crate) mod count;
pub(crate) mod hell;
pub(crate) mod summary;
pub(crate) mod verses;
pub(crate) mod word;

use anyhow::Result;
use canti_config as cli;
use canti_core::CantoRepository;

use crate::config::ResolvedConfig;

pub(crate) fn dispatch(command: cli::Commands, resolved: &ResolvedConfig) -> Result<()> {
    let repo = CantoRepository::from_settings(resolved.repository.clone());
    let format = resolved.format;
    match command {
        cli::Commands::Verses(args) => verses::handle(&repo, args, format),
        cli::Commands::Count(args) => count::handle_verses(&repo, args, format),
        cli::Commands::Tercets(args) => count::handle_tercets(&repo, args, format),
        cli::Commands::Word(args) => word::handle_count(&repo, args, format),
        cli::Commands::Words(args) => word::handle_count_many(&repo, args, format),
        cli::Commands::Search(args) => word::handle_search(&repo, args, format),
        cli::Commands::Hell(args) => hell::handle(&repo, args, format),
        cli::Commands::Mean => hell::handle_mean(&repo, format),
        cli::Commands::LongestCanto => hell::handle_longest_canto(&repo, format),
        cli::Commands::LongestVerse(args) => verses::handle_longest(&repo, args, format),
        cli::Commands::Summary(args) => summary::handle(&repo, args, format),
        cli::Commands::Completions(args) => completions::handle(args),
    }
}
