use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load a repository's section tree and open its first (or given) section.
    Tree(TreeArgs),
    /// Open one section of a repository.
    Show(ShowArgs),
    /// List comments attached to an entity.
    Comments(CommentsArgs),
    /// Inspect the local section cache.
    Cache {
        #[command(subcommand)]
        action: CacheCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct TreeArgs {
    /// Repository entity id.
    pub repository: String,
    /// Section to open instead of the first root.
    #[arg(short, long)]
    pub section: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Repository entity id.
    pub repository: String,
    /// Section id.
    pub section: String,
}

#[derive(Clone, Debug, Args)]
pub struct CommentsArgs {
    /// Entity type: entity, section, repository, article.
    pub entity_type: String,
    /// Entity id.
    pub entity_id: String,
    /// Zero-based page index.
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    /// Page size (defaults to `general.default_page_size`).
    #[arg(long)]
    pub size: Option<u32>,
}

/// Local cache inspection.
#[derive(Clone, Debug, Subcommand)]
pub enum CacheCommands {
    /// Show the cached snapshot of a section.
    Show {
        /// Section id.
        section: String,
    },
    /// List cached sections of a repository.
    List {
        /// Repository entity id.
        repository: String,
    },
    /// Count cached sections.
    Stats,
}
