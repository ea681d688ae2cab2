use clap::{Args, Subcommand};

/// Uniform CRUD actions available on every collection.
#[derive(Clone, Debug, Subcommand)]
pub enum ResourceCommands {
    /// List items.
    List(ResourceListArgs),
    /// Fetch one item by id.
    Get { id: String },
    /// Create an item from a JSON body (admin only).
    Create {
        /// JSON object, e.g. '{"title": "..."}'
        #[arg(long)]
        data: String,
    },
    /// Replace an item from a JSON body (admin only).
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    /// Partially update an item from a JSON body (admin only).
    Patch {
        id: String,
        #[arg(long)]
        data: String,
    },
    /// Delete an item (admin only).
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct ResourceListArgs {
    /// Skip this many items.
    #[arg(long)]
    pub offset: Option<u32>,
    /// Free-text search filter.
    #[arg(long)]
    pub search: Option<String>,
}
